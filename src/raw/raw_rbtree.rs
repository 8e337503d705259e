use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};

use smallvec::SmallVec;

use super::arena::{Arena, Handle};
use super::node::{Color, Node, Side};

/// The core red-black tree backing `RBTreeMap`.
///
/// Nodes live in an [`Arena`] and reference each other through [`Handle`]s,
/// so the parent/child cycles of the node graph never touch ownership: a
/// rotation or an erase is pure index surgery. "One past the end" is simply
/// `None`; stepping backwards from it starts at the root and walks right.
pub(crate) struct RawRBTree<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Total number of key-value pairs in the tree.
    len: usize,
}

/// Insert-fixup cases for a red node with a red non-root parent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum InsertCase {
    /// The uncle is red: recolor and continue at the grandparent.
    RecolorUncle,
    /// Uncle black, node is an inner grandchild: rotate the parent first.
    RotateInner,
    /// Uncle black, node is an outer grandchild: recolor and rotate the
    /// grandparent. Terminal.
    RotateOuter,
}

/// Double-black fixup cases, classified by the sibling subtree's colors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum DeleteCase {
    /// The sibling is red: rotate it above the parent and retry.
    RedSibling,
    /// Black sibling whose far child is red. Terminal.
    FarChildRed,
    /// Black sibling, far child black, near child red: rotate the sibling,
    /// which reduces to `FarChildRed`.
    NearChildRed,
    /// Sibling and both of its children black: push the missing black up.
    AllBlack,
}

impl<K, V> RawRBTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the node capacity of the tree.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Clears all elements from the tree.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns a reference to a node by handle.
    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Returns a mutable reference to a node by handle.
    #[inline]
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Returns a mutable reference to a node by handle from a raw pointer.
    ///
    /// # Safety
    /// - `ptr` must point to a valid, allocated `RawRBTree<K, V>`.
    /// - The caller must have logical exclusive access to the node at
    ///   `handle`; the mutable iterators uphold this by visiting each node
    ///   at most once.
    pub(crate) unsafe fn node_mut_ptr<'a>(ptr: *mut Self, handle: Handle) -> &'a mut Node<K, V> {
        // SAFETY: We only access the `nodes` field; the caller guarantees
        // exclusive access to this particular slot.
        unsafe { (*core::ptr::addr_of_mut!((*ptr).nodes)).get_mut(handle) }
    }

    /// Returns the handle of the minimum node.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Left))
    }

    /// Returns the handle of the maximum node.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Right))
    }

    /// Walks to the outermost descendant of `start` on the given side.
    fn extreme(&self, start: Handle, side: Side) -> Handle {
        let mut current = start;
        while let Some(child) = self.node(current).child(side) {
            current = child;
        }
        current
    }

    /// In-order successor: right child's leftmost descendant, or the first
    /// ancestor reached from the left. `None` means one past the maximum.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.node(handle).child(Side::Right) {
            return Some(self.extreme(right, Side::Left));
        }
        let mut current = handle;
        while let Some(parent) = self.node(current).parent() {
            if self.node(parent).side_of(current) == Side::Left {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// In-order predecessor. `handle` of `None` names the end position, so
    /// the walk starts at the root and descends right to reach the maximum —
    /// this is what makes decrementing "end" work without a sentinel node.
    pub(crate) fn predecessor(&self, handle: Option<Handle>) -> Option<Handle> {
        let Some(handle) = handle else {
            return self.last();
        };
        if let Some(left) = self.node(handle).child(Side::Left) {
            return Some(self.extreme(left, Side::Right));
        }
        let mut current = handle;
        while let Some(parent) = self.node(current).parent() {
            if self.node(parent).side_of(current) == Side::Right {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// Drains all pairs in ascending key order, leaving the tree empty.
    /// Handles are collected up front because the successor walk climbs
    /// through ancestors that may themselves be pending removal.
    pub(crate) fn drain_to_vec(&mut self) -> alloc::vec::Vec<(K, V)> {
        let mut handles = alloc::vec::Vec::with_capacity(self.len);
        let mut current = self.first();
        while let Some(handle) = current {
            handles.push(handle);
            current = self.successor(handle);
        }
        let pairs = handles
            .into_iter()
            .map(|h| {
                let node = self.nodes.take(h);
                (node.key, node.value)
            })
            .collect();
        self.nodes.clear();
        self.root = None;
        self.len = 0;
        pairs
    }

    /// Treats an absent node as black.
    #[inline]
    fn is_red(&self, handle: Option<Handle>) -> bool {
        handle.is_some_and(|h| self.node(h).is_red())
    }

    #[inline]
    fn set_color(&mut self, handle: Handle, color: Color) {
        self.node_mut(handle).set_color(color);
    }

    /// The side `handle` occupies under its parent.
    #[inline]
    fn side_under_parent(&self, handle: Handle, parent: Handle) -> Side {
        self.node(parent).side_of(handle)
    }
}

impl<K: Ord, V> RawRBTree<K, V> {
    /// Walks the search path for `key` and returns the last node visited:
    /// either the node holding `key`, or the node that would become its
    /// parent on insertion. `None` only when the tree is empty.
    ///
    /// This is the load-bearing primitive — exact lookup, insertion point
    /// and both bounds all reduce to one walk plus one comparison.
    pub(crate) fn search_closest<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root?;
        loop {
            let node = self.node(current);
            let side = match key.cmp(node.key.borrow()) {
                Less => Side::Left,
                Greater => Side::Right,
                Equal => return Some(current),
            };
            match node.child(side) {
                Some(child) => current = child,
                None => return Some(current),
            }
        }
    }

    /// Exact lookup.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let closest = self.search_closest(key)?;
        (self.node(closest).key.borrow() == key).then_some(closest)
    }

    /// First node whose key is `>= key`, or `None` if all keys are smaller.
    pub(crate) fn lower_bound<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let closest = self.search_closest(key)?;
        if self.node(closest).key.borrow() < key {
            self.successor(closest)
        } else {
            Some(closest)
        }
    }

    /// First node whose key is `> key`, or `None` if all keys are `<= key`.
    pub(crate) fn upper_bound<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let closest = self.search_closest(key)?;
        if self.node(closest).key.borrow() <= key {
            self.successor(closest)
        } else {
            Some(closest)
        }
    }

    /// Returns a reference to the value corresponding to the key.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(key).map(|h| &self.node(h).value)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.find(key)?;
        Some(&mut self.node_mut(handle).value)
    }

    /// Inserts a key-value pair, keeping keys unique.
    ///
    /// Returns the handle of the node holding `key` plus, when the key was
    /// already present, the rejected pair — the tree's size, shape and
    /// colors are untouched in that case.
    pub(crate) fn insert(&mut self, key: K, value: V) -> (Handle, Option<(K, V)>) {
        let Some(closest) = self.search_closest(&key) else {
            return (self.attach_root(key, value), None);
        };
        let side = match key.cmp(&self.node(closest).key) {
            Equal => return (closest, Some((key, value))),
            Less => Side::Left,
            Greater => Side::Right,
        };
        (self.attach_leaf(closest, side, key, value), None)
    }

    /// Inserts with a position hint, taking the narrow shortcut only when
    /// the hint is adjacent to the correct insertion point: equal to the
    /// hint, right after the maximum, right before the minimum, or strictly
    /// between the hint and its predecessor. Anything else falls back to a
    /// full insert. Duplicates are never inserted; like [`Self::insert`],
    /// the rejected pair is handed back.
    pub(crate) fn insert_hint(&mut self, hint: Option<Handle>, key: K, value: V) -> (Handle, Option<(K, V)>) {
        if self.root.is_none() {
            return (self.attach_root(key, value), None);
        }
        let Some(hint) = hint else {
            // Hint at end: fast path when the key extends the maximum.
            let max = self.last().expect("non-empty tree has a maximum");
            return match key.cmp(&self.node(max).key) {
                Greater => (self.attach_leaf(max, Side::Right, key, value), None),
                Equal => (max, Some((key, value))),
                Less => self.insert(key, value),
            };
        };
        match key.cmp(&self.node(hint).key) {
            Equal => (hint, Some((key, value))),
            Less => {
                if Some(hint) == self.first() {
                    // Hint is the minimum, so the key becomes the new one.
                    return (self.attach_leaf(hint, Side::Left, key, value), None);
                }
                let pred = self.predecessor(Some(hint)).expect("non-minimum node has a predecessor");
                if self.node(pred).key < key {
                    // pred < key < hint: the slot between them is free.
                    // Either the hint lacks a left subtree, or pred is its
                    // rightmost descendant and lacks a right child.
                    if self.node(hint).child(Side::Left).is_none() {
                        (self.attach_leaf(hint, Side::Left, key, value), None)
                    } else {
                        (self.attach_leaf(pred, Side::Right, key, value), None)
                    }
                } else {
                    self.insert(key, value)
                }
            }
            Greater => self.insert(key, value),
        }
    }

    /// Removes the node at `handle` and returns the handle of its in-order
    /// successor along with the removed pair.
    ///
    /// When the node has two children it trades structural position (links
    /// and color) with its successor instead of copying values, so any other
    /// outstanding handle to the successor stays valid.
    pub(crate) fn erase_at(&mut self, handle: Handle) -> (Option<Handle>, K, V) {
        self.len -= 1;
        if self.len == 0 && self.root == Some(handle) {
            self.root = None;
            let node = self.nodes.take(handle);
            return (None, node.key, node.value);
        }

        let next = self.successor(handle);
        let node = self.node(handle);
        if node.child(Side::Left).is_some() && node.child(Side::Right).is_some() {
            let succ = next.expect("a node with a right child has a successor");
            self.exchange_positions(handle, succ);
        }
        self.delete_fixup(handle);
        let node = self.nodes.take(handle);
        (next, node.key, node.value)
    }

    /// Removes `key`, returning the stored pair if it was present.
    pub(crate) fn erase_key<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.find(key)?;
        let (_, k, v) = self.erase_at(handle);
        Some((k, v))
    }

    // ─── Insertion internals ─────────────────────────────────────────────

    /// Plants the first node of an empty tree: the root is always black.
    fn attach_root(&mut self, key: K, value: V) -> Handle {
        let mut node = Node::new(key, value);
        node.set_color(Color::Black);
        let handle = self.nodes.alloc(node);
        self.root = Some(handle);
        self.len = 1;
        handle
    }

    /// Attaches a new red leaf under `parent` and rebalances upward.
    /// `parent` must not have a child on `side`.
    fn attach_leaf(&mut self, parent: Handle, side: Side, key: K, value: V) -> Handle {
        debug_assert!(self.node(parent).child(side).is_none());
        let mut node = Node::new(key, value);
        node.set_parent(Some(parent));
        let handle = self.nodes.alloc(node);
        self.node_mut(parent).set_child(side, Some(handle));
        self.len += 1;
        self.insert_fixup(handle);
        handle
    }

    /// Classifies a red node whose parent is red (and therefore not the
    /// root, so a grandparent exists).
    fn insert_case(&self, handle: Handle, parent: Handle, grandparent: Handle) -> InsertCase {
        let parent_side = self.side_under_parent(parent, grandparent);
        let uncle = self.node(grandparent).child(parent_side.opposite());
        if self.is_red(uncle) {
            InsertCase::RecolorUncle
        } else if self.side_under_parent(handle, parent) != parent_side {
            InsertCase::RotateInner
        } else {
            InsertCase::RotateOuter
        }
    }

    fn insert_fixup(&mut self, handle: Handle) {
        if self.root == Some(handle) {
            self.set_color(handle, Color::Black);
            return;
        }
        let parent = self.node(handle).parent().expect("non-root node has a parent");
        if !self.node(parent).is_red() {
            return;
        }
        // A red non-root parent cannot itself be the root.
        let grandparent = self.node(parent).parent().expect("red node has a parent");
        match self.insert_case(handle, parent, grandparent) {
            InsertCase::RecolorUncle => {
                let parent_side = self.side_under_parent(parent, grandparent);
                let uncle = self.node(grandparent).child(parent_side.opposite()).expect("red uncle exists");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                if self.root != Some(grandparent) {
                    self.set_color(grandparent, Color::Red);
                }
                self.insert_fixup(grandparent);
            }
            InsertCase::RotateInner => {
                // Rotate the parent away from the node's side; the old
                // parent becomes the outer grandchild of interest.
                let parent_side = self.side_under_parent(parent, grandparent);
                self.rotate(parent, parent_side);
                self.insert_fixup(parent);
            }
            InsertCase::RotateOuter => {
                let node_side = self.side_under_parent(handle, parent);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate(grandparent, node_side.opposite());
            }
        }
    }

    // ─── Deletion internals ──────────────────────────────────────────────

    /// Rebalances around `handle` (which has at most one child) and unlinks
    /// it from the tree. The node's slot is freed by the caller.
    fn delete_fixup(&mut self, handle: Handle) {
        let node = self.node(handle);
        let child = node.child(Side::Right).or(node.child(Side::Left));
        if node.is_red() {
            // A red node here is a leaf (a red node with exactly one child
            // would break the black-height invariant). Detaching it changes
            // no black count.
            self.detach(handle);
            return;
        }
        match child {
            Some(child) if self.node(child).is_red() => {
                // Black node with a red child: the child absorbs the
                // missing black by taking the node's place, painted black.
                self.set_color(child, Color::Black);
                self.splice_child(handle, child);
            }
            _ => {
                debug_assert!(child.is_none(), "a black node's lone child must be red");
                self.double_black_fixup(handle);
                self.detach(handle);
            }
        }
    }

    /// Classifies a double-black node by its sibling subtree. The sibling
    /// must exist: a black non-root node always has one by invariant 5.
    fn delete_case(&self, handle: Handle, parent: Handle) -> DeleteCase {
        let side = self.side_under_parent(handle, parent);
        let sibling = self.node(parent).child(side.opposite()).expect("double-black node has a sibling");
        if self.node(sibling).is_red() {
            return DeleteCase::RedSibling;
        }
        let far = self.node(sibling).child(side.opposite());
        let near = self.node(sibling).child(side);
        if self.is_red(far) {
            DeleteCase::FarChildRed
        } else if self.is_red(near) {
            DeleteCase::NearChildRed
        } else {
            DeleteCase::AllBlack
        }
    }

    /// Restores black-height after a black node with no red child goes
    /// missing. At the root the double-black simply resolves to black.
    fn double_black_fixup(&mut self, handle: Handle) {
        if self.root == Some(handle) {
            self.set_color(handle, Color::Black);
            return;
        }
        let parent = self.node(handle).parent().expect("non-root node has a parent");
        let side = self.side_under_parent(handle, parent);
        let sibling = self.node(parent).child(side.opposite()).expect("double-black node has a sibling");
        match self.delete_case(handle, parent) {
            DeleteCase::RedSibling => {
                // Swap sibling/parent colors and bring the sibling above
                // the parent; the node gains a black sibling, retry.
                let parent_color = self.node(parent).color();
                self.set_color(sibling, parent_color);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                self.double_black_fixup(handle);
            }
            DeleteCase::FarChildRed => {
                let far = self.node(sibling).child(side.opposite()).expect("classified far child is red");
                let parent_color = self.node(parent).color();
                self.set_color(sibling, parent_color);
                self.set_color(parent, Color::Black);
                self.set_color(far, Color::Black);
                self.rotate(parent, side);
            }
            DeleteCase::NearChildRed => {
                // Rotate the red near child above the sibling; the node's
                // new sibling then has a red far child.
                let near = self.node(sibling).child(side).expect("classified near child is red");
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                self.double_black_fixup(handle);
            }
            DeleteCase::AllBlack => {
                self.set_color(sibling, Color::Red);
                if self.node(parent).is_red() {
                    self.set_color(parent, Color::Black);
                } else {
                    // The whole subtree is one black short; propagate.
                    self.double_black_fixup(parent);
                }
            }
        }
    }

    /// Unlinks a childless node from its parent.
    fn detach(&mut self, handle: Handle) {
        let parent = self.node(handle).parent().expect("detached node is never the root");
        let side = self.side_under_parent(handle, parent);
        self.node_mut(parent).set_child(side, None);
    }

    /// Replaces `handle` with its lone child `child` in the parent link
    /// structure.
    fn splice_child(&mut self, handle: Handle, child: Handle) {
        let parent = self.node(handle).parent();
        self.node_mut(child).set_parent(parent);
        match parent {
            None => self.root = Some(child),
            Some(parent) => {
                let side = self.side_under_parent(handle, parent);
                self.node_mut(parent).set_child(side, Some(child));
            }
        }
    }

    /// Swaps the structural positions and colors of two nodes, leaving
    /// their keys and values in place. `b` is `a`'s in-order successor and
    /// may be `a`'s direct right child.
    fn exchange_positions(&mut self, a: Handle, b: Handle) {
        let (a_parent, a_left, a_right) = {
            let node = self.node(a);
            (node.parent(), node.child(Side::Left), node.child(Side::Right))
        };
        let (b_parent, b_left, b_right) = {
            let node = self.node(b);
            (node.parent(), node.child(Side::Left), node.child(Side::Right))
        };
        let a_side = a_parent.map(|p| self.side_under_parent(a, p));
        let b_side = b_parent.map(|p| self.side_under_parent(b, p));

        let a_color = self.node(a).color();
        let b_color = self.node(b).color();
        self.set_color(a, b_color);
        self.set_color(b, a_color);

        // a takes b's position; links that pointed at a now point at b and
        // vice versa (the adjacent case where b is a's child).
        let swap = |h: Option<Handle>, this: Handle, other: Handle| {
            if h == Some(this) { Some(other) } else { h }
        };
        {
            let node = self.node_mut(a);
            node.set_parent(swap(b_parent, a, b));
            node.set_child(Side::Left, swap(b_left, a, b));
            node.set_child(Side::Right, swap(b_right, a, b));
        }
        {
            let node = self.node_mut(b);
            node.set_parent(swap(a_parent, b, a));
            node.set_child(Side::Left, swap(a_left, b, a));
            node.set_child(Side::Right, swap(a_right, b, a));
        }

        // Re-point the surrounding nodes at their new neighbors.
        if let Some(parent) = self.node(a).parent() {
            let side = b_side.expect("successor always has a parent");
            self.node_mut(parent).set_child(side, Some(a));
        }
        for side in [Side::Left, Side::Right] {
            if let Some(child) = self.node(a).child(side) {
                self.node_mut(child).set_parent(Some(a));
            }
        }
        if let Some(parent) = self.node(b).parent() {
            let side = a_side.expect("only the root has no parent");
            self.node_mut(parent).set_child(side, Some(b));
        } else {
            self.root = Some(b);
        }
        for side in [Side::Left, Side::Right] {
            if let Some(child) = self.node(b).child(side) {
                self.node_mut(child).set_parent(Some(b));
            }
        }
    }

    // ─── Rotation ────────────────────────────────────────────────────────

    /// Single rotation: moves `pivot` down toward `dir`, promoting the
    /// child on the opposite side. The fixup case analysis guarantees that
    /// child exists whenever this is called.
    fn rotate(&mut self, pivot: Handle, dir: Side) {
        let Some(promoted) = self.node(pivot).child(dir.opposite()) else {
            debug_assert!(false, "`RawRBTree::rotate()` - promoted child is absent!");
            return;
        };
        let parent = self.node(pivot).parent();
        let transfer = self.node(promoted).child(dir);

        self.node_mut(pivot).set_child(dir.opposite(), transfer);
        if let Some(transfer) = transfer {
            self.node_mut(transfer).set_parent(Some(pivot));
        }
        self.node_mut(promoted).set_child(dir, Some(pivot));
        self.node_mut(promoted).set_parent(parent);
        self.node_mut(pivot).set_parent(Some(promoted));
        match parent {
            None => self.root = Some(promoted),
            Some(parent) => {
                let side = self.side_under_parent(pivot, parent);
                self.node_mut(parent).set_child(side, Some(promoted));
            }
        }
    }
}

impl<K: Clone, V: Clone> Clone for RawRBTree<K, V> {
    /// Deep copy preserving shape and colors exactly. Nodes are rebuilt
    /// into a fresh compact arena, dropping any free-list fragmentation the
    /// source accumulated.
    fn clone(&self) -> Self {
        let mut nodes: Arena<Node<K, V>> = Arena::with_capacity(self.len);
        let Some(old_root) = self.root else {
            return Self {
                nodes,
                root: None,
                len: 0,
            };
        };

        let clone_detached = |source: &Node<K, V>| {
            let mut node = Node::new(source.key.clone(), source.value.clone());
            node.set_color(source.color());
            node
        };

        let new_root = nodes.alloc(clone_detached(self.node(old_root)));
        // (source handle, already-cloned counterpart) pairs still needing
        // their children cloned. Tree height is O(log n), but the stack
        // holds siblings too, so this is bounded by n — spilling to the
        // heap past 32 entries is fine.
        let mut pending: SmallVec<[(Handle, Handle); 32]> = SmallVec::new();
        pending.push((old_root, new_root));
        while let Some((old, new)) = pending.pop() {
            for side in [Side::Left, Side::Right] {
                if let Some(old_child) = self.node(old).child(side) {
                    let mut cloned = clone_detached(self.node(old_child));
                    cloned.set_parent(Some(new));
                    let new_child = nodes.alloc(cloned);
                    nodes.get_mut(new).set_child(side, Some(new_child));
                    pending.push((old_child, new_child));
                }
            }
        }

        Self {
            nodes,
            root: Some(new_root),
            len: self.len,
        }
    }
}
