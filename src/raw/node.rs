use super::arena::Handle;

/// Node color. Absent children count as black for black-height purposes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child slot of a node, also used as a rotation direction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    #[inline]
    const fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// A single tree node: one key-value pair plus color and structural links.
///
/// Pure data — all rebalancing behavior lives in `RawRBTree`. The parent link
/// is `None` only for the root.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    color: Color,
    parent: Option<Handle>,
    children: [Option<Handle>; 2],
}

impl<K, V> Node<K, V> {
    /// Creates a detached node. New nodes enter the tree red; insert-fixup
    /// restores the color invariants afterwards.
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            parent: None,
            children: [None, None],
        }
    }

    #[inline]
    pub(crate) const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub(crate) const fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub(crate) const fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    #[inline]
    pub(crate) const fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        self.children[side.index()]
    }

    #[inline]
    pub(crate) const fn set_child(&mut self, side: Side, child: Option<Handle>) {
        self.children[side.index()] = child;
    }

    /// The side holding `child`, which must be one of this node's children.
    #[inline]
    pub(crate) fn side_of(&self, child: Handle) -> Side {
        if self.children[0] == Some(child) {
            Side::Left
        } else {
            debug_assert_eq!(self.children[1], Some(child), "`Node::side_of()` - not a child of this node!");
            Side::Right
        }
    }

    /// Splits a node borrow into a shared key and a mutable value, for the
    /// mutable iterators.
    #[inline]
    pub(crate) const fn pair_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn new_nodes_are_red_and_detached() {
        let node: Node<i32, ()> = Node::new(7, ());
        assert!(node.is_red());
        assert_eq!(node.parent(), None);
        assert_eq!(node.child(Side::Left), None);
        assert_eq!(node.child(Side::Right), None);
    }

    #[test]
    fn side_of_reports_the_linked_slot() {
        let left = Handle::from_index(0);
        let right = Handle::from_index(1);
        let mut node: Node<i32, ()> = Node::new(7, ());
        node.set_child(Side::Left, Some(left));
        node.set_child(Side::Right, Some(right));
        assert_eq!(node.side_of(left), Side::Left);
        assert_eq!(node.side_of(right), Side::Right);
    }

    #[test]
    fn opposite_sides() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }
}
