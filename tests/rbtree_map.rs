use std::collections::BTreeMap;

use cardinal_tree::RBTreeMap;
use cardinal_tree::rbtree_map;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 10_000;

/// Generates random keys in a range small enough to force collisions.
fn key_strategy() -> impl Strategy<Value = i64> {
    -20_000i64..20_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, i64),
    Remove(i64),
    Get(i64),
    ContainsKey(i64),
    GetKeyValue(i64),
    FirstKeyValue,
    LastKeyValue,
    PopFirst,
    PopLast,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        5 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        3 => key_strategy().prop_map(MapOp::Remove),
        2 => key_strategy().prop_map(MapOp::Get),
        1 => key_strategy().prop_map(MapOp::ContainsKey),
        1 => key_strategy().prop_map(MapOp::GetKeyValue),
        1 => Just(MapOp::FirstKeyValue),
        1 => Just(MapOp::LastKeyValue),
        1 => Just(MapOp::PopFirst),
        1 => Just(MapOp::PopLast),
    ]
}

// ─── Core CRUD operations ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of insert/remove/get operations on both
    /// RBTreeMap and BTreeMap and asserts identical results at every step.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut rb_map: RBTreeMap<i64, i64> = RBTreeMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for op in &ops {
            match op {
                MapOp::Insert(k, v) => {
                    let rb_result = rb_map.insert(*k, *v);
                    let bt_result = bt_map.insert(*k, *v);
                    prop_assert_eq!(rb_result, bt_result, "insert({}, {})", k, v);
                }
                MapOp::Remove(k) => {
                    let rb_result = rb_map.remove(k);
                    let bt_result = bt_map.remove(k);
                    prop_assert_eq!(rb_result, bt_result, "remove({})", k);
                }
                MapOp::Get(k) => {
                    let rb_result = rb_map.get(k);
                    let bt_result = bt_map.get(k);
                    prop_assert_eq!(rb_result, bt_result, "get({})", k);
                }
                MapOp::ContainsKey(k) => {
                    let rb_result = rb_map.contains_key(k);
                    let bt_result = bt_map.contains_key(k);
                    prop_assert_eq!(rb_result, bt_result, "contains_key({})", k);
                }
                MapOp::GetKeyValue(k) => {
                    let rb_result = rb_map.get_key_value(k);
                    let bt_result = bt_map.get_key_value(k);
                    prop_assert_eq!(rb_result, bt_result, "get_key_value({})", k);
                }
                MapOp::FirstKeyValue => {
                    let rb_result = rb_map.first_key_value();
                    let bt_result = bt_map.first_key_value();
                    prop_assert_eq!(rb_result, bt_result, "first_key_value");
                }
                MapOp::LastKeyValue => {
                    let rb_result = rb_map.last_key_value();
                    let bt_result = bt_map.last_key_value();
                    prop_assert_eq!(rb_result, bt_result, "last_key_value");
                }
                MapOp::PopFirst => {
                    let rb_result = rb_map.pop_first();
                    let bt_result = bt_map.pop_first();
                    prop_assert_eq!(rb_result, bt_result, "pop_first");
                }
                MapOp::PopLast => {
                    let rb_result = rb_map.pop_last();
                    let bt_result = bt_map.pop_last();
                    prop_assert_eq!(rb_result, bt_result, "pop_last");
                }
            }
            prop_assert_eq!(rb_map.len(), bt_map.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(rb_map.is_empty(), bt_map.is_empty(), "is_empty mismatch after {:?}", op);
        }
    }

    /// Tests that iteration order matches BTreeMap after random insertions.
    #[test]
    fn iter_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut rb_map: RBTreeMap<i64, i64> = RBTreeMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for (k, v) in &entries {
            rb_map.insert(*k, *v);
            bt_map.insert(*k, *v);
        }

        // Forward iteration
        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &bt_items, "iter() mismatch");

        // Reverse iteration
        let rb_rev: Vec<_> = rb_map.iter().rev().map(|(&k, &v)| (k, v)).collect();
        let bt_rev: Vec<_> = bt_map.iter().rev().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_rev, &bt_rev, "iter().rev() mismatch");

        // Keys
        let rb_keys: Vec<_> = rb_map.keys().copied().collect();
        let bt_keys: Vec<_> = bt_map.keys().copied().collect();
        prop_assert_eq!(&rb_keys, &bt_keys, "keys() mismatch");

        // Values
        let rb_vals: Vec<_> = rb_map.values().copied().collect();
        let bt_vals: Vec<_> = bt_map.values().copied().collect();
        prop_assert_eq!(&rb_vals, &bt_vals, "values() mismatch");

        // into_iter
        let rb_into: Vec<_> = rb_map.clone().into_iter().collect();
        let bt_into: Vec<_> = bt_map.clone().into_iter().collect();
        prop_assert_eq!(&rb_into, &bt_into, "into_iter() mismatch");

        // into_keys
        let rb_into_keys: Vec<_> = rb_map.clone().into_keys().collect();
        let bt_into_keys: Vec<_> = bt_map.clone().into_keys().collect();
        prop_assert_eq!(&rb_into_keys, &bt_into_keys, "into_keys() mismatch");

        // into_values
        let rb_into_vals: Vec<_> = rb_map.clone().into_values().collect();
        let bt_into_vals: Vec<_> = bt_map.clone().into_values().collect();
        prop_assert_eq!(&rb_into_vals, &bt_into_vals, "into_values() mismatch");
    }

    /// Tests ExactSizeIterator and DoubleEndedIterator behavior.
    #[test]
    fn iter_size_and_double_ended(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let rb_map: RBTreeMap<i64, i64> = entries.iter().cloned().collect();

        let iter = rb_map.iter();
        let len = iter.len();
        prop_assert_eq!(len, rb_map.len(), "ExactSizeIterator len mismatch");

        // Alternating front/back should yield all elements exactly once
        let mut from_front = Vec::new();
        let mut from_back = Vec::new();
        let mut iter = rb_map.iter();
        let mut toggle = true;
        loop {
            if toggle {
                if let Some(item) = iter.next() {
                    from_front.push(item);
                } else {
                    break;
                }
            } else if let Some(item) = iter.next_back() {
                from_back.push(item);
            } else {
                break;
            }
            toggle = !toggle;
        }
        prop_assert_eq!(from_front.len() + from_back.len(), rb_map.len());
    }

    /// Tests range queries match BTreeMap.
    #[test]
    fn range_matches_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        lo in key_strategy(),
        hi in key_strategy(),
    ) {
        let mut rb_map: RBTreeMap<i64, i64> = RBTreeMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for (k, v) in &entries {
            rb_map.insert(*k, *v);
            bt_map.insert(*k, *v);
        }

        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

        // Inclusive range
        let rb_range: Vec<_> = rb_map.range(lo..=hi).map(|(&k, &v)| (k, v)).collect();
        let bt_range: Vec<_> = bt_map.range(lo..=hi).map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_range, &bt_range, "range({}..={}) mismatch", lo, hi);

        // Exclusive end
        let rb_range: Vec<_> = rb_map.range(lo..hi).map(|(&k, &v)| (k, v)).collect();
        let bt_range: Vec<_> = bt_map.range(lo..hi).map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_range, &bt_range, "range({}..{}) mismatch", lo, hi);

        // From start
        let rb_range: Vec<_> = rb_map.range(lo..).map(|(&k, &v)| (k, v)).collect();
        let bt_range: Vec<_> = bt_map.range(lo..).map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_range, &bt_range, "range({}..) mismatch", lo);

        // Up to end
        let rb_range: Vec<_> = rb_map.range(..=hi).map(|(&k, &v)| (k, v)).collect();
        let bt_range: Vec<_> = bt_map.range(..=hi).map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_range, &bt_range, "range(..={}) mismatch", hi);

        // Unbounded
        let rb_range: Vec<_> = rb_map.range(..).map(|(&k, &v)| (k, v)).collect();
        let bt_range: Vec<_> = bt_map.range(..).map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_range, &bt_range, "range(..) mismatch");

        // Reverse range
        let rb_range_rev: Vec<_> = rb_map.range(lo..=hi).rev().map(|(&k, &v)| (k, v)).collect();
        let bt_range_rev: Vec<_> = bt_map.range(lo..=hi).rev().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_range_rev, &bt_range_rev, "range({}..={}).rev() mismatch", lo, hi);
    }

    /// Tests lower_bound / upper_bound against BTreeMap range queries.
    #[test]
    fn bounds_match_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        probe in key_strategy(),
    ) {
        let rb_map: RBTreeMap<i64, i64> = entries.iter().cloned().collect();
        let bt_map: BTreeMap<i64, i64> = entries.iter().cloned().collect();

        let bt_lower = bt_map.range(probe..).next();
        prop_assert_eq!(rb_map.lower_bound(&probe), bt_lower, "lower_bound({})", probe);

        let bt_upper = bt_map.range((core::ops::Bound::Excluded(probe), core::ops::Bound::Unbounded)).next();
        prop_assert_eq!(rb_map.upper_bound(&probe), bt_upper, "upper_bound({})", probe);

        prop_assert_eq!(rb_map.equal_range(&probe), (bt_lower, bt_upper), "equal_range({})", probe);
    }

    /// Tests get_mut behaves correctly.
    #[test]
    fn get_mut_matches_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        keys_to_mutate in proptest::collection::vec(key_strategy(), 100),
    ) {
        let mut rb_map: RBTreeMap<i64, i64> = RBTreeMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for (k, v) in &entries {
            rb_map.insert(*k, *v);
            bt_map.insert(*k, *v);
        }

        for k in &keys_to_mutate {
            if let Some(v) = rb_map.get_mut(k) {
                *v += 1;
            }
            if let Some(v) = bt_map.get_mut(k) {
                *v += 1;
            }
        }

        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &bt_items, "get_mut mismatch");
    }

    /// Tests retain matches BTreeMap.
    #[test]
    fn retain_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut rb_map: RBTreeMap<i64, i64> = entries.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().cloned().collect();

        rb_map.retain(|k, _v| k % 3 != 0);
        bt_map.retain(|k, _v| k % 3 != 0);

        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &bt_items, "retain mismatch");
        prop_assert_eq!(rb_map.len(), bt_map.len(), "retain len mismatch");
    }

    /// Tests append matches BTreeMap.
    #[test]
    fn append_matches_btreemap(
        entries_a in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        entries_b in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
    ) {
        let mut rb_a: RBTreeMap<i64, i64> = entries_a.iter().cloned().collect();
        let mut rb_b: RBTreeMap<i64, i64> = entries_b.iter().cloned().collect();
        let mut bt_a: BTreeMap<i64, i64> = entries_a.iter().cloned().collect();
        let mut bt_b: BTreeMap<i64, i64> = entries_b.iter().cloned().collect();

        rb_a.append(&mut rb_b);
        bt_a.append(&mut bt_b);

        prop_assert_eq!(rb_b.len(), 0, "append did not empty source");
        prop_assert_eq!(rb_a.len(), bt_a.len(), "append len mismatch");

        let rb_items: Vec<_> = rb_a.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_a.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &bt_items, "append content mismatch");
    }

    /// Tests split_off matches BTreeMap.
    #[test]
    fn split_off_matches_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        split_key in key_strategy(),
    ) {
        let mut rb_map: RBTreeMap<i64, i64> = entries.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().cloned().collect();

        let rb_right = rb_map.split_off(&split_key);
        let bt_right = bt_map.split_off(&split_key);

        let rb_left_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_left_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_left_items, &bt_left_items, "split_off left mismatch");

        let rb_right_items: Vec<_> = rb_right.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_right_items: Vec<_> = bt_right.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_right_items, &bt_right_items, "split_off right mismatch");
    }

    /// Tests that clear produces an empty map.
    #[test]
    fn clear_empties_map(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut rb_map: RBTreeMap<i64, i64> = entries.iter().cloned().collect();
        rb_map.clear();
        prop_assert!(rb_map.is_empty());
        prop_assert_eq!(rb_map.len(), 0);
        prop_assert_eq!(rb_map.iter().count(), 0);
    }

    /// Tests the Entry API matches BTreeMap behavior.
    #[test]
    fn entry_api_matches_btreemap(
        initial in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        entry_keys in proptest::collection::vec(key_strategy(), TEST_SIZE / 2),
    ) {
        let mut rb_map: RBTreeMap<i64, i64> = initial.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = initial.iter().cloned().collect();

        for k in &entry_keys {
            let rb_val = *rb_map.entry(*k).or_insert(999);
            let bt_val = *bt_map.entry(*k).or_insert(999);
            prop_assert_eq!(rb_val, bt_val, "entry({}).or_insert", k);
        }

        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &bt_items, "entry API content mismatch");
    }

    /// Tests and_modify + or_insert pattern.
    #[test]
    fn entry_and_modify_or_insert(
        keys in proptest::collection::vec(key_strategy(), TEST_SIZE),
    ) {
        let mut rb_map: RBTreeMap<i64, i64> = RBTreeMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for k in &keys {
            rb_map.entry(*k).and_modify(|v| *v += 1).or_insert(1);
            bt_map.entry(*k).and_modify(|v| *v += 1).or_insert(1);
        }

        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &bt_items, "and_modify/or_insert mismatch");
    }

    /// Tests try_insert matches insert-if-absent semantics.
    #[test]
    fn try_insert_matches_btreemap(
        initial in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        attempts in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
    ) {
        let mut rb_map: RBTreeMap<i64, i64> = initial.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = initial.iter().cloned().collect();

        for (k, v) in &attempts {
            match rb_map.try_insert(*k, *v) {
                Ok(inserted) => {
                    prop_assert_eq!(*inserted, *v, "try_insert({}, {}) Ok value", k, v);
                    prop_assert!(!bt_map.contains_key(k), "try_insert succeeded for present key {}", k);
                    bt_map.insert(*k, *v);
                }
                Err(err) => {
                    prop_assert_eq!(err.value, *v, "try_insert({}, {}) rejected value", k, v);
                    prop_assert_eq!(err.entry.get(), bt_map.get(k).unwrap(), "try_insert({}, {}) kept value", k, v);
                }
            }
        }

        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &bt_items, "try_insert content mismatch");
    }

    /// Tests FromIterator and iteration equality.
    #[test]
    fn from_iter_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let rb_map: RBTreeMap<i64, i64> = entries.iter().cloned().collect();
        let bt_map: BTreeMap<i64, i64> = entries.iter().cloned().collect();

        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &bt_items, "FromIterator mismatch");
    }

    /// Tests Clone produces an equal, independent map.
    #[test]
    fn clone_produces_equal_map(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let rb_map: RBTreeMap<i64, i64> = entries.iter().cloned().collect();
        let cloned = rb_map.clone();

        prop_assert_eq!(rb_map.len(), cloned.len());
        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let cl_items: Vec<_> = cloned.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &cl_items, "clone content mismatch");
    }

    /// Tests PartialEq / Eq.
    #[test]
    fn eq_matches_btreemap(
        entries_a in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        entries_b in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
    ) {
        let rb_a: RBTreeMap<i64, i64> = entries_a.iter().cloned().collect();
        let rb_b: RBTreeMap<i64, i64> = entries_b.iter().cloned().collect();
        let bt_a: BTreeMap<i64, i64> = entries_a.iter().cloned().collect();
        let bt_b: BTreeMap<i64, i64> = entries_b.iter().cloned().collect();

        prop_assert_eq!(rb_a == rb_b, bt_a == bt_b, "equality mismatch");
    }

    /// Tests Ord / PartialOrd.
    #[test]
    fn ord_matches_btreemap(
        entries_a in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        entries_b in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
    ) {
        let rb_a: RBTreeMap<i64, i64> = entries_a.iter().cloned().collect();
        let rb_b: RBTreeMap<i64, i64> = entries_b.iter().cloned().collect();
        let bt_a: BTreeMap<i64, i64> = entries_a.iter().cloned().collect();
        let bt_b: BTreeMap<i64, i64> = entries_b.iter().cloned().collect();

        prop_assert_eq!(rb_a.cmp(&rb_b), bt_a.cmp(&bt_b), "Ord mismatch");
        prop_assert_eq!(rb_a.partial_cmp(&rb_b), bt_a.partial_cmp(&bt_b), "PartialOrd mismatch");
    }

    /// Tests Index<&Q> returns the same values as BTreeMap.
    #[test]
    fn index_by_key_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let rb_map: RBTreeMap<i64, i64> = entries.iter().cloned().collect();
        let bt_map: BTreeMap<i64, i64> = entries.iter().cloned().collect();

        for (k, _) in &entries {
            prop_assert_eq!(rb_map[k], bt_map[k], "Index[&{}] mismatch", k);
        }
    }
}

// ─── Extend and iter_mut ─────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Tests Extend matches BTreeMap.
    #[test]
    fn extend_matches_btreemap(
        initial in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        extra in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
    ) {
        let mut rb_map: RBTreeMap<i64, i64> = initial.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = initial.iter().cloned().collect();

        rb_map.extend(extra.iter().cloned());
        bt_map.extend(extra.iter().cloned());

        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &bt_items, "extend mismatch");
    }

    /// Tests iter_mut produces the same sequence and allows mutation.
    #[test]
    fn iter_mut_matches(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut rb_map: RBTreeMap<i64, i64> = entries.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().cloned().collect();

        for (_, v) in rb_map.iter_mut() {
            *v = v.wrapping_add(1);
        }
        for (_, v) in bt_map.iter_mut() {
            *v = v.wrapping_add(1);
        }

        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &bt_items, "iter_mut mismatch");
    }

    /// Tests IterMut double-ended traversal with alternating next/next_back.
    #[test]
    fn iter_mut_double_ended_traversal(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let mut rb_map: RBTreeMap<i64, i64> = entries.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().cloned().collect();

        let mut rb_keys = Vec::new();
        let mut bt_keys = Vec::new();

        {
            let mut rb_iter = rb_map.iter_mut();
            let mut bt_iter = bt_map.iter_mut();

            let mut toggle = true;
            loop {
                if toggle {
                    match (rb_iter.next(), bt_iter.next()) {
                        (Some((rb_k, rb_v)), Some((bt_k, bt_v))) => {
                            prop_assert_eq!(*rb_k, *bt_k, "iter_mut next() key mismatch");
                            prop_assert_eq!(*rb_v, *bt_v, "iter_mut next() value mismatch");
                            rb_keys.push(*rb_k);
                            bt_keys.push(*bt_k);
                            *rb_v = rb_v.wrapping_add(100);
                            *bt_v = bt_v.wrapping_add(100);
                        }
                        (None, None) => break,
                        (rb, bt) => {
                            prop_assert!(false, "iter_mut next() mismatch: rb={:?}, bt={:?}",
                                rb.map(|(k, _)| k), bt.map(|(k, _)| k));
                        }
                    }
                } else {
                    match (rb_iter.next_back(), bt_iter.next_back()) {
                        (Some((rb_k, rb_v)), Some((bt_k, bt_v))) => {
                            prop_assert_eq!(*rb_k, *bt_k, "iter_mut next_back() key mismatch");
                            prop_assert_eq!(*rb_v, *bt_v, "iter_mut next_back() value mismatch");
                            rb_keys.push(*rb_k);
                            bt_keys.push(*bt_k);
                            *rb_v = rb_v.wrapping_add(200);
                            *bt_v = bt_v.wrapping_add(200);
                        }
                        (None, None) => break,
                        (rb, bt) => {
                            prop_assert!(false, "iter_mut next_back() mismatch: rb={:?}, bt={:?}",
                                rb.map(|(k, _)| k), bt.map(|(k, _)| k));
                        }
                    }
                }
                toggle = !toggle;
            }
        }

        prop_assert_eq!(rb_keys.len(), bt_keys.len(), "iter_mut double-ended total count mismatch");
        prop_assert_eq!(rb_keys.len(), rb_map.len(), "iter_mut should visit all elements");

        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &bt_items, "iter_mut double-ended mutations mismatch");

        let mut rb_keys_sorted = rb_keys.clone();
        rb_keys_sorted.sort();
        let dedup_len = rb_keys_sorted.len();
        rb_keys_sorted.dedup();
        prop_assert_eq!(rb_keys_sorted.len(), dedup_len, "iter_mut yielded duplicate keys");
    }

    /// Tests values_mut produces the same result.
    #[test]
    fn values_mut_matches(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut rb_map: RBTreeMap<i64, i64> = entries.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().cloned().collect();

        for v in rb_map.values_mut() {
            *v = v.wrapping_mul(2);
        }
        for v in bt_map.values_mut() {
            *v = v.wrapping_mul(2);
        }

        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &bt_items, "values_mut mismatch");
    }

    /// Tests range_mut matches expected behavior.
    #[test]
    fn range_mut_matches(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        lo in key_strategy(),
        hi in key_strategy(),
    ) {
        let mut rb_map: RBTreeMap<i64, i64> = entries.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().cloned().collect();

        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

        for (_, v) in rb_map.range_mut(lo..=hi) {
            *v = v.wrapping_add(100);
        }
        for (_, v) in bt_map.range_mut(lo..=hi) {
            *v = v.wrapping_add(100);
        }

        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &bt_items, "range_mut mismatch");
    }
}

// ─── Deterministic scenarios ─────────────────────────────────────────────────

#[test]
fn bounds_on_one_to_five() {
    let map: RBTreeMap<i32, i32> = (1..=5).map(|k| (k, k * 10)).collect();

    assert_eq!(map.lower_bound(&3), Some((&3, &30)));
    assert_eq!(map.upper_bound(&3), Some((&4, &40)));
    assert_eq!(map.lower_bound(&0), Some((&1, &10)));
    assert_eq!(map.upper_bound(&5), None);
    assert_eq!(map.lower_bound(&6), None);
    assert_eq!(map.equal_range(&3), (Some((&3, &30)), Some((&4, &40))));
    assert_eq!(map.equal_range(&6), (None, None));
}

#[test]
fn duplicate_insert_keeps_first_key_and_replaces_value() {
    let mut map = RBTreeMap::new();
    assert_eq!(map.insert(7, "a"), None);
    assert_eq!(map.insert(7, "b"), Some("a"));
    assert_eq!(map.len(), 1);
    assert_eq!(map[&7], "b");
}

#[test]
fn full_drains_in_three_orders() {
    let keys = [10, 20, 30, 40, 50, 25, 5, 35, 45, 15];

    // Ascending
    let mut map: RBTreeMap<i32, i32> = keys.iter().map(|&k| (k, k)).collect();
    while let Some((k, v)) = map.pop_first() {
        assert_eq!(k, v);
        assert!(map.iter().all(|(&rest, _)| rest > k));
    }
    assert!(map.is_empty());

    // Descending
    let mut map: RBTreeMap<i32, i32> = keys.iter().map(|&k| (k, k)).collect();
    while let Some((k, _)) = map.pop_last() {
        assert!(map.iter().all(|(&rest, _)| rest < k));
    }
    assert!(map.is_empty());

    // Insertion order
    let mut map: RBTreeMap<i32, i32> = keys.iter().map(|&k| (k, k)).collect();
    for k in keys {
        assert_eq!(map.remove(&k), Some(k));
    }
    assert!(map.is_empty());
}

#[test]
fn clone_is_independent_at_one_thousand_keys() {
    let original: RBTreeMap<i32, i32> = (0..1000).map(|k| (k, k * 3)).collect();
    let mut copy = original.clone();

    copy.retain(|&k, _| k % 2 == 0);
    for v in copy.values_mut() {
        *v += 1;
    }

    assert_eq!(original.len(), 1000);
    assert_eq!(copy.len(), 500);
    for (k, v) in &original {
        assert_eq!(*v, k * 3);
    }
    for (k, v) in &copy {
        assert_eq!(*v, k * 3 + 1);
    }
}

#[test]
fn try_insert_error_reports_entry_and_value() {
    let mut map = RBTreeMap::new();
    map.insert(1, "original");

    let err = map.try_insert(1, "rejected").unwrap_err();
    assert_eq!(err.entry.key(), &1);
    assert_eq!(err.entry.get(), &"original");
    assert_eq!(err.value, "rejected");
    let rendered = format!("{err}");
    assert!(rendered.contains("already exists"));

    assert_eq!(map[&1], "original");
}

#[test]
fn entry_remove_and_first_last_entry() {
    let mut map: RBTreeMap<i32, i32> = (1..=5).map(|k| (k, k)).collect();

    let first = map.first_entry().unwrap();
    assert_eq!(first.remove_entry(), (1, 1));

    let mut last = map.last_entry().unwrap();
    assert_eq!(*last.key(), 5);
    assert_eq!(last.insert(50), 5);

    match map.entry(3) {
        rbtree_map::Entry::Occupied(o) => {
            assert_eq!(o.remove(), 3);
        }
        rbtree_map::Entry::Vacant(_) => panic!("key 3 should be present"),
    }

    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, [2, 4, 5]);
    assert_eq!(map[&5], 50);
}

#[test]
fn append_with_disjoint_and_overlapping_keys() {
    let mut a = RBTreeMap::from([(1, "a"), (2, "b"), (3, "c")]);
    let mut b = RBTreeMap::from([(3, "d"), (4, "e"), (5, "f")]);

    a.append(&mut b);

    assert_eq!(a.len(), 5);
    assert!(b.is_empty());
    assert_eq!(a[&3], "d");

    // Fully disjoint append hits the end-of-tree hint path
    let mut c = RBTreeMap::from([(10, "x"), (11, "y")]);
    a.append(&mut c);
    assert_eq!(a.len(), 7);
    assert_eq!(a.last_key_value(), Some((&11, &"y")));
}

#[test]
#[should_panic(expected = "range start is greater than range end")]
fn inverted_range_panics() {
    let map = RBTreeMap::from([(1, 1), (2, 2)]);
    let _ = map.range(2..1);
}

#[test]
#[allow(clippy::double_ended_iterator_last)]
fn iterator_trait_impls() {
    let mut map = RBTreeMap::from([(1, 10), (2, 20), (3, 30)]);

    for (_, value) in &mut map {
        *value += 1;
    }
    assert_eq!(map.get(&1), Some(&11));
    assert_eq!(map.get(&3), Some(&31));

    {
        let iter = map.iter();
        assert_eq!(iter.len(), 3);
        let iter_clone = iter.clone();
        let _ = format!("{:?}", iter_clone);

        let keys = map.keys();
        assert_eq!(keys.len(), 3);
        let _ = format!("{:?}", keys.clone());

        let values = map.values();
        assert_eq!(values.len(), 3);
        assert_eq!(map.values().last(), Some(&31));
        let _ = format!("{:?}", values.clone());

        let mut values_mut = map.values_mut();
        assert_eq!(values_mut.size_hint(), (3, Some(3)));
        let back_value = values_mut.next_back().map(|v| *v);
        assert_eq!(back_value, Some(31));
        let last_value = map.values_mut().last().map(|v| *v);
        assert_eq!(last_value, Some(31));

        let range = map.range(1..=2);
        assert_eq!(range.count(), 2);
    }

    {
        let iter_mut = map.iter_mut();
        assert_eq!(iter_mut.len(), 3);
        let _ = format!("{:?}", iter_mut);
    }

    {
        let range_mut = map.range_mut(1..=2);
        let _ = format!("{:?}", range_mut);
    }

    let into_iter = map.clone().into_iter();
    let _ = format!("{:?}", into_iter);
    let into_keys = map.clone().into_keys();
    assert_eq!(into_keys.len(), 3);
    let _ = format!("{:?}", into_keys);
    let into_values = map.clone().into_values();
    assert_eq!(into_values.len(), 3);
    let _ = format!("{:?}", into_values);

    let empty_iter: rbtree_map::Iter<'_, i32, i32> = Default::default();
    assert_eq!(empty_iter.len(), 0);
    let _ = format!("{:?}", empty_iter.clone());

    let empty_iter_mut: rbtree_map::IterMut<'_, i32, i32> = Default::default();
    assert_eq!(empty_iter_mut.len(), 0);
    let _ = format!("{:?}", empty_iter_mut);

    let empty_into_iter: rbtree_map::IntoIter<i32, i32> = Default::default();
    let _ = format!("{:?}", empty_into_iter);

    let empty_keys: rbtree_map::Keys<'_, i32, i32> = Default::default();
    assert_eq!(empty_keys.len(), 0);
    let _ = format!("{:?}", empty_keys);

    let empty_values: rbtree_map::Values<'_, i32, i32> = Default::default();
    assert_eq!(empty_values.len(), 0);
    let _ = format!("{:?}", empty_values);

    let empty_values_mut: rbtree_map::ValuesMut<'_, i32, i32> = Default::default();
    assert_eq!(empty_values_mut.len(), 0);
    let _ = format!("{:?}", empty_values_mut);

    let empty_into_keys: rbtree_map::IntoKeys<i32, i32> = Default::default();
    let _ = format!("{:?}", empty_into_keys);

    let empty_into_values: rbtree_map::IntoValues<i32, i32> = Default::default();
    let _ = format!("{:?}", empty_into_values);

    let empty_range: rbtree_map::Range<'_, i32, i32> = Default::default();
    assert_eq!(empty_range.clone().count(), 0);
    let _ = format!("{:?}", empty_range);

    let empty_range_mut: rbtree_map::RangeMut<'_, i32, i32> = Default::default();
    assert_eq!(empty_range_mut.count(), 0);
}

#[test]
fn range_edges_around_missing_keys() {
    use core::ops::Bound::{Excluded, Unbounded};

    let map: RBTreeMap<i32, i32> = [(10, 1), (20, 2), (30, 3)].into();

    // Start between keys
    let collected: Vec<_> = map.range(15..).map(|(&k, _)| k).collect();
    assert_eq!(collected, [20, 30]);

    // Excluded start on an existing key
    let collected: Vec<_> = map.range((Excluded(10), Unbounded)).map(|(&k, _)| k).collect();
    assert_eq!(collected, [20, 30]);

    // End between keys
    let collected: Vec<_> = map.range(..25).map(|(&k, _)| k).collect();
    assert_eq!(collected, [10, 20]);

    // Empty window between two keys
    assert_eq!(map.range(21..=29).next(), None);
    assert_eq!(map.range(21..=29).next_back(), None);

    // Window entirely past the maximum
    assert_eq!(map.range(31..).next(), None);
}

#[test]
fn empty_clone_and_into_iter_variants() {
    let empty: RBTreeMap<i32, i32> = RBTreeMap::new();
    let cloned = empty.clone();
    assert!(cloned.is_empty());

    let mut into_iter = RBTreeMap::<i32, i32>::new().into_iter();
    assert_eq!(into_iter.next(), None);

    let mut into_keys = RBTreeMap::<i32, i32>::new().into_keys();
    assert_eq!(into_keys.next(), None);

    let mut into_values = RBTreeMap::<i32, i32>::new().into_values();
    assert_eq!(into_values.next(), None);
}

#[test]
fn empty_iterators_and_ranges_are_well_formed() {
    let mut map: RBTreeMap<i32, i32> = RBTreeMap::new();

    {
        let iter = map.iter();
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }
    {
        let iter_mut = map.iter_mut();
        assert_eq!(iter_mut.size_hint(), (0, Some(0)));
    }

    assert_eq!(map.range(..).next(), None);
    assert_eq!(map.range_mut(..).next(), None);
}

#[test]
fn with_capacity_starts_empty() {
    let map: RBTreeMap<i32, i32> = RBTreeMap::with_capacity(64);
    assert!(map.is_empty());
    assert_eq!(map.capacity(), 64);
}
