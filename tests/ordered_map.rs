use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;
use std::ops::ControlFlow;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ordmap::ordered_map;
use ordmap::{Error, OrderedMap, Update};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 500;

/// Keys drawn from a small range so operations collide often.
fn key_strategy() -> impl Strategy<Value = u8> {
    0u8..48
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// Builds a map with unique keys, in the order the keys first appear.
fn unique_pairs_strategy() -> impl Strategy<Value = Vec<(u8, i64)>> {
    proptest::collection::vec((key_strategy(), value_strategy()), 0..64).prop_map(|pairs| {
        let mut seen = Vec::new();
        pairs
            .into_iter()
            .filter(|(k, _)| {
                if seen.contains(k) {
                    false
                } else {
                    seen.push(*k);
                    true
                }
            })
            .collect()
    })
}

// ─── Reference model ─────────────────────────────────────────────────────────

/// A deliberately naive association list used as the oracle.
#[derive(Debug, Clone, Default)]
struct Model(Vec<(u8, i64)>);

impl Model {
    fn put(&mut self, k: u8, v: i64) {
        match self.0.iter_mut().find(|(mk, _)| *mk == k) {
            Some(slot) => slot.1 = v,
            None => self.0.push((k, v)),
        }
    }

    fn replace(&mut self, k: u8, v: i64) {
        if let Some(slot) = self.0.iter_mut().find(|(mk, _)| *mk == k) {
            slot.1 = v;
        }
    }

    fn pop(&mut self, k: u8) -> Option<i64> {
        let index = self.0.iter().position(|(mk, _)| *mk == k)?;
        Some(self.0.remove(index).1)
    }

    fn get(&self, k: u8) -> Option<i64> {
        self.0.iter().find(|(mk, _)| *mk == k).map(|(_, v)| *v)
    }
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Put(u8, i64),
    Replace(u8, i64),
    Delete(u8),
    Pop(u8),
    Fetch(u8),
    Increment(u8),
    RemoveViaUpdate(u8),
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        5 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Put(k, v)),
        2 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Replace(k, v)),
        2 => key_strategy().prop_map(MapOp::Delete),
        2 => key_strategy().prop_map(MapOp::Pop),
        2 => key_strategy().prop_map(MapOp::Fetch),
        2 => key_strategy().prop_map(MapOp::Increment),
        1 => key_strategy().prop_map(MapOp::RemoveViaUpdate),
    ]
}

// ─── Core operations ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Replays random operations on both `OrderedMap` and the model and
    /// asserts identical contents after every step.
    #[test]
    fn map_ops_match_model(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut map: OrderedMap<u8, i64> = OrderedMap::new();
        let mut model = Model::default();

        for op in &ops {
            match *op {
                MapOp::Put(k, v) => {
                    map = map.put(k, v);
                    model.put(k, v);
                }
                MapOp::Replace(k, v) => {
                    map = map.replace(&k, v);
                    model.replace(k, v);
                }
                MapOp::Delete(k) => {
                    map = map.delete(&k);
                    model.pop(k);
                }
                MapOp::Pop(k) => {
                    let (value, next) = map.pop(&k);
                    prop_assert_eq!(value, model.pop(k), "pop({})", k);
                    map = next;
                }
                MapOp::Fetch(k) => {
                    prop_assert_eq!(map.fetch(&k).copied(), model.get(k), "fetch({})", k);
                }
                MapOp::Increment(k) => {
                    let (old, next) = map.get_and_update(k, |v| {
                        let n = v.copied().unwrap_or(0);
                        Update::Put(v.copied(), n.wrapping_add(1))
                    });
                    let expected = model.get(k);
                    prop_assert_eq!(old, expected, "get_and_update({}) retrieved", k);
                    model.put(k, expected.unwrap_or(0).wrapping_add(1));
                    map = next;
                }
                MapOp::RemoveViaUpdate(k) => {
                    let (old, next) = map.get_and_update(k, |_| Update::Remove);
                    prop_assert_eq!(old, model.pop(k), "get_and_update({}) remove", k);
                    map = next;
                }
            }
            prop_assert_eq!(map.as_slice(), model.0.as_slice(), "contents after {:?}", op);
            prop_assert_eq!(map.len(), model.0.len());
        }
    }

    /// Every pure operation leaves its receiver unchanged.
    #[test]
    fn receivers_are_never_mutated(pairs in unique_pairs_strategy(), k in key_strategy(), v in value_strategy()) {
        let map = OrderedMap::from_tuples(pairs.clone());
        let _ = map.put(k, v);
        let _ = map.replace(&k, v);
        let _ = map.delete(&k);
        let _ = map.pop(&k);
        let _ = map.get_and_update(k, |_| Update::Remove);
        let _ = map.merge(&[(k, v)]);
        prop_assert_eq!(map.as_slice(), pairs.as_slice());
    }

    /// `from_tuples(keys zip values)` reproduces the map.
    #[test]
    fn keys_and_values_round_trip(pairs in unique_pairs_strategy()) {
        let map = OrderedMap::from_tuples(pairs);
        let rebuilt = OrderedMap::from_tuples(
            map.keys().copied().zip(map.values().copied()).collect(),
        );
        prop_assert_eq!(&rebuilt, &map);
        prop_assert_eq!(OrderedMap::from_tuples(map.clone().into_tuples()), map);
    }

    /// `get_or` agrees with `fetch` for present and missing keys.
    #[test]
    fn get_or_agrees_with_fetch(pairs in unique_pairs_strategy(), k in key_strategy(), default in value_strategy()) {
        let map = OrderedMap::from_tuples(pairs);
        match map.fetch(&k) {
            Some(v) => prop_assert_eq!(map.get_or(&k, &default), v),
            None => prop_assert_eq!(*map.get_or(&k, &default), default),
        }
        prop_assert_eq!(map.get(&k), map.fetch(&k));
    }

    /// Deleting twice is the same as deleting once.
    #[test]
    fn delete_is_idempotent(pairs in unique_pairs_strategy(), k in key_strategy()) {
        let map = OrderedMap::from_tuples(pairs);
        let once = map.delete(&k);
        prop_assert_eq!(once.delete(&k), once);
    }

    /// Merge keeps the left map's order, takes the right map's values, and
    /// appends new keys in the right map's order.
    #[test]
    fn merge_matches_model(left in unique_pairs_strategy(), right in unique_pairs_strategy()) {
        let mut model = Model(left.clone());
        for (k, v) in &right {
            model.put(*k, *v);
        }

        let merged = OrderedMap::from_tuples(left).merge(&OrderedMap::from_tuples(right.clone()));
        prop_assert_eq!(merged.as_slice(), model.0.as_slice());

        for (k, v) in &right {
            prop_assert_eq!(merged.fetch(k), Some(v));
        }
    }

    /// Collecting uses put semantics: first position, last value.
    #[test]
    fn collect_matches_repeated_put(pairs in proptest::collection::vec((key_strategy(), value_strategy()), 0..128)) {
        let collected: OrderedMap<u8, i64> = pairs.iter().copied().collect();
        let mut model = Model::default();
        for (k, v) in pairs {
            model.put(k, v);
        }
        prop_assert_eq!(collected.as_slice(), model.0.as_slice());
    }

    /// Iterators agree with each other and run both ways.
    #[test]
    fn iterators_agree(pairs in unique_pairs_strategy()) {
        let map = OrderedMap::from_tuples(pairs.clone());

        let items: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&items, &pairs);

        let rev: Vec<_> = map.iter().rev().map(|(&k, &v)| (k, v)).collect();
        let expected_rev: Vec<_> = pairs.iter().rev().copied().collect();
        prop_assert_eq!(&rev, &expected_rev);

        prop_assert_eq!(map.iter().len(), map.len());
        prop_assert_eq!(map.keys().len(), map.len());
        prop_assert_eq!(map.values().len(), map.len());

        let into_keys: Vec<_> = map.clone().into_keys().collect();
        let keys: Vec<_> = map.keys().copied().collect();
        prop_assert_eq!(into_keys, keys);

        let into_values: Vec<_> = map.clone().into_values().collect();
        let values: Vec<_> = map.values().copied().collect();
        prop_assert_eq!(into_values, values);

        let owned: Vec<_> = map.into_iter().collect();
        prop_assert_eq!(owned, pairs);
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn updating_a_key_keeps_its_position() {
    let map = OrderedMap::new().put("a", 1).put("b", 2).put("a", 3);
    assert_eq!(map.as_slice(), &[("a", 3), ("b", 2)]);
    assert_ne!(map, OrderedMap::from([("b", 2), ("a", 3)]));
}

#[test]
fn pop_of_only_key_leaves_empty_map() {
    let map = OrderedMap::new().put("k", "v");
    assert_eq!(map.pop(&"k"), (Some("v"), OrderedMap::new()));
}

#[test]
fn pop_or_reports_default_for_missing_key() {
    let map = OrderedMap::from([("a", 1)]);
    assert_eq!(map.pop_or(&"b", 0), (0, map.clone()));
    assert_eq!(map.pop_or(&"a", 0), (1, OrderedMap::new()));
}

#[test]
fn merge_prefers_second_argument() {
    let a = OrderedMap::from([("a", 1), ("b", 2)]);
    let b = OrderedMap::from([("a", 3), ("d", 4)]);
    assert_eq!(a.merge(&b), OrderedMap::from([("a", 3), ("b", 2), ("d", 4)]));
}

#[test]
fn merge_appends_several_new_keys_in_second_arguments_order() {
    let a = OrderedMap::from([("x", 0)]);
    let b = OrderedMap::from([("z", 1), ("x", 2), ("y", 3), ("w", 4)]);
    assert_eq!(a.merge(&b).as_slice(), &[("x", 2), ("z", 1), ("y", 3), ("w", 4)]);
}

#[test]
fn merge_with_resolves_collisions() {
    let a = OrderedMap::from([("a", 10), ("b", 20)]);
    let b = vec![("b", 5), ("c", 1)];
    let merged = a.merge_with(&b, |key, ours, theirs| {
        assert_eq!(*key, "b");
        ours - theirs
    });
    assert_eq!(merged.as_slice(), &[("a", 10), ("b", 15), ("c", 1)]);
}

#[test]
fn replace_never_inserts() {
    let empty: OrderedMap<&str, i32> = OrderedMap::new();
    assert_eq!(empty.replace(&"k", 1), OrderedMap::new());

    let map = OrderedMap::from([("a", 1), ("b", 2)]);
    assert_eq!(map.replace(&"a", 9).as_slice(), &[("a", 9), ("b", 2)]);
}

#[test]
fn get_and_update_remove_present_and_missing() {
    let map = OrderedMap::from([("a", 1)]);
    assert_eq!(map.get_and_update("a", |_| Update::Remove), (Some(1), OrderedMap::new()));
    assert_eq!(map.get_and_update("b", |_| Update::Remove), (None, map.clone()));
}

#[test]
fn get_and_update_put_inserts_missing_key_at_end() {
    let map = OrderedMap::from([("a", 1)]);
    let (retrieved, map) = map.get_and_update("b", |current| {
        assert_eq!(current, None);
        Update::set(2)
    });
    assert_eq!(retrieved, None);
    assert_eq!(map.as_slice(), &[("a", 1), ("b", 2)]);
}

#[test]
fn update_rewrites_present_key_only() {
    let map = OrderedMap::from([("a", 1), ("b", 2)]);
    assert_eq!(map.update(&"a", |v| v * 10).as_slice(), &[("a", 10), ("b", 2)]);
    assert_eq!(map.update(&"z", |_| unreachable!()), map);
}

#[test]
fn fetch_distinguishes_absent_like_values_from_missing_keys() {
    let map: OrderedMap<&str, Option<i32>> = OrderedMap::from([("nil", None)]);
    assert_eq!(map.fetch(&"nil"), Some(&None));
    assert_eq!(map.fetch(&"missing"), None);
    assert!(map.contains_key(&"nil"));
}

#[test]
fn lookups_accept_borrowed_keys() {
    let map = OrderedMap::from([(String::from("alpha"), 1), (String::from("beta"), 2)]);
    assert_eq!(map.fetch("beta"), Some(&2));
    assert_eq!(map["alpha"], 1);
    assert_eq!(map.index_of("beta"), Some(1));
    assert_eq!(map.delete("alpha").keys().collect::<Vec<_>>(), [&String::from("beta")]);
}

#[test]
fn reduce_maps_values_in_order() {
    let map = OrderedMap::from([("foo", 1), ("bar", 2)]);
    let bumped = map.reduce(Vec::new(), |mut acc, (k, v)| {
        acc.push((*k, v + 1));
        ControlFlow::Continue(acc)
    });
    assert_eq!(bumped, ControlFlow::Continue(vec![("foo", 2), ("bar", 3)]));

    // The same traversal through the std iterator adapters.
    let bumped: OrderedMap<_, _> = map.iter().map(|(k, v)| (*k, v + 1)).collect();
    assert_eq!(bumped, OrderedMap::from([("foo", 2), ("bar", 3)]));
}

#[test]
fn reduce_halts_without_visiting_the_rest() {
    let map: OrderedMap<i32, i32> = (0..100).map(|i| (i, i)).collect();
    let mut visited = 0;
    let result = map.reduce(0, |acc, (_, v)| {
        visited += 1;
        if *v == 3 { ControlFlow::Break(acc) } else { ControlFlow::Continue(acc + v) }
    });
    assert_eq!(result, ControlFlow::Break(3));
    assert_eq!(visited, 4);
}

#[test]
fn reduce_over_empty_map_returns_initial_accumulator() {
    let map: OrderedMap<u8, u8> = OrderedMap::new();
    assert_eq!(map.reduce(7, |acc, _| ControlFlow::Continue(acc + 1)), ControlFlow::Continue(7));
}

#[test]
fn traversal_count_member_and_slice() {
    let map = OrderedMap::from([(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')]);
    assert_eq!(map.count(), 4);
    assert!(map.contains_pair(&2, &'b'));
    assert!(!map.contains_pair(&2, &'c'));
    assert_eq!(map.slice(1, 2), &[(2, 'b'), (3, 'c')]);
    assert_eq!(map.slice(3, usize::MAX), &[(4, 'd')]);
    assert!(map.slice(4, 1).is_empty());
    assert!(map.slice(usize::MAX, usize::MAX).is_empty());
}

#[test]
fn first_and_last_follow_insertion_order() {
    let map = OrderedMap::from([(3, "c"), (1, "a"), (2, "b")]);
    assert_eq!(map.first(), Some((&3, &"c")));
    assert_eq!(map.last(), Some((&2, &"b")));
    let empty: OrderedMap<i32, &str> = OrderedMap::new();
    assert_eq!(empty.first(), None);
}

// ─── Construction ────────────────────────────────────────────────────────────

#[test]
fn from_tuples_and_from_vec_agree() {
    let pairs = vec![("b", 2), ("a", 1)];
    assert_eq!(OrderedMap::from_tuples(pairs.clone()), OrderedMap::from(pairs));
    assert_eq!(OrderedMap::<u8, u8>::from_tuples(Vec::new()), OrderedMap::new());
}

#[test]
fn try_from_tuples_rejects_duplicates() {
    let err = OrderedMap::try_from_tuples(vec![(1, 'a'), (2, 'b'), (1, 'c')]).unwrap_err();
    assert_eq!(err, Error::DuplicateKey { first: 0, duplicate: 2 });
    assert!(err.is_duplicate_key());
}

#[test]
#[should_panic(expected = "duplicate key in pair sequence at index 1 (first seen at index 0)")]
fn from_tuples_panics_on_duplicates() {
    let _ = OrderedMap::from_tuples(vec![("k", 1), ("k", 2)]);
}

#[test]
fn identity_conversion_returns_the_same_map() {
    let map = OrderedMap::from([("a", 1)]);
    assert_eq!(OrderedMap::from(map.clone()), map);
}

#[test]
fn from_btreemap_takes_its_enumeration_order() {
    let source = BTreeMap::from([("b", 2), ("a", 1), ("c", 3)]);
    let map = OrderedMap::from(source);
    assert_eq!(map.as_slice(), &[("a", 1), ("b", 2), ("c", 3)]);
}

#[test]
#[cfg(feature = "std")]
fn from_hashmap_keeps_every_pair() {
    let source: HashMap<i32, i32> = (0..32).map(|i| (i, i * i)).collect();
    let map = OrderedMap::from(source.clone());
    assert_eq!(map.len(), source.len());
    for (k, v) in &source {
        assert_eq!(map.fetch(k), Some(v));
    }
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_missing_key_panics() {
    let map = OrderedMap::from([(1, 1)]);
    let _ = map[&2];
}

#[test]
fn debug_lists_pairs_in_order() {
    let map = OrderedMap::from([("z", 1), ("a", 2)]);
    assert_eq!(format!("{map:?}"), r#"{"z": 1, "a": 2}"#);
    assert_eq!(format!("{:?}", map.keys()), r#"["z", "a"]"#);
}

#[test]
fn ordering_and_hash_follow_pair_sequence() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    let ab = OrderedMap::from([(1, 1), (2, 2)]);
    let ba = OrderedMap::from([(2, 2), (1, 1)]);
    assert!(ab < ba);
    assert_eq!(hash_of(&ab), hash_of(&ab.clone()));
    assert_ne!(ab, ba);
}

#[test]
fn empty_iterators_are_well_formed() {
    let iter: ordered_map::Iter<'_, u8, u8> = Default::default();
    assert_eq!(iter.len(), 0);
    let into: ordered_map::IntoIter<u8, u8> = Default::default();
    assert_eq!(into.count(), 0);

    let map: OrderedMap<u8, u8> = OrderedMap::default();
    assert_eq!(map.keys().next(), None);
    assert_eq!(map.values().next_back(), None);
}

#[test]
fn capacity_and_extend() {
    let mut map: OrderedMap<u8, u8> = OrderedMap::with_capacity(8);
    assert!(map.capacity() >= 8);
    map.extend([(1, 1), (2, 2), (1, 3)]);
    assert_eq!(map.as_slice(), &[(1, 3), (2, 2)]);
}

// ─── Thread Safety Tests ──────────────────────────────────────────────────────

/// Compile-time assertions for Send/Sync bounds: snapshots may be shared
/// freely between readers.
mod send_sync_tests {
    use ordmap::OrderedMap;
    use ordmap::ordered_map::{IntoIter, IntoKeys, IntoValues, Iter, Keys, Values};
    use static_assertions::{assert_eq_size, assert_impl_all};

    // The wrapper adds nothing on top of the pair vector.
    assert_eq_size!(OrderedMap<u8, u64>, Vec<(u8, u64)>);

    assert_impl_all!(OrderedMap<i64, i64>: Send, Sync);
    assert_impl_all!(Iter<'static, i64, i64>: Send, Sync);
    assert_impl_all!(Keys<'static, i64, i64>: Send, Sync);
    assert_impl_all!(Values<'static, i64, i64>: Send, Sync);
    assert_impl_all!(IntoIter<i64, i64>: Send, Sync);
    assert_impl_all!(IntoKeys<i64, i64>: Send, Sync);
    assert_impl_all!(IntoValues<i64, i64>: Send, Sync);

    #[test]
    fn snapshots_are_readable_across_threads() {
        let map: OrderedMap<i64, i64> = (0..64).map(|i| (i, i)).collect();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| assert_eq!(map.values().sum::<i64>(), (0..64).sum()));
            }
        });
    }
}

// ─── Drop Semantics Tests ─────────────────────────────────────────────────────

mod drop_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use ordmap::OrderedMap;

    #[derive(Clone)]
    struct Droppable {
        drop_count: Rc<Cell<i32>>,
    }

    impl Drop for Droppable {
        fn drop(&mut self) {
            self.drop_count.set(self.drop_count.get() + 1);
        }
    }

    #[test]
    fn delete_drops_only_the_copy() {
        let drop_count = Rc::new(Cell::new(0));
        let map: OrderedMap<i64, Droppable> = (0..10)
            .map(|i| (i, Droppable { drop_count: drop_count.clone() }))
            .collect();
        assert_eq!(drop_count.get(), 0, "no drops while building");

        let smaller = map.delete(&5);
        assert_eq!(drop_count.get(), 1, "the removed clone is dropped");
        assert_eq!(smaller.len(), 9);
        assert_eq!(map.len(), 10);

        drop(smaller);
        assert_eq!(drop_count.get(), 10);
        drop(map);
        assert_eq!(drop_count.get(), 20);
    }
}
