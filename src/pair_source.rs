//! Accepting either a map or a raw pair sequence wherever a map is expected.
//!
//! [`PairSource`] is implemented for [`OrderedMap`] and for the raw forms
//! `Vec<(K, V)>`, `[(K, V)]` and `[(K, V); N]`. Every operation is written
//! once against the normalized map and always returns an [`OrderedMap`],
//! never the raw form.

use core::borrow::Borrow;

use alloc::vec::Vec;

use crate::error::Error;
use crate::ordered_map::{Keys, Values};
use crate::raw::RawPairs;
use crate::update::Update;
use crate::OrderedMap;

/// Something that can be read as an ordered sequence of unique-keyed pairs.
///
/// Raw sequences are trusted to have unique keys. Operations that normalize
/// a raw sequence panic if that contract is broken.
///
/// # Examples
///
/// ```
/// use ordmap::{OrderedMap, PairSource};
///
/// let raw = vec![("a", 1), ("b", 2)];
///
/// // A raw sequence answers the same questions a map does...
/// assert_eq!(raw.fetch(&"b"), Some(&2));
///
/// // ...and every write hands back a proper map.
/// let map: OrderedMap<_, _> = raw.put("c", 3);
/// assert_eq!(map, OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]));
/// ```
pub trait PairSource<K, V> {
    /// Returns the pairs in order.
    fn pairs(&self) -> &[(K, V)];

    /// Returns `true` if the pairs are already known to have unique keys.
    ///
    /// Only [`OrderedMap`] overrides this; raw sequences are checked when
    /// normalized.
    fn is_normalized(&self) -> bool {
        false
    }

    /// Returns the pairs after checking that keys are unique.
    ///
    /// # Panics
    ///
    /// Panics if a raw sequence repeats a key.
    fn unique_pairs(&self) -> &[(K, V)]
    where
        K: Eq,
    {
        let pairs = self.pairs();
        if !self.is_normalized()
            && let Some((first, duplicate)) = RawPairs::first_duplicate(pairs)
        {
            panic!("{}", Error::DuplicateKey { first, duplicate });
        }
        pairs
    }

    /// Copies the pairs into a new [`OrderedMap`].
    ///
    /// # Panics
    ///
    /// Panics if a raw sequence repeats a key.
    fn to_ordered_map(&self) -> OrderedMap<K, V>
    where
        K: Eq + Clone,
        V: Clone,
    {
        OrderedMap::from_unique(self.unique_pairs().to_vec())
    }

    /// See [`OrderedMap::fetch`].
    fn fetch<'s, Q>(&'s self, key: &Q) -> Option<&'s V>
    where
        K: 's + Eq + Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let pairs = self.pairs();
        RawPairs::position_in(pairs, key).map(|index| &pairs[index].1)
    }

    /// See [`OrderedMap::get_or`].
    fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: 'a + Eq + Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.fetch(key).unwrap_or(default)
    }

    /// See [`OrderedMap::keys`].
    fn keys(&self) -> Keys<'_, K, V> {
        Keys::from_slice(self.pairs())
    }

    /// See [`OrderedMap::values`].
    fn values(&self) -> Values<'_, K, V> {
        Values::from_slice(self.pairs())
    }

    /// See [`OrderedMap::put`].
    fn put(&self, key: K, value: V) -> OrderedMap<K, V>
    where
        K: Eq + Clone,
        V: Clone,
    {
        self.to_ordered_map().put(key, value)
    }

    /// See [`OrderedMap::replace`].
    fn replace<Q>(&self, key: &Q, value: V) -> OrderedMap<K, V>
    where
        K: Eq + Clone + Borrow<Q>,
        V: Clone,
        Q: ?Sized + Eq,
    {
        self.to_ordered_map().replace(key, value)
    }

    /// See [`OrderedMap::delete`].
    fn delete<Q>(&self, key: &Q) -> OrderedMap<K, V>
    where
        K: Eq + Clone + Borrow<Q>,
        V: Clone,
        Q: ?Sized + Eq,
    {
        self.to_ordered_map().delete(key)
    }

    /// See [`OrderedMap::pop`].
    fn pop<Q>(&self, key: &Q) -> (Option<V>, OrderedMap<K, V>)
    where
        K: Eq + Clone + Borrow<Q>,
        V: Clone,
        Q: ?Sized + Eq,
    {
        self.to_ordered_map().pop(key)
    }

    /// See [`OrderedMap::pop_or`].
    fn pop_or<Q>(&self, key: &Q, default: V) -> (V, OrderedMap<K, V>)
    where
        K: Eq + Clone + Borrow<Q>,
        V: Clone,
        Q: ?Sized + Eq,
    {
        self.to_ordered_map().pop_or(key, default)
    }

    /// See [`OrderedMap::get_and_update`].
    fn get_and_update<F>(&self, key: K, f: F) -> (Option<V>, OrderedMap<K, V>)
    where
        K: Eq + Clone,
        V: Clone,
        F: FnOnce(Option<&V>) -> Update<V>,
    {
        self.to_ordered_map().get_and_update(key, f)
    }

    /// See [`OrderedMap::merge`].
    fn merge<S>(&self, other: &S) -> OrderedMap<K, V>
    where
        K: Eq + Clone,
        V: Clone,
        S: PairSource<K, V> + ?Sized,
    {
        self.to_ordered_map().merge(other)
    }
}

impl<K, V> PairSource<K, V> for OrderedMap<K, V> {
    fn pairs(&self) -> &[(K, V)] {
        self.as_slice()
    }

    fn is_normalized(&self) -> bool {
        true
    }
}

impl<K, V> PairSource<K, V> for [(K, V)] {
    fn pairs(&self) -> &[(K, V)] {
        self
    }
}

impl<K, V, const N: usize> PairSource<K, V> for [(K, V); N] {
    fn pairs(&self) -> &[(K, V)] {
        self
    }
}

impl<K, V> PairSource<K, V> for Vec<(K, V)> {
    fn pairs(&self) -> &[(K, V)] {
        self
    }
}
