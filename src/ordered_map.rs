use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::error::Error;
use crate::pair_source::PairSource;
use crate::raw::RawPairs;
use crate::update::Update;

mod access;
mod capacity;
mod traversal;

/// A map that remembers the order in which keys were first inserted.
///
/// Pairs live in a single vector. Lookups are linear scans over that vector,
/// so keys only need [`Eq`]; neither [`Hash`] nor [`Ord`] is required. The
/// map is meant for small collections where order matters more than lookup
/// speed, such as JSON-like documents whose field order must survive a round
/// trip.
///
/// Operations that change the map ([`put`], [`replace`], [`delete`],
/// [`pop`], [`get_and_update`], [`merge`]) borrow the receiver and return a
/// new map. The receiver is left untouched, so any number of readers can
/// hold on to a snapshot while a writer derives new versions from it.
///
/// Updating an existing key keeps its position; only new keys are appended.
/// Two maps are equal when they hold the same pairs in the same order.
///
/// # Examples
///
/// ```
/// use ordmap::OrderedMap;
///
/// let map = OrderedMap::new()
///     .put("a", 1)
///     .put("b", 2)
///     .put("a", 3);
///
/// // "a" keeps its original slot.
/// assert_eq!(map.as_slice(), &[("a", 3), ("b", 2)]);
///
/// // Writers never disturb the snapshot they started from.
/// let smaller = map.delete(&"a");
/// assert_eq!(map.len(), 2);
/// assert_eq!(smaller.len(), 1);
/// ```
///
/// An `OrderedMap` with a known list of items can be initialized from an array:
///
/// ```
/// use ordmap::OrderedMap;
///
/// let planets = OrderedMap::from([
///     ("Mercury", 0.4),
///     ("Venus", 0.7),
///     ("Earth", 1.0),
///     ("Mars", 1.5),
/// ]);
/// assert_eq!(planets.keys().next(), Some(&"Mercury"));
/// ```
///
/// [`put`]: OrderedMap::put
/// [`replace`]: OrderedMap::replace
/// [`delete`]: OrderedMap::delete
/// [`pop`]: OrderedMap::pop
/// [`get_and_update`]: OrderedMap::get_and_update
/// [`merge`]: OrderedMap::merge
pub struct OrderedMap<K, V> {
    raw: RawPairs<K, V>,
}

/// An iterator over the entries of an `OrderedMap`, in insertion order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedMap`].
///
/// # Examples
///
/// ```
/// use ordmap::OrderedMap;
///
/// let map = OrderedMap::from([(2, "b"), (1, "a")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&2, &"b")));
/// assert_eq!(iter.next_back(), Some((&1, &"a")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OrderedMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: core::slice::Iter<'a, (K, V)>,
}

/// An owning iterator over the entries of an `OrderedMap`, in insertion order.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of an `OrderedMap`.
///
/// This `struct` is created by the [`keys`] method on [`OrderedMap`].
///
/// [`keys`]: OrderedMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of an `OrderedMap`.
///
/// This `struct` is created by the [`values`] method on [`OrderedMap`].
///
/// [`values`]: OrderedMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An owning iterator over the keys of an `OrderedMap`.
///
/// This `struct` is created by the [`into_keys`] method on [`OrderedMap`].
///
/// [`into_keys`]: OrderedMap::into_keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoKeys<K, V> {
    inner: IntoIter<K, V>,
}

/// An owning iterator over the values of an `OrderedMap`.
///
/// This `struct` is created by the [`into_values`] method on [`OrderedMap`].
///
/// [`into_values`]: OrderedMap::into_values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoValues<K, V> {
    inner: IntoIter<K, V>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn from_slice(pairs: &'a [(K, V)]) -> Self {
        Iter { inner: pairs.iter() }
    }
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn from_slice(pairs: &'a [(K, V)]) -> Self {
        Keys {
            inner: Iter::from_slice(pairs),
        }
    }
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn from_slice(pairs: &'a [(K, V)]) -> Self {
        Values {
            inner: Iter::from_slice(pairs),
        }
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Makes a new, empty `OrderedMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<&str, i32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> OrderedMap<K, V> {
        OrderedMap { raw: RawPairs::new() }
    }

    /// Wraps pairs whose keys are already known to be unique.
    pub(crate) const fn from_unique(pairs: Vec<(K, V)>) -> Self {
        OrderedMap {
            raw: RawPairs::from_vec_unchecked(pairs),
        }
    }

    /// Returns the number of pairs in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::new().put(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the pairs as a slice, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([("x", 1), ("y", 2)]);
    /// assert_eq!(map.as_slice(), &[("x", 1), ("y", 2)]);
    /// ```
    #[must_use]
    pub fn as_slice(&self) -> &[(K, V)] {
        self.raw.as_slice()
    }

    /// Consumes the map and returns its pairs, in insertion order.
    ///
    /// Feeding the result back to [`OrderedMap::from_tuples`] yields an
    /// equal map.
    #[must_use]
    pub fn into_tuples(self) -> Vec<(K, V)> {
        self.raw.into_vec()
    }

    /// Gets an iterator over the entries of the map, in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::from_slice(self.raw.as_slice())
    }

    /// Gets an iterator over the keys of the map, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [2, 1]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::from_slice(self.raw.as_slice())
    }

    /// Gets an iterator over the values of the map, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// let values: Vec<_> = map.values().copied().collect();
    /// assert_eq!(values, ["b", "a"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values::from_slice(self.raw.as_slice())
    }

    /// Creates a consuming iterator visiting all the keys, in insertion order.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys { inner: self.into_iter() }
    }

    /// Creates a consuming iterator visiting all the values, in insertion order.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues { inner: self.into_iter() }
    }

    /// Returns the earliest inserted pair still in the map.
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.raw.as_slice().first().map(|(k, v)| (k, v))
    }

    /// Returns the most recently appended pair.
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.raw.as_slice().last().map(|(k, v)| (k, v))
    }
}

impl<K: Eq, V> OrderedMap<K, V> {
    /// Wraps a sequence of unique-keyed pairs, keeping their order.
    ///
    /// This is the constructor for raw pair sequences; it behaves exactly like
    /// `OrderedMap::from(pairs)`.
    ///
    /// # Panics
    ///
    /// Panics if two pairs share a key. Use [`try_from_tuples`] for input
    /// that is not known to be well formed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::from_tuples(vec![("b", 2), ("a", 1)]);
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&"b", &"a"]);
    /// ```
    ///
    /// [`try_from_tuples`]: OrderedMap::try_from_tuples
    #[must_use]
    pub fn from_tuples(pairs: Vec<(K, V)>) -> Self {
        match Self::try_from_tuples(pairs) {
            Ok(map) => map,
            Err(err) => panic!("{err}"),
        }
    }

    /// Wraps a sequence of pairs, rejecting it if two pairs share a key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] naming the first repeated key's
    /// positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::{Error, OrderedMap};
    ///
    /// let err = OrderedMap::try_from_tuples(vec![("a", 1), ("b", 2), ("a", 3)]).unwrap_err();
    /// assert_eq!(err, Error::DuplicateKey { first: 0, duplicate: 2 });
    /// ```
    pub fn try_from_tuples(pairs: Vec<(K, V)>) -> Result<Self, Error> {
        if let Some((first, duplicate)) = RawPairs::first_duplicate(&pairs) {
            debug!(first, duplicate, len = pairs.len(), "rejected pair sequence with duplicate key");
            return Err(Error::DuplicateKey { first, duplicate });
        }
        Ok(Self::from_unique(pairs))
    }

    /// Looks up `key`, distinguishing a stored value from a missing key.
    ///
    /// This is the primitive every other lookup is built on. A key mapped to
    /// an "empty" value such as `None` is still reported as found.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([("set", Some(1)), ("unset", None)]);
    /// assert_eq!(map.fetch(&"unset"), Some(&None));
    /// assert_eq!(map.fetch(&"missing"), None);
    /// ```
    pub fn fetch<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.raw.get(key)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// Equivalent to [`fetch`](OrderedMap::fetch); `None` is the absent default.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.fetch(key)
    }

    /// Returns the value for `key`, or `default` when the key is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1)]);
    /// assert_eq!(*map.get_or(&"a", &0), 1);
    /// assert_eq!(*map.get_or(&"b", &0), 0);
    /// ```
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.fetch(key).unwrap_or(default)
    }

    /// Returns the stored key and its value.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.raw.get_key_value(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.raw.position(key).is_some()
    }

    /// Returns the position of `key` in insertion order.
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.raw.position(key)
    }
}

impl<K: Eq + Clone, V: Clone> OrderedMap<K, V> {
    /// Returns a map with `key` set to `value`.
    ///
    /// An existing key keeps its position and only its value changes; a new
    /// key is appended at the end. The receiver is not modified.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::new().put("a", 1).put("b", 2);
    /// let updated = map.put("a", 3);
    ///
    /// assert_eq!(updated.as_slice(), &[("a", 3), ("b", 2)]);
    /// assert_eq!(map.get(&"a"), Some(&1));
    /// ```
    #[must_use]
    pub fn put(&self, key: K, value: V) -> Self {
        let mut map = self.clone();
        map.raw.insert(key, value);
        map
    }

    /// Returns a map with the value for an existing `key` replaced.
    ///
    /// Unlike [`put`](OrderedMap::put), a missing key is not inserted; the
    /// result is then equal to the receiver.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1)]);
    /// assert_eq!(map.replace(&"a", 2).get(&"a"), Some(&2));
    /// assert_eq!(map.replace(&"b", 2), map);
    /// ```
    #[must_use]
    pub fn replace<Q>(&self, key: &Q, value: V) -> Self
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let mut map = self.clone();
        // A missing key hands the value back; nothing to do.
        let _ = map.raw.replace(key, value);
        map
    }

    /// Returns a map with `key` removed. A missing key is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.delete(&"b").as_slice(), &[("a", 1), ("c", 3)]);
    /// assert_eq!(map.delete(&"z"), map);
    /// ```
    #[must_use]
    pub fn delete<Q>(&self, key: &Q) -> Self
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.pop(key).1
    }

    /// Removes `key`, returning its value alongside the remaining map.
    ///
    /// When the key is missing the value is `None` and the map is equal to
    /// the receiver.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::new().put("k", 7);
    /// assert_eq!(map.pop(&"k"), (Some(7), OrderedMap::new()));
    /// assert_eq!(map.pop(&"x"), (None, map.clone()));
    /// ```
    #[must_use]
    pub fn pop<Q>(&self, key: &Q) -> (Option<V>, Self)
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let mut map = self.clone();
        let value = map.raw.remove_entry(key).map(|(_, v)| v);
        (value, map)
    }

    /// Like [`pop`](OrderedMap::pop), but reports `default` for a missing key.
    #[must_use]
    pub fn pop_or<Q>(&self, key: &Q, default: V) -> (V, Self)
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let (value, map) = self.pop(key);
        (value.unwrap_or(default), map)
    }

    /// Reads and rewrites the value for `key` in one step.
    ///
    /// `f` receives the current value, or `None` if the key is missing, and
    /// decides what happens next:
    ///
    /// - [`Update::Put(retrieved, value)`](Update::Put) stores `value`
    ///   (replacing in place, or appending a new key) and returns
    ///   `(retrieved, new_map)`.
    /// - [`Update::Remove`] deletes the key and returns
    ///   `(current_value, new_map)`. Removing a missing key changes nothing.
    ///
    /// Nested path writes such as [`put_in`](OrderedMap::put_in) are built by
    /// applying this at every level of the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::{OrderedMap, Update};
    ///
    /// let counters = OrderedMap::from([("hits", 1)]);
    /// let (before, counters) = counters.get_and_update("hits", |n| {
    ///     let n = n.copied().unwrap_or(0);
    ///     Update::Put(Some(n), n + 1)
    /// });
    /// assert_eq!(before, Some(1));
    /// assert_eq!(counters.get(&"hits"), Some(&2));
    ///
    /// let (gone, empty) = counters.get_and_update("hits", |_| Update::Remove);
    /// assert_eq!((gone, empty.len()), (Some(2), 0));
    /// ```
    pub fn get_and_update<F>(&self, key: K, f: F) -> (Option<V>, Self)
    where
        F: FnOnce(Option<&V>) -> Update<V>,
    {
        match f(self.fetch(&key)) {
            Update::Put(retrieved, value) => (retrieved, self.put(key, value)),
            Update::Remove => self.pop(&key),
        }
    }

    /// Returns a map with the value for `key` rewritten by `f`.
    ///
    /// A missing key leaves the map unchanged and `f` is not called.
    #[must_use]
    pub fn update<Q, F>(&self, key: &Q, f: F) -> Self
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
        F: FnOnce(&V) -> V,
    {
        let mut map = self.clone();
        if let Some(index) = map.raw.position(key) {
            let slot = map.raw.value_mut(index);
            *slot = f(slot);
        }
        map
    }

    /// Merges `other` into a copy of this map. Values from `other` win.
    ///
    /// Keys already present keep their position here and take `other`'s
    /// value. Keys new to this map are appended in the order `other` lists
    /// them. `other` may be a map or a raw pair sequence.
    ///
    /// # Complexity
    ///
    /// O(n * m), where n is the length of `self` and m the length of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let a = OrderedMap::from([("a", 1), ("b", 2)]);
    /// let b = OrderedMap::from([("a", 3), ("d", 4)]);
    /// assert_eq!(a.merge(&b), OrderedMap::from([("a", 3), ("b", 2), ("d", 4)]));
    /// ```
    #[must_use]
    pub fn merge<S>(&self, other: &S) -> Self
    where
        S: PairSource<K, V> + ?Sized,
    {
        self.merge_with(other, |_, _, theirs| theirs.clone())
    }

    /// Merges `other` into a copy of this map, resolving key collisions with
    /// `resolve(key, ours, theirs)`.
    ///
    /// Ordering follows [`merge`](OrderedMap::merge).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let stock = OrderedMap::from([("apples", 3), ("pears", 1)]);
    /// let delivery = OrderedMap::from([("pears", 4), ("plums", 2)]);
    /// let total = stock.merge_with(&delivery, |_, ours, theirs| ours + theirs);
    /// assert_eq!(total.as_slice(), &[("apples", 3), ("pears", 5), ("plums", 2)]);
    /// ```
    #[must_use]
    pub fn merge_with<S, F>(&self, other: &S, mut resolve: F) -> Self
    where
        S: PairSource<K, V> + ?Sized,
        F: FnMut(&K, &V, &V) -> V,
    {
        let mut map = self.clone();
        for (key, theirs) in other.unique_pairs() {
            match map.raw.position(key) {
                Some(index) => {
                    let slot = map.raw.value_mut(index);
                    *slot = resolve(key, slot, theirs);
                }
                None => {
                    map.raw.insert(key.clone(), theirs.clone());
                }
            }
        }
        trace!(left = self.len(), merged = map.len(), "merged ordered maps");
        map
    }
}

impl<K: Clone, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        OrderedMap { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash> Hash for OrderedMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: PartialOrd, V: PartialOrd> PartialOrd for OrderedMap<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord> Ord for OrderedMap<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        OrderedMap::new()
    }
}

/// Collects pairs with [`put`](OrderedMap::put) semantics: a repeated key
/// keeps its first position and takes its last value.
impl<K: Eq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.raw.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.into_vec().into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for OrderedMap<K, V>
where
    K: Borrow<Q> + Eq,
    Q: ?Sized + Eq,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.fetch(key).expect("no entry found for key")
    }
}

/// # Panics
///
/// Panics if two pairs share a key.
impl<K: Eq, V> From<Vec<(K, V)>> for OrderedMap<K, V> {
    fn from(pairs: Vec<(K, V)>) -> Self {
        OrderedMap::from_tuples(pairs)
    }
}

/// # Panics
///
/// Panics if two pairs share a key.
impl<K: Eq, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        OrderedMap::from_tuples(Vec::from(arr))
    }
}

/// Takes the source map's enumeration order, which for `BTreeMap` is key order.
impl<K, V> From<BTreeMap<K, V>> for OrderedMap<K, V> {
    fn from(map: BTreeMap<K, V>) -> Self {
        OrderedMap::from_unique(map.into_iter().collect())
    }
}

/// Takes the `HashMap`'s enumeration order as is. That order is arbitrary and
/// must not be relied on.
#[cfg(feature = "std")]
impl<K, V, S> From<std::collections::HashMap<K, V, S>> for OrderedMap<K, V> {
    fn from(map: std::collections::HashMap<K, V, S>) -> Self {
        OrderedMap::from_unique(map.into_iter().collect())
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n).map(|(k, v)| (k, v))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> Default for Iter<'_, K, V> {
    /// Creates an empty `ordered_map::Iter`.
    ///
    /// ```
    /// # use ordmap::ordered_map;
    /// let iter: ordered_map::Iter<'_, u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter::from_slice(&[])
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Default for IntoIter<K, V> {
    fn default() -> Self {
        IntoIter {
            inner: Vec::new().into_iter(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.inner.len()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoKeys<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

impl<K, V> fmt::Debug for IntoKeys<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoKeys").field("len", &self.inner.len()).finish()
    }
}

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoValues<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoValues<K, V> {}

impl<K, V> fmt::Debug for IntoValues<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoValues").field("len", &self.inner.len()).finish()
    }
}
