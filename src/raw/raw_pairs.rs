use core::borrow::Borrow;

use alloc::vec::Vec;

/// The pair vector backing `OrderedMap`.
///
/// All primitives here mutate in place. The public map clones before calling
/// them, so callers never observe a shared instance changing.
pub(crate) struct RawPairs<K, V> {
    /// Pairs in insertion order. Keys are unique.
    pairs: Vec<(K, V)>,
}

impl<K, V> RawPairs<K, V> {
    /// Creates a new, empty pair vector.
    pub(crate) const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Creates a new pair vector with room for `capacity` pairs.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    /// Wraps `pairs` without checking key uniqueness.
    ///
    /// Callers must have already validated the input with [`first_duplicate`].
    ///
    /// [`first_duplicate`]: RawPairs::first_duplicate
    pub(crate) const fn from_vec_unchecked(pairs: Vec<(K, V)>) -> Self {
        Self { pairs }
    }

    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    pub(crate) fn as_slice(&self) -> &[(K, V)] {
        &self.pairs
    }

    pub(crate) fn into_vec(self) -> Vec<(K, V)> {
        self.pairs
    }

    /// Returns a mutable reference to the value stored at `index`.
    pub(crate) fn value_mut(&mut self, index: usize) -> &mut V {
        &mut self.pairs[index].1
    }
}

impl<K: Eq, V> RawPairs<K, V> {
    /// Returns the index of the first pair in `pairs` whose key equals `key`.
    pub(crate) fn position_in<Q>(pairs: &[(K, V)], key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        pairs.iter().position(|(k, _)| k.borrow() == key)
    }

    /// Returns the indices `(first, duplicate)` of the first key that occurs twice.
    pub(crate) fn first_duplicate(pairs: &[(K, V)]) -> Option<(usize, usize)> {
        pairs.iter().enumerate().find_map(|(duplicate, (key, _))| {
            pairs[..duplicate]
                .iter()
                .position(|(k, _)| k == key)
                .map(|first| (first, duplicate))
        })
    }

    /// Returns the index of the pair for `key`, if present.
    pub(crate) fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        Self::position_in(&self.pairs, key)
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.get_key_value(key).map(|(_, v)| v)
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let index = self.position(key)?;
        let (k, v) = &self.pairs[index];
        Some((k, v))
    }

    /// Inserts a pair, replacing the value in place if the key already exists.
    ///
    /// Returns the previous value when the key was present. A replaced key
    /// keeps its position and the stored key is not updated.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(index) = self.position(&key) {
            Some(core::mem::replace(&mut self.pairs[index].1, value))
        } else {
            self.pairs.push((key, value));
            None
        }
    }

    /// Replaces the value for an existing key without inserting.
    ///
    /// Returns `Ok(old)` on replacement and hands `value` back as `Err` when
    /// the key is absent.
    pub(crate) fn replace<Q>(&mut self, key: &Q, value: V) -> Result<V, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        match self.position(key) {
            Some(index) => Ok(core::mem::replace(&mut self.pairs[index].1, value)),
            None => Err(value),
        }
    }

    /// Removes the pair for `key`, shifting later pairs down to keep order.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let index = self.position(key)?;
        Some(self.pairs.remove(index))
    }
}

impl<K: Clone, V: Clone> Clone for RawPairs<K, V> {
    fn clone(&self) -> Self {
        Self {
            pairs: self.pairs.clone(),
        }
    }
}
