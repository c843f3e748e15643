//! Reading and rewriting values nested several maps deep.
//!
//! A path is a slice of keys. Reads descend with [`OrderedMap::fetch`];
//! writes apply [`OrderedMap::get_and_update`] at every level and rebuild
//! each ancestor on the way back up, leaving siblings as they were.

use tracing::debug;

use super::OrderedMap;
use crate::error::Error;
use crate::nested::Nested;
use crate::update::Update;

impl<K: Eq, V: Nested<K>> OrderedMap<K, V> {
    /// Follows `path` through nested maps and returns the value at its end.
    ///
    /// Returns `None` if the path is empty, a key is missing, or an
    /// intermediate value is not a map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::{Node, OrderedMap};
    ///
    /// let doc = OrderedMap::from([("outer", Node::branch([("inner", Node::Leaf(1))]))]);
    /// assert_eq!(doc.get_in(&["outer", "inner"]), Some(&Node::Leaf(1)));
    /// assert_eq!(doc.get_in(&["outer", "missing"]), None);
    /// assert_eq!(doc.get_in(&["outer", "inner", "deeper"]), None);
    /// ```
    pub fn get_in(&self, path: &[K]) -> Option<&V> {
        let (last, parents) = path.split_last()?;
        let mut map = self;
        for key in parents {
            map = map.fetch(key)?.as_map()?;
        }
        map.fetch(last)
    }
}

impl<K: Eq + Clone, V: Clone + Nested<K>> OrderedMap<K, V> {
    /// Applies [`get_and_update`](OrderedMap::get_and_update) to the value at
    /// the end of `path`, rebuilding every map along the way.
    ///
    /// The last key may be missing, in which case `f` sees `None` and may
    /// insert it. Every earlier key must exist and hold a nested map.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyPath`] if `path` is empty.
    /// - [`Error::MissingKey`] if an intermediate key has no entry.
    /// - [`Error::NotAMap`] if an intermediate value is not a map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::{Node, OrderedMap, Update};
    ///
    /// let doc = OrderedMap::from([("stats", Node::branch([("visits", Node::Leaf(1))]))]);
    /// let (old, doc) = doc
    ///     .get_and_update_in(&["stats", "visits"], |v| {
    ///         let n = v.and_then(Node::as_leaf).copied().unwrap_or(0);
    ///         Update::Put(v.cloned(), Node::Leaf(n + 1))
    ///     })
    ///     .unwrap();
    /// assert_eq!(old, Some(Node::Leaf(1)));
    /// assert_eq!(doc.get_in(&["stats", "visits"]), Some(&Node::Leaf(2)));
    /// ```
    pub fn get_and_update_in<F>(&self, path: &[K], f: F) -> Result<(Option<V>, Self), Error>
    where
        F: FnOnce(Option<&V>) -> Update<V>,
    {
        let result = self.get_and_update_at(path, 0, f);
        if let Err(err) = &result {
            debug!(%err, path_len = path.len(), "nested update rejected");
        }
        result
    }

    /// Returns a map with `value` stored at the end of `path`.
    ///
    /// # Errors
    ///
    /// Same as [`get_and_update_in`](OrderedMap::get_and_update_in).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::{Node, OrderedMap};
    ///
    /// let people = OrderedMap::from([
    ///     ("john", Node::branch([("age", Node::Leaf(27))])),
    ///     ("meg", Node::branch([("age", Node::Leaf(23))])),
    /// ]);
    /// let older = people.put_in(&["john", "age"], Node::Leaf(28)).unwrap();
    /// assert_eq!(
    ///     older,
    ///     OrderedMap::from([
    ///         ("john", Node::branch([("age", Node::Leaf(28))])),
    ///         ("meg", Node::branch([("age", Node::Leaf(23))])),
    ///     ])
    /// );
    /// ```
    pub fn put_in(&self, path: &[K], value: V) -> Result<Self, Error> {
        self.get_and_update_in(path, |_| Update::set(value)).map(|(_, map)| map)
    }

    /// Returns a map with the value at the end of `path` rewritten by `f`.
    ///
    /// # Errors
    ///
    /// Same as [`get_and_update_in`](OrderedMap::get_and_update_in), plus
    /// [`Error::MissingKey`] when the last key has no entry.
    pub fn update_in<F>(&self, path: &[K], f: F) -> Result<Self, Error>
    where
        F: FnOnce(&V) -> V,
    {
        let mut missing = false;
        let (_, map) = self.get_and_update_in(path, |current| {
            if let Some(value) = current {
                Update::set(f(value))
            } else {
                missing = true;
                Update::Remove
            }
        })?;
        if missing {
            let depth = path.len() - 1;
            debug!(depth, "nested update of missing key rejected");
            return Err(Error::MissingKey { depth });
        }
        Ok(map)
    }

    /// Removes the key at the end of `path`, returning its value and the
    /// rebuilt map. A missing last key is not an error.
    ///
    /// # Errors
    ///
    /// Same as [`get_and_update_in`](OrderedMap::get_and_update_in).
    pub fn pop_in(&self, path: &[K]) -> Result<(Option<V>, Self), Error> {
        self.get_and_update_in(path, |_| Update::Remove)
    }

    fn get_and_update_at<F>(&self, path: &[K], depth: usize, f: F) -> Result<(Option<V>, Self), Error>
    where
        F: FnOnce(Option<&V>) -> Update<V>,
    {
        match path {
            [] => Err(Error::EmptyPath),
            [key] => Ok(self.get_and_update(key.clone(), f)),
            [key, rest @ ..] => {
                let mut outcome = Ok(None);
                // On failure the closure's update is irrelevant: the rebuilt map is dropped.
                let (_, map) = self.get_and_update(key.clone(), |child| {
                    let Some(child) = child else {
                        outcome = Err(Error::MissingKey { depth });
                        return Update::Remove;
                    };
                    let Some(child_map) = child.as_map() else {
                        outcome = Err(Error::NotAMap { depth });
                        return Update::Remove;
                    };
                    match child_map.get_and_update_at(rest, depth + 1, f) {
                        Ok((retrieved, rebuilt)) => {
                            outcome = Ok(retrieved);
                            Update::set(V::from_map(rebuilt))
                        }
                        Err(err) => {
                            outcome = Err(err);
                            Update::Remove
                        }
                    }
                });
                outcome.map(|retrieved| (retrieved, map))
            }
        }
    }
}
