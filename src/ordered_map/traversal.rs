//! The traversal contract consumed by generic folds and by encoders.
//!
//! Everything here is read-only. Std iterator adapters cover `map` and
//! `filter`; these methods add the counted, membership, halting-fold and
//! random-access shapes.

use core::ops::ControlFlow;

use super::OrderedMap;

impl<K, V> OrderedMap<K, V> {
    /// Returns the number of pairs. Same as [`len`](OrderedMap::len).
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the exact pair `(key, value)` is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1)]);
    /// assert!(map.contains_pair(&"a", &1));
    /// assert!(!map.contains_pair(&"a", &2));
    /// assert!(!map.contains_pair(&"b", &1));
    /// ```
    #[must_use]
    pub fn contains_pair(&self, key: &K, value: &V) -> bool
    where
        K: Eq,
        V: PartialEq,
    {
        self.fetch(key).is_some_and(|stored| stored == value)
    }

    /// Folds over the pairs in order, stopping as soon as `step` breaks.
    ///
    /// Returns `Continue(acc)` after visiting every pair, or `Break(acc)`
    /// with the value `step` broke with. Pairs after the break are never
    /// visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::ops::ControlFlow;
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    ///
    /// let sum = map.reduce(0, |acc, (_, v)| ControlFlow::Continue(acc + v));
    /// assert_eq!(sum, ControlFlow::Continue(6));
    ///
    /// // Take keys up to and including the first value of at least 2.
    /// let taken = map.reduce(Vec::new(), |mut acc, (k, v)| {
    ///     acc.push(*k);
    ///     if *v >= 2 { ControlFlow::Break(acc) } else { ControlFlow::Continue(acc) }
    /// });
    /// assert_eq!(taken, ControlFlow::Break(vec!["a", "b"]));
    /// ```
    pub fn reduce<A, F>(&self, init: A, mut step: F) -> ControlFlow<A, A>
    where
        F: FnMut(A, (&K, &V)) -> ControlFlow<A, A>,
    {
        let mut acc = init;
        for pair in self {
            acc = match step(acc, pair) {
                ControlFlow::Continue(next) => next,
                ControlFlow::Break(done) => return ControlFlow::Break(done),
            };
        }
        ControlFlow::Continue(acc)
    }

    /// Returns up to `len` pairs starting at position `start`.
    ///
    /// The range is clamped to the map, so an out-of-range `start` yields an
    /// empty slice rather than panicking.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    /// assert_eq!(map.slice(1, 5), &[(2, 'b'), (3, 'c')]);
    /// assert!(map.slice(9, 1).is_empty());
    /// ```
    #[must_use]
    pub fn slice(&self, start: usize, len: usize) -> &[(K, V)] {
        let pairs = self.as_slice();
        let start = start.min(pairs.len());
        let end = start.saturating_add(len).min(pairs.len());
        &pairs[start..end]
    }
}
