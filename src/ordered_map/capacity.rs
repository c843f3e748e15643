use super::OrderedMap;
use crate::raw::RawPairs;

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map with capacity for at least `capacity` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<i32, i32> = OrderedMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap {
            raw: RawPairs::with_capacity(capacity),
        }
    }

    /// Returns the number of pairs the map can hold without reallocating.
    ///
    /// Every pure operation clones into a fresh vector, so this mostly
    /// matters for maps built through [`Extend`] or [`with_capacity`].
    ///
    /// [`with_capacity`]: OrderedMap::with_capacity
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
