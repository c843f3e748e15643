/// The outcome an updater passed to
/// [`get_and_update`](crate::OrderedMap::get_and_update) decides on.
///
/// # Examples
///
/// ```
/// use ordmap::{OrderedMap, Update};
///
/// let map = OrderedMap::from([("a", 1)]);
///
/// // Report the old value and store a new one.
/// let (old, map) = map.get_and_update("a", |current| Update::Put(current.copied(), 10));
/// assert_eq!(old, Some(1));
/// assert_eq!(map.get(&"a"), Some(&10));
///
/// // Drop the key entirely.
/// let (old, map) = map.get_and_update("a", |_| Update::Remove);
/// assert_eq!(old, Some(10));
/// assert!(map.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Update<V> {
    /// Report the first value back to the caller and store the second under the key.
    ///
    /// An absent key is appended; a present key keeps its position.
    Put(Option<V>, V),
    /// Delete the key. The caller receives the value that was stored, if any.
    Remove,
}

impl<V> Update<V> {
    /// Stores `value` and reports nothing back.
    #[must_use]
    pub const fn set(value: V) -> Self {
        Update::Put(None, value)
    }

    /// Returns `true` for [`Update::Remove`].
    #[must_use]
    pub const fn is_remove(&self) -> bool {
        matches!(self, Update::Remove)
    }
}
