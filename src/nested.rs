//! Values that may hold a nested [`OrderedMap`].
//!
//! Path operations such as [`OrderedMap::get_in`] and
//! [`OrderedMap::put_in`] descend through values implementing [`Nested`].

use crate::OrderedMap;

/// A value type that can carry a nested map keyed by `K`.
///
/// # Examples
///
/// ```
/// use ordmap::{Nested, OrderedMap};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Json {
///     Num(i64),
///     Object(OrderedMap<String, Json>),
/// }
///
/// impl Nested<String> for Json {
///     fn as_map(&self) -> Option<&OrderedMap<String, Json>> {
///         match self {
///             Json::Object(map) => Some(map),
///             Json::Num(_) => None,
///         }
///     }
///
///     fn from_map(map: OrderedMap<String, Json>) -> Self {
///         Json::Object(map)
///     }
/// }
///
/// let inner = OrderedMap::from([("n".to_string(), Json::Num(1))]);
/// let outer = OrderedMap::from([("o".to_string(), Json::Object(inner))]);
/// let path = ["o".to_string(), "n".to_string()];
/// assert_eq!(outer.get_in(&path), Some(&Json::Num(1)));
/// ```
pub trait Nested<K>: Sized {
    /// Returns the nested map, or `None` if this value is not a map.
    fn as_map(&self) -> Option<&OrderedMap<K, Self>>;

    /// Wraps a rebuilt map back into a value.
    fn from_map(map: OrderedMap<K, Self>) -> Self;
}

/// A tree of ordered maps with `T` at the leaves.
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
///
/// let people = people.put_in(&["john", "age"], Node::Leaf(28)).unwrap();
/// assert_eq!(people.get_in(&["john", "age"]), Some(&Node::Leaf(28)));
/// assert_eq!(people.get_in(&["meg", "age"]), Some(&Node::Leaf(23)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node<K, T> {
    Leaf(T),
    Branch(OrderedMap<K, Node<K, T>>),
}

impl<K, T> Node<K, T> {
    /// Builds a branch from a sequence of unique-keyed pairs.
    ///
    /// # Panics
    ///
    /// Panics if `pairs` contains the same key twice.
    #[must_use]
    pub fn branch<const N: usize>(pairs: [(K, Node<K, T>); N]) -> Self
    where
        K: Eq,
    {
        Node::Branch(OrderedMap::from(pairs))
    }

    /// Returns the leaf value, if this node is a leaf.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&T> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// Consumes the node and returns its leaf value, if it is a leaf.
    #[must_use]
    pub fn into_leaf(self) -> Option<T> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }
}

impl<K, T> Nested<K> for Node<K, T> {
    fn as_map(&self) -> Option<&OrderedMap<K, Self>> {
        match self {
            Node::Branch(map) => Some(map),
            Node::Leaf(_) => None,
        }
    }

    fn from_map(map: OrderedMap<K, Self>) -> Self {
        Node::Branch(map)
    }
}

impl<K, T> From<OrderedMap<K, Node<K, T>>> for Node<K, T> {
    fn from(map: OrderedMap<K, Node<K, T>>) -> Self {
        Node::Branch(map)
    }
}
