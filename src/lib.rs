//! Insertion-ordered associative containers for Rust.
//!
//! This crate provides [`OrderedMap`], a map that keeps its pairs in the
//! order keys were first inserted. Updating an existing key keeps its
//! position, so iteration, equality and serialization all see a stable,
//! caller-controlled order.
//!
//! - [`fetch`](OrderedMap::fetch) - Look up a key, telling "missing" apart from any stored value
//! - [`put`](OrderedMap::put) / [`delete`](OrderedMap::delete) - Derive a new map, leaving the original intact
//! - [`get_and_update`](OrderedMap::get_and_update) - Read and rewrite a key in one step
//! - [`put_in`](OrderedMap::put_in) - Rewrite a value several maps deep
//!
//! # Example
//!
//! ```
//! use ordmap::OrderedMap;
//!
//! let config = OrderedMap::new()
//!     .put("host", "localhost")
//!     .put("port", "8080");
//!
//! // Changing a key does not move it.
//! let config = config.put("host", "0.0.0.0");
//! assert_eq!(config.keys().copied().collect::<Vec<_>>(), ["host", "port"]);
//!
//! // Defaults from one map, overrides from another.
//! let overrides = OrderedMap::from([("port", "9090"), ("tls", "on")]);
//! let merged = config.merge(&overrides);
//! assert_eq!(merged.as_slice(), &[("host", "0.0.0.0"), ("port", "9090"), ("tls", "on")]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`; the default `std` feature adds
//!   conversion from `HashMap`
//! - **Persistent-style API** - Writes return a new map and never touch the receiver
//! - **Raw pair sequences accepted** - [`PairSource`] lets `Vec<(K, V)>` and arrays stand in for a map
//! - **`serde`** (optional) - Serializes as a map in insertion order
//!
//! # Implementation
//!
//! Pairs live in one contiguous vector and lookups are linear scans, so keys
//! need only [`Eq`]. This trades lookup speed for simplicity and is aimed at
//! small maps where order is part of the data.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod error;
mod nested;
mod pair_source;
mod raw;
#[cfg(feature = "serde")]
mod serde_impls;
mod update;

pub mod ordered_map;

pub use error::Error;
pub use nested::{Nested, Node};
pub use ordered_map::OrderedMap;
pub use pair_source::PairSource;
pub use update::Update;
