//! Error types for the recoverable failure paths.
//!
//! Lookups and the pure mutators never fail: a missing key is one of their
//! defined outcomes. Errors only arise when building a map from an
//! untrusted pair sequence or when a nested path cannot be followed.

use thiserror::Error;

/// Errors returned by [`OrderedMap`](crate::OrderedMap) operations.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A raw pair sequence contained the same key twice.
    #[error("duplicate key in pair sequence at index {duplicate} (first seen at index {first})")]
    DuplicateKey { first: usize, duplicate: usize },

    /// A path operation was given no keys.
    #[error("path must contain at least one key")]
    EmptyPath,

    /// An intermediate key along a path has no entry.
    #[error("no entry for path segment {depth}")]
    MissingKey { depth: usize },

    /// An intermediate value along a path does not hold a nested map.
    #[error("value at path segment {depth} is not a map")]
    NotAMap { depth: usize },
}

impl Error {
    /// Returns `true` if the error came from a malformed pair sequence.
    #[must_use]
    pub const fn is_duplicate_key(&self) -> bool {
        matches!(self, Error::DuplicateKey { .. })
    }

    /// Returns `true` if the error came from following a path.
    #[must_use]
    pub const fn is_path_error(&self) -> bool {
        matches!(self, Error::EmptyPath | Error::MissingKey { .. } | Error::NotAMap { .. })
    }

    /// Returns the path segment the error refers to, if any.
    #[must_use]
    pub const fn depth(&self) -> Option<usize> {
        match self {
            Error::MissingKey { depth } | Error::NotAMap { depth } => Some(*depth),
            Error::DuplicateKey { .. } | Error::EmptyPath => None,
        }
    }
}
