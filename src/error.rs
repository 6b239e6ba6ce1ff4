//! Errors reported by [`Tree`][crate::Tree] operations.
//!
//! Only removal can fail. Lookups that come up empty (`find`, `replace`,
//! `successor`, `predecessor`) return `None` instead.

use thiserror::Error;

/// The ways a tree operation can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The item asked to be removed is not stored in the tree.
    #[error("item not in tree")]
    NotFound,
}

/// Result of a fallible tree operation.
pub type Result<T> = std::result::Result<T, Error>;
