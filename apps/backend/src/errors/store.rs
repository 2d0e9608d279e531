//! Store-level outcome signals.
//!
//! Store contracts report failures with explicit variants instead of raised
//! exceptions. The service layer matches on these to decide its own error
//! kind, which keeps callers decoupled from store implementation details.

use thiserror::Error;

/// Failure signal from a persistence store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// The requested identifier does not exist in the store.
    #[error("entity not found")]
    NotFound,

    /// The operation would break referential integrity, e.g. deleting a row
    /// other rows still reference.
    #[error("integrity violation: {0}")]
    IntegrityViolation(String),

    /// The store itself is unreachable or failing.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
