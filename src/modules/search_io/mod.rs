//! Search result module
//!
//! This module models the output of a homology search as a three-level
//! hierarchy: a [`QueryResult`] holds [`Hit`]s, a hit holds [`Hsp`]s. Each
//! level keeps the identifiers of its children consistent with its own and
//! carries its metadata over to every container derived from it.

pub mod attrs;
pub mod hsp;
pub mod hit;
pub mod query_result;
pub mod summary;

use thiserror::Error;

use crate::engines::compute::ComputeError;
use crate::modules::seq::SequenceError;

/// Error type for search result operations
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("{field} string is required for {object} creation")]
    MissingId { field: &'static str, object: &'static str },

    #[error("Expected {object} with {field} '{expected}', found '{found}' instead")]
    IdMismatch {
        object: &'static str,
        field: &'static str,
        expected: String,
        found: String,
    },

    #[error("Inconsistent data: {0}")]
    Inconsistent(String),

    #[error("Operation not supported: {0}")]
    UnsupportedOperation(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Hit '{0}' already present in this QueryResult")]
    DuplicateKey(String),

    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(String),

    #[error("Not enough is known to compute {0}")]
    Insufficient(&'static str),

    #[error("Read-only: {0}")]
    ReadOnly(String),

    #[error("Strand should be -1, 0, or 1; not {0}")]
    InvalidStrand(i32),

    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),

    #[error("Compute error: {0}")]
    Compute(#[from] ComputeError),
}

/// Result type for search result operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Convenience re-exports
pub use attrs::{Metadata, StickyAttributes, Value};
pub use hit::Hit;
pub use hsp::{Count, Hsp, HspKind, Slot, Strand};
pub use query_result::{default_hit_key, HitKeyFn, QueryResult};
pub use summary::SummaryFormat;
