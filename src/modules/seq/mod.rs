//! Sequence module
//!
//! This module provides the sequence record and alphabet tag that search
//! results use for their aligned query and hit sequences.

pub mod sequence;
pub mod alphabet;

/// Convenience re-exports
pub use sequence::{SeqRecord, SequenceError, SequenceResult};
pub use alphabet::Alphabet;
