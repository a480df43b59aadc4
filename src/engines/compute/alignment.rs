//! Pairwise alignment rows
//!
//! This module provides the gapped-row alignment type that HSPs pair their
//! query and hit sequences into.

use super::{ComputeError, ComputeResult};
use std::fmt;

/// One gapped row of an alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRow {
    /// Identifier of the sequence in this row
    pub id: String,
    /// Aligned residues, gaps included
    pub residues: Vec<u8>,
}

impl AlignedRow {
    /// Create a new aligned row
    pub fn new(id: &str, residues: &[u8]) -> Self {
        Self {
            id: id.to_string(),
            residues: residues.to_vec(),
        }
    }
}

/// Represents an alignment of equally long gapped rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    rows: Vec<AlignedRow>,
    length: usize,
}

impl Alignment {
    /// Create an alignment, requiring every row to have the same length
    pub fn new(rows: Vec<AlignedRow>) -> ComputeResult<Self> {
        let length = rows.first().map(|row| row.residues.len()).unwrap_or(0);

        if let Some(bad) = rows.iter().find(|row| row.residues.len() != length) {
            return Err(ComputeError::InvalidInput(format!(
                "row '{}' has {} columns, expected {}",
                bad.id,
                bad.residues.len(),
                length
            )));
        }

        Ok(Self { rows, length })
    }

    /// Create an alignment, cutting every row down to the shortest one
    pub fn truncated(mut rows: Vec<AlignedRow>) -> Self {
        let length = rows.iter().map(|row| row.residues.len()).min().unwrap_or(0);

        for row in rows.iter_mut() {
            row.residues.truncate(length);
        }

        Self { rows, length }
    }

    /// Number of alignment columns
    pub fn len(&self) -> usize {
        self.length
    }

    /// Check if the alignment has no columns
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// All rows, in insertion order
    pub fn rows(&self) -> &[AlignedRow] {
        &self.rows
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Alignment with {} rows and {} columns", self.rows.len(), self.length)?;

        for row in &self.rows {
            writeln!(f, "{} {}", String::from_utf8_lossy(&row.residues), row.id)?;
        }

        Ok(())
    }
}
