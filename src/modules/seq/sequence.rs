//! Sequence record type
//!
//! This module provides the annotated sequence record that search results
//! wrap their aligned query and hit sequences into.

use std::fmt;
use std::ops::{Index, Range};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::alphabet::Alphabet;

/// Error type for sequence operations
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(String),
}

/// Result type for sequence operations
pub type SequenceResult<T> = Result<T, SequenceError>;

/// A sequence of residues with identifying metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeqRecord {
    /// The residues, gaps included for aligned sequences
    seq: Vec<u8>,
    /// The alphabet used for this sequence
    alphabet: Alphabet,
    /// Identifier for the sequence
    id: String,
    /// Name of the sequence
    name: String,
    /// Description of the sequence
    description: String,
}

impl SeqRecord {
    /// Create a new record from raw residues
    pub fn new(data: &[u8]) -> Self {
        Self {
            seq: data.to_vec(),
            ..Self::default()
        }
    }

    /// Set the alphabet
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the sequence identifier
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Set the sequence name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the sequence description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Get the sequence length
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Get the sequence as bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.seq
    }

    /// Get the sequence as a string
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.seq).to_string()
    }

    /// Get a subsequence, keeping the record's metadata
    pub fn subsequence(&self, start: usize, end: usize) -> SequenceResult<Self> {
        if start > end || end > self.len() {
            return Err(SequenceError::IndexOutOfBounds(
                format!("Invalid range {}..{} for sequence of length {}", start, end, self.len())
            ));
        }

        Ok(Self {
            seq: self.seq[start..end].to_vec(),
            alphabet: self.alphabet,
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        })
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn set_alphabet(&mut self, alphabet: Alphabet) {
        self.alphabet = alphabet;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    /// Check the residues against the record's alphabet
    pub fn is_valid(&self) -> bool {
        self.alphabet.is_valid_sequence(&self.seq)
    }
}

impl fmt::Display for SeqRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, ">{}", self.id)?;
        if !self.description.is_empty() {
            write!(f, " {}", self.description)?;
        }
        writeln!(f)?;

        // Format the sequence in lines of 60 characters
        for chunk in self.seq.chunks(60) {
            writeln!(f, "{}", String::from_utf8_lossy(chunk))?;
        }

        Ok(())
    }
}

impl Index<usize> for SeqRecord {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.seq[index]
    }
}

impl Index<Range<usize>> for SeqRecord {
    type Output = [u8];

    fn index(&self, range: Range<usize>) -> &Self::Output {
        &self.seq[range]
    }
}

impl From<&str> for SeqRecord {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<String> for SeqRecord {
    fn from(s: String) -> Self {
        Self {
            seq: s.into_bytes(),
            ..Self::default()
        }
    }
}

impl From<Vec<u8>> for SeqRecord {
    fn from(seq: Vec<u8>) -> Self {
        Self {
            seq,
            ..Self::default()
        }
    }
}
