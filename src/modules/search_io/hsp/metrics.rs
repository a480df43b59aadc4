//! Derived HSP statistics
//!
//! Alignment length, identities, mismatches and gaps are tied together by
//! `ali_len = ident_num + mismatch_num + gap_num`, so any one of them can be
//! derived once the other three are known. Parsed values always win over
//! derived ones: a derivation only fills a slot that is still unset, and an
//! explicit write replaces whatever the slot held.

use serde::{Deserialize, Serialize};

use crate::modules::search_io::{SearchError, SearchResult};

/// State of one derivable value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<T> {
    Unset,
    /// Set explicitly, usually by a parser
    Parsed(T),
    /// Derived from other values and cached
    Computed(T),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Unset
    }
}

impl<T: Copy> Slot<T> {
    pub fn value(&self) -> Option<T> {
        match *self {
            Slot::Unset => None,
            Slot::Parsed(v) | Slot::Computed(v) => Some(v),
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Slot::Parsed(_))
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Slot::Computed(_))
    }

    /// Cache a derived value unless the slot was filled in the meantime
    pub(crate) fn fill(&mut self, value: T) -> T {
        match *self {
            Slot::Unset => {
                *self = Slot::Computed(value);
                value
            }
            Slot::Parsed(v) | Slot::Computed(v) => v,
        }
    }
}

/// The four counts related by the alignment length identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Count {
    AliLen,
    IdentNum,
    MismatchNum,
    GapNum,
}

impl Count {
    pub const ALL: [Count; 4] = [Count::AliLen, Count::IdentNum, Count::MismatchNum, Count::GapNum];

    /// What the count measures, for error messages
    pub fn describe(&self) -> &'static str {
        match self {
            Count::AliLen => "alignment length",
            Count::IdentNum => "identities",
            Count::MismatchNum => "mismatches",
            Count::GapNum => "gaps",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Strand of an aligned region, following the -1/0/1 convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    Minus,
    Zero,
    Plus,
}

impl Strand {
    /// Derive the strand from a signed reading frame
    pub fn from_frame(frame: i32) -> Self {
        match frame.signum() {
            -1 => Strand::Minus,
            1 => Strand::Plus,
            _ => Strand::Zero,
        }
    }

    pub fn value(&self) -> i8 {
        match self {
            Strand::Minus => -1,
            Strand::Zero => 0,
            Strand::Plus => 1,
        }
    }
}

impl TryFrom<i32> for Strand {
    type Error = SearchError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Strand::Minus),
            0 => Ok(Strand::Zero),
            1 => Ok(Strand::Plus),
            other => Err(SearchError::InvalidStrand(other)),
        }
    }
}

/// Every derivable value of an HSP
#[derive(Debug, Clone, Default)]
pub(crate) struct Metrics {
    counts: [Slot<usize>; 4],
    pub(crate) gapopen_num: Slot<usize>,
    pub(crate) ident_pct: Slot<f64>,
    pub(crate) pos_pct: Slot<f64>,
    pub(crate) gap_pct: Slot<f64>,
    pub(crate) hit_strand: Slot<Strand>,
    pub(crate) query_strand: Slot<Strand>,
}

impl Metrics {
    pub(crate) fn count(&mut self, which: Count) -> &mut Slot<usize> {
        &mut self.counts[which.slot()]
    }

    pub(crate) fn count_state(&self, which: Count) -> Slot<usize> {
        self.counts[which.slot()]
    }

    /// Solve the alignment length identity for `which`
    ///
    /// Only values already present in their slots take part; a missing input
    /// is not derived recursively.
    pub(crate) fn solve(&self, which: Count) -> SearchResult<usize> {
        let known = |other: Count| {
            self.counts[other.slot()]
                .value()
                .ok_or(SearchError::Insufficient(which.describe()))
        };

        let inputs = Count::ALL
            .iter()
            .filter(|&&other| other != which)
            .map(|&other| known(other))
            .collect::<SearchResult<Vec<usize>>>()?;

        match which {
            Count::AliLen => Ok(inputs.iter().sum()),
            _ => {
                // inputs[0] is the alignment length, the rest are subtracted
                inputs[1..]
                    .iter()
                    .try_fold(inputs[0], |rest, &part| rest.checked_sub(part))
                    .ok_or_else(|| SearchError::Inconsistent(format!(
                        "known counts exceed the alignment length while computing {}",
                        which.describe()
                    )))
            }
        }
    }
}
