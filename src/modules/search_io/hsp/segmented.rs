use std::sync::OnceLock;

use crate::engines::compute::alignment::{AlignedRow, Alignment};
use crate::modules::seq::SeqRecord;

/// An ordered series of discontiguous aligned blocks
///
/// Query and hit blocks are kept as parallel lists. Nothing forces the two
/// lists (or the two sides of one block) to agree in length; the derived
/// alignments pair them up to the shorter side.
#[derive(Debug, Clone, Default)]
pub(crate) struct SegmentedAlignment {
    pub(crate) hit: Vec<SeqRecord>,
    pub(crate) query: Vec<SeqRecord>,
    alignment: OnceLock<Vec<Alignment>>,
}

impl SegmentedAlignment {
    pub(crate) fn set_hit(&mut self, records: Vec<SeqRecord>) {
        self.hit = records;
        self.invalidate();
    }

    pub(crate) fn set_query(&mut self, records: Vec<SeqRecord>) {
        self.query = records;
        self.invalidate();
    }

    pub(crate) fn invalidate(&mut self) {
        self.alignment = OnceLock::new();
    }

    /// One alignment per block, cached after the first call
    pub(crate) fn alignment(&self) -> &[Alignment] {
        self.alignment.get_or_init(|| {
            self.query
                .iter()
                .zip(self.hit.iter())
                .map(|(query, hit)| {
                    Alignment::truncated(vec![
                        AlignedRow::new(query.id(), query.as_bytes()),
                        AlignedRow::new(hit.id(), hit.as_bytes()),
                    ])
                })
                .collect()
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.alignment().len()
    }

    pub(crate) fn replace(&mut self, index: usize, query: SeqRecord, hit: SeqRecord) -> bool {
        if index >= self.query.len() || index >= self.hit.len() {
            return false;
        }

        self.query[index] = query;
        self.hit[index] = hit;
        self.invalidate();
        true
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<(SeqRecord, SeqRecord)> {
        if index >= self.query.len() || index >= self.hit.len() {
            return None;
        }

        let removed = (self.query.remove(index), self.hit.remove(index));
        self.invalidate();
        Some(removed)
    }
}
