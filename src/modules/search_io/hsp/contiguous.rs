use std::ops::Range;
use std::sync::OnceLock;

use crate::engines::compute::alignment::{AlignedRow, Alignment};
use crate::modules::search_io::{SearchError, SearchResult};
use crate::modules::seq::SeqRecord;

/// A single unbroken aligned block
#[derive(Debug, Clone, Default)]
pub(crate) struct ContiguousAlignment {
    pub(crate) hit: Option<SeqRecord>,
    pub(crate) query: Option<SeqRecord>,
    alignment: OnceLock<Alignment>,
}

impl ContiguousAlignment {
    pub(crate) fn set_hit(&mut self, record: SeqRecord) {
        self.hit = Some(record);
        self.invalidate();
    }

    pub(crate) fn set_query(&mut self, record: SeqRecord) {
        self.query = Some(record);
        self.invalidate();
    }

    pub(crate) fn invalidate(&mut self) {
        self.alignment = OnceLock::new();
    }

    fn pair(&self) -> SearchResult<(&SeqRecord, &SeqRecord)> {
        match (&self.query, &self.hit) {
            (Some(query), Some(hit)) => Ok((query, hit)),
            _ => Err(SearchError::UnsupportedOperation(
                "contiguous HSPs without an alignment have no columns".to_string(),
            )),
        }
    }

    /// Number of alignment columns shared by query and hit
    pub(crate) fn len(&self) -> SearchResult<usize> {
        let (query, hit) = self.pair()?;

        if query.len() != hit.len() {
            return Err(SearchError::Inconsistent(format!(
                "aligned query has {} columns but aligned hit has {}",
                query.len(),
                hit.len()
            )));
        }

        Ok(query.len())
    }

    pub(crate) fn alignment(&self) -> SearchResult<&Alignment> {
        if let Some(alignment) = self.alignment.get() {
            return Ok(alignment);
        }

        let (query, hit) = self.pair()?;
        let alignment = Alignment::new(vec![
            AlignedRow::new(query.id(), query.as_bytes()),
            AlignedRow::new(hit.id(), hit.as_bytes()),
        ])?;

        Ok(self.alignment.get_or_init(|| alignment))
    }

    /// Slice the aligned query and hit over the same columns
    pub(crate) fn slice(&self, columns: Range<usize>) -> SearchResult<(SeqRecord, SeqRecord)> {
        self.len()?;
        let (query, hit) = self.pair()?;

        Ok((
            query.subsequence(columns.start, columns.end)?,
            hit.subsequence(columns.start, columns.end)?,
        ))
    }
}
