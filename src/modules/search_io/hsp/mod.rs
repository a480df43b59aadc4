//! High-scoring pairs
//!
//! An HSP is one aligned region between the query and a hit. It comes in two
//! shapes: a contiguous HSP holds a single aligned block, a segmented HSP holds
//! an ordered list of discontiguous blocks. Both share identifiers,
//! coordinates, strand handling and the derived statistics in [`metrics`].

pub mod metrics;
mod contiguous;
mod segmented;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

use parking_lot::Mutex;

use crate::engines::compute::alignment::Alignment;
use crate::engines::compute::{percentage, string_ops};
use crate::modules::search_io::attrs::Metadata;
use crate::modules::search_io::summary::{self, SummaryFormat};
use crate::modules::search_io::{SearchError, SearchResult};
use crate::modules::seq::{Alphabet, SeqRecord};

use contiguous::ContiguousAlignment;
use metrics::Metrics;
use segmented::SegmentedAlignment;

pub use metrics::{Count, Slot, Strand};

/// The two HSP shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HspKind {
    Contiguous,
    Segmented,
}

#[derive(Debug, Clone)]
enum HspBody {
    Contiguous(ContiguousAlignment),
    Segmented(SegmentedAlignment),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Hit,
    Query,
}

impl Side {
    fn seq_name(self) -> &'static str {
        match self {
            Side::Hit => "aligned hit sequence",
            Side::Query => "aligned query sequence",
        }
    }
}

impl HspBody {
    fn records(&self, side: Side) -> &[SeqRecord] {
        match (self, side) {
            (HspBody::Contiguous(body), Side::Hit) => body.hit.as_slice(),
            (HspBody::Contiguous(body), Side::Query) => body.query.as_slice(),
            (HspBody::Segmented(body), Side::Hit) => &body.hit,
            (HspBody::Segmented(body), Side::Query) => &body.query,
        }
    }

    fn records_mut(&mut self, side: Side) -> &mut [SeqRecord] {
        match (self, side) {
            (HspBody::Contiguous(body), Side::Hit) => body.hit.as_mut_slice(),
            (HspBody::Contiguous(body), Side::Query) => body.query.as_mut_slice(),
            (HspBody::Segmented(body), Side::Hit) => &mut body.hit,
            (HspBody::Segmented(body), Side::Query) => &mut body.query,
        }
    }

    fn invalidate(&mut self) {
        match self {
            HspBody::Contiguous(body) => body.invalidate(),
            HspBody::Segmented(body) => body.invalidate(),
        }
    }
}

/// Rename an insufficiency error after the value that was actually requested
fn needed_for(what: &'static str) -> impl Fn(SearchError) -> SearchError {
    move |err| match err {
        SearchError::Insufficient(_) => SearchError::Insufficient(what),
        other => other,
    }
}

/// A high-scoring aligned region between a query and a hit
pub struct Hsp {
    hit_id: String,
    query_id: String,
    alphabet: Alphabet,
    alignment_annotation: BTreeMap<String, String>,
    hit_start: Option<usize>,
    hit_end: Option<usize>,
    query_start: Option<usize>,
    query_end: Option<usize>,
    hit_frame: Option<i32>,
    query_frame: Option<i32>,
    evalue: Option<f64>,
    bitscore: Option<f64>,
    pos_num: Option<usize>,
    metadata: Metadata,
    /// Derived values are filled through `&self`, so they sit behind a lock
    metrics: Mutex<Metrics>,
    body: HspBody,
}

impl Hsp {
    fn with_body(hit_id: String, query_id: String, body: HspBody) -> SearchResult<Self> {
        if hit_id.is_empty() {
            return Err(SearchError::MissingId { field: "Hit ID", object: "HSP" });
        }
        if query_id.is_empty() {
            return Err(SearchError::MissingId { field: "Query ID", object: "HSP" });
        }

        Ok(Self {
            hit_id,
            query_id,
            alphabet: Alphabet::default(),
            alignment_annotation: BTreeMap::new(),
            hit_start: None,
            hit_end: None,
            query_start: None,
            query_end: None,
            hit_frame: None,
            query_frame: None,
            evalue: None,
            bitscore: None,
            pos_num: None,
            metadata: Metadata::new(),
            metrics: Mutex::new(Metrics::default()),
            body,
        })
    }

    /// Create a contiguous HSP without aligned sequences
    pub fn contiguous(hit_id: impl Into<String>, query_id: impl Into<String>) -> SearchResult<Self> {
        Self::with_body(
            hit_id.into(),
            query_id.into(),
            HspBody::Contiguous(ContiguousAlignment::default()),
        )
    }

    /// Create a segmented HSP from `(query, hit)` block pairs
    pub fn segmented<Q, H, I>(
        hit_id: impl Into<String>,
        query_id: impl Into<String>,
        blocks: I,
    ) -> SearchResult<Self>
    where
        Q: Into<SeqRecord>,
        H: Into<SeqRecord>,
        I: IntoIterator<Item = (Q, H)>,
    {
        let mut hsp = Self::with_body(
            hit_id.into(),
            query_id.into(),
            HspBody::Segmented(SegmentedAlignment::default()),
        )?;

        let (query, hit): (Vec<SeqRecord>, Vec<SeqRecord>) = blocks
            .into_iter()
            .map(|(q, h)| (q.into(), h.into()))
            .unzip();
        hsp.set_query_blocks(query)?;
        hsp.set_hit_blocks(hit)?;

        Ok(hsp)
    }

    /// Set the alphabet tag, re-tagging any sequences already held
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        for side in [Side::Hit, Side::Query] {
            for record in self.body.records_mut(side) {
                record.set_alphabet(alphabet);
            }
        }
        self
    }

    /// Attach aligned hit and query sequences to a contiguous HSP
    pub fn with_sequences(
        mut self,
        hit: impl Into<SeqRecord>,
        query: impl Into<SeqRecord>,
    ) -> SearchResult<Self> {
        self.set_hit_seq(hit)?;
        self.set_query_seq(query)?;
        Ok(self)
    }

    /// Wrap a sequence into a record owned by this HSP
    fn prep_seq(&self, record: SeqRecord, side: Side) -> SeqRecord {
        let seq_id = match side {
            Side::Hit => &self.hit_id,
            Side::Query => &self.query_id,
        };
        let mut record = record
            .with_id(seq_id)
            .with_name(side.seq_name())
            .with_description("");

        if record.alphabet() == Alphabet::Generic {
            record.set_alphabet(self.alphabet);
        }
        if !record.is_valid() {
            log::warn!(
                "{} of HSP {}/{} has residues outside the {} alphabet",
                side.seq_name(),
                self.query_id,
                self.hit_id,
                record.alphabet().name()
            );
        }

        record
    }

    pub fn kind(&self) -> HspKind {
        match self.body {
            HspBody::Contiguous(_) => HspKind::Contiguous,
            HspBody::Segmented(_) => HspKind::Segmented,
        }
    }

    pub fn is_contiguous(&self) -> bool {
        self.kind() == HspKind::Contiguous
    }

    pub fn hit_id(&self) -> &str {
        &self.hit_id
    }

    pub fn query_id(&self) -> &str {
        &self.query_id
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Change the hit id, including the id of every hit sequence record
    pub(crate) fn set_hit_id(&mut self, id: &str) {
        self.hit_id = id.to_string();
        for record in self.body.records_mut(Side::Hit) {
            record.set_id(id);
        }
        self.body.invalidate();
    }

    /// Change the query id, including the id of every query sequence record
    pub(crate) fn set_query_id(&mut self, id: &str) {
        self.query_id = id.to_string();
        for record in self.body.records_mut(Side::Query) {
            record.set_id(id);
        }
        self.body.invalidate();
    }

    pub(crate) fn set_hit_description(&mut self, description: &str) {
        for record in self.body.records_mut(Side::Hit) {
            record.set_description(description);
        }
    }

    pub(crate) fn set_query_description(&mut self, description: &str) {
        for record in self.body.records_mut(Side::Query) {
            record.set_description(description);
        }
    }

    /// Per-column annotations, e.g. the `homology` line
    pub fn alignment_annotation(&self) -> &BTreeMap<String, String> {
        &self.alignment_annotation
    }

    pub fn annotate(&mut self, key: &str, value: &str) {
        self.alignment_annotation.insert(key.to_string(), value.to_string());
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    // Coordinates: start <= end regardless of strand

    pub fn hit_start(&self) -> Option<usize> {
        self.hit_start
    }

    pub fn set_hit_start(&mut self, value: usize) {
        self.hit_start = Some(value);
    }

    pub fn hit_end(&self) -> Option<usize> {
        self.hit_end
    }

    pub fn set_hit_end(&mut self, value: usize) {
        self.hit_end = Some(value);
    }

    pub fn query_start(&self) -> Option<usize> {
        self.query_start
    }

    pub fn set_query_start(&mut self, value: usize) {
        self.query_start = Some(value);
    }

    pub fn query_end(&self) -> Option<usize> {
        self.query_end
    }

    pub fn set_query_end(&mut self, value: usize) {
        self.query_end = Some(value);
    }

    /// Hit residues covered by the HSP, gaps excluded
    pub fn hit_span(&self) -> SearchResult<usize> {
        span(self.hit_start, self.hit_end, "hit span")
    }

    /// Query residues covered by the HSP, gaps excluded
    pub fn query_span(&self) -> SearchResult<usize> {
        span(self.query_start, self.query_end, "query span")
    }

    pub fn hit_frame(&self) -> Option<i32> {
        self.hit_frame
    }

    pub fn set_hit_frame(&mut self, frame: i32) {
        self.hit_frame = Some(frame);
    }

    pub fn query_frame(&self) -> Option<i32> {
        self.query_frame
    }

    pub fn set_query_frame(&mut self, frame: i32) {
        self.query_frame = Some(frame);
    }

    pub fn evalue(&self) -> Option<f64> {
        self.evalue
    }

    pub fn set_evalue(&mut self, evalue: f64) {
        self.evalue = Some(evalue);
    }

    pub fn bitscore(&self) -> Option<f64> {
        self.bitscore
    }

    pub fn set_bitscore(&mut self, bitscore: f64) {
        self.bitscore = Some(bitscore);
    }

    /// Number of positive-scoring columns
    pub fn pos_num(&self) -> Option<usize> {
        self.pos_num
    }

    pub fn set_pos_num(&mut self, value: usize) {
        self.pos_num = Some(value);
    }

    /// Read a derived value, computing and caching it if the slot is unset
    fn derive<T, S, C>(&self, slot: S, compute: C) -> SearchResult<T>
    where
        T: Copy,
        S: Fn(&mut Metrics) -> &mut Slot<T>,
        C: FnOnce() -> SearchResult<T>,
    {
        let cached = slot(&mut *self.metrics.lock()).value();
        if let Some(value) = cached {
            return Ok(value);
        }

        // the lock is released while computing, inputs may need it
        let value = compute()?;
        Ok(slot(&mut *self.metrics.lock()).fill(value))
    }

    fn count(&self, which: Count) -> SearchResult<usize> {
        self.derive(
            |m| m.count(which),
            || {
                let value = self.metrics.lock().solve(which)?;
                log::debug!("derived {} = {} for HSP {}/{}", which.describe(), value, self.query_id, self.hit_id);
                Ok(value)
            },
        )
    }

    /// State of one of the four related counts
    pub fn count_state(&self, which: Count) -> Slot<usize> {
        self.metrics.lock().count_state(which)
    }

    /// Alignment length, derived from identities, mismatches and gaps if not set
    pub fn ali_len(&self) -> SearchResult<usize> {
        self.count(Count::AliLen)
    }

    pub fn set_ali_len(&mut self, value: usize) {
        *self.metrics.get_mut().count(Count::AliLen) = Slot::Parsed(value);
    }

    pub fn ident_num(&self) -> SearchResult<usize> {
        self.count(Count::IdentNum)
    }

    pub fn set_ident_num(&mut self, value: usize) {
        *self.metrics.get_mut().count(Count::IdentNum) = Slot::Parsed(value);
    }

    pub fn mismatch_num(&self) -> SearchResult<usize> {
        self.count(Count::MismatchNum)
    }

    pub fn set_mismatch_num(&mut self, value: usize) {
        *self.metrics.get_mut().count(Count::MismatchNum) = Slot::Parsed(value);
    }

    pub fn gap_num(&self) -> SearchResult<usize> {
        self.count(Count::GapNum)
    }

    pub fn set_gap_num(&mut self, value: usize) {
        *self.metrics.get_mut().count(Count::GapNum) = Slot::Parsed(value);
    }

    /// Gap openings in the aligned query and hit sequences combined
    pub fn gapopen_num(&self) -> SearchResult<usize> {
        self.derive(
            |m| &mut m.gapopen_num,
            || {
                let query = self.body.records(Side::Query);
                let hit = self.body.records(Side::Hit);
                let complete = match &self.body {
                    HspBody::Contiguous(_) => !query.is_empty() && !hit.is_empty(),
                    HspBody::Segmented(_) => !query.is_empty() || !hit.is_empty(),
                };
                if !complete {
                    return Err(SearchError::Insufficient("gap openings"));
                }

                Ok(query
                    .iter()
                    .chain(hit.iter())
                    .map(|record| string_ops::count_gap_openings(record.as_bytes()))
                    .sum())
            },
        )
    }

    pub fn set_gapopen_num(&mut self, value: usize) {
        self.metrics.get_mut().gapopen_num = Slot::Parsed(value);
    }

    /// Identities as a percentage of the alignment length
    pub fn ident_pct(&self) -> SearchResult<f64> {
        self.derive(
            |m| &mut m.ident_pct,
            || {
                let ident = self.ident_num().map_err(needed_for("identity percentage"))?;
                let ali_len = self.ali_len().map_err(needed_for("identity percentage"))?;
                Ok(percentage(ident, ali_len)?)
            },
        )
    }

    pub fn set_ident_pct(&mut self, value: f64) {
        self.metrics.get_mut().ident_pct = Slot::Parsed(value);
    }

    /// Positives as a percentage of the alignment length
    pub fn pos_pct(&self) -> SearchResult<f64> {
        self.derive(
            |m| &mut m.pos_pct,
            || {
                let pos = self.pos_num.ok_or(SearchError::Insufficient("positive percentage"))?;
                let ali_len = self.ali_len().map_err(needed_for("positive percentage"))?;
                Ok(percentage(pos, ali_len)?)
            },
        )
    }

    pub fn set_pos_pct(&mut self, value: f64) {
        self.metrics.get_mut().pos_pct = Slot::Parsed(value);
    }

    /// Gaps as a percentage of the alignment length
    pub fn gap_pct(&self) -> SearchResult<f64> {
        self.derive(
            |m| &mut m.gap_pct,
            || {
                let gaps = self.gap_num().map_err(needed_for("gap percentage"))?;
                let ali_len = self.ali_len().map_err(needed_for("gap percentage"))?;
                Ok(percentage(gaps, ali_len)?)
            },
        )
    }

    pub fn set_gap_pct(&mut self, value: f64) {
        self.metrics.get_mut().gap_pct = Slot::Parsed(value);
    }

    /// Hit strand, derived from the hit frame if not set
    pub fn hit_strand(&self) -> SearchResult<Strand> {
        self.derive(
            |m| &mut m.hit_strand,
            || {
                self.hit_frame
                    .map(Strand::from_frame)
                    .ok_or(SearchError::Insufficient("hit strand"))
            },
        )
    }

    pub fn set_hit_strand(&mut self, strand: Strand) {
        self.metrics.get_mut().hit_strand = Slot::Parsed(strand);
    }

    /// Query strand, derived from the query frame if not set
    pub fn query_strand(&self) -> SearchResult<Strand> {
        self.derive(
            |m| &mut m.query_strand,
            || {
                self.query_frame
                    .map(Strand::from_frame)
                    .ok_or(SearchError::Insufficient("query strand"))
            },
        )
    }

    pub fn set_query_strand(&mut self, strand: Strand) {
        self.metrics.get_mut().query_strand = Slot::Parsed(strand);
    }

    /// Number of alignment columns (contiguous) or aligned blocks (segmented)
    pub fn len(&self) -> SearchResult<usize> {
        match &self.body {
            HspBody::Contiguous(body) => body.len(),
            HspBody::Segmented(body) => Ok(body.len()),
        }
    }

    /// Check whether the HSP has nothing aligned
    pub fn is_empty(&self) -> bool {
        self.len().map_or(true, |len| len == 0)
    }

    /// The aligned hit sequence of a contiguous HSP
    pub fn hit(&self) -> Option<&SeqRecord> {
        match &self.body {
            HspBody::Contiguous(body) => body.hit.as_ref(),
            HspBody::Segmented(_) => None,
        }
    }

    /// The aligned query sequence of a contiguous HSP
    pub fn query(&self) -> Option<&SeqRecord> {
        match &self.body {
            HspBody::Contiguous(body) => body.query.as_ref(),
            HspBody::Segmented(_) => None,
        }
    }

    /// Every aligned hit record, in block order
    pub fn hit_records(&self) -> &[SeqRecord] {
        self.body.records(Side::Hit)
    }

    /// Every aligned query record, in block order
    pub fn query_records(&self) -> &[SeqRecord] {
        self.body.records(Side::Query)
    }

    pub fn set_hit_seq(&mut self, seq: impl Into<SeqRecord>) -> SearchResult<()> {
        let record = self.prep_seq(seq.into(), Side::Hit);
        match &mut self.body {
            HspBody::Contiguous(body) => {
                body.set_hit(record);
                Ok(())
            }
            HspBody::Segmented(_) => Err(SearchError::UnsupportedOperation(
                "segmented HSPs take hit sequences as blocks".to_string(),
            )),
        }
    }

    pub fn set_query_seq(&mut self, seq: impl Into<SeqRecord>) -> SearchResult<()> {
        let record = self.prep_seq(seq.into(), Side::Query);
        match &mut self.body {
            HspBody::Contiguous(body) => {
                body.set_query(record);
                Ok(())
            }
            HspBody::Segmented(_) => Err(SearchError::UnsupportedOperation(
                "segmented HSPs take query sequences as blocks".to_string(),
            )),
        }
    }

    pub fn set_hit_blocks<S: Into<SeqRecord>>(&mut self, blocks: Vec<S>) -> SearchResult<()> {
        let records = blocks
            .into_iter()
            .map(|seq| self.prep_seq(seq.into(), Side::Hit))
            .collect();
        match &mut self.body {
            HspBody::Segmented(body) => {
                body.set_hit(records);
                Ok(())
            }
            HspBody::Contiguous(_) => Err(SearchError::UnsupportedOperation(
                "contiguous HSPs hold a single hit sequence".to_string(),
            )),
        }
    }

    pub fn set_query_blocks<S: Into<SeqRecord>>(&mut self, blocks: Vec<S>) -> SearchResult<()> {
        let records = blocks
            .into_iter()
            .map(|seq| self.prep_seq(seq.into(), Side::Query))
            .collect();
        match &mut self.body {
            HspBody::Segmented(body) => {
                body.set_query(records);
                Ok(())
            }
            HspBody::Contiguous(_) => Err(SearchError::UnsupportedOperation(
                "contiguous HSPs hold a single query sequence".to_string(),
            )),
        }
    }

    /// The query/hit pairwise alignment of a contiguous HSP, built once
    pub fn alignment(&self) -> SearchResult<&Alignment> {
        match &self.body {
            HspBody::Contiguous(body) => body.alignment(),
            HspBody::Segmented(_) => Err(SearchError::UnsupportedOperation(
                "segmented HSPs have one alignment per block".to_string(),
            )),
        }
    }

    /// One alignment per block of a segmented HSP, built once
    pub fn block_alignments(&self) -> SearchResult<&[Alignment]> {
        match &self.body {
            HspBody::Segmented(body) => Ok(body.alignment()),
            HspBody::Contiguous(_) => Err(SearchError::UnsupportedOperation(
                "contiguous HSPs do not support iteration".to_string(),
            )),
        }
    }

    /// A new contiguous HSP over a range of alignment columns
    ///
    /// Annotations are sliced along with the sequences. Coordinates and
    /// statistics are not carried over since they no longer apply.
    pub fn slice(&self, columns: Range<usize>) -> SearchResult<Hsp> {
        let body = match &self.body {
            HspBody::Contiguous(body) => body,
            HspBody::Segmented(_) => {
                return Err(SearchError::UnsupportedOperation(
                    "segmented HSPs cannot be sliced by column".to_string(),
                ))
            }
        };

        let (query, hit) = body.slice(columns.clone())?;
        let width = query.len();
        let mut sliced = Hsp::contiguous(self.hit_id.as_str(), self.query_id.as_str())?
            .with_alphabet(self.alphabet)
            .with_sequences(hit, query)?;

        for (key, value) in &self.alignment_annotation {
            let part = value.get(columns.clone()).filter(|part| part.len() == width);
            match part {
                Some(part) => sliced.annotate(key, part),
                None => {
                    return Err(SearchError::Inconsistent(format!(
                        "annotation '{}' does not cover columns {}..{}",
                        key, columns.start, columns.end
                    )))
                }
            }
        }

        Ok(sliced)
    }

    /// A new contiguous HSP holding a single alignment column
    pub fn column(&self, index: usize) -> SearchResult<Hsp> {
        let end = index
            .checked_add(1)
            .ok_or_else(|| SearchError::IndexOutOfBounds(format!("no column at position {}", index)))?;
        self.slice(index..end)
    }

    /// Replace one block of a segmented HSP
    pub fn replace_block(
        &mut self,
        index: usize,
        query: impl Into<SeqRecord>,
        hit: impl Into<SeqRecord>,
    ) -> SearchResult<()> {
        let query = self.prep_seq(query.into(), Side::Query);
        let hit = self.prep_seq(hit.into(), Side::Hit);

        match &mut self.body {
            HspBody::Contiguous(_) => Err(SearchError::ReadOnly("contiguous HSPs are read-only".to_string())),
            HspBody::Segmented(body) => {
                if body.replace(index, query, hit) {
                    Ok(())
                } else {
                    Err(SearchError::IndexOutOfBounds(format!("no block at position {}", index)))
                }
            }
        }
    }

    /// Remove one block of a segmented HSP, returning its `(query, hit)` pair
    pub fn remove_block(&mut self, index: usize) -> SearchResult<(SeqRecord, SeqRecord)> {
        match &mut self.body {
            HspBody::Contiguous(_) => Err(SearchError::ReadOnly("contiguous HSPs are read-only".to_string())),
            HspBody::Segmented(body) => body
                .remove(index)
                .ok_or_else(|| SearchError::IndexOutOfBounds(format!("no block at position {}", index))),
        }
    }

    /// Render the diagnostic summary with explicit formatting options
    pub fn summary(&self, format: &SummaryFormat) -> String {
        summary::hsp_summary(self, format)
    }
}

fn span(start: Option<usize>, end: Option<usize>, what: &'static str) -> SearchResult<usize> {
    let (start, end) = start.zip(end).ok_or(SearchError::Insufficient(what))?;

    end.checked_sub(start).ok_or_else(|| {
        SearchError::Inconsistent(format!("{} end {} lies before start {}", what, end, start))
    })
}

impl Clone for Hsp {
    fn clone(&self) -> Self {
        Self {
            hit_id: self.hit_id.clone(),
            query_id: self.query_id.clone(),
            alphabet: self.alphabet,
            alignment_annotation: self.alignment_annotation.clone(),
            hit_start: self.hit_start,
            hit_end: self.hit_end,
            query_start: self.query_start,
            query_end: self.query_end,
            hit_frame: self.hit_frame,
            query_frame: self.query_frame,
            evalue: self.evalue,
            bitscore: self.bitscore,
            pos_num: self.pos_num,
            metadata: self.metadata.clone(),
            metrics: Mutex::new(self.metrics.lock().clone()),
            body: self.body.clone(),
        }
    }
}

impl fmt::Debug for Hsp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.body {
            HspBody::Contiguous(body) => {
                write!(f, "ContiguousHSP(hit_id={:?}, query_id={:?}", self.hit_id, self.query_id)?;
                if let Ok(len) = body.len() {
                    write!(f, ", {}-column alignment", len)?;
                }
                write!(f, ")")
            }
            HspBody::Segmented(body) => write!(
                f,
                "SegmentedHSP(hit_id={:?}, query_id={:?}, {} blocks)",
                self.hit_id,
                self.query_id,
                body.len()
            ),
        }
    }
}

impl fmt::Display for Hsp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.summary(&SummaryFormat::default()))
    }
}
