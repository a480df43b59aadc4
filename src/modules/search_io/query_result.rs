//! QueryResult container
//!
//! A query result holds every hit found for one query sequence. Hits are kept
//! in insertion order and are also addressable by a key derived from each hit
//! (the hit id unless another key function is supplied).

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, RangeBounds};
use std::sync::Arc;

use crate::modules::search_io::attrs::{clamp_range, resolve_index, Metadata, StickyAttributes};
use crate::modules::search_io::hit::Hit;
use crate::modules::search_io::hsp::Hsp;
use crate::modules::search_io::summary::{self, SummaryFormat};
use crate::modules::search_io::{SearchError, SearchResult};

/// Derives the lookup key of a hit
pub type HitKeyFn = Arc<dyn Fn(&Hit) -> String + Send + Sync>;

/// The default key function: the hit id
pub fn default_hit_key() -> HitKeyFn {
    Arc::new(|hit: &Hit| hit.id().to_string())
}

const UNKNOWN: &str = "<unknown>";

/// All hits found for a single query, ordered and keyed
#[derive(Clone)]
pub struct QueryResult {
    id: String,
    program: String,
    target: String,
    version: String,
    description: String,
    seq_len: Option<usize>,
    metadata: Metadata,
    key_fn: HitKeyFn,
    /// Insertion order; always holds exactly the keys of `hits`
    keys: Vec<String>,
    hits: HashMap<String, Hit>,
}

impl QueryResult {
    /// Create a query result keyed by hit id
    pub fn new<I>(id: impl Into<String>, hits: I) -> SearchResult<Self>
    where
        I: IntoIterator<Item = Hit>,
    {
        Self::with_key_fn(id, hits, default_hit_key())
    }

    /// Create a query result with a custom hit key function
    pub fn with_key_fn<I>(id: impl Into<String>, hits: I, key_fn: HitKeyFn) -> SearchResult<Self>
    where
        I: IntoIterator<Item = Hit>,
    {
        let id = id.into();
        if id.is_empty() {
            return Err(SearchError::MissingId { field: "Query ID", object: "QueryResult" });
        }

        let mut result = Self {
            id,
            program: UNKNOWN.to_string(),
            target: UNKNOWN.to_string(),
            version: UNKNOWN.to_string(),
            description: String::new(),
            seq_len: None,
            metadata: Metadata::new(),
            key_fn,
            keys: Vec::new(),
            hits: HashMap::new(),
        };
        for hit in hits {
            result.append(hit)?;
        }

        Ok(result)
    }

    /// Build a result from already keyed hits, carrying attributes over.
    /// Keys are kept as given, not recomputed through the key function.
    fn derive<I>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Hit)>,
    {
        let mut result = Self {
            id: String::new(),
            program: String::new(),
            target: String::new(),
            version: String::new(),
            description: String::new(),
            seq_len: None,
            metadata: Metadata::new(),
            key_fn: default_hit_key(),
            keys: Vec::new(),
            hits: HashMap::new(),
        };
        self.transfer_attrs(&mut result);

        for (key, hit) in entries {
            result.keys.push(key.clone());
            result.hits.insert(key, hit);
        }
        result
    }

    fn validate(&self, hit: &Hit) -> SearchResult<()> {
        if hit.query_id() != self.id {
            return Err(SearchError::IdMismatch {
                object: "Hit",
                field: "query ID",
                expected: self.id.clone(),
                found: hit.query_id().to_string(),
            });
        }

        Ok(())
    }

    /// The key this result would file `hit` under
    pub fn key_of(&self, hit: &Hit) -> String {
        (self.key_fn)(hit)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Change the query id here and in every hit and HSP (O(n) in HSPs)
    pub fn set_id(&mut self, id: &str) {
        log::debug!("renaming query {} to {} across {} hits", self.id, id, self.keys.len());
        self.id = id.to_string();
        for hit in self.hits.values_mut() {
            hit.set_query_id(id);
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn set_program(&mut self, program: &str) {
        self.program = program.to_string();
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn set_target(&mut self, target: &str) {
        self.target = target.to_string();
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_version(&mut self, version: &str) {
        self.version = version.to_string();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the description, also on every aligned query sequence
    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
        for hit in self.hits.values_mut() {
            for hsp in hit.iter_mut() {
                hsp.set_query_description(description);
            }
        }
    }

    pub fn seq_len(&self) -> Option<usize> {
        self.seq_len
    }

    pub fn set_seq_len(&mut self, seq_len: usize) {
        self.seq_len = Some(seq_len);
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.hits.contains_key(key)
    }

    /// Check membership of a hit through its key
    pub fn contains_hit(&self, hit: &Hit) -> bool {
        self.hits.contains_key(&self.key_of(hit))
    }

    /// Hits in insertion order
    pub fn iter(&self) -> Hits<'_> {
        Hits { keys: self.keys.iter(), hits: &self.hits }
    }

    pub fn hits(&self) -> Vec<&Hit> {
        self.iter().collect()
    }

    pub fn hit_keys(&self) -> &[String] {
        &self.keys
    }

    /// `(key, hit)` pairs in insertion order
    pub fn items(&self) -> impl Iterator<Item = (&str, &Hit)> + '_ {
        self.keys.iter().map(String::as_str).zip(self.iter())
    }

    pub fn get(&self, key: &str) -> Option<&Hit> {
        self.hits.get(key)
    }

    /// The hit at a position, counting from the end when negative
    pub fn hit_at(&self, index: isize) -> Option<&Hit> {
        resolve_index(index, self.keys.len()).and_then(|i| self.hits.get(&self.keys[i]))
    }

    /// Mutate one hit in place
    ///
    /// The hit must still carry this result's query id afterwards; otherwise
    /// it is restored and an error is returned.
    pub fn with_hit_mut<F, R>(&mut self, key: &str, f: F) -> SearchResult<R>
    where
        F: FnOnce(&mut Hit) -> R,
    {
        let hit = self
            .hits
            .get_mut(key)
            .ok_or_else(|| SearchError::KeyNotFound(key.to_string()))?;
        let backup = hit.clone();

        let out = f(hit);
        if hit.query_id() != self.id {
            let found = hit.query_id().to_string();
            *hit = backup;
            return Err(SearchError::IdMismatch {
                object: "Hit",
                field: "query ID",
                expected: self.id.clone(),
                found,
            });
        }

        Ok(out)
    }

    /// A new result holding a range of hits, with the same id and attributes
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Self {
        let range = clamp_range(range, self.keys.len());
        self.derive(
            self.keys[range]
                .iter()
                .filter_map(|key| self.hits.get(key).map(|hit| (key.clone(), hit.clone()))),
        )
    }

    /// File a hit under `key`, replacing any hit already there in place
    pub fn insert(&mut self, key: &str, hit: Hit) -> SearchResult<Option<Hit>> {
        self.validate(&hit)?;

        let previous = self.hits.insert(key.to_string(), hit);
        if previous.is_none() {
            self.keys.push(key.to_string());
        }
        Ok(previous)
    }

    /// Add a hit at the end, under the key its key function gives
    pub fn append(&mut self, hit: Hit) -> SearchResult<()> {
        let key = self.key_of(&hit);
        if self.hits.contains_key(&key) {
            return Err(SearchError::DuplicateKey(key));
        }
        self.validate(&hit)?;

        self.keys.push(key.clone());
        self.hits.insert(key, hit);
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> SearchResult<Hit> {
        let hit = self
            .hits
            .remove(key)
            .ok_or_else(|| SearchError::KeyNotFound(key.to_string()))?;
        self.keys.retain(|k| k != key);
        Ok(hit)
    }

    fn key_at(&self, index: isize) -> SearchResult<String> {
        resolve_index(index, self.keys.len())
            .map(|i| self.keys[i].clone())
            .ok_or_else(|| {
                SearchError::IndexOutOfBounds(format!(
                    "hit index {} out of range for QueryResult with {} hits",
                    index,
                    self.keys.len()
                ))
            })
    }

    pub fn remove_at(&mut self, index: isize) -> SearchResult<Hit> {
        let key = self.key_at(index)?;
        self.remove(&key)
    }

    /// Remove a range of hits, returned in order
    pub fn remove_range<R: RangeBounds<usize>>(&mut self, range: R) -> Vec<Hit> {
        let range = clamp_range(range, self.keys.len());
        let keys: Vec<String> = self.keys.drain(range).collect();
        keys.iter().filter_map(|key| self.hits.remove(key)).collect()
    }

    /// Remove and return the last hit
    pub fn pop(&mut self) -> SearchResult<Hit> {
        if self.is_empty() {
            return Err(SearchError::IndexOutOfBounds("pop from empty QueryResult".to_string()));
        }
        self.remove_at(-1)
    }

    pub fn pop_at(&mut self, index: isize) -> SearchResult<Hit> {
        self.remove_at(index)
    }

    pub fn pop_key(&mut self, key: &str) -> SearchResult<Hit> {
        self.remove(key)
    }

    /// Remove the hit under `key`, or hand back `default` if there is none
    pub fn pop_key_or(&mut self, key: &str, default: Hit) -> Hit {
        self.remove(key).unwrap_or(default)
    }

    /// Zero-based position of a key, or -1 if absent
    pub fn index(&self, key: &str) -> isize {
        self.position(key).map_or(-1, |i| i as isize)
    }

    /// Zero-based position of a hit's id among the keys, or -1 if absent
    pub fn index_of_hit(&self, hit: &Hit) -> isize {
        self.index(hit.id())
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// A new result with the hits matching `predicate`
    pub fn hit_filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Hit) -> bool,
    {
        self.derive(
            self.items()
                .filter(|&(_, hit)| predicate(hit))
                .map(|(key, hit)| (key.to_string(), hit.clone())),
        )
    }

    /// A new result with `f` applied to a copy of every hit
    ///
    /// Mapped hits are keyed again and must keep this result's query id.
    pub fn hit_map<F>(&self, mut f: F) -> SearchResult<Self>
    where
        F: FnMut(Hit) -> Hit,
    {
        let mut result = self.derive(Vec::new());
        for hit in self.iter() {
            result.append(f(hit.clone()))?;
        }
        Ok(result)
    }

    /// A new result keeping only the HSPs matching `predicate`
    ///
    /// Hits left without HSPs are dropped.
    pub fn hsp_filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Hsp) -> bool,
    {
        let mut kept = Vec::with_capacity(self.keys.len());
        for (key, hit) in self.items() {
            match hit.filter(&mut predicate) {
                Some(filtered) => kept.push((key.to_string(), filtered)),
                None => log::debug!("dropping hit {} from query {}: no HSP passed the filter", key, self.id),
            }
        }
        self.derive(kept)
    }

    /// A new result with `f` applied to a copy of every HSP
    pub fn hsp_map<F>(&self, mut f: F) -> SearchResult<Self>
    where
        F: FnMut(Hsp) -> Hsp,
    {
        let mut mapped = Vec::with_capacity(self.keys.len());
        for (key, hit) in self.items() {
            if let Some(hit) = hit.map(&mut f)? {
                mapped.push((key.to_string(), hit));
            }
        }
        Ok(self.derive(mapped))
    }

    /// Reverse the hit order in place
    pub fn reverse(&mut self) {
        self.keys.reverse();
    }

    /// A new result with the hits in reverse order
    pub fn reversed(&self) -> Self {
        self.derive(
            self.keys
                .iter()
                .rev()
                .filter_map(|key| self.hits.get(key).map(|hit| (key.clone(), hit.clone()))),
        )
    }

    /// Reorder in place without a comparison: reverse, or keep the order
    pub fn sort(&mut self, reverse: bool) {
        if reverse {
            self.reverse();
        }
    }

    pub fn sorted(&self, reverse: bool) -> Self {
        if reverse {
            self.reversed()
        } else {
            self.slice(..)
        }
    }

    /// Stable sort in place by a comparison
    pub fn sort_by<F>(&mut self, mut compare: F, reverse: bool)
    where
        F: FnMut(&Hit, &Hit) -> Ordering,
    {
        let hits = &self.hits;
        self.keys.sort_by(|a, b| {
            let (a, b) = (&hits[a], &hits[b]);
            if reverse {
                compare(b, a)
            } else {
                compare(a, b)
            }
        });
    }

    pub fn sorted_by<F>(&self, compare: F, reverse: bool) -> Self
    where
        F: FnMut(&Hit, &Hit) -> Ordering,
    {
        let mut result = self.slice(..);
        result.sort_by(compare, reverse);
        result
    }

    /// Render the diagnostic summary with explicit formatting options
    pub fn summary(&self, format: &SummaryFormat) -> String {
        summary::query_result_summary(self, format)
    }
}

impl StickyAttributes for QueryResult {
    fn transfer_attrs(&self, target: &mut Self) {
        target.id = self.id.clone();
        target.program = self.program.clone();
        target.target = self.target.clone();
        target.version = self.version.clone();
        target.description = self.description.clone();
        target.seq_len = self.seq_len;
        target.metadata = self.metadata.clone();
        target.key_fn = Arc::clone(&self.key_fn);
    }
}

/// Iterator over the hits of a [`QueryResult`] in insertion order
pub struct Hits<'a> {
    keys: std::slice::Iter<'a, String>,
    hits: &'a HashMap<String, Hit>,
}

impl<'a> Iterator for Hits<'a> {
    type Item = &'a Hit;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.hits.get(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl DoubleEndedIterator for Hits<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        self.hits.get(key)
    }
}

impl ExactSizeIterator for Hits<'_> {}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a Hit;
    type IntoIter = Hits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for QueryResult {
    type Output = Hit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.hits[&self.keys[index]]
    }
}

impl Index<&str> for QueryResult {
    type Output = Hit;

    fn index(&self, key: &str) -> &Self::Output {
        &self.hits[key]
    }
}

impl fmt::Debug for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "QueryResult(id={:?}, {} hits)", self.id, self.keys.len())
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.summary(&SummaryFormat::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::search_io::attrs::Value;

    fn hit(id: &str, query_id: &str, n_hsps: usize) -> Hit {
        let hsps = (0..n_hsps).map(|i| {
            let mut hsp = Hsp::contiguous(id, query_id)
                .unwrap()
                .with_sequences("ACGTAC", "ACGAAC")
                .unwrap();
            hsp.set_evalue(10f64.powi(-(i as i32) * 10));
            hsp.set_bitscore(40.0 + i as f64);
            hsp
        });
        Hit::new(id, query_id, hsps).unwrap()
    }

    fn qresult() -> QueryResult {
        let hits = vec![hit("A", "query1", 1), hit("B", "query1", 2), hit("C", "query1", 3)];
        let mut qresult = QueryResult::new("query1", hits).unwrap();
        qresult.set_program("blastn");
        qresult.set_version("2.2.26+");
        qresult.set_target("refseq_rna");
        qresult.set_seq_len(300);
        qresult.metadata_mut().insert("db_num".to_string(), Value::from(2_934_173i64));
        qresult
    }

    fn ids(qresult: &QueryResult) -> Vec<&str> {
        qresult.iter().map(|hit| hit.id()).collect()
    }

    fn assert_same_attrs(a: &QueryResult, b: &QueryResult) {
        assert_eq!(a.id(), b.id());
        assert_eq!(a.program(), b.program());
        assert_eq!(a.version(), b.version());
        assert_eq!(a.target(), b.target());
        assert_eq!(a.seq_len(), b.seq_len());
        assert_eq!(a.metadata(), b.metadata());
    }

    #[test]
    fn test_new_requires_id() {
        assert!(matches!(
            QueryResult::new("", Vec::new()),
            Err(SearchError::MissingId { object: "QueryResult", .. })
        ));

        let qresult = QueryResult::new("query1", Vec::new()).unwrap();
        assert!(qresult.is_empty());
        assert_eq!(qresult.program(), "<unknown>");
        assert_eq!(qresult.target(), "<unknown>");
        assert_eq!(qresult.version(), "<unknown>");
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let hits = vec![hit("A", "query1", 1), hit("A", "query1", 2)];
        assert!(matches!(QueryResult::new("query1", hits), Err(SearchError::DuplicateKey(_))));
    }

    #[test]
    fn test_positional_and_keyed_access_agree() {
        let qresult = qresult();
        let hits = qresult.hits();
        for (i, hit) in hits.iter().enumerate() {
            assert_eq!(qresult[i].id(), hit.id());
            assert_eq!(qresult[hit.id()].id(), hit.id());
            assert!(std::ptr::eq(qresult.get(hit.id()).unwrap(), *hit));
        }
        assert_eq!(qresult.hit_at(-1).unwrap().id(), "C");
        assert!(qresult.hit_at(3).is_none());
        assert!(qresult.get("Z").is_none());
        assert_eq!(qresult.hit_keys(), ["A", "B", "C"]);
    }

    #[test]
    fn test_membership() {
        let qresult = qresult();
        assert!(qresult.contains_key("B"));
        assert!(!qresult.contains_key("Z"));
        assert!(qresult.contains_hit(&hit("C", "query1", 1)));
        assert!(!qresult.contains_hit(&hit("Z", "query1", 1)));
    }

    #[test]
    fn test_append_rejects_foreign_hit() {
        let mut qresult = qresult();
        let result = qresult.append(hit("D", "query2", 1));
        assert!(matches!(result, Err(SearchError::IdMismatch { .. })));
        assert_eq!(qresult.len(), 3);
        assert!(!qresult.contains_key("D"));

        qresult.append(hit("D", "query1", 1)).unwrap();
        assert_eq!(ids(&qresult), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_custom_key_fn() {
        let key_fn: HitKeyFn = Arc::new(|hit: &Hit| hit.id().to_lowercase());
        let hits = vec![hit("A", "query1", 1), hit("B", "query1", 1)];
        let qresult = QueryResult::with_key_fn("query1", hits, key_fn).unwrap();

        assert!(qresult.contains_key("a"));
        assert!(!qresult.contains_key("A"));
        assert!(qresult.contains_hit(&hit("B", "query1", 1)));
        assert_eq!(qresult.slice(1..).hit_keys(), ["b"]);
    }

    #[test]
    fn test_insert_by_key() {
        let mut qresult = qresult();

        let previous = qresult.insert("B", hit("B2", "query1", 4)).unwrap();
        assert_eq!(previous.unwrap().id(), "B");
        assert_eq!(qresult.index("B"), 1);
        assert_eq!(qresult["B"].id(), "B2");

        assert!(qresult.insert("E", hit("E", "query9", 1)).is_err());
        assert_eq!(qresult.len(), 3);

        assert!(qresult.insert("E", hit("E", "query1", 1)).unwrap().is_none());
        assert_eq!(qresult.hit_keys(), ["A", "B", "C", "E"]);
    }

    #[test]
    fn test_slice_keeps_attributes() {
        let qresult = qresult();
        let sliced = qresult.slice(1..10);

        assert_eq!(sliced.len(), 2);
        assert_eq!(ids(&sliced), vec!["B", "C"]);
        assert_same_attrs(&qresult, &sliced);
        assert!(qresult.slice(5..).is_empty());
    }

    #[test]
    fn test_deletion() {
        let mut qresult = qresult();
        assert_eq!(qresult.remove("B").unwrap().id(), "B");
        assert!(matches!(qresult.remove("B"), Err(SearchError::KeyNotFound(_))));
        assert_eq!(qresult.remove_at(-1).unwrap().id(), "C");
        assert!(qresult.remove_at(4).is_err());
        assert_eq!(ids(&qresult), vec!["A"]);

        let mut qresult = self::qresult();
        let removed = qresult.remove_range(..2);
        assert_eq!(removed.iter().map(|hit| hit.id()).collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(qresult.hit_keys(), ["C"]);
    }

    #[test]
    fn test_pop() {
        let mut qresult = qresult();
        assert_eq!(qresult.pop().unwrap().id(), "C");
        assert_eq!(ids(&qresult), vec!["A", "B"]);
        assert_eq!(qresult.pop_at(0).unwrap().id(), "A");
        assert_eq!(ids(&qresult), vec!["B"]);

        let fallback = qresult.pop_key_or("X", hit("X", "query1", 1));
        assert_eq!(fallback.id(), "X");
        assert!(matches!(qresult.pop_key("X"), Err(SearchError::KeyNotFound(_))));
        assert_eq!(qresult.pop_key("B").unwrap().id(), "B");

        assert!(matches!(qresult.pop(), Err(SearchError::IndexOutOfBounds(_))));
        assert!(qresult.pop_at(0).is_err());
    }

    #[test]
    fn test_index() {
        let qresult = qresult();
        assert_eq!(qresult.index("C"), 2);
        assert_eq!(qresult.index("my_key"), -1);
        assert_eq!(qresult.index_of_hit(&qresult["B"]), 1);
        assert_eq!(qresult.position("A"), Some(0));
        assert_eq!(qresult.position("Z"), None);
    }

    #[test]
    fn test_rename_cascades() {
        let mut qresult = qresult();
        qresult.set_id("query2");

        assert_eq!(qresult.id(), "query2");
        for hit in &qresult {
            assert_eq!(hit.query_id(), "query2");
            assert!(hit.iter().all(|hsp| hsp.query_id() == "query2"));
            assert!(hit.iter().all(|hsp| hsp.query().unwrap().id() == "query2"));
        }
        qresult.append(hit("D", "query2", 1)).unwrap();
    }

    #[test]
    fn test_description_cascades() {
        let mut qresult = qresult();
        qresult.set_description("Homo sapiens wingless-type MMTV");

        assert_eq!(qresult.description(), "Homo sapiens wingless-type MMTV");
        for hsp in qresult.iter().flat_map(|hit| hit.iter()) {
            assert_eq!(hsp.query().unwrap().description(), "Homo sapiens wingless-type MMTV");
            assert_eq!(hsp.hit().unwrap().description(), "");
        }
    }

    #[test]
    fn test_with_hit_mut() {
        let mut qresult = qresult();

        let len = qresult
            .with_hit_mut("B", |hit| {
                hit.set_description("kept");
                hit.len()
            })
            .unwrap();
        assert_eq!(len, 2);
        assert_eq!(qresult["B"].description(), "kept");

        let result = qresult.with_hit_mut("B", |hit| {
            hit.set_description("discarded");
            hit.set_query_id("query9");
        });
        assert!(matches!(result, Err(SearchError::IdMismatch { .. })));
        assert_eq!(qresult["B"].query_id(), "query1");
        assert_eq!(qresult["B"].description(), "kept");

        assert!(matches!(qresult.with_hit_mut("Z", |_| ()), Err(SearchError::KeyNotFound(_))));
    }

    #[test]
    fn test_hit_filter() {
        let qresult = qresult();
        let filtered = qresult.hit_filter(|hit| hit.id() == "B");

        assert_eq!(filtered.len(), 1);
        assert_eq!(ids(&filtered), vec!["B"]);
        assert_same_attrs(&qresult, &filtered);
    }

    #[test]
    fn test_derived_results_keep_assigned_keys() {
        let mut qresult = qresult();
        qresult.insert("custom", hit("D", "query1", 1)).unwrap();

        let filtered = qresult.hit_filter(|hit| hit.id() != "A");
        assert_eq!(filtered.hit_keys(), ["B", "C", "custom"]);
        assert_eq!(filtered["custom"].id(), "D");
        assert!(!filtered.contains_key("D"));

        assert_eq!(qresult.reversed().hit_keys(), ["custom", "C", "B", "A"]);
        assert_eq!(qresult.slice(3..).hit_keys(), ["custom"]);
    }

    #[test]
    fn test_hit_map() {
        let qresult = qresult();
        let mapped = qresult
            .hit_map(|mut hit| {
                hit.set_description("mapped");
                hit
            })
            .unwrap();
        assert!(mapped.iter().all(|hit| hit.description() == "mapped"));
        assert!(qresult.iter().all(|hit| hit.description().is_empty()));
        assert_same_attrs(&qresult, &mapped);

        // mapped hits are keyed again
        let renamed = qresult
            .hit_map(|mut hit| {
                let id = format!("{}x", hit.id());
                hit.set_id(&id);
                hit
            })
            .unwrap();
        assert_eq!(renamed.hit_keys(), ["Ax", "Bx", "Cx"]);

        let collide = qresult.hit_map(|mut hit| {
            hit.set_id("same");
            hit
        });
        assert!(matches!(collide, Err(SearchError::DuplicateKey(_))));

        let foreign = qresult.hit_map(|mut hit| {
            hit.set_query_id("other");
            hit
        });
        assert!(matches!(foreign, Err(SearchError::IdMismatch { .. })));
    }

    #[test]
    fn test_hsp_filter_drops_empty_hits() {
        let qresult = qresult();
        let filtered = qresult.hsp_filter(|hsp| hsp.evalue().unwrap() < 1e-5);

        assert_eq!(ids(&filtered), vec!["B", "C"]);
        assert_eq!(filtered["B"].len(), 1);
        assert_eq!(filtered["C"].len(), 2);
        assert_same_attrs(&qresult, &filtered);

        assert!(qresult.hsp_filter(|_| false).is_empty());
    }

    #[test]
    fn test_hsp_map() {
        let qresult = qresult();
        let mapped = qresult
            .hsp_map(|mut hsp| {
                hsp.set_bitscore(0.0);
                hsp
            })
            .unwrap();

        assert_eq!(mapped.len(), 3);
        assert!(mapped.iter().flat_map(|hit| hit.iter()).all(|hsp| hsp.bitscore() == Some(0.0)));
        assert_eq!(qresult["A"][0].bitscore(), Some(40.0));

        let foreign = qresult.hsp_map(|mut hsp| {
            hsp.set_hit_id("other");
            hsp
        });
        assert!(foreign.is_err());
    }

    #[test]
    fn test_reversed_leaves_original() {
        let qresult = qresult();
        let reversed = qresult.reversed();

        assert_eq!(ids(&reversed), vec!["C", "B", "A"]);
        assert_eq!(ids(&qresult), vec!["A", "B", "C"]);
        assert_same_attrs(&qresult, &reversed);
        assert_eq!(reversed["A"].id(), "A");
    }

    #[test]
    fn test_sort_without_comparison_only_reorders() {
        let mut qresult = qresult();
        assert_eq!(ids(&qresult.sorted(false)), vec!["A", "B", "C"]);
        assert_eq!(ids(&qresult.sorted(true)), vec!["C", "B", "A"]);

        qresult.sort(false);
        assert_eq!(ids(&qresult), vec!["A", "B", "C"]);
        qresult.sort(true);
        assert_eq!(ids(&qresult), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_sort_by_comparison() {
        let mut qresult = qresult();
        let by_hsp_count = |a: &Hit, b: &Hit| a.len().cmp(&b.len());

        let sorted = qresult.sorted_by(by_hsp_count, true);
        assert_eq!(ids(&sorted), vec!["C", "B", "A"]);
        assert_eq!(ids(&qresult), vec!["A", "B", "C"]);

        qresult.sort_by(by_hsp_count, true);
        assert_eq!(ids(&qresult), vec!["C", "B", "A"]);
        assert_eq!(qresult.index("A"), 2);
        assert_eq!(qresult["A"].id(), "A");

        qresult.sort_by(|a, b| a.id().cmp(b.id()), false);
        assert_eq!(qresult.hit_keys(), ["A", "B", "C"]);
    }

    #[test]
    fn test_iteration_views() {
        let qresult = qresult();
        let items: Vec<(&str, usize)> = qresult.items().map(|(key, hit)| (key, hit.len())).collect();
        assert_eq!(items, vec![("A", 1), ("B", 2), ("C", 3)]);
        assert_eq!(qresult.iter().len(), 3);
        assert_eq!(qresult.iter().rev().next().unwrap().id(), "C");
    }

    #[test]
    fn test_containers_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueryResult>();
        assert_send_sync::<Hit>();
        assert_send_sync::<Hsp>();

        let qresult = qresult();
        let handle = std::thread::spawn(move || qresult["C"][0].bitscore());
        assert_eq!(handle.join().unwrap(), Some(40.0));
    }

    #[test]
    fn test_debug_repr() {
        assert_eq!(format!("{:?}", qresult()), "QueryResult(id=\"query1\", 3 hits)");
    }
}
