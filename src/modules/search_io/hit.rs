//! Hit container
//!
//! A hit is one database entry matched by the query. It owns an ordered list
//! of HSPs that all share its hit id and query id.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, RangeBounds};

use crate::modules::search_io::attrs::{clamp_range, resolve_index, Metadata, StickyAttributes};
use crate::modules::search_io::hsp::Hsp;
use crate::modules::search_io::summary::{self, SummaryFormat};
use crate::modules::search_io::{SearchError, SearchResult};

/// A search hit: the HSPs found between the query and one target sequence
#[derive(Clone)]
pub struct Hit {
    id: String,
    query_id: String,
    description: String,
    seq_len: Option<usize>,
    metadata: Metadata,
    hsps: Vec<Hsp>,
}

impl Hit {
    /// Create a hit, validating every HSP against the two ids
    pub fn new<I>(id: impl Into<String>, query_id: impl Into<String>, hsps: I) -> SearchResult<Self>
    where
        I: IntoIterator<Item = Hsp>,
    {
        let id = id.into();
        let query_id = query_id.into();
        if id.is_empty() {
            return Err(SearchError::MissingId { field: "Hit ID", object: "Hit" });
        }
        if query_id.is_empty() {
            return Err(SearchError::MissingId { field: "Query ID", object: "Hit" });
        }

        let mut hit = Self {
            id,
            query_id,
            description: String::new(),
            seq_len: None,
            metadata: Metadata::new(),
            hsps: Vec::new(),
        };
        for hsp in hsps {
            hit.append(hsp)?;
        }

        Ok(hit)
    }

    /// Build a hit from HSPs taken from this one, carrying attributes over
    fn derive(&self, hsps: Vec<Hsp>) -> Self {
        let mut hit = Self {
            id: String::new(),
            query_id: String::new(),
            description: String::new(),
            seq_len: None,
            metadata: Metadata::new(),
            hsps,
        };
        self.transfer_attrs(&mut hit);
        hit
    }

    /// Check that an HSP belongs to this hit
    pub fn validate(&self, hsp: &Hsp) -> SearchResult<()> {
        if hsp.hit_id() != self.id {
            return Err(SearchError::IdMismatch {
                object: "HSP",
                field: "hit ID",
                expected: self.id.clone(),
                found: hsp.hit_id().to_string(),
            });
        }
        if hsp.query_id() != self.query_id {
            return Err(SearchError::IdMismatch {
                object: "HSP",
                field: "query ID",
                expected: self.query_id.clone(),
                found: hsp.query_id().to_string(),
            });
        }

        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Rename the hit and every HSP it holds (O(n) in HSPs)
    pub fn set_id(&mut self, id: &str) {
        log::debug!("renaming hit {} to {} across {} HSPs", self.id, id, self.hsps.len());
        self.id = id.to_string();
        for hsp in self.hsps.iter_mut() {
            hsp.set_hit_id(id);
        }
    }

    pub fn query_id(&self) -> &str {
        &self.query_id
    }

    /// Change the query id of the hit and every HSP it holds (O(n) in HSPs)
    pub fn set_query_id(&mut self, query_id: &str) {
        self.query_id = query_id.to_string();
        for hsp in self.hsps.iter_mut() {
            hsp.set_query_id(query_id);
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the description, also on every aligned hit sequence
    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
        for hsp in self.hsps.iter_mut() {
            hsp.set_hit_description(description);
        }
    }

    /// Full length of the hit sequence, if the search reported it
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

    pub fn hsps(&self) -> &[Hsp] {
        &self.hsps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hsp> {
        self.hsps.iter()
    }

    /// Mutable iteration; HSP ids can only change through this hit
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Hsp> {
        self.hsps.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.hsps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hsps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Hsp> {
        self.hsps.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Hsp> {
        self.hsps.get_mut(index)
    }

    /// The HSP at a position, counting from the end when negative
    pub fn hsp_at(&self, index: isize) -> Option<&Hsp> {
        resolve_index(index, self.hsps.len()).map(|i| &self.hsps[i])
    }

    fn position(&self, index: isize) -> SearchResult<usize> {
        resolve_index(index, self.hsps.len()).ok_or_else(|| {
            SearchError::IndexOutOfBounds(format!(
                "HSP index {} out of range for hit with {} HSPs",
                index,
                self.hsps.len()
            ))
        })
    }

    /// A new hit holding a range of this hit's HSPs
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Self {
        let range = clamp_range(range, self.hsps.len());
        self.derive(self.hsps[range].to_vec())
    }

    /// Replace the HSP at `index`, returning the previous one
    pub fn set(&mut self, index: isize, hsp: Hsp) -> SearchResult<Hsp> {
        let position = self.position(index)?;
        self.validate(&hsp)?;
        Ok(std::mem::replace(&mut self.hsps[position], hsp))
    }

    /// Replace a range of HSPs; nothing changes unless every new HSP is valid
    pub fn set_range<R: RangeBounds<usize>>(&mut self, range: R, hsps: Vec<Hsp>) -> SearchResult<()> {
        for hsp in &hsps {
            self.validate(hsp)?;
        }

        let range = clamp_range(range, self.hsps.len());
        self.hsps.splice(range, hsps);
        Ok(())
    }

    pub fn remove(&mut self, index: isize) -> SearchResult<Hsp> {
        let position = self.position(index)?;
        Ok(self.hsps.remove(position))
    }

    pub fn remove_range<R: RangeBounds<usize>>(&mut self, range: R) -> Vec<Hsp> {
        let range = clamp_range(range, self.hsps.len());
        self.hsps.drain(range).collect()
    }

    pub fn append(&mut self, hsp: Hsp) -> SearchResult<()> {
        self.validate(&hsp)?;
        self.hsps.push(hsp);
        Ok(())
    }

    /// Remove and return the last HSP
    pub fn pop(&mut self) -> Option<Hsp> {
        self.hsps.pop()
    }

    pub fn pop_at(&mut self, index: isize) -> SearchResult<Hsp> {
        self.remove(index)
    }

    /// Reverse the HSP order in place
    pub fn reverse(&mut self) {
        self.hsps.reverse();
    }

    /// A new hit with the HSPs in reverse order
    pub fn reversed(&self) -> Self {
        self.derive(self.hsps.iter().rev().cloned().collect())
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
        F: FnMut(&Hsp, &Hsp) -> Ordering,
    {
        self.hsps.sort_by(|a, b| if reverse { compare(b, a) } else { compare(a, b) });
    }

    pub fn sorted_by<F>(&self, compare: F, reverse: bool) -> Self
    where
        F: FnMut(&Hsp, &Hsp) -> Ordering,
    {
        let mut hit = self.slice(..);
        hit.sort_by(compare, reverse);
        hit
    }

    /// A new hit with the HSPs matching `predicate`, or `None` if none match
    pub fn filter<P>(&self, mut predicate: P) -> Option<Self>
    where
        P: FnMut(&Hsp) -> bool,
    {
        let hsps: Vec<Hsp> = self.hsps.iter().filter(|&hsp| predicate(hsp)).cloned().collect();
        (!hsps.is_empty()).then(|| self.derive(hsps))
    }

    /// A new hit with `f` applied to a copy of every HSP, or `None` if empty
    ///
    /// The mapped HSPs must still belong to this hit.
    pub fn map<F>(&self, f: F) -> SearchResult<Option<Self>>
    where
        F: FnMut(Hsp) -> Hsp,
    {
        if self.hsps.is_empty() {
            return Ok(None);
        }

        let hsps: Vec<Hsp> = self.hsps.iter().cloned().map(f).collect();
        for hsp in &hsps {
            self.validate(hsp)?;
        }
        Ok(Some(self.derive(hsps)))
    }

    /// Render the diagnostic summary with explicit formatting options
    pub fn summary(&self, format: &SummaryFormat) -> String {
        summary::hit_summary(self, format)
    }
}

impl StickyAttributes for Hit {
    fn transfer_attrs(&self, target: &mut Self) {
        target.id = self.id.clone();
        target.query_id = self.query_id.clone();
        target.description = self.description.clone();
        target.seq_len = self.seq_len;
        target.metadata = self.metadata.clone();
    }
}

impl Index<usize> for Hit {
    type Output = Hsp;

    fn index(&self, index: usize) -> &Self::Output {
        &self.hsps[index]
    }
}

impl<'a> IntoIterator for &'a Hit {
    type Item = &'a Hsp;
    type IntoIter = std::slice::Iter<'a, Hsp>;

    fn into_iter(self) -> Self::IntoIter {
        self.hsps.iter()
    }
}

impl fmt::Debug for Hit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Hit(id={:?}, query_id={:?}, {} hsps)", self.id, self.query_id, self.hsps.len())
    }
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.summary(&SummaryFormat::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::search_io::attrs::Value;

    fn hsp(hit_id: &str, query_id: &str, evalue: f64) -> Hsp {
        let mut hsp = Hsp::contiguous(hit_id, query_id)
            .unwrap()
            .with_sequences("ACGT", "ACGA")
            .unwrap();
        hsp.set_evalue(evalue);
        hsp
    }

    fn hit_with(evalues: &[f64]) -> Hit {
        let hsps = evalues.iter().map(|&e| hsp("hit1", "query1", e));
        let mut hit = Hit::new("hit1", "query1", hsps).unwrap();
        hit.set_seq_len(250);
        hit.metadata_mut().insert("accession".to_string(), Value::from("XP_001"));
        hit
    }

    fn evalues(hit: &Hit) -> Vec<f64> {
        hit.iter().map(|hsp| hsp.evalue().unwrap()).collect()
    }

    #[test]
    fn test_new_requires_ids() {
        assert!(matches!(
            Hit::new("", "query1", Vec::new()),
            Err(SearchError::MissingId { field: "Hit ID", .. })
        ));
        assert!(matches!(
            Hit::new("hit1", "", Vec::new()),
            Err(SearchError::MissingId { field: "Query ID", .. })
        ));
    }

    #[test]
    fn test_new_validates_hsps() {
        let result = Hit::new("hit1", "query1", vec![hsp("hit2", "query1", 1.0)]);
        assert!(matches!(result, Err(SearchError::IdMismatch { field: "hit ID", .. })));

        let result = Hit::new("hit1", "query1", vec![hsp("hit1", "query2", 1.0)]);
        assert!(matches!(result, Err(SearchError::IdMismatch { field: "query ID", .. })));
    }

    #[test]
    fn test_append_rejects_foreign_hsp() {
        let mut hit = hit_with(&[1.0]);
        assert!(hit.append(hsp("other", "query1", 2.0)).is_err());
        assert_eq!(hit.len(), 1);

        hit.append(hsp("hit1", "query1", 2.0)).unwrap();
        assert_eq!(evalues(&hit), vec![1.0, 2.0]);
    }

    #[test]
    fn test_indexing() {
        let hit = hit_with(&[1.0, 2.0, 3.0]);
        assert_eq!(hit[0].evalue(), Some(1.0));
        assert_eq!(hit.hsp_at(-1).unwrap().evalue(), Some(3.0));
        assert!(hit.hsp_at(3).is_none());
        assert!(hit.get(5).is_none());
    }

    #[test]
    fn test_slice_keeps_attributes() {
        let hit = hit_with(&[1.0, 2.0, 3.0]);
        let sliced = hit.slice(1..10);

        assert_eq!(evalues(&sliced), vec![2.0, 3.0]);
        assert_eq!(sliced.id(), "hit1");
        assert_eq!(sliced.query_id(), "query1");
        assert_eq!(sliced.seq_len(), Some(250));
        assert_eq!(sliced.metadata(), hit.metadata());
    }

    #[test]
    fn test_set_and_set_range() {
        let mut hit = hit_with(&[1.0, 2.0, 3.0]);

        let old = hit.set(-1, hsp("hit1", "query1", 9.0)).unwrap();
        assert_eq!(old.evalue(), Some(3.0));
        assert!(hit.set(0, hsp("hit9", "query1", 9.0)).is_err());
        assert!(hit.set(7, hsp("hit1", "query1", 9.0)).is_err());

        let bad = vec![hsp("hit1", "query1", 5.0), hsp("hit1", "query9", 6.0)];
        assert!(hit.set_range(0..2, bad).is_err());
        assert_eq!(evalues(&hit), vec![1.0, 2.0, 9.0]);

        hit.set_range(0..2, vec![hsp("hit1", "query1", 5.0)]).unwrap();
        assert_eq!(evalues(&hit), vec![5.0, 9.0]);
    }

    #[test]
    fn test_remove_and_pop() {
        let mut hit = hit_with(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(hit.remove(0).unwrap().evalue(), Some(1.0));
        assert_eq!(hit.pop().unwrap().evalue(), Some(4.0));
        assert_eq!(hit.pop_at(-1).unwrap().evalue(), Some(3.0));
        assert!(hit.pop_at(4).is_err());

        let mut hit = hit_with(&[1.0, 2.0, 3.0, 4.0]);
        let removed = hit.remove_range(1..3);
        assert_eq!(removed.len(), 2);
        assert_eq!(evalues(&hit), vec![1.0, 4.0]);
    }

    #[test]
    fn test_rename_cascades() {
        let mut hit = hit_with(&[1.0, 2.0]);
        hit.set_id("hit2");
        hit.set_query_id("query2");

        for hsp in &hit {
            assert_eq!(hsp.hit_id(), "hit2");
            assert_eq!(hsp.query_id(), "query2");
        }
        hit.append(hsp("hit2", "query2", 3.0)).unwrap();
    }

    #[test]
    fn test_description_cascades() {
        let mut hit = hit_with(&[1.0]);
        hit.set_description("putative kinase");
        assert_eq!(hit.description(), "putative kinase");
        assert_eq!(hit[0].hit().unwrap().description(), "putative kinase");
        assert_eq!(hit[0].query().unwrap().description(), "");

        // HSPs without sequences are skipped
        let mut bare = Hit::new("h", "q", vec![Hsp::contiguous("h", "q").unwrap()]).unwrap();
        bare.set_description("anything");
        assert_eq!(bare.description(), "anything");
    }

    #[test]
    fn test_reverse_and_sort() {
        let mut hit = hit_with(&[3.0, 1.0, 2.0]);
        let reversed = hit.reversed();
        assert_eq!(evalues(&reversed), vec![2.0, 1.0, 3.0]);
        assert_eq!(evalues(&hit), vec![3.0, 1.0, 2.0]);
        assert_eq!(reversed.seq_len(), Some(250));

        assert_eq!(evalues(&hit.sorted(false)), vec![3.0, 1.0, 2.0]);

        let by_evalue = |a: &Hsp, b: &Hsp| a.evalue().partial_cmp(&b.evalue()).unwrap_or(Ordering::Equal);
        let sorted = hit.sorted_by(by_evalue, false);
        assert_eq!(evalues(&sorted), vec![1.0, 2.0, 3.0]);
        assert_eq!(evalues(&hit), vec![3.0, 1.0, 2.0]);

        hit.sort_by(by_evalue, true);
        assert_eq!(evalues(&hit), vec![3.0, 2.0, 1.0]);

        hit.sort(true);
        assert_eq!(evalues(&hit), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_filter() {
        let hit = hit_with(&[1e-10, 0.5, 1e-3]);

        let filtered = hit.filter(|hsp| hsp.evalue().unwrap() < 0.01).unwrap();
        assert_eq!(evalues(&filtered), vec![1e-10, 1e-3]);
        assert_eq!(filtered.metadata(), hit.metadata());

        assert!(hit.filter(|hsp| hsp.evalue().unwrap() > 1.0).is_none());
    }

    #[test]
    fn test_map() {
        let hit = hit_with(&[1.0, 2.0]);

        let mapped = hit
            .map(|mut hsp| {
                hsp.set_bitscore(50.0);
                hsp
            })
            .unwrap()
            .unwrap();
        assert!(mapped.iter().all(|hsp| hsp.bitscore() == Some(50.0)));
        assert_eq!(hit[0].bitscore(), None);

        let renamed = hit.map(|mut hsp| {
            hsp.set_hit_id("other");
            hsp
        });
        assert!(renamed.is_err());

        let empty = Hit::new("hit1", "query1", Vec::new()).unwrap();
        assert!(empty.map(|hsp| hsp).unwrap().is_none());
    }

    #[test]
    fn test_debug_repr() {
        let hit = hit_with(&[1.0, 2.0]);
        assert_eq!(format!("{:?}", hit), "Hit(id=\"hit1\", query_id=\"query1\", 2 hsps)");
    }
}
