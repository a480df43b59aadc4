//! Sticky attributes
//!
//! Metadata attached to a container by a producer (program name, database,
//! sequence length, ...) must survive every operation that rebuilds the
//! container from a subset or a transformation of its items.

use std::collections::BTreeMap;
use std::ops::{Bound, Range, RangeBounds};

use serde::{Deserialize, Serialize};

/// A free-form metadata value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// Extensible metadata carried by every search object, keyed by name
pub type Metadata = BTreeMap<String, Value>;

/// Copy every attribute except the contained items onto a derived container
pub trait StickyAttributes {
    /// Transfer this object's non-item attributes to `target`
    fn transfer_attrs(&self, target: &mut Self);
}

/// Resolve a possibly negative position against a sequence of `len` items
pub(crate) fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())?
    } else {
        index as usize
    };

    (resolved < len).then_some(resolved)
}

/// Clamp a range to `0..len`, the way slicing past either end does
pub(crate) fn clamp_range<R: RangeBounds<usize>>(range: R, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };

    let end = end.min(len);
    start.min(end)..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_index() {
        assert_eq!(resolve_index(0, 3), Some(0));
        assert_eq!(resolve_index(2, 3), Some(2));
        assert_eq!(resolve_index(3, 3), None);
        assert_eq!(resolve_index(-1, 3), Some(2));
        assert_eq!(resolve_index(-3, 3), Some(0));
        assert_eq!(resolve_index(-4, 3), None);
        assert_eq!(resolve_index(-1, 0), None);
    }

    #[test]
    fn test_clamp_range() {
        assert_eq!(clamp_range(1..3, 5), 1..3);
        assert_eq!(clamp_range(1..10, 5), 1..5);
        assert_eq!(clamp_range(7..10, 5), 5..5);
        assert_eq!(clamp_range(.., 4), 0..4);
        assert_eq!(clamp_range(2.., 4), 2..4);
        assert_eq!(clamp_range(..=1, 4), 0..2);
        assert_eq!(clamp_range(3..1, 4), 1..1);
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from("blastn"), Value::Text("blastn".to_string()));
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(0.5), Value::Float(0.5));
        assert_eq!(Value::from(true), Value::Bool(true));
    }
}
