//! String operations on aligned residue data
//!
//! This module provides the scanning and formatting primitives used when
//! deriving statistics from aligned sequences and when rendering summaries.

use itertools::Itertools;

/// The character used for alignment gaps
pub const GAP_CHAR: u8 = b'-';

/// Check whether a residue counts as a "word" character (`[A-Za-z0-9_]`)
#[inline]
pub fn is_word_residue(residue: u8) -> bool {
    residue.is_ascii_alphanumeric() || residue == b'_'
}

/// Count gap openings in an aligned sequence
///
/// A gap opening is a word residue immediately followed by a gap character,
/// so a leading gap does not count and a run of gaps counts once.
pub fn count_gap_openings(aligned: &[u8]) -> usize {
    aligned
        .iter()
        .tuple_windows()
        .filter(|&(&prev, &next)| is_word_residue(prev) && next == GAP_CHAR)
        .count()
}

/// Shorten `text` to at most `width` characters, marking the cut with `...`
pub fn truncate_with_ellipsis(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let keep = width.saturating_sub(3);
    let mut shortened: String = text.chars().take(keep).collect();
    shortened.push_str("...");
    shortened
}

/// Format a float with `precision` significant digits, choosing between
/// fixed and scientific notation the way C's `%g` does
pub fn format_general(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Drop trailing zeros (and a dangling decimal point) from a formatted number
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
