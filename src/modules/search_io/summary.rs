//! Plain-text summaries of search results
//!
//! These are diagnostic renderings for people reading a terminal, not a file
//! format: a header with program and query details followed by a capped table
//! of hits, HSPs or an alignment preview.

use itertools::Itertools;

use crate::engines::compute::string_ops::{format_general, truncate_with_ellipsis};
use crate::modules::search_io::hit::Hit;
use crate::modules::search_io::hsp::Hsp;
use crate::modules::search_io::query_result::QueryResult;

const NOT_AVAILABLE: &str = "n/a";

/// Residues kept from the end of a long alignment preview
const PREVIEW_TAIL: usize = 5;

/// Layout options for the text summaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryFormat {
    /// Hits listed before the table is elided
    pub max_hit_rows: usize,
    /// Hits listed again at the end of an elided table
    pub tail_rows: usize,
    /// Longest header line before it is cut with `...`
    pub line_width: usize,
    /// Alignment columns shown before the preview is shortened
    pub preview_width: usize,
}

impl Default for SummaryFormat {
    fn default() -> Self {
        Self {
            max_hit_rows: 30,
            tail_rows: 3,
            line_width: 80,
            preview_width: 56,
        }
    }
}

impl SummaryFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_hit_rows(mut self, rows: usize) -> Self {
        self.max_hit_rows = rows;
        self
    }

    pub fn with_tail_rows(mut self, rows: usize) -> Self {
        self.tail_rows = rows;
        self
    }

    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_preview_width(mut self, width: usize) -> Self {
        self.preview_width = width;
        self
    }

    /// Width of the `ID + description` column in the hit table
    fn id_column(&self) -> usize {
        self.line_width.saturating_sub(23)
    }
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Header line with an optional description wrapped onto an indented line
fn header_line(label: &str, id: &str, seq_len: Option<usize>, description: &str, format: &SummaryFormat) -> String {
    let mut line = format!("{}{}", label, id);
    if let Some(seq_len) = seq_len {
        line.push_str(&format!(" ({})", seq_len));
    }
    if !description.is_empty() {
        let indented = format!("{}{}", " ".repeat(label.len()), description);
        line.push('\n');
        line.push_str(&truncate_with_ellipsis(&indented, format.line_width));
    }
    line
}

/// Alignment length as parsed or derived, else the aligned sequence length
fn alignment_length(hsp: &Hsp) -> String {
    if let Ok(ali_len) = hsp.ali_len() {
        return ali_len.to_string();
    }
    hsp.query()
        .or_else(|| hsp.hit())
        .map_or_else(|| NOT_AVAILABLE.to_string(), |record| record.len().to_string())
}

fn region(start: Option<usize>, end: Option<usize>) -> String {
    format!("{}-{}", or_na(start), or_na(end))
}

/// Summary of a query result: program, query, target and a hit table
pub fn query_result_summary(qresult: &QueryResult, format: &SummaryFormat) -> String {
    let mut lines = vec![
        format!("Program: {} ({})", qresult.program(), qresult.version()),
        header_line("  Query: ", qresult.id(), qresult.seq_len(), qresult.description(), format),
        format!(" Target: {}", qresult.target()),
    ];

    if qresult.is_empty() {
        lines.push("   Hits: 0".to_string());
        return lines.join("\n");
    }

    let width = format.id_column();
    let row = |index: &str, hsps: &str, label: &str| format!("{:>13}  {:>5}  {:>w$}", index, hsps, label, w = width.saturating_sub(1));
    lines.push(format!("   Hits: {}  {}  {}", "-".repeat(4), "-".repeat(5), "-".repeat(width + 1)));
    lines.push(row("#", "# HSP", &format!("{:<w$}", "ID + description", w = width + 1)));
    lines.push(row(&"-".repeat(4), &"-".repeat(5), &"-".repeat(width)));

    let total = qresult.len();
    for (idx, hit) in qresult.iter().enumerate() {
        let in_head = idx < format.max_hit_rows;
        let in_tail = idx + format.tail_rows + 1 > total;
        if in_head || in_tail {
            let label = truncate_with_ellipsis(&format!("{}  {}", hit.id(), hit.description()), width);
            lines.push(row(&idx.to_string(), &hit.len().to_string(), &format!("{:<w$}", label, w = width)));
        } else if idx == format.max_hit_rows {
            lines.push(format!("{:>14}", "~~~"));
        }
    }

    lines.join("\n")
}

/// Summary of a hit: query and hit ids followed by an HSP table
pub fn hit_summary(hit: &Hit, format: &SummaryFormat) -> String {
    let mut lines = vec![
        format!("Query: {}", hit.query_id()),
        header_line("  Hit: ", hit.id(), hit.seq_len(), hit.description(), format),
    ];

    if hit.is_empty() {
        lines.push(" HSPs: n/a".to_string());
        return lines.join("\n");
    }

    let rule = ["-".repeat(4), "-".repeat(8), "-".repeat(9), "-".repeat(6), "-".repeat(18), "-".repeat(18)];
    let row = |cells: [&str; 6]| {
        format!(
            "{:>11}  {:>8}  {:>9}  {:>6}  {:>18}  {:>18}",
            cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
        )
    };
    lines.push(format!(" HSPs: {}", rule.iter().join("  ")));
    lines.push(row(["#", "E-value", "Bit score", "Length", "Query region", "Hit region"]));
    lines.push(row([
        rule[0].as_str(),
        rule[1].as_str(),
        rule[2].as_str(),
        rule[3].as_str(),
        rule[4].as_str(),
        rule[5].as_str(),
    ]));

    for (idx, hsp) in hit.iter().enumerate() {
        let evalue = or_na(hsp.evalue().map(|e| format_general(e, 2)));
        let bitscore = or_na(hsp.bitscore().map(|b| format!("{:.2}", b)));
        let query_region = region(hsp.query_start(), hsp.query_end());
        let hit_region = region(hsp.hit_start(), hsp.hit_end());
        let index = idx.to_string();
        let ali_len = alignment_length(hsp);
        lines.push(row([
            index.as_str(),
            evalue.as_str(),
            bitscore.as_str(),
            ali_len.as_str(),
            query_region.as_str(),
            hit_region.as_str(),
        ]));
    }

    lines.join("\n")
}

/// Shorten an aligned row to head, continuation marker and tail
fn preview(residues: &str, format: &SummaryFormat) -> String {
    let len = residues.len();
    if len < format.preview_width {
        return residues.to_string();
    }

    let head = format.preview_width.saturating_sub(PREVIEW_TAIL + 2);
    let cont = "~".repeat((len - format.preview_width).min(3));
    let head = residues.get(..head.min(len)).unwrap_or(residues);
    let tail = residues.get(len.saturating_sub(PREVIEW_TAIL)..).unwrap_or("");
    format!("{}{}{}", head, cont, tail)
}

/// Summary of an HSP: ids, scores and, when aligned, an alignment preview
pub fn hsp_summary(hsp: &Hsp, format: &SummaryFormat) -> String {
    let with_description = |label: &str, id: &str, description: Option<&str>| {
        let mut line = format!("{}{}", label, id);
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            line.push(' ');
            line.push_str(description);
        }
        truncate_with_ellipsis(&line, format.line_width)
    };

    let info = [
        format!("E-value: {}", or_na(hsp.evalue().map(|e| format_general(e, 2)))),
        format!("Bit score: {}", or_na(hsp.bitscore().map(|b| format!("{:.2}", b)))),
        format!("Alignment length: {}", alignment_length(hsp)),
    ];
    let mut lines = vec![
        with_description("  Query: ", hsp.query_id(), hsp.query().map(|r| r.description())),
        with_description("    Hit: ", hsp.hit_id(), hsp.hit().map(|r| r.description())),
        info.iter().join(", "),
        "--".to_string(),
    ];

    if let (Some(query), Some(hit)) = (hsp.query(), hsp.hit()) {
        lines.push(format!(
            "Query:{:>8} {} {}",
            or_na(hsp.query_start()),
            preview(&query.as_string(), format),
            or_na(hsp.query_end())
        ));
        if let Some(homology) = hsp.alignment_annotation().get("homology") {
            lines.push(format!("{}{}", " ".repeat(15), preview(homology, format)));
        }
        lines.push(format!(
            "  Hit:{:>8} {} {}",
            or_na(hsp.hit_start()),
            preview(&hit.as_string(), format),
            or_na(hsp.hit_end())
        ));
    }

    lines.join("\n")
}
