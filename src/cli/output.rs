/// Rendering of alignments for the terminal and for machine consumers
use colored::*;
use gotoh_bio::{AlignmentResult, AlignmentStats};
use serde::Serialize;

/// How one alignment is laid out as text.
#[derive(Debug, Clone, Copy)]
pub struct TextLayout {
    pub gap_char: char,
    /// Columns per block (0 = one block)
    pub line_width: usize,
    pub show_match_line: bool,
}

/// Header line, the two aligned rows (optionally split into blocks with a
/// match line between them) and the score.
pub fn render_text(
    id_a: &str,
    id_b: &str,
    result: &AlignmentResult<char>,
    layout: TextLayout,
) -> String {
    let row_a: Vec<char> = result.render_a(layout.gap_char).chars().collect();
    let row_b: Vec<char> = result.render_b(layout.gap_char).chars().collect();
    let marks: Vec<char> = result.match_line().chars().collect();

    let width = if layout.line_width == 0 {
        row_a.len().max(1)
    } else {
        layout.line_width
    };

    let mut out = format!(">{} vs {}\n", id_a, id_b);
    let blocks = row_a.len().div_ceil(width).max(1);
    for block in 0..blocks {
        let start = block * width;
        let end = (start + width).min(row_a.len());
        if block > 0 {
            out.push('\n');
        }
        out.extend(&row_a[start..end]);
        out.push('\n');
        if layout.show_match_line {
            out.extend(&marks[start..end]);
            out.push('\n');
        }
        out.extend(&row_b[start..end]);
        out.push('\n');
    }
    out.push_str(&format!("score: {}\n", result.score));
    out
}

/// JSON form of one alignment
#[derive(Debug, Serialize)]
pub struct AlignmentReport<'a> {
    pub id_a: &'a str,
    pub id_b: &'a str,
    pub aligned_a: String,
    pub aligned_b: String,
    pub score: f64,
    pub identity: f64,
    pub stats: AlignmentStats,
}

impl<'a> AlignmentReport<'a> {
    pub fn new(
        id_a: &'a str,
        id_b: &'a str,
        result: &AlignmentResult<char>,
        gap_char: char,
    ) -> Self {
        Self {
            id_a,
            id_b,
            aligned_a: result.render_a(gap_char),
            aligned_b: result.render_b(gap_char),
            score: result.score,
            identity: result.identity(),
            stats: result.stats(),
        }
    }
}

pub fn render_json(report: &AlignmentReport<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Display a success message
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Display a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}
