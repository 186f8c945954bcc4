//! Gotoh score matrices.
//!
//! Three `(m + 1) x (n + 1)` tables are filled for sequences `a` (length `m`,
//! rows) and `b` (length `n`, columns):
//!
//! - `best` (M): best score of any alignment of `a[..i]` and `b[..j]`; its
//!   last column may be a substitution or either kind of gap.
//! - `gap_a` (Ga): best score whose last column places `a[i]` against a gap
//!   (a vertical move).
//! - `gap_b` (Gb): best score whose last column places `b[j]` against a gap
//!   (a horizontal move).
//!
//! Unreachable boundary cells of the gap tables hold `f64::NEG_INFINITY`.

use crate::alignment::scoring::ScoringModel;
use std::io::{self, Write};
use std::ops::Index;

/// Dense row-major table of scores
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl ScoreMatrix {
    fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(
            i < self.rows && j < self.cols,
            "cell ({}, {}) outside {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        i * self.cols + j
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: f64) {
        let k = self.offset(i, j);
        self.cells[k] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[f64] {
        let start = self.offset(i, 0);
        &self.cells[start..start + self.cols]
    }

    /// Write the table one row per line, each cell left-aligned in a
    /// 15-character column.
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for i in 0..self.rows {
            for &value in self.row(i) {
                write!(out, "{:<15}", format_cell(value))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

fn format_cell(value: f64) -> String {
    if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{}", value)
    }
}

impl Index<(usize, usize)> for ScoreMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.cells[self.offset(i, j)]
    }
}

/// The three filled Gotoh tables for one pair of sequences
#[derive(Debug, Clone, PartialEq)]
pub struct GotohMatrices {
    best: ScoreMatrix,
    gap_a: ScoreMatrix,
    gap_b: ScoreMatrix,
}

impl GotohMatrices {
    /// Fill all three tables for `a` against `b`.
    pub fn build<T: Copy, S: ScoringModel<T> + ?Sized>(a: &[T], b: &[T], scoring: &S) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let gap_open = scoring.gap_open();
        let gap_extend = scoring.gap_extend();

        let mut best = ScoreMatrix::filled(rows, cols, 0.0);
        let mut gap_a = ScoreMatrix::filled(rows, cols, f64::NEG_INFINITY);
        let mut gap_b = ScoreMatrix::filled(rows, cols, f64::NEG_INFINITY);

        // A prefix of `a` against nothing is one gap run of length i.
        for i in 1..rows {
            let value = gap_open + i as f64 * gap_extend;
            gap_a.set(i, 0, value);
            best.set(i, 0, value);
        }

        for j in 1..cols {
            let value = gap_open + j as f64 * gap_extend;
            gap_b.set(0, j, value);
            best.set(0, j, value);
        }

        for i in 1..rows {
            let sym_a = a[i - 1];
            for j in 1..cols {
                let substitution = best[(i - 1, j - 1)] + scoring.score(sym_a, b[j - 1]);

                let vertical = (best[(i - 1, j)] + gap_open).max(gap_a[(i - 1, j)] + gap_extend);
                let horizontal =
                    (best[(i, j - 1)] + gap_open).max(gap_b[(i, j - 1)] + gap_extend);

                gap_a.set(i, j, vertical);
                gap_b.set(i, j, horizontal);
                best.set(i, j, substitution.max(vertical).max(horizontal));
            }
        }

        Self { best, gap_a, gap_b }
    }

    pub fn best(&self) -> &ScoreMatrix {
        &self.best
    }

    pub fn gap_a(&self) -> &ScoreMatrix {
        &self.gap_a
    }

    pub fn gap_b(&self) -> &ScoreMatrix {
        &self.gap_b
    }

    /// `(m + 1, n + 1)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.best.rows, self.best.cols)
    }

    /// Score of the full global alignment, `M[m][n]`.
    pub fn score(&self) -> f64 {
        self.best[(self.best.rows - 1, self.best.cols - 1)]
    }

    /// Dump all three tables under `M`, `Ga` and `Gb` headings.
    pub fn write_tables<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (name, matrix) in [("M", &self.best), ("Ga", &self.gap_a), ("Gb", &self.gap_b)] {
            writeln!(out, "{}:", name)?;
            matrix.write_table(out)?;
        }
        Ok(())
    }
}
