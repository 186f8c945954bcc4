/// Alignment results and the statistics derived from them
use serde::Serialize;

/// One cell of an aligned row: a symbol from the input, or a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlignedSymbol<T = u8> {
    Residue(T),
    Gap,
}

impl<T: Copy> AlignedSymbol<T> {
    pub fn is_gap(&self) -> bool {
        matches!(self, AlignedSymbol::Gap)
    }

    pub fn residue(&self) -> Option<T> {
        match self {
            AlignedSymbol::Residue(s) => Some(*s),
            AlignedSymbol::Gap => None,
        }
    }
}

impl<T: Copy + Into<char>> AlignedSymbol<T> {
    fn render(&self, gap: char) -> char {
        match self {
            AlignedSymbol::Residue(s) => (*s).into(),
            AlignedSymbol::Gap => gap,
        }
    }
}

/// An optimal global alignment of `a` against `b`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentResult<T = u8> {
    pub aligned_a: Vec<AlignedSymbol<T>>,
    pub aligned_b: Vec<AlignedSymbol<T>>,
    pub score: f64,
}

/// Column counts over an alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentStats {
    pub columns: usize,
    pub matches: usize,
    pub mismatches: usize,
    /// Columns holding a gap in either row
    pub gaps: usize,
    /// Maximal runs of gaps within a single row
    pub gap_opens: usize,
}

impl<T> AlignmentResult<T> {
    pub fn empty() -> Self {
        Self {
            aligned_a: Vec::new(),
            aligned_b: Vec::new(),
            score: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.aligned_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }
}

impl<T: Copy + PartialEq> AlignmentResult<T> {
    /// Column pairs from left to right
    pub fn columns(&self) -> impl Iterator<Item = (AlignedSymbol<T>, AlignedSymbol<T>)> + '_ {
        self.aligned_a
            .iter()
            .copied()
            .zip(self.aligned_b.iter().copied())
    }

    /// '|' for match, 'X' for mismatch, ' ' for gap
    pub fn match_line(&self) -> String {
        self.columns()
            .map(|column| match column {
                (AlignedSymbol::Residue(x), AlignedSymbol::Residue(y)) if x == y => '|',
                (AlignedSymbol::Residue(_), AlignedSymbol::Residue(_)) => 'X',
                _ => ' ',
            })
            .collect()
    }

    pub fn stats(&self) -> AlignmentStats {
        let mut stats = AlignmentStats {
            columns: self.len(),
            ..AlignmentStats::default()
        };
        let mut prev_a_gap = false;
        let mut prev_b_gap = false;

        for (x, y) in self.columns() {
            match (x, y) {
                (AlignedSymbol::Residue(p), AlignedSymbol::Residue(q)) => {
                    if p == q {
                        stats.matches += 1;
                    } else {
                        stats.mismatches += 1;
                    }
                }
                _ => stats.gaps += 1,
            }

            if x.is_gap() && !prev_a_gap {
                stats.gap_opens += 1;
            }
            if y.is_gap() && !prev_b_gap {
                stats.gap_opens += 1;
            }
            prev_a_gap = x.is_gap();
            prev_b_gap = y.is_gap();
        }

        stats
    }

    /// Fraction of columns that are matches (0.0 for an empty alignment)
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.stats().matches as f64 / self.len() as f64
    }
}

impl<T: Copy + Into<char>> AlignmentResult<T> {
    pub fn render_a(&self, gap: char) -> String {
        self.aligned_a.iter().map(|s| s.render(gap)).collect()
    }

    pub fn render_b(&self, gap: char) -> String {
        self.aligned_b.iter().map(|s| s.render(gap)).collect()
    }
}
