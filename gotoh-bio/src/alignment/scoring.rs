/// Scoring models for affine-gap alignment
use gotoh_core::config::ScoringConfig;

/// Symbol-pair scoring plus the two affine gap terms.
///
/// `T` is the symbol type: `u8` for raw bytes, `char` for decoded text.
/// All values are added to a path score as-is, so penalties are expected to
/// be negative. Nothing in the aligner relies on their sign.
pub trait ScoringModel<T = u8> {
    fn score(&self, a: T, b: T) -> f64;
    fn gap_open(&self) -> f64;
    fn gap_extend(&self) -> f64;
}

impl<T, S: ScoringModel<T> + ?Sized> ScoringModel<T> for &S {
    fn score(&self, a: T, b: T) -> f64 {
        (**self).score(a, b)
    }

    fn gap_open(&self) -> f64 {
        (**self).gap_open()
    }

    fn gap_extend(&self) -> f64 {
        (**self).gap_extend()
    }
}

/// Match/mismatch scoring with affine gaps, for any symbol type with equality
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineScoring {
    match_score: f64,
    mismatch: f64,
    gap_open: f64,
    gap_extend: f64,
}

impl AffineScoring {
    pub const DEFAULT_MATCH: f64 = 1.0;
    pub const DEFAULT_MISMATCH: f64 = -4.0;
    pub const DEFAULT_GAP_OPEN: f64 = -10.0;
    pub const DEFAULT_GAP_EXTEND: f64 = -0.5;

    pub fn new(match_score: f64, mismatch: f64, gap_open: f64, gap_extend: f64) -> Self {
        Self {
            match_score,
            mismatch,
            gap_open,
            gap_extend,
        }
    }

    pub fn with_scores(mut self, match_score: f64, mismatch: f64) -> Self {
        self.match_score = match_score;
        self.mismatch = mismatch;
        self
    }

    pub fn with_gap_penalties(mut self, gap_open: f64, gap_extend: f64) -> Self {
        self.gap_open = gap_open;
        self.gap_extend = gap_extend;
        self
    }

    pub fn match_score(&self) -> f64 {
        self.match_score
    }

    pub fn mismatch(&self) -> f64 {
        self.mismatch
    }

    pub fn gap_open(&self) -> f64 {
        self.gap_open
    }

    pub fn gap_extend(&self) -> f64 {
        self.gap_extend
    }
}

impl Default for AffineScoring {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MATCH,
            Self::DEFAULT_MISMATCH,
            Self::DEFAULT_GAP_OPEN,
            Self::DEFAULT_GAP_EXTEND,
        )
    }
}

impl From<ScoringConfig> for AffineScoring {
    fn from(config: ScoringConfig) -> Self {
        Self::new(
            config.match_score,
            config.mismatch,
            config.gap_open,
            config.gap_extend,
        )
    }
}

impl<T: PartialEq> ScoringModel<T> for AffineScoring {
    fn score(&self, a: T, b: T) -> f64 {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }

    fn gap_open(&self) -> f64 {
        self.gap_open
    }

    fn gap_extend(&self) -> f64 {
        self.gap_extend
    }
}
