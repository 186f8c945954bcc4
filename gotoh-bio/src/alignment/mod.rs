pub mod gotoh;
pub mod matrix;
pub mod result;
pub mod scoring;
pub mod traceback;

pub use gotoh::{align, GotohAligner};
pub use matrix::{GotohMatrices, ScoreMatrix};
pub use result::{AlignedSymbol, AlignmentResult, AlignmentStats};
pub use scoring::{AffineScoring, ScoringModel};
