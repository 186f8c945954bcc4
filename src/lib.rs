pub mod cli;

pub use gotoh_bio::{align, AffineScoring, AlignmentResult, GotohAligner};
pub use gotoh_core::{GotohError, GotohResult};
