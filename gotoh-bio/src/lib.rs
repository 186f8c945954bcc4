//! Pairwise global alignment with affine gap costs, plus the FASTA input it reads

pub mod alignment;
pub mod formats;
pub mod sequence;

// Re-export commonly used types
pub use alignment::{
    align, AffineScoring, AlignedSymbol, AlignmentResult, AlignmentStats, GotohAligner,
    GotohMatrices, ScoringModel,
};
pub use formats::fasta::{parse_fasta, read_pair};
pub use sequence::SequenceRecord;
