pub mod fasta;

// Re-export commonly used functions
pub use fasta::{into_pair, parse_fasta, parse_fasta_from_bytes, parse_fasta_reader, read_pair};
