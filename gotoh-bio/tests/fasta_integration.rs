use flate2::write::GzEncoder;
use flate2::Compression;
use gotoh_bio::formats::{parse_fasta, read_pair};
use gotoh_bio::GotohAligner;
use gotoh_core::GotohError;
use pretty_assertions::assert_eq;
use std::io::Write;
/// Integration tests for FASTA input
use tempfile::{Builder, NamedTempFile};

#[test]
fn test_parse_fasta_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, ">seq1 Test DNA sequence").unwrap();
    writeln!(temp_file, "ATGCATGC").unwrap();
    writeln!(temp_file, "ATGC").unwrap();
    writeln!(temp_file, ">seq2").unwrap();
    writeln!(temp_file, "ACDEFGHIKLMNPQRSTVWY").unwrap();
    temp_file.flush().unwrap();

    let records = parse_fasta(temp_file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "seq1");
    assert_eq!(records[0].description.as_deref(), Some("Test DNA sequence"));
    assert_eq!(records[0].sequence, "ATGCATGCATGC");
    assert_eq!(records[1].id, "seq2");
    assert_eq!(records[1].description, None);
}

#[test]
fn test_gzipped_fasta() {
    let temp_file = Builder::new().suffix(".fasta.gz").tempfile().unwrap();
    {
        let mut encoder = GzEncoder::new(temp_file.reopen().unwrap(), Compression::default());
        encoder.write_all(b">a\nGATTACA\n>b\nGCATGCT\n").unwrap();
        encoder.finish().unwrap();
    }

    let (a, b) = read_pair(temp_file.path()).unwrap();
    assert_eq!(a.sequence, "GATTACA");
    assert_eq!(b.sequence, "GCATGCT");
}

#[test]
fn test_read_pair_rejects_wrong_arity() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, ">a\nAC\n>b\nGT\n>c\nTT\n").unwrap();
    temp_file.flush().unwrap();

    match read_pair(temp_file.path()) {
        Err(GotohError::InvalidInput(msg)) => {
            assert_eq!(msg, "expected exactly two sequences, found 3")
        }
        other => panic!("Expected InvalidInput error, got {:?}", other),
    }
}

#[test]
fn test_read_pair_keeps_empty_sequence() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, ">empty\n>full\nACGT\n").unwrap();
    temp_file.flush().unwrap();

    let (a, b) = read_pair(temp_file.path()).unwrap();
    assert!(a.is_empty());
    assert_eq!(b.len(), 4);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = parse_fasta(dir.path().join("absent.fasta"));
    assert!(matches!(result, Err(GotohError::Io(_))));
}

#[test]
fn test_large_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    for i in 0..1000 {
        writeln!(temp_file, ">seq_{} Test sequence {}", i, i).unwrap();
        writeln!(temp_file, "ATGCATGCATGCATGCATGC").unwrap();
    }
    temp_file.flush().unwrap();

    let records = parse_fasta(temp_file.path()).unwrap();
    assert_eq!(records.len(), 1000);
    assert_eq!(records[999].id, "seq_999");
    assert!(records.iter().all(|r| r.len() == 20));
}

#[test]
fn test_multibyte_pair_aligns_per_character() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, ">a\nAéC\n>b\nAC\n").unwrap();
    temp_file.flush().unwrap();

    let (a, b) = read_pair(temp_file.path()).unwrap();
    let result = GotohAligner::default().align_records(&a, &b);

    assert_eq!(result.render_a('_'), "AéC");
    assert_eq!(result.render_b('_'), "A_C");
    assert_eq!(result.len(), 3);
    assert_eq!(result.score, -8.0);
}
