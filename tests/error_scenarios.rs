mod common;

use anyhow::Result;
use common::*;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_missing_input_file() -> Result<()> {
    let dir = TempDir::new()?;

    gotoh_cmd()
        .arg("align")
        .arg(dir.path().join("absent.fasta"))
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Error"));
    Ok(())
}

#[test]
fn test_wrong_number_of_records() -> Result<()> {
    let dir = TempDir::new()?;
    let input = create_test_fasta(dir.path(), "three.fasta", ">a\nA\n>b\nC\n>c\nG\n")?;

    gotoh_cmd()
        .arg("align")
        .arg(&input)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("expected exactly two sequences, found 3"));
    Ok(())
}

#[test]
fn test_malformed_fasta() -> Result<()> {
    let dir = TempDir::new()?;
    let input = create_test_fasta(dir.path(), "bad.fasta", "ACGT\n>a\nA\n")?;

    gotoh_cmd()
        .arg("align")
        .arg(&input)
        .assert()
        .failure()
        .code(4);
    Ok(())
}

#[test]
fn test_invalid_config_file() -> Result<()> {
    let dir = TempDir::new()?;
    let input = create_test_fasta(dir.path(), "pair.fasta", &pair_fasta("A", "A"))?;
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[output]\nformat = \"xml\"\n")?;

    gotoh_cmd()
        .arg("align")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
    Ok(())
}

#[test]
fn test_sequence_over_length_limit() -> Result<()> {
    let dir = TempDir::new()?;
    let input = create_test_fasta(dir.path(), "pair.fasta", &pair_fasta("ACGTACGT", "ACG"))?;

    gotoh_cmd()
        .arg("align")
        .arg(&input)
        .args(["--max-length", "5"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("above the limit of 5"));
    Ok(())
}

#[test]
fn test_blank_prompt_answer() -> Result<()> {
    gotoh_cmd()
        .arg("align")
        .write_stdin("\n")
        .assert()
        .failure()
        .code(4);
    Ok(())
}
