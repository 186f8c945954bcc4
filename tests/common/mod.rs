#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Create a FASTA file with the given content
pub fn create_test_fasta(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

/// FASTA text for a two-record pairwise input
pub fn pair_fasta(a: &str, b: &str) -> String {
    format!(">a first\n{}\n>b second\n{}\n", a, b)
}

/// Helper to run the gotoh binary
pub fn gotoh_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gotoh").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("GOTOH_LOG");
    cmd
}
