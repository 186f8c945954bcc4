//! Configuration types for gotoh

use crate::GotohError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// The four scoring scalars. Penalties are stored signed and added as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_match_score")]
    pub match_score: f64,
    #[serde(default = "default_mismatch")]
    pub mismatch: f64,
    #[serde(default = "default_gap_open")]
    pub gap_open: f64,
    #[serde(default = "default_gap_extend")]
    pub gap_extend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Glyph printed for gap columns
    #[serde(default = "default_gap_char")]
    pub gap_char: char,
    /// "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Columns per block in text output (0 = no wrapping)
    #[serde(default)]
    pub line_width: usize,
    #[serde(default)]
    pub show_match_line: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Longest sequence accepted for alignment (0 = unlimited)
    #[serde(default = "default_max_sequence_length")]
    pub max_sequence_length: usize,
}

fn default_match_score() -> f64 { 1.0 }
fn default_mismatch() -> f64 { -4.0 }
fn default_gap_open() -> f64 { -10.0 }
fn default_gap_extend() -> f64 { -0.5 }
fn default_gap_char() -> char { '_' }
fn default_format() -> String { "text".to_string() }
fn default_max_sequence_length() -> usize { 20_000 }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_score: default_match_score(),
            mismatch: default_mismatch(),
            gap_open: default_gap_open(),
            gap_extend: default_gap_extend(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            gap_char: default_gap_char(),
            format: default_format(),
            line_width: 0,
            show_match_line: false,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_sequence_length: default_max_sequence_length(),
        }
    }
}

impl Config {
    /// Reject values the rest of the program cannot work with.
    pub fn validate(&self) -> Result<(), GotohError> {
        let s = &self.scoring;
        for (name, value) in [
            ("match_score", s.match_score),
            ("mismatch", s.mismatch),
            ("gap_open", s.gap_open),
            ("gap_extend", s.gap_extend),
        ] {
            if !value.is_finite() {
                return Err(GotohError::Configuration(format!(
                    "scoring.{} must be a finite number, got {}",
                    name, value
                )));
            }
        }

        match self.output.format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(GotohError::Configuration(format!(
                    "output.format must be \"text\" or \"json\", got \"{}\"",
                    other
                )))
            }
        }

        if self.output.gap_char.is_whitespace() {
            return Err(GotohError::Configuration(
                "output.gap_char must be a visible character".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, GotohError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| GotohError::Configuration(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), GotohError> {
    std::fs::write(path, config_to_string(config)?)?;
    Ok(())
}

pub fn config_to_string(config: &Config) -> Result<String, GotohError> {
    toml::to_string_pretty(config)
        .map_err(|e| GotohError::Configuration(format!("Failed to serialize config: {}", e)))
}
