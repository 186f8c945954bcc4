//! Core error types for gotoh

use thiserror::Error;

/// Main error type for gotoh operations
#[derive(Error, Debug)]
pub enum GotohError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for gotoh operations
pub type GotohResult<T> = Result<T, GotohError>;

impl From<serde_json::Error> for GotohError {
    fn from(err: serde_json::Error) -> Self {
        GotohError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for GotohError {
    fn from(err: anyhow::Error) -> Self {
        GotohError::Other(err.to_string())
    }
}

impl GotohError {
    /// Process exit code the command line reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            GotohError::Configuration(_) => 2,
            GotohError::Io(_) => 3,
            GotohError::Parse(_) | GotohError::InvalidInput(_) => 4,
            GotohError::Serialization(_) | GotohError::Other(_) => 1,
        }
    }
}
