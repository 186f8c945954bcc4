//! Core utilities and types shared across all gotoh crates

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{default_config, load_config, save_config, Config};
pub use error::{GotohError, GotohResult};

/// Version information for the gotoh project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
