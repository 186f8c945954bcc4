pub mod align;
pub mod config;
