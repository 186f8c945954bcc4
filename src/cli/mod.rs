pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gotoh",
    version = gotoh_core::VERSION,
    author = gotoh_core::AUTHORS,
    about = "Global pairwise alignment with affine gap penalties",
    long_about = "Aligns the two sequences of a FASTA file end to end using Gotoh's \
                  three-matrix dynamic program, where opening a gap costs more than \
                  extending one."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align the two sequences of a FASTA file
    Align(commands::align::AlignArgs),

    /// Print or write the default configuration
    Config(commands::config::ConfigArgs),
}

impl Cli {
    /// Log filter implied by `-v` flags, if any were given
    pub fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
