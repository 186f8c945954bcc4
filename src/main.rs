use clap::Parser;
use colored::*;
use gotoh::cli::{Cli, Commands};
use gotoh::GotohError;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins, then -v flags, then GOTOH_LOG
    let fallback = cli
        .verbosity_filter()
        .map(str::to_string)
        .or_else(|| std::env::var("GOTOH_LOG").ok())
        .unwrap_or_else(|| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = e
            .downcast_ref::<GotohError>()
            .map(GotohError::exit_code)
            .unwrap_or(1);
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Align(args) => gotoh::cli::commands::align::run(args),
        Commands::Config(args) => gotoh::cli::commands::config::run(args),
    }
}
