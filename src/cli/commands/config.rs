use crate::cli::output::success;
use clap::Args;
use gotoh_core::config::config_to_string;
use gotoh_core::{default_config, save_config};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Write the configuration here instead of printing it
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    let config = default_config();

    match args.output {
        Some(path) => {
            save_config(&path, &config)?;
            success(&format!("Wrote default configuration to {}", path.display()));
        }
        None => print!("{}", config_to_string(&config)?),
    }

    Ok(())
}
