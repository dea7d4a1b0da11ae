//! vfsh CLI Binary
//!
//! Usage:
//!   vfsh                          # Interactive shell over ./vfs.xml
//!   vfsh --vfs tree.xml           # Use another tree source
//!   vfsh --script startup.vsh     # Replay commands from a file

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use vfsh::logging;
use vfsh::tooling::cli::{Cli, CliContext};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let launch_dir = std::env::current_dir().context("Failed to determine working directory")?;
    let context = CliContext::new(cli, launch_dir).context("Failed to load configuration")?;

    let overrides = cli.log_overrides();
    if let Err(e) = logging::init_logging(Some(&context.config().logging), &overrides) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    context.execute().context("Shell session failed")?;
    Ok(())
}
