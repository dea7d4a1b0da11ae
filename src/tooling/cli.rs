//! CLI Tooling
//!
//! Startup flags for the shell. Flags override the layered configuration;
//! the resulting [`CliContext`] loads the tree and runs the requested mode.

use crate::config::{ConfigLoader, ShellConfig};
use crate::error::ShellError;
use crate::logging::LogOverrides;
use crate::repl;
use crate::shell::Shell;
use crate::tree;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// vfsh - shell over a read-only virtual filesystem
#[derive(Parser, Debug)]
#[command(name = "vfsh", version)]
#[command(about = "Navigate a virtual filesystem loaded from an XML description")]
pub struct Cli {
    /// XML tree source (default: vfs.xml in the current directory)
    #[arg(long, value_name = "FILE")]
    pub vfs: Option<PathBuf>,

    /// Run commands from a script file instead of reading them interactively
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Shell name shown in the prompt
    #[arg(long)]
    pub name: Option<String>,

    /// Do not read or write the line history file
    #[arg(long)]
    pub no_history: bool,

    /// Enable verbose logging (debug level)
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply the non-logging flags on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut ShellConfig) {
        if let Some(ref vfs) = self.vfs {
            config.vfs.source = vfs.clone();
        }
        if let Some(ref name) = self.name {
            config.vfs.name = name.clone();
        }
        if self.no_history {
            config.history.enabled = false;
        }
    }

    /// Logging flags. These outrank the `VFSH_LOG*` variables, so they are
    /// kept apart from the merged configuration.
    pub fn log_overrides(&self) -> LogOverrides {
        let level = self
            .log_level
            .clone()
            .or_else(|| self.verbose.then(|| "debug".to_string()));
        LogOverrides {
            level,
            format: self.log_format.clone(),
            output: self.log_output.clone(),
            file: self.log_file.clone(),
        }
    }
}

/// Resolved startup state.
pub struct CliContext {
    config: ShellConfig,
    script: Option<PathBuf>,
}

impl CliContext {
    /// Load configuration for `cli`, looking for `vfsh.toml` in `launch_dir`.
    pub fn new(cli: &Cli, launch_dir: PathBuf) -> Result<Self, ShellError> {
        let mut config = match &cli.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&launch_dir)?,
        };
        cli.apply_overrides(&mut config);
        if config.vfs.source.is_relative() {
            config.vfs.source = launch_dir.join(&config.vfs.source);
        }

        Ok(Self {
            config,
            script: cli.script.clone(),
        })
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Load the tree and build the shell over it.
    pub fn build_shell(&self) -> Shell {
        let root = tree::load(&self.config.vfs.source);
        Shell::new(self.config.vfs.name.clone(), root)
    }

    /// Run the script if one was given, otherwise the interactive loop.
    pub fn execute(&self) -> Result<(), ShellError> {
        let mut shell = self.build_shell();
        match &self.script {
            Some(script) => {
                let stdout = std::io::stdout();
                let stderr = std::io::stderr();
                repl::run_script(&mut shell, script, &mut stdout.lock(), &mut stderr.lock())
            }
            None => {
                let history = self.config.history.resolve_file();
                info!(source = %self.config.vfs.source.display(), "Starting interactive session");
                repl::run_interactive(&mut shell, history)
            }
        }
    }
}
