//! Configuration
//!
//! Layered shell configuration: built-in defaults, the global config file, a
//! `vfsh.toml` in the launch directory, then `VFSH__*` environment variables.
//! Command-line flags are applied on top by the CLI layer.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::logging::LoggingConfig;
use crate::shell::DEFAULT_SHELL_NAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level shell configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub vfs: VfsConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the tree comes from and what the shell calls itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VfsConfig {
    /// XML tree source, relative to the launch directory unless absolute
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Name shown in the prompt and in error messages
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_source() -> PathBuf {
    PathBuf::from("vfs.xml")
}

fn default_name() -> String {
    DEFAULT_SHELL_NAME.to_string()
}

impl Default for VfsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            name: default_name(),
        }
    }
}

/// Interactive line history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// History file; None means `$XDG_DATA_HOME/vfsh/history.txt`
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            file: None,
        }
    }
}

impl HistoryConfig {
    /// History file to use, if history is enabled and a location is known.
    pub fn resolve_file(&self) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }
        self.file
            .clone()
            .or_else(|| xdg::data_home().map(|d| d.join("vfsh").join("history.txt")))
    }
}
