//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::ShellConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the standard files and environment.
    pub fn load(launch_dir: &Path) -> Result<ShellConfig, ConfigError> {
        MergeService::load(launch_dir)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<ShellConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
