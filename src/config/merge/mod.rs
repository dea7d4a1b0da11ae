//! Source composition for [`crate::config::ShellConfig`].

pub mod service;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with the defaults every layer is merged over.
pub(crate) fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("vfs.source", "vfs.xml")?
        .set_default("vfs.name", crate::shell::DEFAULT_SHELL_NAME)?
        .set_default("history.enabled", true)
}
