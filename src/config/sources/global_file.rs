//! Global config file: `$XDG_CONFIG_HOME/vfsh/config.toml`

use crate::config::xdg;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};

/// Add the global config file, if a config home is known. The file is optional.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match xdg::config_home() {
        Some(home) => {
            let path = home.join("vfsh").join("config.toml");
            Ok(builder.add_source(File::from(path).required(false)))
        }
        None => Ok(builder),
    }
}
