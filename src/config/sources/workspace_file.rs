//! Launch directory config file: `./vfsh.toml`

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

/// File name looked up in the launch directory.
pub const FILE_NAME: &str = "vfsh.toml";

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    launch_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(File::from(launch_dir.join(FILE_NAME)).required(false)))
}
