//! Per-directory config file: `<dir>/gitgraph.toml`.

use crate::config::xdg::LOCAL_CONFIG_FILE;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = dir.join(LOCAL_CONFIG_FILE);
    Ok(builder.add_source(File::from(path).required(false)))
}
