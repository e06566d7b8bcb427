//! MergeService: orchestrates sources, applies merge policy, deserializes to GitGraphConfig.

use crate::config::sources::{environment, global_file, local_file};
use crate::config::GitGraphConfig;
use config::{ConfigError, File};
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources.
    /// Precedence: global file (lowest) -> local file -> GITGRAPH__ env -> legacy env (highest).
    pub fn load(dir: &Path) -> Result<GitGraphConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = local_file::add_to_builder(builder, dir)?;
        let builder = environment::add_to_builder(builder)?;
        let builder = environment::add_legacy_overrides(builder)?;

        builder.build()?.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<GitGraphConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;
        let builder = environment::add_legacy_overrides(builder)?;

        builder.build()?.try_deserialize()
    }
}
