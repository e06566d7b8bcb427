//! ConfigLoader facade delegating to merge service.

use super::merge::MergeService;
use super::GitGraphConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from standard files and environment, then validate.
    pub fn load(dir: &Path) -> Result<GitGraphConfig, ApiError> {
        let config = MergeService::load(dir)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file, then validate.
    pub fn load_from_file(path: &Path) -> Result<GitGraphConfig, ApiError> {
        let config = MergeService::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }
}
