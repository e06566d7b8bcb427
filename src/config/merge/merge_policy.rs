//! Base builder shared by every load path.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with the defaults that matter before any file is read.
///
/// Everything else falls back to serde defaults on the config structs, so a
/// missing section deserializes to its `Default`.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("github.api_base_url", "https://api.github.com")?
        .set_default("gemini.endpoint", "https://generativelanguage.googleapis.com/v1beta")
}
