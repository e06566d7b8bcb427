//! Environment variable sources: `GITGRAPH__SECTION__KEY` plus flat legacy
//! credentials (`GITHUB_TOKEN`, `GEMINI_API_KEY`).

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Flat variables mapped onto nested keys. Applied last, so they win.
pub const LEGACY_VARIABLES: &[(&str, &str)] = &[
    ("GITHUB_TOKEN", "github.token"),
    ("GEMINI_API_KEY", "gemini.api_key"),
];

/// Add the namespaced environment overlay.
/// Uses GITGRAPH prefix and __ as separator for nested keys.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix("GITGRAPH")
            .separator("__")
            .try_parsing(true),
    ))
}

/// Override nested keys from the flat legacy variables that are set and non-empty.
pub fn add_legacy_overrides(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder;
    for (variable, key) in LEGACY_VARIABLES {
        let value = std::env::var(variable)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        builder = builder.set_override_option(*key, value)?;
    }
    Ok(builder)
}
