//! Configuration
//!
//! Layered configuration for the GitHub source, the summary provider, the
//! inclusion filter and logging. See [`ConfigLoader`] for source precedence.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::tree::InclusionPolicy;
use reqwest::Url;
use serde::{Deserialize, Serialize};

const REDACTED: &str = "<redacted>";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitGraphConfig {
    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Inclusion filter tables applied before graph construction.
    #[serde(default)]
    pub filter: InclusionPolicy,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub REST API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_github_api")]
    pub api_base_url: String,

    /// Bearer token; also fed by the `GITHUB_TOKEN` environment variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_github_timeout")]
    pub timeout_secs: u64,

    /// Page size for repository listing (GitHub caps it at 100).
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_github_api() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    format!("gitgraph/{}", env!("CARGO_PKG_VERSION"))
}

fn default_github_timeout() -> u64 {
    15
}

fn default_per_page() -> u32 {
    100
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_github_api(),
            token: None,
            user_agent: default_user_agent(),
            timeout_secs: default_github_timeout(),
            per_page: default_per_page(),
        }
    }
}

/// Gemini summary provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_gemini_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// API key; also fed by the `GEMINI_API_KEY` environment variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_gemini_timeout")]
    pub timeout_secs: u64,

    /// Source longer than this many characters is truncated before sending.
    #[serde(default = "default_max_code_chars")]
    pub max_code_chars: usize,
}

fn default_gemini_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_gemini_timeout() -> u64 {
    30
}

fn default_max_code_chars() -> usize {
    20_000
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_gemini_endpoint(),
            model: default_gemini_model(),
            api_key: None,
            timeout_secs: default_gemini_timeout(),
            max_code_chars: default_max_code_chars(),
        }
    }
}

fn is_http_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

impl GitGraphConfig {
    /// Validate values the deserializer cannot check.
    pub fn validate(&self) -> Result<(), ApiError> {
        if !is_http_url(&self.github.api_base_url) {
            return Err(ApiError::ConfigError(format!(
                "Invalid github.api_base_url: {}",
                self.github.api_base_url
            )));
        }
        if self.github.timeout_secs == 0 {
            return Err(ApiError::ConfigError(
                "github.timeout_secs must be positive".to_string(),
            ));
        }
        if !(1..=100).contains(&self.github.per_page) {
            return Err(ApiError::ConfigError(format!(
                "github.per_page must be between 1 and 100, got {}",
                self.github.per_page
            )));
        }
        if !is_http_url(&self.gemini.endpoint) {
            return Err(ApiError::ConfigError(format!(
                "Invalid gemini.endpoint: {}",
                self.gemini.endpoint
            )));
        }
        if self.gemini.model.trim().is_empty() {
            return Err(ApiError::ConfigError(
                "gemini.model cannot be empty".to_string(),
            ));
        }
        if self.gemini.timeout_secs == 0 || self.gemini.max_code_chars == 0 {
            return Err(ApiError::ConfigError(
                "gemini.timeout_secs and gemini.max_code_chars must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Copy with secrets masked, for display.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.github.token.is_some() {
            config.github.token = Some(REDACTED.to_string());
        }
        if config.gemini.api_key.is_some() {
            config.gemini.api_key = Some(REDACTED.to_string());
        }
        config
    }
}
