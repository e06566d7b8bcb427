//! Error types shared across the crate.
//!
//! The graph builder itself never fails; every collaborator call (configuration,
//! GitHub, summary provider, CLI I/O) reports through [`ApiError`].

use thiserror::Error;

/// Errors surfaced by GitGraph operations.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Not authenticated: {0}")]
    Unauthorized(String),

    /// An upstream HTTP call returned a non-success status.
    #[error("Upstream request failed ({status}): {message}")]
    UpstreamError { status: u16, message: String },

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status a caller should surface for this error.
    ///
    /// Upstream failures keep the status GitHub or the provider returned.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::UpstreamError { status, .. } => *status,
            ApiError::Unauthorized(_) => 401,
            ApiError::InvalidInput(_) => 400,
            ApiError::ProviderError(_) => 502,
            ApiError::ConfigError(_)
            | ApiError::ProviderNotConfigured(_)
            | ApiError::IoError(_)
            | ApiError::SerializationError(_) => 500,
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::UpstreamError {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => ApiError::ProviderError(format!("HTTP request failed: {}", err)),
        }
    }
}
