//! Bearer credential resolution for repository hosts.

use crate::error::ApiError;
use std::fmt;

/// A bearer token. `Debug` never shows the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

pub trait CredentialResolver: Send + Sync {
    fn resolve(&self) -> Result<Credential, ApiError>;
}

/// Resolves an explicit token first (CLI `--token`), then the configured one
/// (`github.token`, fed by `GITHUB_TOKEN`).
#[derive(Debug, Clone, Default)]
pub struct TokenCredentialResolver {
    explicit: Option<String>,
    configured: Option<String>,
}

impl TokenCredentialResolver {
    pub fn new(explicit: Option<String>, configured: Option<String>) -> Self {
        Self {
            explicit,
            configured,
        }
    }
}

fn usable(token: &Option<String>) -> Option<&str> {
    token.as_deref().map(str::trim).filter(|t| !t.is_empty())
}

impl CredentialResolver for TokenCredentialResolver {
    fn resolve(&self) -> Result<Credential, ApiError> {
        usable(&self.explicit)
            .or_else(|| usable(&self.configured))
            .map(Credential::new)
            .ok_or_else(|| {
                ApiError::Unauthorized(
                    "GitHub token required (pass --token, set GITHUB_TOKEN, or add github.token to config)"
                        .to_string(),
                )
            })
    }
}
