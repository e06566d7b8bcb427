//! Repository sources
//!
//! The graph builder only needs a listing; this module is where listings come
//! from. [`RepositorySource`] is the port, [`GithubClient`] the REST adapter,
//! and [`CredentialResolver`] supplies the bearer token the adapter sends.

pub mod credentials;
pub mod github;
pub mod service;

pub use credentials::{Credential, CredentialResolver, TokenCredentialResolver};
pub use github::GithubClient;
pub use service::RepositoryGraphService;

use crate::error::ApiError;
use crate::tree::PathEntry;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// `owner/name` repository reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepoRef {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            ApiError::InvalidInput(format!(
                "Invalid repository '{}': expected <owner>/<name>",
                s
            ))
        };
        let (owner, name) = s.trim().split_once('/').ok_or_else(invalid)?;
        let name = name.strip_suffix(".git").unwrap_or(name);
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }
        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A recursive listing of one branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeListing {
    pub branch: String,
    pub entries: Vec<PathEntry>,
    /// The host cut the listing short; the graph will be incomplete.
    #[serde(default)]
    pub truncated: bool,
}

/// Repository metadata shown by `repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub full_name: String,
    pub owner: String,
    pub private: bool,
    pub default_branch: String,
    pub description: Option<String>,
    pub html_url: String,
}

/// Decoded file content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    pub path: String,
    pub content: String,
}

/// Port for a repository host.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Repositories visible to the authenticated user.
    async fn list_repositories(&self) -> Result<Vec<RepoSummary>, ApiError>;

    /// The repository's default branch name.
    async fn default_branch(&self, repo: &RepoRef) -> Result<String, ApiError>;

    /// Full recursive listing of `branch`.
    async fn list_tree(&self, repo: &RepoRef, branch: &str) -> Result<TreeListing, ApiError>;

    /// Content of a single file on the default branch.
    async fn file_content(&self, repo: &RepoRef, path: &str) -> Result<FileContent, ApiError>;
}
