//! GitHub REST adapter for [`RepositorySource`].

use crate::config::GithubConfig;
use crate::error::ApiError;
use crate::source::credentials::CredentialResolver;
use crate::source::{FileContent, RepoRef, RepoSummary, RepositorySource, TreeListing};
use crate::tree::PathEntry;
use async_trait::async_trait;
use base64::Engine;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub REST API client.
pub struct GithubClient {
    client: Client,
    base_url: Url,
    per_page: u32,
    credentials: Arc<dyn CredentialResolver>,
}

#[derive(Deserialize)]
struct RepositoryResponse {
    default_branch: String,
}

#[derive(Deserialize)]
struct TreeResponse {
    tree: Vec<PathEntry>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Deserialize)]
struct RepositoryItem {
    name: String,
    full_name: String,
    owner: OwnerItem,
    #[serde(default)]
    private: bool,
    #[serde(default)]
    default_branch: String,
    description: Option<String>,
    #[serde(default)]
    html_url: String,
}

#[derive(Deserialize)]
struct OwnerItem {
    login: String,
}

#[derive(Deserialize)]
struct ContentsResponse {
    path: String,
    #[serde(rename = "type")]
    kind: String,
    content: Option<String>,
    encoding: Option<String>,
}

#[derive(Deserialize)]
struct GithubError {
    message: String,
}

impl From<RepositoryItem> for RepoSummary {
    fn from(item: RepositoryItem) -> Self {
        RepoSummary {
            name: item.name,
            full_name: item.full_name,
            owner: item.owner.login,
            private: item.private,
            default_branch: item.default_branch,
            description: item.description,
            html_url: item.html_url,
        }
    }
}

impl GithubClient {
    pub fn new(
        config: &GithubConfig,
        credentials: Arc<dyn CredentialResolver>,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            ApiError::ConfigError(format!(
                "Invalid github.api_base_url {}: {}",
                config.api_base_url, e
            ))
        })?;
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            per_page: config.per_page,
            credentials,
        })
    }

    /// Append path segments to the API base URL, percent-encoding each one.
    fn endpoint<'a, I>(&self, segments: I) -> Result<Url, ApiError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::ConfigError(format!("GitHub API URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let credential = self.credentials.resolve()?;
        debug!(url = %url, "GitHub request");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, credential.bearer())
            .header(ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::UpstreamError {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            ApiError::ProviderError(format!("Failed to parse GitHub response: {}", e))
        })
    }
}

#[async_trait]
impl RepositorySource for GithubClient {
    async fn list_repositories(&self) -> Result<Vec<RepoSummary>, ApiError> {
        let mut repositories = Vec::new();
        let mut page = 1u32;
        loop {
            let mut url = self.endpoint(["user", "repos"])?;
            url.query_pairs_mut()
                .append_pair("per_page", &self.per_page.to_string())
                .append_pair("page", &page.to_string());

            let items: Vec<RepositoryItem> = self.get_json(url).await?;
            let count = items.len();
            repositories.extend(items.into_iter().map(RepoSummary::from));
            if count < self.per_page as usize {
                break;
            }
            page += 1;
        }
        debug!(count = repositories.len(), "Listed repositories");
        Ok(repositories)
    }

    async fn default_branch(&self, repo: &RepoRef) -> Result<String, ApiError> {
        let url = self.endpoint(["repos", repo.owner.as_str(), repo.name.as_str()])?;
        let response: RepositoryResponse = self.get_json(url).await?;
        Ok(response.default_branch)
    }

    async fn list_tree(&self, repo: &RepoRef, branch: &str) -> Result<TreeListing, ApiError> {
        let mut url = self.endpoint([
            "repos",
            repo.owner.as_str(),
            repo.name.as_str(),
            "git",
            "trees",
            branch,
        ])?;
        url.query_pairs_mut().append_pair("recursive", "1");

        let response: TreeResponse = self.get_json(url).await?;
        Ok(reduce_tree(response, branch))
    }

    async fn file_content(&self, repo: &RepoRef, path: &str) -> Result<FileContent, ApiError> {
        let mut segments = vec!["repos", repo.owner.as_str(), repo.name.as_str(), "contents"];
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
        let url = self.endpoint(segments)?;

        let value: serde_json::Value = self.get_json(url).await?;
        if value.is_array() {
            return Err(ApiError::InvalidInput(format!(
                "{} in {} is a directory",
                path, repo
            )));
        }
        let contents: ContentsResponse = serde_json::from_value(value)?;
        decode_contents(contents)
    }
}

/// Tree items already deserialize to `{path, type}`; `mode`, `sha` and `size`
/// are dropped on the way in.
fn reduce_tree(response: TreeResponse, branch: &str) -> TreeListing {
    TreeListing {
        branch: branch.to_string(),
        entries: response.tree,
        truncated: response.truncated,
    }
}

fn decode_contents(contents: ContentsResponse) -> Result<FileContent, ApiError> {
    if contents.kind != "file" {
        return Err(ApiError::InvalidInput(format!(
            "{} is a {}, not a file",
            contents.path, contents.kind
        )));
    }
    let encoding = contents.encoding.as_deref().unwrap_or("base64");
    if encoding != "base64" {
        return Err(ApiError::InvalidInput(format!(
            "{} uses unsupported encoding '{}'",
            contents.path, encoding
        )));
    }
    let content = decode_base64_text(contents.content.as_deref().unwrap_or_default())?;
    Ok(FileContent {
        path: contents.path,
        content,
    })
}

/// Decode GitHub's line-wrapped base64 into UTF-8 text.
fn decode_base64_text(raw: &str) -> Result<String, ApiError> {
    let compact: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| ApiError::InvalidInput(format!("Invalid base64 content: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|_| ApiError::InvalidInput("File content is not valid UTF-8".to_string()))
}

/// GitHub error bodies carry a `message`; fall back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<GithubError>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.trim().to_string())
}
