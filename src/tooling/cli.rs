//! CLI Tooling
//!
//! Command-line interface for GitGraph. Each command loads nothing beyond the
//! effective configuration; network commands run on a per-command runtime.

use crate::config::{ConfigLoader, GitGraphConfig};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::provider::{GeminiClient, SummaryProvider, SummaryRequest};
use crate::source::{
    GithubClient, RepoRef, RepositoryGraphService, RepositorySource, TokenCredentialResolver,
};
use crate::tooling::format::{format_graph_text, format_repos_text, format_summary_text};
use crate::tree::{ListingDocument, TreeBuilder};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::future::Future;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// GitGraph CLI - repository trees as node/edge graphs
#[derive(Parser)]
#[command(name = "gitgraph")]
#[command(about = "Turn GitHub repository trees into navigable node/edge graphs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// GitHub token (overrides github.token and GITHUB_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold logging flags over the configured `[logging]` section.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.enabled = true;
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.enabled = true;
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a repository tree and print its graph
    Graph {
        /// Repository as <owner>/<name>
        repo: String,
        /// Branch to list (default: the repository's default branch)
        #[arg(long)]
        branch: Option<String>,
        /// Output format (json or text)
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Build a graph offline from a listing file
    Build {
        /// JSON listing: an entry array or a GitHub tree response ("-" for stdin)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output format (json or text)
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Print the raw {path, type} listing of a branch
    Listing {
        /// Repository as <owner>/<name>
        repo: String,
        #[arg(long)]
        branch: Option<String>,
    },
    /// List repositories visible to the token
    Repos {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print one file's content
    File {
        /// Repository as <owner>/<name>
        repo: String,
        /// Path inside the repository
        path: String,
    },
    /// Summarize one file with the configured provider
    Summarize {
        /// Repository as <owner>/<name>
        repo: String,
        /// Path inside the repository
        path: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show whether paths pass the inclusion filter
    Filter {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML (secrets redacted)
    Show,
}

/// CLI context holding the effective configuration
pub struct CliContext {
    config: GitGraphConfig,
    token: Option<String>,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(config_path: Option<PathBuf>, token: Option<String>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&std::env::current_dir()?)?,
        };
        Ok(Self::with_config(config, token))
    }

    pub fn with_config(config: GitGraphConfig, token: Option<String>) -> Self {
        Self { config, token }
    }

    pub fn config(&self) -> &GitGraphConfig {
        &self.config
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Graph {
                repo,
                branch,
                format,
            } => {
                let format = OutputFormat::parse(format)?;
                let repo: RepoRef = repo.parse()?;
                let service = RepositoryGraphService::new(self.github()?, self.config.filter.clone());
                let payload = run_async(service.graph(&repo, branch.as_deref()))?;
                match format {
                    OutputFormat::Json => to_json(&payload),
                    OutputFormat::Text => Ok(format_graph_text(&repo.to_string(), &payload)),
                }
            }
            Commands::Build { input, format } => {
                let format = OutputFormat::parse(format)?;
                let document = read_listing(input.as_deref())?;
                if document.is_truncated() {
                    warn!("Input listing is marked truncated; graph will be incomplete");
                }
                let entries = document.into_entries();
                let payload = TreeBuilder::new(self.config.filter.clone()).build(&entries);
                info!(entries = entries.len(), nodes = payload.nodes.len(), "Built offline graph");
                match format {
                    OutputFormat::Json => to_json(&payload),
                    OutputFormat::Text => Ok(format_graph_text("Graph", &payload)),
                }
            }
            Commands::Listing { repo, branch } => {
                let repo: RepoRef = repo.parse()?;
                let service = RepositoryGraphService::new(self.github()?, self.config.filter.clone());
                let listing = run_async(service.listing(&repo, branch.as_deref()))?;
                to_json(&listing.entries)
            }
            Commands::Repos { format } => {
                let format = OutputFormat::parse(format)?;
                let github = self.github()?;
                let repos = run_async(github.list_repositories())?;
                match format {
                    OutputFormat::Json => to_json(&repos),
                    OutputFormat::Text => Ok(format_repos_text(&repos)),
                }
            }
            Commands::File { repo, path } => {
                let repo: RepoRef = repo.parse()?;
                let github = self.github()?;
                let file = run_async(github.file_content(&repo, path))?;
                Ok(file.content)
            }
            Commands::Summarize { repo, path, format } => {
                let format = OutputFormat::parse(format)?;
                let repo: RepoRef = repo.parse()?;
                let github = self.github()?;
                let gemini = GeminiClient::new(&self.config.gemini)?;
                let summary = run_async(async {
                    let file = github.file_content(&repo, path).await?;
                    let request = SummaryRequest::for_blob(&file.path, file.content);
                    gemini.summarize(&request).await
                })?;
                match format {
                    OutputFormat::Json => to_json(&summary),
                    OutputFormat::Text => Ok(format_summary_text(&summary)),
                }
            }
            Commands::Filter { paths } => Ok(self.format_filter_decisions(paths)),
            Commands::Config { command } => match command {
                ConfigCommands::Show => toml::to_string_pretty(&self.config.redacted())
                    .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e))),
            },
        }
    }

    fn github(&self) -> Result<GithubClient, ApiError> {
        let credentials = TokenCredentialResolver::new(
            self.token.clone(),
            self.config.github.token.clone(),
        );
        GithubClient::new(&self.config.github, Arc::new(credentials))
    }

    fn format_filter_decisions(&self, paths: &[String]) -> String {
        paths
            .iter()
            .map(|path| {
                let decision = if self.config.filter.should_include(path) {
                    "include"
                } else {
                    "exclude"
                };
                format!("{}\t{}", decision, path)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self, ApiError> {
        match value {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(ApiError::InvalidInput(format!(
                "Invalid format: {} (must be 'json' or 'text')",
                other
            ))),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Drive a future to completion on a fresh current-thread runtime.
fn run_async<F, T>(future: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ApiError::ProviderError(format!("Failed to create runtime: {}", e)))?;
    rt.block_on(future)
}

/// Read a listing document from `path`, or stdin when absent or `-`.
fn read_listing(path: Option<&Path>) -> Result<ListingDocument, ApiError> {
    let raw = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    serde_json::from_str(&raw).map_err(|e| {
        ApiError::InvalidInput(format!(
            "Listing must be an array of {{path, type}} entries or a tree response: {}",
            e
        ))
    })
}
