//! Listing → filtered graph pipeline.

use crate::error::ApiError;
use crate::source::{RepoRef, RepositorySource, TreeListing};
use crate::tree::{GraphPayload, InclusionPolicy, TreeBuilder};
use tracing::{info, warn};

/// Fetches a branch listing from a [`RepositorySource`] and builds its graph.
pub struct RepositoryGraphService<S> {
    source: S,
    builder: TreeBuilder,
}

impl<S: RepositorySource> RepositoryGraphService<S> {
    pub fn new(source: S, policy: InclusionPolicy) -> Self {
        Self {
            source,
            builder: TreeBuilder::new(policy),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Recursive listing of `branch`, or of the default branch when `None`.
    pub async fn listing(
        &self,
        repo: &RepoRef,
        branch: Option<&str>,
    ) -> Result<TreeListing, ApiError> {
        let branch = match branch.map(str::trim).filter(|b| !b.is_empty()) {
            Some(b) => b.to_string(),
            None => self.source.default_branch(repo).await?,
        };
        let listing = self.source.list_tree(repo, &branch).await?;
        if listing.truncated {
            warn!(
                repo = %repo,
                branch = %listing.branch,
                entries = listing.entries.len(),
                "Host truncated the recursive listing; graph will be incomplete"
            );
        }
        Ok(listing)
    }

    pub async fn graph(
        &self,
        repo: &RepoRef,
        branch: Option<&str>,
    ) -> Result<GraphPayload, ApiError> {
        let listing = self.listing(repo, branch).await?;
        let payload = self.builder.build(&listing.entries);
        info!(
            repo = %repo,
            branch = %listing.branch,
            entries = listing.entries.len(),
            nodes = payload.nodes.len(),
            edges = payload.edges.len(),
            "Built repository graph"
        );
        Ok(payload)
    }
}
