//! Listing entries consumed by the graph builder.

use crate::types::TREE_TYPE;
use serde::{Deserialize, Serialize};

/// One row of a recursive repository listing.
///
/// Both fields are optional on the wire so that a malformed row is skipped by
/// the builder instead of failing the whole listing. Extra fields GitHub sends
/// (`mode`, `sha`, `size`, `url`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    #[serde(default)]
    pub path: Option<String>,

    #[serde(rename = "type", default)]
    pub entry_type: Option<String>,
}

impl PathEntry {
    pub fn new(path: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            entry_type: Some(entry_type.into()),
        }
    }

    /// Directory entry shorthand.
    pub fn tree(path: impl Into<String>) -> Self {
        Self::new(path, TREE_TYPE)
    }

    /// File entry shorthand.
    pub fn blob(path: impl Into<String>) -> Self {
        Self::new(path, crate::types::BLOB_TYPE)
    }

    pub fn is_tree(&self) -> bool {
        self.entry_type.as_deref() == Some(TREE_TYPE)
    }
}

/// Raw listing document accepted by the offline builder.
///
/// Either a bare array of entries or a GitHub tree response with a `tree` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListingDocument {
    Entries(Vec<PathEntry>),
    TreeResponse {
        tree: Vec<PathEntry>,
        #[serde(default)]
        truncated: bool,
    },
}

impl ListingDocument {
    pub fn into_entries(self) -> Vec<PathEntry> {
        match self {
            ListingDocument::Entries(entries) => entries,
            ListingDocument::TreeResponse { tree, .. } => tree,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, ListingDocument::TreeResponse { truncated: true, .. })
    }
}
