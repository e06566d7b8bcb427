//! Code summary providers
//!
//! A [`SummaryProvider`] turns one file's source into a short structured
//! explanation. [`GeminiClient`] is the only live implementation.

pub mod gemini;

pub use gemini::GeminiClient;

use crate::error::ApiError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A file to summarize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub file_name: String,
    pub path: String,
    pub file_type: String,
    pub code: String,
}

impl SummaryRequest {
    /// Request for a blob at `path`; `file_name` is its last component.
    pub fn for_blob(path: &str, code: impl Into<String>) -> Self {
        let file_name = path.rsplit('/').next().unwrap_or(path).to_string();
        Self {
            file_name,
            path: path.to_string(),
            file_type: crate::types::BLOB_TYPE.to_string(),
            code: code.into(),
        }
    }

    /// Copy whose `code` holds at most `max_chars` characters.
    pub fn truncated(&self, max_chars: usize) -> Self {
        let mut request = self.clone();
        request.code = truncate_chars(&self.code, max_chars).to_string();
        request
    }
}

/// Structured summary returned by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSummary {
    #[serde(default)]
    pub file_name: String,
    pub summary: String,
    #[serde(default)]
    pub path: String,
}

#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn summarize(&self, request: &SummaryRequest) -> Result<CodeSummary, ApiError>;
}

/// Longest prefix of `text` with at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
