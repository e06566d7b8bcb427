//! Source composition and deserialization into [`GitGraphConfig`](crate::config::GitGraphConfig).

pub mod merge_policy;
pub mod service;

pub use service::MergeService;
