//! Repository tree graph
//!
//! Converts the flat listing returned by a repository host into a navigable
//! graph: one node per distinct path plus a synthetic root, and one `contains`
//! edge per parent/child pair.

pub mod builder;
pub mod entry;
pub mod filter;
pub mod node;

pub use builder::{build_tree, TreeBuilder};
pub use entry::{ListingDocument, PathEntry};
pub use filter::{should_include, InclusionPolicy};
pub use node::{GraphEdge, GraphNode, GraphPayload};
