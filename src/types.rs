//! Core identifiers and reserved values for the repository graph.

/// NodeId: a graph node is identified by its slash-separated repository path.
pub type NodeId = String;

/// Reserved id of the synthetic root node.
pub const ROOT_NODE_ID: &str = "root";

/// Entry/node type reported for directories.
pub const TREE_TYPE: &str = "tree";

/// Entry type GitHub reports for regular files.
pub const BLOB_TYPE: &str = "blob";

/// Default relationship carried by graph edges.
pub const CONTAINS_EDGE: &str = "contains";
