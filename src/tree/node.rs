//! Graph node, edge and payload types

use crate::types::{NodeId, CONTAINS_EDGE, ROOT_NODE_ID, TREE_TYPE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A directory or file vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub name: String,
    pub path: String,
    pub file_type: String,
}

impl GraphNode {
    /// The synthetic repository root.
    pub fn root() -> Self {
        Self {
            id: ROOT_NODE_ID.to_string(),
            name: ROOT_NODE_ID.to_string(),
            path: String::new(),
            file_type: TREE_TYPE.to_string(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.id == ROOT_NODE_ID && self.path.is_empty()
    }

    pub fn is_tree(&self) -> bool {
        self.file_type == TREE_TYPE
    }
}

/// Node id for a repository path.
///
/// Ids equal paths, except paths under a top-level `root` component, which get
/// a leading `/` so they cannot collide with the synthetic root's id. Listing
/// paths are split on `/` with empty segments dropped, so no real path starts
/// with `/`.
pub fn node_id_for(path: &str) -> NodeId {
    let collides = path == ROOT_NODE_ID
        || path
            .strip_prefix(ROOT_NODE_ID)
            .is_some_and(|rest| rest.starts_with('/'));
    if collides {
        format!("/{}", path)
    } else {
        path.to_string()
    }
}

fn default_edge_type() -> String {
    CONTAINS_EDGE.to_string()
}

/// Directed parent → child relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(rename = "type", default = "default_edge_type")]
    pub edge_type: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl GraphEdge {
    pub fn contains(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            edge_type: default_edge_type(),
            label: None,
        }
    }
}

/// Builder output: nodes and edges in discovery order, root first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphPayload {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphPayload {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Children of every node keyed by parent id, each list in edge discovery
    /// order. Built in one pass over nodes and edges.
    pub fn child_index(&self) -> HashMap<&str, Vec<&GraphNode>> {
        let by_id: HashMap<&str, &GraphNode> =
            self.nodes.iter().map(|node| (node.id.as_str(), node)).collect();
        let mut index: HashMap<&str, Vec<&GraphNode>> = HashMap::new();
        for edge in &self.edges {
            if let Some(child) = by_id.get(edge.target.as_str()) {
                index.entry(edge.source.as_str()).or_default().push(*child);
            }
        }
        index
    }

    pub fn parent_of(&self, id: &str) -> Option<&GraphNode> {
        self.edges
            .iter()
            .find(|edge| edge.target == id)
            .and_then(|edge| self.node(&edge.source))
    }

    pub fn directory_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_tree()).count()
    }

    pub fn file_count(&self) -> usize {
        self.nodes.len() - self.directory_count()
    }
}
