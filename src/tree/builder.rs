//! Tree-to-graph builder
//!
//! Folds a flat recursive listing into a forest of nodes and `contains` edges
//! hanging off a synthetic root. Nodes live in an arena (`Vec`) indexed by a
//! path → slot map; edges are deduplicated on `(parent slot, child slot)`.

use crate::tree::entry::PathEntry;
use crate::tree::filter::{split_components, InclusionPolicy};
use crate::tree::node::{node_id_for, GraphEdge, GraphNode, GraphPayload};
use crate::types::TREE_TYPE;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

const ROOT_SLOT: usize = 0;

/// Builds [`GraphPayload`]s under a given inclusion policy.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    policy: InclusionPolicy,
}

impl TreeBuilder {
    pub fn new(policy: InclusionPolicy) -> Self {
        Self { policy }
    }

    /// Build the graph for one listing. Never fails; malformed, empty and
    /// filtered entries are skipped.
    pub fn build<'a, I>(&self, entries: I) -> GraphPayload
    where
        I: IntoIterator<Item = &'a PathEntry>,
    {
        let mut arena = GraphArena::new();
        let mut skipped = 0usize;

        for entry in entries {
            let (Some(path), Some(entry_type)) = (entry.path.as_deref(), entry.entry_type.as_deref())
            else {
                skipped += 1;
                continue;
            };
            if path.is_empty() || !self.policy.should_include(path) {
                trace!(path, "Skipping listing entry");
                skipped += 1;
                continue;
            }
            arena.insert_path(path, entry_type);
        }

        let payload = arena.into_payload();
        debug!(
            nodes = payload.nodes.len(),
            edges = payload.edges.len(),
            skipped,
            "Built repository graph"
        );
        payload
    }
}

/// Build a graph with the default inclusion policy.
pub fn build_tree(entries: &[PathEntry]) -> GraphPayload {
    TreeBuilder::default().build(entries)
}

struct GraphArena {
    nodes: Vec<GraphNode>,
    slots: HashMap<String, usize>,
    edges: Vec<GraphEdge>,
    edge_pairs: HashSet<(usize, usize)>,
}

impl GraphArena {
    fn new() -> Self {
        Self {
            nodes: vec![GraphNode::root()],
            slots: HashMap::new(),
            edges: Vec::new(),
            edge_pairs: HashSet::new(),
        }
    }

    /// Walk every prefix of `path`, materializing nodes and edges.
    fn insert_path(&mut self, path: &str, entry_type: &str) {
        let components: Vec<&str> = split_components(path).collect();
        let last = components.len().saturating_sub(1);
        let mut current = String::new();
        let mut parent = ROOT_SLOT;

        for (depth, component) in components.iter().enumerate() {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(component);

            let file_type = if depth == last { entry_type } else { TREE_TYPE };
            let slot = self.upsert_node(&current, component, file_type);
            self.link(parent, slot);
            parent = slot;
        }
    }

    /// Look up or insert the node for `path`; upgrade files to directories in
    /// place, never the reverse.
    fn upsert_node(&mut self, path: &str, name: &str, file_type: &str) -> usize {
        if let Some(&slot) = self.slots.get(path) {
            let node = &mut self.nodes[slot];
            if file_type == TREE_TYPE && node.file_type != TREE_TYPE {
                node.file_type = TREE_TYPE.to_string();
            }
            return slot;
        }

        let slot = self.nodes.len();
        self.nodes.push(GraphNode {
            id: node_id_for(path),
            name: name.to_string(),
            path: path.to_string(),
            file_type: file_type.to_string(),
        });
        self.slots.insert(path.to_string(), slot);
        slot
    }

    fn link(&mut self, parent: usize, child: usize) {
        if self.edge_pairs.insert((parent, child)) {
            self.edges.push(GraphEdge::contains(
                self.nodes[parent].id.clone(),
                self.nodes[child].id.clone(),
            ));
        }
    }

    fn into_payload(self) -> GraphPayload {
        GraphPayload {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}
