//! Property tests for graph construction
//!
//! Invariants that hold for every listing:
//! - Determinism: the same listing always yields the same payload
//! - Forest: every non-root node has exactly one parent, the root has none
//! - Uniqueness: no duplicate node ids, no duplicate edges
//! - Monotonicity: a path used as a directory anywhere is a `tree` node

use gitgraph::tree::{build_tree, PathEntry};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn component() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "src", "lib", "root", "x.rs", "y.ts", "z"]).prop_map(String::from)
}

fn entry() -> impl Strategy<Value = PathEntry> {
    (
        prop::collection::vec(component(), 1..5),
        prop::bool::ANY,
    )
        .prop_map(|(parts, is_tree)| {
            let path = parts.join("/");
            if is_tree {
                PathEntry::tree(path)
            } else {
                PathEntry::blob(path)
            }
        })
}

fn listing() -> impl Strategy<Value = Vec<PathEntry>> {
    prop::collection::vec(entry(), 0..40)
}

fn parent_path(path: &str) -> &str {
    path.rsplit_once('/').map(|(parent, _)| parent).unwrap_or("")
}

proptest! {
    #[test]
    fn prop_build_is_deterministic(entries in listing()) {
        prop_assert_eq!(build_tree(&entries), build_tree(&entries));
    }

    #[test]
    fn prop_graph_is_a_tree(entries in listing()) {
        let payload = build_tree(&entries);

        let ids: HashSet<&str> = payload.nodes.iter().map(|n| n.id.as_str()).collect();
        prop_assert_eq!(ids.len(), payload.nodes.len());

        let edges: HashSet<(&str, &str)> = payload
            .edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        prop_assert_eq!(edges.len(), payload.edges.len());
        prop_assert_eq!(payload.edges.len(), payload.nodes.len() - 1);

        let mut parents: HashMap<&str, usize> = HashMap::new();
        for edge in &payload.edges {
            prop_assert!(ids.contains(edge.source.as_str()));
            prop_assert!(ids.contains(edge.target.as_str()));
            *parents.entry(edge.target.as_str()).or_default() += 1;
        }
        prop_assert!(!parents.contains_key("root"));
        for node in payload.nodes.iter().filter(|n| !n.is_root()) {
            prop_assert_eq!(parents.get(node.id.as_str()).copied(), Some(1));
            let parent = payload.parent_of(&node.id).unwrap();
            let expected = parent_path(&node.path);
            if expected.is_empty() {
                prop_assert!(parent.is_root());
            } else {
                prop_assert_eq!(parent.path.as_str(), expected);
            }
        }
    }

    #[test]
    fn prop_directories_are_trees(entries in listing()) {
        let payload = build_tree(&entries);

        let mut directories: HashSet<String> = HashSet::new();
        for entry in &entries {
            let path = entry.path.clone().unwrap_or_default();
            if entry.is_tree() {
                directories.insert(path.clone());
            }
            let mut prefix = parent_path(&path);
            while !prefix.is_empty() {
                directories.insert(prefix.to_string());
                prefix = parent_path(prefix);
            }
        }

        for node in payload.nodes.iter().filter(|n| !n.is_root()) {
            let expected = if directories.contains(&node.path) { "tree" } else { "blob" };
            prop_assert_eq!(node.file_type.as_str(), expected, "path {}", node.path);
        }
    }

    #[test]
    fn prop_every_entry_path_has_a_node(entries in listing()) {
        let payload = build_tree(&entries);
        for entry in &entries {
            let path = entry.path.as_deref().unwrap_or_default();
            prop_assert!(
                payload.nodes.iter().any(|n| n.path == path),
                "missing {}",
                path
            );
        }
    }
}
