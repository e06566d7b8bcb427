//! Graph shape for hand-written listings

use gitgraph::tree::{build_tree, GraphPayload, ListingDocument, PathEntry};
use std::collections::HashSet;

fn paths(payload: &GraphPayload) -> HashSet<&str> {
    payload.nodes.iter().map(|n| n.path.as_str()).collect()
}

fn edge_set(payload: &GraphPayload) -> HashSet<(&str, &str)> {
    payload
        .edges
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect()
}

#[test]
fn sibling_files_share_one_directory() {
    let payload = build_tree(&[PathEntry::blob("src/a.ts"), PathEntry::blob("src/b.ts")]);

    assert_eq!(payload.nodes.len(), 4);
    assert_eq!(paths(&payload), HashSet::from(["", "src", "src/a.ts", "src/b.ts"]));
    assert_eq!(
        edge_set(&payload),
        HashSet::from([("root", "src"), ("src", "src/a.ts"), ("src", "src/b.ts")])
    );
    assert_eq!(payload.edges.len(), 3);
    assert_eq!(payload.node("src").unwrap().file_type, "tree");
    assert_eq!(payload.node("src/a.ts").unwrap().file_type, "blob");
    assert_eq!(payload.node("src/b.ts").unwrap().file_type, "blob");
}

#[test]
fn excluded_entries_leave_no_trace() {
    let payload = build_tree(&[PathEntry::blob("README.md"), PathEntry::tree("src")]);

    assert_eq!(payload.nodes.len(), 2);
    assert!(payload.node("README.md").is_none());
    assert!(payload.edges.iter().all(|e| e.target != "README.md"));
}

#[test]
fn directory_listed_after_its_file_is_not_duplicated() {
    let payload = build_tree(&[PathEntry::blob("lib/util.ts"), PathEntry::tree("lib")]);

    let lib_nodes: Vec<_> = payload.nodes.iter().filter(|n| n.path == "lib").collect();
    assert_eq!(lib_nodes.len(), 1);
    assert_eq!(lib_nodes[0].file_type, "tree");
    assert_eq!(
        payload
            .edges
            .iter()
            .filter(|e| e.source == "root" && e.target == "lib")
            .count(),
        1
    );
    assert_eq!(
        payload
            .edges
            .iter()
            .filter(|e| e.source == "lib" && e.target == "lib/util.ts")
            .count(),
        1
    );
}

#[test]
fn empty_listing_yields_root_only() {
    let payload = build_tree(&[]);
    assert_eq!(payload.nodes.len(), 1);
    assert!(payload.nodes[0].is_root());
    assert!(payload.edges.is_empty());
}

#[test]
fn root_is_first_and_named_root() {
    let payload = build_tree(&[PathEntry::blob("main.go")]);
    let root = &payload.nodes[0];
    assert_eq!(root.id, "root");
    assert_eq!(root.name, "root");
    assert_eq!(root.path, "");
    assert_eq!(root.file_type, "tree");
    assert_eq!(payload.parent_of("main.go").unwrap().id, "root");
}

#[test]
fn deep_file_creates_every_ancestor() {
    let payload = build_tree(&[PathEntry::blob("a/b/c/d.rs")]);
    for dir in ["a", "a/b", "a/b/c"] {
        assert_eq!(payload.node(dir).unwrap().file_type, "tree", "{}", dir);
    }
    let leaf = payload.node("a/b/c/d.rs").unwrap();
    assert_eq!(leaf.name, "d.rs");
    assert_eq!(payload.parent_of("a/b/c/d.rs").unwrap().path, "a/b/c");
}

#[test]
fn top_level_root_directory_does_not_alias_synthetic_root() {
    let payload = build_tree(&[PathEntry::blob("root/main.rs"), PathEntry::blob("root")]);

    let ids: HashSet<&str> = payload.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids.len(), payload.nodes.len());
    assert!(payload.edges.iter().all(|e| e.source != e.target));
    assert_eq!(payload.nodes.iter().filter(|n| n.id == "root").count(), 1);

    let dir = payload.nodes.iter().find(|n| n.path == "root").unwrap();
    assert_eq!(dir.file_type, "tree");
    assert_eq!(dir.name, "root");
    assert!(payload.parent_of(&dir.id).unwrap().is_root());
    assert_eq!(payload.parent_of("/root/main.rs").unwrap().id, dir.id);
}

#[test]
fn github_tree_response_builds_same_graph() {
    let raw = r#"{
        "sha": "9fb037999f264ba9a7fc6274d15fa3ae2ab98312",
        "url": "https://api.github.com/repos/octo/hello/git/trees/9fb0",
        "tree": [
            {"path": "src", "mode": "040000", "type": "tree", "sha": "a"},
            {"path": "src/a.ts", "mode": "100644", "type": "blob", "sha": "b", "size": 30},
            {"path": "src/b.ts", "mode": "100644", "type": "blob", "sha": "c", "size": 30}
        ],
        "truncated": false
    }"#;
    let document: ListingDocument = serde_json::from_str(raw).unwrap();
    assert!(!document.is_truncated());
    let from_response = build_tree(&document.into_entries());

    let from_array = build_tree(&[
        PathEntry::tree("src"),
        PathEntry::blob("src/a.ts"),
        PathEntry::blob("src/b.ts"),
    ]);
    assert_eq!(from_response, from_array);
}

#[test]
fn payload_serializes_with_wire_field_names() {
    let payload = build_tree(&[PathEntry::blob("src/a.ts")]);
    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["nodes"][0]["id"], "root");
    assert_eq!(value["nodes"][1]["file_type"], "tree");
    assert_eq!(value["edges"][0]["source"], "root");
    assert_eq!(value["edges"][0]["target"], "src");
    assert_eq!(value["edges"][0]["type"], "contains");
}
