//! Human-readable renderings of graphs, repository lists and summaries.

use crate::provider::CodeSummary;
use crate::source::RepoSummary;
use crate::tree::{GraphNode, GraphPayload};
use crate::types::ROOT_NODE_ID;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::collections::{HashMap, HashSet};

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Indented tree, directories suffixed with `/`, followed by a count line.
pub fn format_graph_text(title: &str, payload: &GraphPayload) -> String {
    let mut out = format!("{}\n\n", format_section_heading(title));
    let index = payload.child_index();
    let mut visited = HashSet::new();
    visited.insert(ROOT_NODE_ID);

    // (node, depth); children pushed in reverse to keep discovery order
    let mut stack: Vec<(&GraphNode, usize)> = Vec::new();
    push_children(&mut stack, &index, ROOT_NODE_ID, 0);

    while let Some((node, depth)) = stack.pop() {
        if !visited.insert(node.id.as_str()) {
            continue;
        }
        let suffix = if node.is_tree() { "/" } else { "" };
        out.push_str(&"  ".repeat(depth));
        out.push_str(&node.name);
        out.push_str(suffix);
        out.push('\n');
        push_children(&mut stack, &index, &node.id, depth + 1);
    }

    out.push_str(&format!(
        "\n{} directories, {} files\n",
        payload.directory_count().saturating_sub(1),
        payload.file_count()
    ));
    out
}

fn push_children<'a>(
    stack: &mut Vec<(&'a GraphNode, usize)>,
    index: &HashMap<&str, Vec<&'a GraphNode>>,
    id: &str,
    depth: usize,
) {
    if let Some(children) = index.get(id) {
        stack.extend(children.iter().rev().map(|child| (*child, depth)));
    }
}

pub fn format_repos_text(repos: &[RepoSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Repositories")));
    if repos.is_empty() {
        out.push_str("No repositories found.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Repository", "Visibility", "Default branch", "Description"]);
    for repo in repos {
        let visibility = if repo.private { "private" } else { "public" };
        table.add_row(vec![
            repo.full_name.clone(),
            visibility.to_string(),
            repo.default_branch.clone(),
            repo.description.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} repositories.\n", repos.len()));
    out
}

pub fn format_summary_text(summary: &CodeSummary) -> String {
    format!(
        "{}\n\n  Path: {}\n\n{}\n",
        format_section_heading(&summary.file_name),
        summary.path,
        summary.summary
    )
}
