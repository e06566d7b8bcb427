//! CLI parsing and offline output contracts

use std::fs;

use clap::{CommandFactory, Parser};
use gitgraph::config::GitGraphConfig;
use gitgraph::tooling::cli::{Cli, CliContext, Commands, ConfigCommands};
use gitgraph::tree::InclusionPolicy;
use tempfile::TempDir;

fn context() -> CliContext {
    CliContext::with_config(GitGraphConfig::default(), None)
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["gitgraph", "graph", "octo/hello"],
        vec!["gitgraph", "graph", "octo/hello", "--branch", "dev", "--format", "text"],
        vec!["gitgraph", "build", "--input", "listing.json"],
        vec!["gitgraph", "build", "--input", "-", "--format", "text"],
        vec!["gitgraph", "listing", "octo/hello"],
        vec!["gitgraph", "repos", "--format", "json"],
        vec!["gitgraph", "file", "octo/hello", "src/main.rs"],
        vec!["gitgraph", "summarize", "octo/hello", "src/main.rs"],
        vec!["gitgraph", "filter", "README.md", "src/index.ts"],
        vec!["gitgraph", "config", "show"],
        vec!["gitgraph", "--token", "t", "--log-level", "debug", "repos"],
        vec!["gitgraph", "repos", "--config", "custom.toml", "--verbose"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_missing_arguments() {
    assert!(Cli::try_parse_from(["gitgraph", "filter"]).is_err());
    assert!(Cli::try_parse_from(["gitgraph", "file", "octo/hello"]).is_err());
    assert!(Cli::try_parse_from(["gitgraph", "graph"]).is_err());
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn build_json_contract_from_entry_array() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("listing.json");
    fs::write(
        &input,
        r#"[
            {"path": "src/a.ts", "type": "blob"},
            {"path": "README.md", "type": "blob"},
            {"path": "src", "type": "tree"},
            {"path": "broken"}
        ]"#,
    )
    .unwrap();

    let output = context()
        .execute(&Commands::Build {
            input: Some(input),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let nodes = parsed["nodes"].as_array().unwrap();
    let edges = parsed["edges"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(edges.len(), 2);
    for node in nodes {
        assert!(node.get("id").and_then(|v| v.as_str()).is_some());
        assert!(node.get("name").and_then(|v| v.as_str()).is_some());
        assert!(node.get("path").and_then(|v| v.as_str()).is_some());
        assert!(node.get("file_type").and_then(|v| v.as_str()).is_some());
    }
    for edge in edges {
        assert_eq!(edge["type"], "contains");
    }
}

#[test]
fn build_text_from_tree_response() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("tree.json");
    fs::write(
        &input,
        r#"{"sha": "abc", "tree": [
            {"path": "lib/util.ts", "type": "blob", "mode": "100644"},
            {"path": "lib", "type": "tree", "mode": "040000"}
        ], "truncated": true}"#,
    )
    .unwrap();

    let output = context()
        .execute(&Commands::Build {
            input: Some(input),
            format: "text".to_string(),
        })
        .unwrap();

    assert!(output.contains("lib/"));
    assert!(output.contains("  util.ts"));
    assert!(output.contains("1 directories, 1 files"));
}

#[test]
fn build_rejects_malformed_documents() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("bad.json");
    fs::write(&input, r#"{"entries": 3}"#).unwrap();

    let result = context().execute(&Commands::Build {
        input: Some(input),
        format: "json".to_string(),
    });
    assert!(result.is_err());
}

#[test]
fn build_uses_configured_policy() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("listing.json");
    fs::write(&input, r#"[{"path": "README.md", "type": "blob"}]"#).unwrap();

    let mut config = GitGraphConfig::default();
    config.filter = InclusionPolicy::permissive();
    let output = CliContext::with_config(config, None)
        .execute(&Commands::Build {
            input: Some(input),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["nodes"].as_array().unwrap().len(), 2);
}

#[test]
fn filter_output_contract() {
    let output = context()
        .execute(&Commands::Filter {
            paths: vec![
                ".git/config".to_string(),
                "src/index.ts".to_string(),
                "package.json".to_string(),
            ],
        })
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "exclude\t.git/config",
            "include\tsrc/index.ts",
            "exclude\tpackage.json"
        ]
    );
}

#[test]
fn config_show_is_valid_toml() {
    let output = context()
        .execute(&Commands::Config {
            command: ConfigCommands::Show,
        })
        .unwrap();
    let parsed: GitGraphConfig = toml::from_str(&output).unwrap();
    assert_eq!(parsed.github.per_page, 100);
    assert_eq!(parsed.filter, InclusionPolicy::default());
}

#[test]
fn context_loads_explicit_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(&path, "[filter]\nignored_dirs = [\"src\"]\n").unwrap();

    let context = CliContext::new(Some(path), None).unwrap();
    let output = context
        .execute(&Commands::Filter {
            paths: vec!["src/index.ts".to_string()],
        })
        .unwrap();
    assert_eq!(output, "exclude\tsrc/index.ts");
}
