//! Inclusion filter behavior through the public API and configuration

use gitgraph::config::ConfigLoader;
use gitgraph::tree::{should_include, InclusionPolicy, PathEntry, TreeBuilder};
use std::fs;
use tempfile::TempDir;

#[test]
fn default_policy_excludes_noise() {
    for path in [
        ".git/config",
        "README.md",
        "package.json",
        "webpack.config.js",
        "node_modules/react/index.js",
        "web/public/logo.svg",
        "docs/CHANGELOG",
        ".env",
        "src/.eslintrc",
        "tsconfig.json",
        "vite.config.local.ts",
        ".github/workflows/ci.yml",
    ] {
        assert!(!should_include(path), "expected {} excluded", path);
    }
}

#[test]
fn default_policy_keeps_source() {
    for path in [
        "src/index.ts",
        "src/components/Graph.tsx",
        "backend/app/main.py",
        "Cargo.toml",
        "src/config/loader.rs",
        "Makefile",
    ] {
        assert!(should_include(path), "expected {} included", path);
    }
}

#[test]
fn matching_is_case_insensitive() {
    assert!(!should_include("NODE_MODULES/x.js"));
    assert!(!should_include("Readme.MD"));
    assert!(!should_include("docs/LICENSE"));
}

#[test]
fn excluded_directory_hides_its_subtree() {
    let builder = TreeBuilder::default();
    let payload = builder.build(&[
        PathEntry::tree("dist"),
        PathEntry::blob("dist/bundle.js"),
        PathEntry::blob("src/app.ts"),
    ]);
    assert!(payload.node("dist").is_none());
    assert!(payload.node("dist/bundle.js").is_none());
    assert!(payload.node("src/app.ts").is_some());
}

#[test]
fn permissive_policy_keeps_everything() {
    let policy = InclusionPolicy::permissive();
    assert!(policy.should_include("README.md"));
    assert!(policy.should_include(".git/config"));
    assert!(!policy.should_include(""));
}

#[test]
fn config_file_extends_ignored_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("gitgraph.toml");
    fs::write(
        &config_path,
        r#"
[filter]
ignored_dirs = ["vendor", "target"]
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_path).unwrap();
    let policy = config.filter;
    assert!(!policy.should_include("vendor/lib.go"));
    assert!(!policy.should_include("target/debug/app"));
    // replaced list: node_modules is no longer ignored
    assert!(policy.should_include("node_modules/x.ts"));
    // other tables keep their defaults
    assert!(!policy.should_include("README.md"));
}
