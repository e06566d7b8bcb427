//! Inclusion filter for repository paths.
//!
//! Decides which listing paths are source structure worth drawing and which are
//! noise (vendored or generated directories, metadata, docs, tooling config).
//! The tables are plain data in [`InclusionPolicy`] and can be replaced from the
//! `[filter]` configuration section.

use serde::{Deserialize, Serialize};

const IGNORED_DIRS: &[&str] = &[
    ".git",
    ".github",
    ".vscode",
    ".idea",
    "node_modules",
    "dist",
    "build",
    "coverage",
    "__pycache__",
    "public",
    "assets",
];

const IGNORED_STEMS: &[&str] = &[
    "readme",
    "license",
    "changelog",
    "contributing",
    "code_of_conduct",
    "next.config",
    "vite.config",
    "webpack.config",
    "rollup.config",
    "postcss.config",
    "tailwind.config",
    "eslint.config",
    "babel.config",
    "jest.config",
    "vitest.config",
    "tsconfig",
    "jsconfig",
];

const IGNORED_EXTENSIONS: &[&str] = &[".md", ".markdown", ".json", ".yaml", ".yml", ".mjs", ".cjs"];

const CONFIG_INFIX: &str = ".config.";

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

fn default_ignored_dirs() -> Vec<String> {
    owned(IGNORED_DIRS)
}

fn default_ignored_stems() -> Vec<String> {
    owned(IGNORED_STEMS)
}

fn default_ignored_extensions() -> Vec<String> {
    owned(IGNORED_EXTENSIONS)
}

fn default_config_infix() -> Option<String> {
    Some(CONFIG_INFIX.to_string())
}

/// Inclusion policy tables. All comparisons are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionPolicy {
    /// Directory names that exclude a path when they appear as any component.
    #[serde(default = "default_ignored_dirs")]
    pub ignored_dirs: Vec<String>,

    /// File stems (name before the first `.`) that exclude a path.
    #[serde(default = "default_ignored_stems")]
    pub ignored_stems: Vec<String>,

    /// Extensions including the leading dot, taken from the last `.`.
    #[serde(default = "default_ignored_extensions")]
    pub ignored_extensions: Vec<String>,

    /// Substring that marks a variant config file (`foo.config.local.js`).
    #[serde(default = "default_config_infix")]
    pub config_infix: Option<String>,

    /// Exclude final components starting with `.`.
    #[serde(default = "default_true")]
    pub ignore_dotfiles: bool,
}

fn default_true() -> bool {
    true
}

impl Default for InclusionPolicy {
    fn default() -> Self {
        Self {
            ignored_dirs: default_ignored_dirs(),
            ignored_stems: default_ignored_stems(),
            ignored_extensions: default_ignored_extensions(),
            config_infix: default_config_infix(),
            ignore_dotfiles: true,
        }
    }
}

impl InclusionPolicy {
    /// Policy that lets every non-empty path through.
    pub fn permissive() -> Self {
        Self {
            ignored_dirs: Vec::new(),
            ignored_stems: Vec::new(),
            ignored_extensions: Vec::new(),
            config_infix: None,
            ignore_dotfiles: false,
        }
    }

    /// Decide whether `path` belongs in the graph.
    pub fn should_include(&self, path: &str) -> bool {
        let components: Vec<String> = split_components(path)
            .map(|c| c.to_lowercase())
            .collect();
        let Some(name) = components.last().map(String::as_str) else {
            return false;
        };

        if components
            .iter()
            .any(|component| contains_ignore_case(&self.ignored_dirs, component))
        {
            return false;
        }

        if self.ignore_dotfiles && name.starts_with('.') {
            return false;
        }

        let stem = name.split('.').next().unwrap_or(name);
        if contains_ignore_case(&self.ignored_stems, stem) {
            return false;
        }

        if let Some(infix) = self.config_infix.as_deref() {
            if !infix.is_empty() && name.contains(&infix.to_lowercase()) {
                return false;
            }
        }

        if let Some(dot) = name.rfind('.') {
            if contains_ignore_case(&self.ignored_extensions, &name[dot..]) {
                return false;
            }
        }

        true
    }
}

/// Check `path` against the default policy.
pub fn should_include(path: &str) -> bool {
    InclusionPolicy::default().should_include(path)
}

/// Non-empty slash-separated components of `path`.
pub(crate) fn split_components(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn contains_ignore_case(table: &[String], lowered: &str) -> bool {
    table.iter().any(|entry| entry.to_lowercase() == lowered)
}
