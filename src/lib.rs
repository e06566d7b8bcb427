//! GitGraph: Repository Trees as Graphs
//!
//! Turns the flat recursive listing a repository host returns into a graph of
//! directory and file nodes joined by `contains` edges under a synthetic root,
//! ready for an interactive graph renderer.

pub mod config;
pub mod error;
pub mod logging;
pub mod provider;
pub mod source;
pub mod tooling;
pub mod tree;
pub mod types;
