//! Tooling & Integration Layer
//!
//! The command-line surface over the graph builder, repository source and
//! summary provider, plus the text renderings it prints.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands, ConfigCommands};
