//! Integration tests for the GitGraph graph builder and CLI surface

mod cli_contracts;
mod filter_policy;
mod tree_properties;
mod tree_structure;
