//! CLI subcommands.

pub mod layout;
pub mod tree;
