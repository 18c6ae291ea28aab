//! CLI module for toolshed - command-line interface and subcommands.
//!
//! The same subcommands are accepted on the command line and, one per line,
//! inside the interactive prompt.

pub mod commands;

pub use commands::{Cli, Commands, ReplLine};
