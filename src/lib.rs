//! Toolshed - a personal catalog and launcher
//!
//! Keeps metadata about locally installed tools, bookmarked web tools and notes,
//! finds them by comma-separated fuzzy terms or by tag, and starts the chosen tool
//! through a per-platform fallback chain.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod launcher;
pub mod search;
pub mod shell;

pub use error::{Result, ToolshedError};
