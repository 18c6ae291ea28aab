//! Domain types for Toolshed
//!
//! This module contains the three catalog entity kinds:
//! - OfflineTool: a locally installed tool rooted at a directory
//! - WebTool: a bookmarked web tool opened through the OS URL handler
//! - Note: free-text note optionally attached to a tool by name
//!
//! All three implement `Searchable` so the query engine is written once.

pub mod note;
pub mod offline_tool;
pub mod searchable;
pub mod web_tool;

pub use note::{Note, UNCATEGORIZED};
pub use offline_tool::OfflineTool;
pub use searchable::Searchable;
pub use web_tool::WebTool;
