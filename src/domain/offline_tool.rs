//! Offline tool record
//!
//! An offline tool lives in a directory on disk. How it is launched depends on
//! whether it carries an explicit command and on what that directory contains.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfflineTool {
    //=== Identity ===
    pub id: String,
    pub name: String,
    pub category: String,

    //=== Launch ===
    /// Tool directory; also the working directory of anything launched for it
    pub path: String,

    /// Shell command line run inside `path` when non-empty
    pub command: String,

    //=== Description ===
    pub description: String,
    pub tags: Vec<String>,
    pub url: String,
    pub icon: String,
    pub note_file: String,
    pub key_path: String,

    //=== Usage ===
    pub usage_count: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_used_at: Option<DateTime<Utc>>,
}

impl OfflineTool {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// True when an explicit command should take precedence over directory probing
    pub fn has_command(&self) -> bool {
        !self.command.trim().is_empty()
    }

    pub fn dir(&self) -> &Path {
        Path::new(&self.path)
    }
}

impl Searchable for OfflineTool {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn group(&self) -> &str {
        &self.category
    }

    fn summary(&self) -> &str {
        &self.description
    }
}
