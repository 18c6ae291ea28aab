//! Web tool record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Searchable;

/// A bookmarked web tool. `url` is handed verbatim to the OS opener.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebTool {
    pub id: String,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub note_file: String,
    pub usage_count: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_used_at: Option<DateTime<Utc>>,
}

impl WebTool {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Default::default()
        }
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
}

impl Searchable for WebTool {
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
