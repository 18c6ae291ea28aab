//! Note record
//!
//! Notes reference a tool by name only; the reference is never resolved or enforced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Searchable;

/// Group label for notes that do not name an owning tool
pub const UNCATEGORIZED: &str = "uncategorized";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub url: String,
    pub source: String,
    /// Owning tool name; empty means uncategorized
    pub tool: String,
    pub tags: Vec<String>,
    /// Free-text body
    pub note: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            note: body.into(),
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
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

    /// Owning tool name, or `UNCATEGORIZED`
    pub fn owner(&self) -> &str {
        if self.tool.trim().is_empty() { UNCATEGORIZED } else { &self.tool }
    }
}

impl Searchable for Note {
    fn display_name(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.note.as_str(), self.source.as_str()]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn group(&self) -> &str {
        self.owner()
    }

    fn summary(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_defaults_to_uncategorized() {
        let note = Note::new("payloads", "");
        assert_eq!(note.owner(), UNCATEGORIZED);

        let note = note.with_tool("sqlmap");
        assert_eq!(note.owner(), "sqlmap");
    }

    #[test]
    fn test_search_fields_include_body_and_source() {
        let note = Note::new("xss cheatsheet", "polyglot payloads").with_source("portswigger");
        assert_eq!(
            note.search_fields(),
            vec!["xss cheatsheet", "polyglot payloads", "portswigger"]
        );
    }
}
