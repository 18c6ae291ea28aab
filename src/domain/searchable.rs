//! Field access shared by every catalog entity.

/// An entity the query engine can match against.
pub trait Searchable {
    /// Name shown to the user and compared by the exact-name shortcut.
    fn display_name(&self) -> &str;

    /// Free-text fields searched by multi-term queries, tags excluded.
    fn search_fields(&self) -> Vec<&str>;

    /// The entity's tag set.
    fn tags(&self) -> &[String];

    /// Grouping key used when listing results.
    fn group(&self) -> &str;

    /// Secondary text shown next to the name in listings.
    fn summary(&self) -> &str;
}
