//! Tag statistics and tag-only search.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::domain::Searchable;

/// A tag and the number of entities carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

impl TagCount {
    pub fn new(tag: impl Into<String>, count: usize) -> Self {
        Self {
            tag: tag.into(),
            count,
        }
    }
}

// A tag repeated on one entity still counts once for that entity.
fn count_tags<T: Searchable>(items: &[T]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        let mut seen = HashSet::new();
        for tag in item.tags() {
            if seen.insert(tag.as_str()) {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// The `n` most common tags, most frequent first, ties broken alphabetically.
pub fn top_tags<T: Searchable>(items: &[T], n: usize) -> Vec<TagCount> {
    let mut counts: Vec<TagCount> = count_tags(items)
        .into_iter()
        .map(|(tag, count)| TagCount::new(tag, count))
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    counts.truncate(n);
    counts
}

/// Every distinct tag with its count, sorted by tag.
pub fn all_tags_with_counts<T: Searchable>(items: &[T]) -> Vec<TagCount> {
    count_tags(items)
        .into_iter()
        .map(|(tag, count)| TagCount::new(tag, count))
        .collect()
}

/// Every distinct tag, sorted.
pub fn all_tags<T: Searchable>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.tags().iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Entities with at least one tag containing `tag`, ignoring case.
///
/// The needle is trimmed before matching, so surrounding spaces never take part in the
/// substring test. An empty (or whitespace) tag returns every entity.
pub fn by_tag<'a, T: Searchable>(items: &'a [T], tag: &str) -> Vec<&'a T> {
    let needle = tag.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            item.tags()
                .iter()
                .any(|t| t.to_lowercase().contains(needle.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Note, OfflineTool};

    fn tools() -> Vec<OfflineTool> {
        vec![
            OfflineTool::new("msf", "/opt/msf").with_tags(["framework", "exploit"]),
            OfflineTool::new("sqlmap", "/opt/sqlmap").with_tags(["exploit", "database"]),
            OfflineTool::new("nmap", "/opt/nmap").with_tags(["recon", "network"]),
            OfflineTool::new("masscan", "/opt/masscan").with_tags(["recon", "network"]),
            OfflineTool::new("beef", "/opt/beef").with_tags(["Framework", "browser"]),
        ]
    }

    #[test]
    fn test_top_tags_sorted_by_count_then_name() {
        let top = top_tags(&tools(), 3);
        assert_eq!(
            top,
            vec![
                TagCount::new("exploit", 2),
                TagCount::new("network", 2),
                TagCount::new("recon", 2),
            ]
        );
    }

    #[test]
    fn test_top_tags_n_larger_than_catalog() {
        let top = top_tags(&tools(), 100);
        assert_eq!(top.len(), 7);
        assert_eq!(top.last().unwrap().count, 1);
    }

    #[test]
    fn test_top_tags_empty_collection() {
        let empty: Vec<OfflineTool> = Vec::new();
        assert!(top_tags(&empty, 5).is_empty());
    }

    #[test]
    fn test_tags_case_sensitive_for_counting() {
        let all = all_tags_with_counts(&tools());
        assert!(all.contains(&TagCount::new("framework", 1)));
        assert!(all.contains(&TagCount::new("Framework", 1)));
    }

    #[test]
    fn test_all_tags_with_counts_sorted_by_tag() {
        let all = all_tags_with_counts(&tools());
        let tags: Vec<&str> = all.iter().map(|t| t.tag.as_str()).collect();
        let mut sorted = tags.clone();
        sorted.sort();
        assert_eq!(tags, sorted);
    }

    #[test]
    fn test_duplicate_tag_on_one_entity_counts_once() {
        let tools = vec![
            OfflineTool::new("a", "/a").with_tags(["web", "web"]),
            OfflineTool::new("b", "/b").with_tags(["web"]),
        ];
        assert_eq!(all_tags_with_counts(&tools), vec![TagCount::new("web", 2)]);
    }

    #[test]
    fn test_counts_equal_entities_carrying_tag() {
        let tools = tools();
        for count in all_tags_with_counts(&tools) {
            let carrying = tools.iter().filter(|t| t.tags.contains(&count.tag)).count();
            assert_eq!(count.count, carrying, "tag {}", count.tag);
        }
    }

    #[test]
    fn test_all_tags_distinct_sorted() {
        let notes = vec![
            Note::new("a", "").with_tags(["xss", "web"]),
            Note::new("b", "").with_tags(["web", "csrf"]),
        ];
        assert_eq!(all_tags(&notes), vec!["csrf", "web", "xss"]);
    }

    #[test]
    fn test_by_tag_case_insensitive_substring() {
        let tools = tools();
        let found: Vec<&str> = by_tag(&tools, "FRAME").iter().map(|t| t.name.as_str()).collect();
        assert_eq!(found, vec!["msf", "beef"]);
    }

    #[test]
    fn test_by_tag_ignores_name_and_description() {
        let tools = vec![OfflineTool::new("recon-ng", "/opt/recon").with_description("recon")];
        assert!(by_tag(&tools, "recon").is_empty());
    }

    #[test]
    fn test_by_tag_empty_returns_all() {
        let tools = tools();
        assert_eq!(by_tag(&tools, "").len(), tools.len());
    }

    #[test]
    fn test_by_tag_trims_needle() {
        let tools = tools();
        assert_eq!(by_tag(&tools, "  FRAME ").len(), by_tag(&tools, "frame").len());
    }
}
