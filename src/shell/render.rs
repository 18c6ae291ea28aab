//! Plain colored listings. Column layout only, no box drawing.

use colored::*;

use crate::domain::Searchable;
use crate::search::TagCount;

const NAME_WIDTH: usize = 22;
const TAGS_WIDTH: usize = 26;
const SUMMARY_WIDTH: usize = 40;

/// Collapse line breaks so one entry stays on one line.
pub fn clean(text: &str) -> String {
    text.split(['\r', '\n']).filter(|part| !part.is_empty()).collect::<Vec<_>>().join(" ")
}

/// Cut `text` to at most `max` characters, marking the cut with "...".
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{}...", kept)
}

fn cell(text: &str, width: usize) -> String {
    format!("{:<width$}", truncate(&clean(text), width), width = width)
}

pub fn title(text: &str) -> String {
    format!("\n{}", text.bold().cyan())
}

pub fn group_header(group: &str) -> String {
    let label = if group.trim().is_empty() { "(none)" } else { group };
    format!("\n{}", label.bold().yellow())
}

/// One listing row, numbered when the user can pick it.
pub fn entry_row<T: Searchable>(index: Option<usize>, item: &T) -> String {
    let index = match index {
        Some(n) => format!("{:>5} ", format!("[{}]", n)).yellow().bold().to_string(),
        None => "  ".to_string(),
    };
    format!(
        "{}{}  {}  {}",
        index,
        cell(item.display_name(), NAME_WIDTH).white().bold(),
        cell(&item.tags().join(", "), TAGS_WIDTH).yellow(),
        truncate(&clean(item.summary()), SUMMARY_WIDTH)
    )
}

pub fn tag_row(tag: &TagCount) -> String {
    format!("  {}  {}", cell(&tag.tag, TAGS_WIDTH).white().bold(), tag.count.to_string().yellow())
}

pub fn tag_suggestions(tags: &[TagCount]) -> String {
    let names: Vec<String> = tags.iter().map(|t| t.tag.yellow().to_string()).collect();
    format!("  {}", names.join(" "))
}

pub fn totals(entries: usize, groups: usize, noun: &str) -> String {
    format!("\nTotal: {} {}, {} groups", entries, noun, groups).cyan().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_joins_lines() {
        assert_eq!(clean("first\nsecond\r\nthird"), "first second third");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("metasploit-framework", 10), "metaspl...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("工具启动器测试", 7), "工具启动器测试");
        assert_eq!(truncate("工具启动器测试", 5), "工具...");
    }
}
