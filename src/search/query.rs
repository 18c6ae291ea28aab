//! Multi-term fuzzy queries.

use crate::domain::Searchable;

/// A parsed query: comma-separated terms, trimmed and lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    /// Split `raw` on commas. Empty terms impose no constraint and are dropped.
    pub fn parse(raw: &str) -> Self {
        let terms = raw
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Every term must hit at least one field or tag of `item`.
    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        if self.terms.is_empty() {
            return true;
        }

        let fields: Vec<String> = item
            .search_fields()
            .into_iter()
            .chain(item.tags().iter().map(String::as_str))
            .map(str::to_lowercase)
            .collect();

        self.terms
            .iter()
            .all(|term| fields.iter().any(|field| field.contains(term.as_str())))
    }
}

/// Filter `items` by a raw query string, preserving input order.
pub fn filter<'a, T: Searchable>(items: &'a [T], raw: &str) -> Vec<&'a T> {
    let query = Query::parse(raw);
    if query.is_empty() {
        return items.iter().collect();
    }

    let results: Vec<&T> = items.iter().filter(|item| query.matches(*item)).collect();
    log::debug!(
        "query {:?} matched {} of {} entries",
        query.terms(),
        results.len(),
        items.len()
    );
    results
}

/// First entry whose name equals the whole raw query, ignoring case.
///
/// Used to offer a direct launch when a query matches several entries.
pub fn exact_name_match<'a, T: Searchable>(results: &[&'a T], raw: &str) -> Option<&'a T> {
    let wanted = raw.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    results
        .iter()
        .copied()
        .find(|item| item.display_name().to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Note, OfflineTool, WebTool};

    fn tools() -> Vec<OfflineTool> {
        vec![
            OfflineTool::new("sqlmap", "/opt/sqlmap").with_tags(["database"]),
            OfflineTool::new("sqlplus", "/opt/sqlplus").with_tags(["network"]),
            OfflineTool::new("webshell", "/opt/webshell").with_tags(["db"]),
        ]
    }

    fn names<T: Searchable>(items: &[&T]) -> Vec<String> {
        items.iter().map(|i| i.display_name().to_string()).collect()
    }

    #[test]
    fn test_parse_skips_empty_terms() {
        let query = Query::parse(" ,SQL,, db ,");
        assert_eq!(query.terms(), &["sql".to_string(), "db".to_string()]);
    }

    #[test]
    fn test_parse_all_commas_is_empty() {
        assert!(Query::parse(" , ,, ").is_empty());
        assert!(Query::parse("").is_empty());
    }

    #[test]
    fn test_and_across_terms() {
        let tools = tools();
        // "database" does not contain "db"
        assert!(filter(&tools, "sql,db").is_empty());
        assert_eq!(names(&filter(&tools, "sql,network")), vec!["sqlplus"]);
    }

    #[test]
    fn test_and_terms_hit_different_fields() {
        let tools = vec![
            OfflineTool::new("sqlmap", "/opt/sqlmap").with_tags(["db-tools"]),
            OfflineTool::new("dbeaver", "/opt/dbeaver").with_description("GUI client"),
            OfflineTool::new("sqlite-utils", "/opt/su").with_description("CLI for db files"),
        ];
        let results = filter(&tools, "sql,db");
        assert_eq!(names(&results), vec!["sqlmap", "sqlite-utils"]);
    }

    #[test]
    fn test_or_across_fields() {
        let tools = tools();
        assert_eq!(names(&filter(&tools, "db")), vec!["webshell"]);
        assert_eq!(names(&filter(&tools, "web")), vec!["webshell"]);
        assert_eq!(names(&filter(&tools, "data")), vec!["sqlmap"]);
    }

    #[test]
    fn test_description_hit() {
        let tools = vec![
            OfflineTool::new("x1", "/x1").with_description("Automatic SQL injection"),
            OfflineTool::new("x2", "/x2").with_description("port scanner"),
        ];
        let results = filter(&tools, "injection");
        assert_eq!(names(&results), vec!["x1"]);
    }

    #[test]
    fn test_case_insensitive() {
        let tools = tools();
        let results = filter(&tools, "SQLMAP");
        assert_eq!(names(&results), vec!["sqlmap"]);
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let tools = tools();
        assert_eq!(names(&filter(&tools, "")), vec!["sqlmap", "sqlplus", "webshell"]);
        assert_eq!(names(&filter(&tools, " ,, ")), vec!["sqlmap", "sqlplus", "webshell"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let tools = tools();
        assert!(filter(&tools, "kerberos").is_empty());
    }

    #[test]
    fn test_web_tools_share_semantics() {
        let web = vec![
            WebTool::new("CyberChef", "https://gchq.github.io/CyberChef")
                .with_tags(["encoding", "crypto"]),
            WebTool::new("crt.sh", "https://crt.sh").with_description("certificate search"),
        ];
        assert_eq!(names(&filter(&web, "crypto")), vec!["CyberChef"]);
        assert_eq!(names(&filter(&web, "cert, search")), vec!["crt.sh"]);
    }

    #[test]
    fn test_notes_search_body_and_source() {
        let notes = vec![
            Note::new("ssrf", "cloud metadata endpoints").with_source("hacktricks"),
            Note::new("xss", "polyglots").with_source("portswigger"),
        ];
        assert_eq!(names(&filter(&notes, "metadata")), vec!["ssrf"]);
        assert_eq!(names(&filter(&notes, "PortSwigger")), vec!["xss"]);
        assert!(filter(&notes, "metadata,portswigger").is_empty());
    }

    #[test]
    fn test_exact_name_match() {
        let tools = vec![
            OfflineTool::new("nmap", "/opt/nmap"),
            OfflineTool::new("nmap-scripts", "/opt/nse"),
        ];
        let results = filter(&tools, "nmap");
        assert_eq!(results.len(), 2);

        let exact = exact_name_match(&results, " NMAP ").unwrap();
        assert_eq!(exact.name, "nmap");
    }

    #[test]
    fn test_exact_name_match_requires_equality() {
        let tools = vec![
            OfflineTool::new("nmap-scripts", "/opt/nse"),
            OfflineTool::new("zenmap", "/opt/zenmap"),
        ];
        let results = filter(&tools, "nmap");
        assert!(exact_name_match(&results, "nmap").is_none());
    }
}
