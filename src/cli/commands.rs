//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - tools / tool-tags: search and launch offline tools
//! - web / web-tags: search and open web tools
//! - notes / note-tags: search notes
//! - add-path: remember the catalog directory

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Toolshed - find and launch your local tools, web tools and notes
#[derive(Parser, Debug)]
#[command(name = "toolshed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog directory, overriding config and the saved path
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute; none starts the interactive prompt
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// One line typed at the interactive prompt
#[derive(Parser, Debug)]
#[command(name = "toolshed", no_binary_name = true, disable_version_flag = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: Commands,
}

/// Main subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List offline tools, or search and launch one (terms separated by commas)
    #[command(visible_alias = "t")]
    Tools {
        /// Query terms, e.g. "sql, injection"
        query: Vec<String>,
    },

    /// List offline tool tags, or search offline tools by tag
    #[command(name = "tool-tags", visible_alias = "tm")]
    ToolTags {
        /// Tag substring
        tag: Vec<String>,
    },

    /// List web tools, or search and open one
    #[command(visible_alias = "w")]
    Web {
        /// Query terms
        query: Vec<String>,
    },

    /// List web tool tags, or search web tools by tag
    #[command(name = "web-tags", visible_alias = "wm")]
    WebTags {
        /// Tag substring
        tag: Vec<String>,
    },

    /// List notes, or search them
    #[command(visible_alias = "n")]
    Notes {
        /// Query terms
        query: Vec<String>,
    },

    /// List note tags, or search notes by tag
    #[command(name = "note-tags", visible_alias = "nm")]
    NoteTags {
        /// Tag substring
        tag: Vec<String>,
    },

    /// Remember a catalog directory for later runs
    #[command(name = "add-path")]
    AddPath {
        /// Directory holding the catalog JSON files
        path: PathBuf,
    },
}

/// Words after the subcommand, rejoined as typed.
pub fn joined(words: &[String]) -> String {
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args should result in None command (interactive prompt)
        let cli = Cli::try_parse_from(["toolshed"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["toolshed", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_catalog_option() {
        let cli = Cli::try_parse_from(["toolshed", "--catalog", "/srv/catalog", "t"]).unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("/srv/catalog")));
    }

    #[test]
    fn test_tools_alias_with_query() {
        let cli = Cli::try_parse_from(["toolshed", "t", "sql,", "db"]).unwrap();
        match cli.command {
            Some(Commands::Tools { query }) => assert_eq!(joined(&query), "sql, db"),
            other => panic!("Expected tools command, got {:?}", other),
        }
    }

    #[test]
    fn test_tools_without_query() {
        let cli = Cli::try_parse_from(["toolshed", "tools"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Tools { query: vec![] }));
    }

    #[test]
    fn test_tag_aliases() {
        let cli = Cli::try_parse_from(["toolshed", "tm", "recon"]).unwrap();
        assert_eq!(cli.command, Some(Commands::ToolTags { tag: vec!["recon".to_string()] }));

        let cli = Cli::try_parse_from(["toolshed", "wm"]).unwrap();
        assert_eq!(cli.command, Some(Commands::WebTags { tag: vec![] }));

        let cli = Cli::try_parse_from(["toolshed", "nm", "xss"]).unwrap();
        assert_eq!(cli.command, Some(Commands::NoteTags { tag: vec!["xss".to_string()] }));
    }

    #[test]
    fn test_add_path_requires_path() {
        assert!(Cli::try_parse_from(["toolshed", "add-path"]).is_err());
        let cli = Cli::try_parse_from(["toolshed", "add-path", "/srv/catalog"]).unwrap();
        assert_eq!(cli.command, Some(Commands::AddPath { path: PathBuf::from("/srv/catalog") }));
    }

    #[test]
    fn test_repl_line_without_binary_name() {
        let line = ReplLine::try_parse_from(["w", "cyber", "chef"]).unwrap();
        assert_eq!(
            line.command,
            Commands::Web { query: vec!["cyber".to_string(), "chef".to_string()] }
        );
    }

    #[test]
    fn test_repl_line_unknown_command() {
        assert!(ReplLine::try_parse_from(["launch-missiles"]).is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
        ReplLine::command().debug_assert();
    }
}
