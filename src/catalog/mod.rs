//! Catalog snapshot loading.
//!
//! A catalog directory holds up to three JSON files. The snapshot is loaded once
//! and handed by reference to the query engine and the interaction shell.

pub mod path_store;

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::{Note, OfflineTool, WebTool};
use crate::error::{Result, ToolshedError};

pub const OFFLINE_TOOLS_FILE: &str = "offline_tools.json";
pub const WEB_TOOLS_FILE: &str = "web_tools.json";
pub const NOTES_FILE: &str = "web_notes.json";

/// On-disk layout of offline_tools.json
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OfflineToolsFile {
    pub scan_path: String,
    pub auto_refresh: bool,
    pub tools: Vec<OfflineTool>,
}

/// On-disk layout of web_tools.json
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebToolsFile {
    pub tools: Vec<WebTool>,
}

/// On-disk layout of web_notes.json
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesFile {
    pub notes: Vec<Note>,
}

/// Read-only snapshot of all three collections.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub dir: PathBuf,
    pub offline_tools: Vec<OfflineTool>,
    pub web_tools: Vec<WebTool>,
    pub notes: Vec<Note>,
}

impl Catalog {
    /// Load every collection found in `dir`. Missing files load as empty collections.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(ToolshedError::NotFound(format!(
                "catalog directory {}",
                dir.display()
            )));
        }

        let offline: OfflineToolsFile = read_optional(&dir.join(OFFLINE_TOOLS_FILE))?;
        let web: WebToolsFile = read_optional(&dir.join(WEB_TOOLS_FILE))?;
        let notes: NotesFile = read_optional(&dir.join(NOTES_FILE))?;

        log::info!(
            "Loaded catalog from {}: {} offline tools, {} web tools, {} notes",
            dir.display(),
            offline.tools.len(),
            web.tools.len(),
            notes.notes.len()
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            offline_tools: offline.tools,
            web_tools: web.tools,
            notes: notes.notes,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.offline_tools.is_empty() && self.web_tools.is_empty() && self.notes.is_empty()
    }
}

fn read_optional<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        log::debug!("{} not present, using empty collection", path.display());
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ToolshedError::Catalog(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| ToolshedError::Catalog(format!("Failed to parse {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_all_files() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(OFFLINE_TOOLS_FILE),
            r#"{"scan_path": "/opt", "auto_refresh": false,
                "tools": [{"name": "nmap", "path": "/opt/nmap", "tags": ["recon"]}]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(WEB_TOOLS_FILE),
            r#"{"tools": [{"name": "crt.sh", "url": "https://crt.sh"}]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(NOTES_FILE),
            r#"{"notes": [{"title": "ssrf", "note": "metadata", "tool": ""}]}"#,
        )
        .unwrap();

        let catalog = Catalog::load(dir.path()).unwrap();
        assert_eq!(catalog.offline_tools.len(), 1);
        assert_eq!(catalog.offline_tools[0].tags, vec!["recon"]);
        assert_eq!(catalog.web_tools[0].url, "https://crt.sh");
        assert_eq!(catalog.notes[0].title, "ssrf");
    }

    #[test]
    fn test_missing_files_are_empty() {
        let dir = tempdir().unwrap();
        let catalog = Catalog::load(dir.path()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_missing_dir_is_not_found() {
        let dir = tempdir().unwrap();
        let err = Catalog::load(dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, ToolshedError::NotFound(_)));
    }

    #[test]
    fn test_malformed_file_names_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(WEB_TOOLS_FILE), "{not json").unwrap();

        let err = Catalog::load(dir.path()).unwrap_err();
        assert!(matches!(err, ToolshedError::Catalog(_)));
        assert!(err.to_string().contains(WEB_TOOLS_FILE));
    }
}
