//! Persisted catalog directory.
//!
//! `toolshed add-path <dir>` records the catalog directory so later runs can
//! find it without flags. The value is a single line in a plain file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ToolshedError};

const FILE_NAME: &str = "catalog_path";

/// Stores the catalog directory under a base directory.
#[derive(Debug, Clone)]
pub struct PathStore {
    base: PathBuf,
}

impl PathStore {
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    /// Store under the platform data directory (`~/.local/share/toolshed` on Linux).
    pub fn default_location() -> Result<Self> {
        let base = dirs::data_local_dir()
            .ok_or_else(|| ToolshedError::Config("no local data directory for this user".to_string()))?
            .join(env!("CARGO_PKG_NAME"));
        Ok(Self::new(base))
    }

    pub fn file(&self) -> PathBuf {
        self.base.join(FILE_NAME)
    }

    /// Record `catalog_dir`. The directory must exist.
    pub fn save(&self, catalog_dir: &Path) -> Result<()> {
        if !catalog_dir.is_dir() {
            return Err(ToolshedError::NotFound(format!(
                "catalog directory {}",
                catalog_dir.display()
            )));
        }

        fs::create_dir_all(&self.base)?;
        fs::write(self.file(), catalog_dir.to_string_lossy().as_bytes())?;
        log::info!("Saved catalog path {} to {}", catalog_dir.display(), self.file().display());
        Ok(())
    }

    /// The recorded directory, or `None` if nothing was saved.
    pub fn load(&self) -> Result<Option<PathBuf>> {
        let file = self.file();
        if !file.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&file)?;
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(Some(PathBuf::from(trimmed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let base = tempdir().unwrap();
        let catalog = tempdir().unwrap();
        let store = PathStore::new(base.path().join("toolshed"));

        assert!(store.load().unwrap().is_none());
        store.save(catalog.path()).unwrap();
        assert_eq!(store.load().unwrap(), Some(catalog.path().to_path_buf()));
    }

    #[test]
    fn test_save_rejects_missing_dir() {
        let base = tempdir().unwrap();
        let store = PathStore::new(base.path());

        let err = store.save(&base.path().join("missing")).unwrap_err();
        assert!(matches!(err, ToolshedError::NotFound(_)));
        assert!(!store.file().exists());
    }

    #[test]
    fn test_load_trims_whitespace() {
        let base = tempdir().unwrap();
        let store = PathStore::new(base.path());
        fs::write(store.file(), "  /srv/catalog\n").unwrap();

        assert_eq!(store.load().unwrap(), Some(PathBuf::from("/srv/catalog")));
    }
}
