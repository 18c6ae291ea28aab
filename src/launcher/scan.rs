//! Tool directory probes.
//!
//! Both probes walk the immediate entries of the tool directory in listing order,
//! which is whatever the filesystem returns. The first hit wins.

use std::fs;
use std::path::{Path, PathBuf};

/// Package formats that have a dedicated runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    /// Java archive, run with `java -jar`
    Jar,
    /// Zipped Python application, run with the Python interpreter
    Pyz,
}

impl ArchiveKind {
    pub const ALL: [ArchiveKind; 2] = [ArchiveKind::Jar, ArchiveKind::Pyz];

    pub fn extension(self) -> &'static str {
        match self {
            ArchiveKind::Jar => ".jar",
            ArchiveKind::Pyz => ".pyz",
        }
    }

    /// Kind for a file name, matching the extension case-insensitively.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL.into_iter().find(|kind| lower.ends_with(kind.extension()))
    }
}

/// One non-recursive entry of a tool directory.
#[derive(Debug, Clone)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Entries of `dir` in listing order. An unreadable directory yields no entries.
pub fn list_dir(dir: &Path) -> Vec<DirEntryInfo> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) => {
            log::warn!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    read.filter_map(|entry| entry.ok())
        .map(|entry| DirEntryInfo {
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.path(),
            is_dir: entry.file_type().map(|t| t.is_dir()).unwrap_or(false),
        })
        .collect()
}

/// First archive file among `entries`.
pub fn find_archive(entries: &[DirEntryInfo]) -> Option<(PathBuf, ArchiveKind)> {
    entries
        .iter()
        .filter(|entry| !entry.is_dir)
        .find_map(|entry| ArchiveKind::from_file_name(&entry.name).map(|kind| (entry.path.clone(), kind)))
}

/// First executable non-directory among `entries`.
pub fn find_executable(entries: &[DirEntryInfo]) -> Option<PathBuf> {
    entries
        .iter()
        .filter(|entry| !entry.is_dir)
        .find(|entry| is_executable(&entry.path))
        .map(|entry| entry.path.clone())
}

/// Whether `path` is a non-directory with any execute bit set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match fs::metadata(path) {
        Ok(meta) => !meta.is_dir() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

/// Whether `path` is a non-directory with an executable extension.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    const EXTENSIONS: [&str; 4] = ["exe", "bat", "cmd", "com"];

    let is_file = fs::metadata(path).map(|meta| !meta.is_dir()).unwrap_or(false);
    is_file
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
}
