//! Error types for Toolshed
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Toolshed
#[derive(Debug, Error)]
pub enum ToolshedError {
    /// A path or entity the caller referenced does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The OS refused to start a process
    #[error("Launch failed: {0}")]
    LaunchFailed(String),

    /// Catalog file could not be read or parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration or persisted settings problem
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Toolshed operations
pub type Result<T> = std::result::Result<T, ToolshedError>;
