//! Error types for uds-core

use std::path::PathBuf;

/// Result type for uds-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or writing configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Blocks(#[from] uds_blocks::Error),

    #[error(transparent)]
    Fs(#[from] uds_fs::Error),

    #[error("Salt lookup failed: {0}")]
    Salt(#[from] uds_salt::Error),

    #[error("Expected {expected} cluster members, found {found}")]
    ClusterSize { expected: usize, found: usize },

    #[error("Invalid settings in {path}: {message}")]
    Settings { path: PathBuf, message: String },

    #[error("Failed to render UDS config: {0}")]
    Render(#[from] serde_json::Error),
}
