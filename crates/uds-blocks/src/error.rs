//! Error types for uds-blocks

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] uds_fs::Error),

    #[error("Managed configuration not found in {path}")]
    MissingBlock { path: PathBuf },

    #[error("Invalid block markers: {reason}")]
    InvalidMarkers { reason: String },

    #[error("Corrupt managed configuration block in {path}: end marker missing or before begin marker")]
    CorruptBlock { path: PathBuf },
}

impl Error {
    /// Attach the file path to errors produced from in-memory text.
    pub(crate) fn at(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::MissingBlock { .. } => Self::MissingBlock { path: path.into() },
            Self::CorruptBlock { .. } => Self::CorruptBlock { path: path.into() },
            other => other,
        }
    }
}
