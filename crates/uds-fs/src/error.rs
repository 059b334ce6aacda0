//! Error types for uds-fs

use std::path::PathBuf;

/// Result type for uds-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in uds-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No such system account: {name}")]
    UnknownUser { name: String },

    #[error("Failed to look up system account {name}: {source}")]
    AccountLookup {
        name: String,
        #[source]
        source: nix::Error,
    },

    #[error("Failed to change ownership of {path}: {source}")]
    Ownership {
        path: PathBuf,
        #[source]
        source: nix::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the underlying I/O error kind, if this is an I/O error.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
