//! Error types for Salt lookups

/// Errors that can occur while querying Salt
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The Salt executable could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Subprocess exited with non-zero status
    #[error("{program} failed (exit code {code}): {stderr}")]
    CommandFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    /// Output was not the JSON document Salt prints with `--out=json`
    #[error("Failed to parse output of {program}: {source}")]
    Parse {
        program: String,
        #[source]
        source: serde_json::Error,
    },

    /// Salt answered but had no usable value for the key
    #[error("No value for {key}")]
    MissingValue { key: String },
}

/// Result type alias for Salt lookups
pub type Result<T> = std::result::Result<T, Error>;
