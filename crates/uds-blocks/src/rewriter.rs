//! On-disk rewriting of a managed block.

use std::io::Write;
use std::path::{Path, PathBuf};

use uds_fs::UmaskGuard;

use crate::error::Result;
use crate::markers::BlockMarkers;
use crate::splice::splice;

const DEFAULT_TEMP_PREFIX: &str = "haproxy.cfg.";

/// Rewrites the managed block of one shared config file.
///
/// Each call reads the whole target, stages the new contents in a temporary
/// file next to it, then copies the staged bytes over the target in place.
/// The target path is never renamed, so a daemon that reloads by re-reading
/// it keeps seeing the same file. Callers must not run two rewrites of the
/// same path concurrently; no lock is taken.
#[derive(Debug, Clone)]
pub struct ConfigBlockRewriter {
    path: PathBuf,
    markers: BlockMarkers,
    temp_prefix: String,
}

impl ConfigBlockRewriter {
    pub fn new(path: impl Into<PathBuf>, markers: BlockMarkers) -> Self {
        Self {
            path: path.into(),
            markers,
            temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
        }
    }

    /// Use a different file name prefix for the staging file.
    pub fn with_temp_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.temp_prefix = prefix.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn markers(&self) -> &BlockMarkers {
        &self.markers
    }

    /// Replace, insert or remove the managed block.
    ///
    /// `content` of `None` removes the block. With `require_existing` set, a
    /// file without a block is an error instead of getting one appended.
    ///
    /// Runs with a `0o077` umask, restored on every exit path. Integrity
    /// errors are detected before the staging file is created, and the target
    /// is only touched once the staged copy is complete.
    ///
    /// # Errors
    /// - [`Error::InvalidMarkers`](crate::Error::InvalidMarkers) when the
    ///   markers are empty or overlap.
    /// - [`Error::MissingBlock`](crate::Error::MissingBlock) when the block is
    ///   required but absent.
    /// - [`Error::CorruptBlock`](crate::Error::CorruptBlock) when the end
    ///   marker is missing or precedes the begin marker.
    /// - [`Error::Fs`](crate::Error::Fs) for any underlying I/O failure.
    pub fn rewrite(&self, content: Option<&str>, require_existing: bool) -> Result<()> {
        let _umask = UmaskGuard::restrict();

        let original = uds_fs::io::read_text(&self.path)?;
        let updated = splice(&original, &self.markers, content, require_existing)
            .map_err(|e| e.at(&self.path))?;

        let dir = self.staging_dir();
        let mut staged = tempfile::Builder::new()
            .prefix(&self.temp_prefix)
            .tempfile_in(dir)
            .map_err(|e| uds_fs::Error::io(dir, e))?;
        let staged_path = staged.path().to_path_buf();

        staged
            .write_all(updated.as_bytes())
            .map_err(|e| uds_fs::Error::io(&staged_path, e))?;
        staged
            .flush()
            .map_err(|e| uds_fs::Error::io(&staged_path, e))?;

        uds_fs::io::overwrite_in_place(staged.as_file_mut(), &self.path)?;

        tracing::info!(
            path = %self.path.display(),
            action = if content.is_some() { "updated" } else { "removed" },
            "rewrote managed block"
        );
        Ok(())
    }

    fn staging_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
