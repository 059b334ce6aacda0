//! File I/O for managed configuration files

use std::fs::{self, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::{Error, Ownership, Result};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Replace the contents of `target` with everything in `source`.
///
/// The target is truncated and rewritten through its existing path rather than
/// renamed over, so it keeps its inode, mode and owner, and a process that
/// re-reads the same path picks up the new contents. The target must already
/// exist. Returns the number of bytes copied.
pub fn overwrite_in_place<R: Read + Seek>(source: &mut R, target: &Path) -> Result<u64> {
    source
        .seek(SeekFrom::Start(0))
        .map_err(|e| Error::io(target, e))?;

    let mut out = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(target)
        .map_err(|e| Error::io(target, e))?;

    let copied = io::copy(source, &mut out).map_err(|e| Error::io(target, e))?;
    out.sync_all().map_err(|e| Error::io(target, e))?;

    tracing::debug!(path = %target.display(), bytes = copied, "overwrote file in place");
    Ok(copied)
}

/// Write `content` to `path`, truncating any previous contents, then hand the
/// file over to `owner` if given.
pub fn write_owned(path: &Path, content: &[u8], owner: Option<Ownership>) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    file.write_all(content).map_err(|e| Error::io(path, e))?;
    file.flush().map_err(|e| Error::io(path, e))?;
    drop(file);

    if let Some(owner) = owner {
        owner.apply(path)?;
    }
    Ok(())
}

/// Create a single directory if it does not exist yet, then hand it over to
/// `owner` if given. Parent directories are not created.
pub fn ensure_dir_owned(path: &Path, owner: Option<Ownership>) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "created directory"),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {}
        Err(e) => return Err(Error::io(path, e)),
    }

    if let Some(owner) = owner {
        owner.apply(path)?;
    }
    Ok(())
}

/// Recursively remove a directory and everything under it.
pub fn remove_tree(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), "removed directory tree");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_overwrite_rewinds_source() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target.cfg");
        fs::write(&target, "old contents that are longer").unwrap();

        let mut source = Cursor::new(b"new".to_vec());
        source.seek(SeekFrom::End(0)).unwrap();

        let copied = overwrite_in_place(&mut source, &target).unwrap();
        assert_eq!(copied, 3);
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_overwrite_missing_target_fails() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("missing.cfg");

        let result = overwrite_in_place(&mut Cursor::new(b"x".to_vec()), &target);
        assert_eq!(
            result.unwrap_err().io_kind(),
            Some(io::ErrorKind::NotFound)
        );
        assert!(!target.exists());
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".uds");

        ensure_dir_owned(&dir, None).unwrap();
        ensure_dir_owned(&dir, None).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_dir_over_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("not-a-dir");
        fs::write(&path, "").unwrap();

        assert!(ensure_dir_owned(&path, None).is_err());
    }
}
