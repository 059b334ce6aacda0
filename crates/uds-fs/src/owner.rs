//! System account lookup and file ownership

use std::path::Path;

use nix::unistd::{Gid, Uid, User, chown, getgid, getuid};

use crate::{Error, Result};

/// A numeric user/group pair to hand files over to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    pub uid: Uid,
    pub gid: Gid,
}

impl Ownership {
    /// Resolve a system account name to its uid and primary gid.
    pub fn for_user(name: &str) -> Result<Self> {
        match User::from_name(name) {
            Ok(Some(user)) => Ok(Self {
                uid: user.uid,
                gid: user.gid,
            }),
            Ok(None) => Err(Error::UnknownUser {
                name: name.to_string(),
            }),
            Err(source) => Err(Error::AccountLookup {
                name: name.to_string(),
                source,
            }),
        }
    }

    /// The real uid/gid of the running process.
    pub fn current() -> Self {
        Self {
            uid: getuid(),
            gid: getgid(),
        }
    }

    /// Change ownership of `path` to this user and group.
    pub fn apply(&self, path: &Path) -> Result<()> {
        chown(path, Some(self.uid), Some(self.gid)).map_err(|source| Error::Ownership {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), uid = %self.uid, gid = %self.gid, "ownership changed");
        Ok(())
    }
}
