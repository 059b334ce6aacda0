//! Scoped process umask

use nix::sys::stat::{Mode, umask};

/// Holds the process umask at a given value until dropped.
///
/// The umask is process-wide, so the guard restores the previous value on
/// every exit path: normal return, `?` propagation and unwinding alike.
///
/// # Example
/// ```
/// use uds_fs::UmaskGuard;
///
/// {
///     let _guard = UmaskGuard::restrict();
///     // files created here are not accessible to group or other
/// }
/// // previous umask is back in effect
/// ```
#[derive(Debug)]
#[must_use = "the umask is restored as soon as the guard is dropped"]
pub struct UmaskGuard {
    previous: Mode,
}

impl UmaskGuard {
    /// Deny all group and other access (`0o077`) for the guard's lifetime.
    pub fn restrict() -> Self {
        Self::set(Mode::S_IRWXG | Mode::S_IRWXO)
    }

    /// Set an arbitrary umask for the guard's lifetime.
    pub fn set(mask: Mode) -> Self {
        let previous = umask(mask);
        tracing::trace!(
            mask = %format!("{:03o}", mask.bits()),
            previous = %format!("{:03o}", previous.bits()),
            "umask set"
        );
        Self { previous }
    }

    /// The umask that will be restored on drop.
    pub fn previous(&self) -> Mode {
        self.previous
    }
}

impl Drop for UmaskGuard {
    fn drop(&mut self) {
        umask(self.previous);
        tracing::trace!(
            restored = %format!("{:03o}", self.previous.bits()),
            "umask restored"
        );
    }
}
