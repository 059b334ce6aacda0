//! Filesystem primitives for the UDS config generator
//!
//! Provides a scoped umask guard, in-place overwrites that keep the target's
//! inode, and owned writes for files handed over to a service account.

pub mod error;
pub mod io;
pub mod owner;
pub mod umask;

pub use error::{Error, Result};
pub use owner::Ownership;
pub use umask::UmaskGuard;
