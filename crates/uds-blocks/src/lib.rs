//! Marker-delimited block rewriting for shared config files.
//!
//! A target file is split into three regions: the text before the managed
//! block, the block itself, and the text after it. The block is delimited by
//! two fixed markers:
//!
//! ```text
//! global
//!     daemon
//! # BEGIN UDS
//! # (... machine-generated warning ...)
//! frontend uds-frontend
//!     ...
//! # END UDS
//! ```
//!
//! [`splice`] performs the replacement on an in-memory string, and
//! [`ConfigBlockRewriter`] applies it to a file on disk through a staged
//! temporary file.

pub mod error;
pub mod markers;
pub mod rewriter;
pub mod splice;

pub use error::{Error, Result};
pub use markers::BlockMarkers;
pub use rewriter::ConfigBlockRewriter;
pub use splice::{BlockSpan, has_block, locate, splice};
