//! Salt pillar and grain lookups.
//!
//! The generator only needs a handful of facts about the cluster (node ids,
//! data network addresses, the cluster IP). They come from Salt through the
//! [`PillarSource`] trait so that callers and tests can substitute their own
//! source.

pub mod cli;
pub mod error;
pub mod source;

pub use cli::SaltCli;
pub use error::{Error, Result};
pub use source::{PillarSource, StaticSource};
