//! HAProxy and UDS service config generation
//!
//! Renders the UDS frontend/backend section of `haproxy.cfg` and the UDS
//! service's own JSON config from cluster facts held in Salt, and writes or
//! removes both.

pub mod cluster;
pub mod error;
pub mod generator;
pub mod render;
pub mod settings;

pub use cluster::ClusterMembers;
pub use error::{Error, Result};
pub use generator::UdsConfigGenerator;
pub use settings::Settings;
