//! Generator settings
//!
//! Every field has a default matching a stock node, so the settings file is
//! optional and may override any subset of keys:
//!
//! ```toml
//! [haproxy]
//! config_path = "/etc/haproxy/haproxy.cfg"
//!
//! [uds]
//! username = "uds"
//!
//! [cluster]
//! expected_members = 2
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uds_blocks::BlockMarkers;
use uds_salt::SaltCli;

use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub haproxy: HaproxySettings,
    pub uds: UdsSettings,
    pub cluster: ClusterSettings,
    pub salt: SaltSettings,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = uds_fs::io::read_text(path)?;
        let settings: Self = toml::from_str(&content).map_err(|e| Error::Settings {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        settings.haproxy.markers.validate()?;
        Ok(settings)
    }

    /// Load settings from `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading settings");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}

/// The shared HAProxy config and the UDS section inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HaproxySettings {
    pub config_path: PathBuf,
    /// File name prefix of the staging file created next to `config_path`.
    pub temp_prefix: String,
    pub markers: BlockMarkers,
    pub port: u16,
    /// Loopback address the frontend binds besides the cluster IP.
    pub frontend_bind: String,
}

impl Default for HaproxySettings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("/etc/haproxy/haproxy.cfg.debug"),
            temp_prefix: "haproxy.cfg.".to_string(),
            markers: BlockMarkers::haproxy_uds(),
            port: 5000,
            frontend_bind: "127.0.0.1".to_string(),
        }
    }
}

/// The UDS service's own config file and the account that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UdsSettings {
    pub home_dir: PathBuf,
    /// Defaults to `<home_dir>/.uds`.
    pub config_dir: Option<PathBuf>,
    pub config_file: String,
    pub username: String,
    pub version: String,
}

impl UdsSettings {
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir
            .clone()
            .unwrap_or_else(|| self.home_dir.join(".uds"))
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir().join(&self.config_file)
    }
}

impl Default for UdsSettings {
    fn default() -> Self {
        Self {
            home_dir: PathBuf::from("/var/lib/uds"),
            config_dir: None,
            config_file: "uds-config.json.debug".to_string(),
            username: "uds".to_string(),
            version: "2.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterSettings {
    /// Number of minions the cluster must have; `0` accepts any non-empty set.
    pub expected_members: usize,
}

impl Default for ClusterSettings {
    fn default() -> Self {
        Self {
            expected_members: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaltSettings {
    pub salt_call: PathBuf,
    pub salt: PathBuf,
    /// Minion glob used when listing cluster members.
    pub target: String,
}

impl SaltSettings {
    pub fn client(&self) -> SaltCli {
        SaltCli::new(&self.salt_call, &self.salt).with_target(&self.target)
    }
}

impl Default for SaltSettings {
    fn default() -> Self {
        Self {
            salt_call: PathBuf::from("salt-call"),
            salt: PathBuf::from("salt"),
            target: "*".to_string(),
        }
    }
}
