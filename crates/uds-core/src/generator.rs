//! Writing and removing the generated configuration

use uds_blocks::ConfigBlockRewriter;
use uds_fs::{Ownership, UmaskGuard};
use uds_salt::PillarSource;

use crate::cluster::{self, ClusterMembers};
use crate::render;
use crate::{Result, Settings};

/// Generates the HAProxy section and the UDS service config for one node.
///
/// Callers must not run two generators against the same node at once.
#[derive(Debug)]
pub struct UdsConfigGenerator<S> {
    settings: Settings,
    source: S,
}

impl<S: PillarSource> UdsConfigGenerator<S> {
    pub fn new(settings: Settings, source: S) -> Self {
        Self { settings, source }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn private_data_ip(&self, minion_id: &str) -> Result<String> {
        Ok(self
            .source
            .pillar_get(&cluster::private_data_ip_key(minion_id))?)
    }

    fn rewriter(&self) -> ConfigBlockRewriter {
        let haproxy = &self.settings.haproxy;
        ConfigBlockRewriter::new(&haproxy.config_path, haproxy.markers.clone())
            .with_temp_prefix(&haproxy.temp_prefix)
    }

    /// Render the UDS section of `haproxy.cfg` from the current cluster facts.
    pub fn generate_haproxy_config(&self) -> Result<String> {
        let cluster_ip = self.source.pillar_get(cluster::CLUSTER_IP_KEY)?;
        let members =
            ClusterMembers::discover(&self.source, self.settings.cluster.expected_members)?;
        let member_ips = members
            .ids()
            .iter()
            .map(|id| self.private_data_ip(id))
            .collect::<Result<Vec<_>>>()?;

        let haproxy = &self.settings.haproxy;
        Ok(render::render_haproxy(
            &cluster_ip,
            &member_ips,
            haproxy.port,
            &haproxy.frontend_bind,
        ))
    }

    /// Render the UDS service config for the local node.
    pub fn generate_uds_config(&self) -> Result<String> {
        let local_id = self.source.grain_get(cluster::MINION_ID_GRAIN)?;
        let host = self.private_data_ip(&local_id)?;
        render::render_uds_config(&self.settings.uds.version, &host)
    }

    pub fn update_haproxy_config(&self) -> Result<()> {
        let config = self.generate_haproxy_config()?;
        self.rewriter().rewrite(Some(&config), false)?;
        Ok(())
    }

    pub fn remove_haproxy_config(&self) -> Result<()> {
        self.rewriter().rewrite(None, false)?;
        Ok(())
    }

    /// Write `config` as the UDS service config, owned by the UDS account.
    ///
    /// The config directory is created if missing. Both the directory and the
    /// file are chowned after being written.
    pub fn write_uds_config(&self, config: &str) -> Result<()> {
        let uds = &self.settings.uds;
        let owner = Ownership::for_user(&uds.username)?;
        let _umask = UmaskGuard::restrict();

        let dir = uds.config_dir();
        let path = uds.config_path();
        uds_fs::io::ensure_dir_owned(&dir, Some(owner))?;
        uds_fs::io::write_owned(&path, config.as_bytes(), Some(owner))?;

        tracing::info!(path = %path.display(), user = %uds.username, "wrote UDS config");
        Ok(())
    }

    pub fn update_uds_config(&self) -> Result<()> {
        let config = self.generate_uds_config()?;
        self.write_uds_config(&format!("{config}\n"))
    }

    /// Delete the UDS config directory and everything in it.
    pub fn remove_uds_config(&self) -> Result<()> {
        let dir = self.settings.uds.config_dir();
        uds_fs::io::remove_tree(&dir)?;
        tracing::info!(path = %dir.display(), "removed UDS config");
        Ok(())
    }

    /// Write both the HAProxy section and the UDS service config.
    pub fn apply(&self) -> Result<()> {
        self.update_haproxy_config()?;
        self.update_uds_config()
    }

    /// Remove both the HAProxy section and the UDS service config.
    pub fn delete(&self) -> Result<()> {
        self.remove_haproxy_config()?;
        self.remove_uds_config()
    }
}
