//! Cluster membership and per-node facts

use uds_salt::PillarSource;

use crate::{Error, Result};

/// Pillar key holding the cluster's floating IP.
pub const CLUSTER_IP_KEY: &str = "cluster:cluster_ip";

/// Grain holding a minion's id.
pub const MINION_ID_GRAIN: &str = "id";

/// Pillar key holding the private data network address of `minion_id`.
pub fn private_data_ip_key(minion_id: &str) -> String {
    format!("cluster:{minion_id}:network:data_nw:pvt_ip_addr")
}

/// The minion ids of the cluster, sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterMembers {
    ids: Vec<String>,
}

impl ClusterMembers {
    /// Build a member list, checking it against the expected cluster size.
    ///
    /// `expected` of `0` accepts any non-empty list.
    pub fn new(mut ids: Vec<String>, expected: usize) -> Result<Self> {
        ids.sort();
        ids.dedup();

        let size_ok = if expected == 0 {
            !ids.is_empty()
        } else {
            ids.len() == expected
        };
        if !size_ok {
            return Err(Error::ClusterSize {
                expected,
                found: ids.len(),
            });
        }

        Ok(Self { ids })
    }

    /// List every minion through its `id` grain.
    pub fn discover<S: PillarSource>(source: &S, expected: usize) -> Result<Self> {
        let ids: Vec<String> = source.minion_grains(MINION_ID_GRAIN)?.into_values().collect();
        tracing::debug!(?ids, "discovered cluster members");
        Self::new(ids, expected)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
