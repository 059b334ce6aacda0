//! The lookup interface consumed by the generator

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Synchronous key/value lookups against the orchestration layer.
pub trait PillarSource {
    /// Look up a pillar value on the local minion, e.g. `cluster:cluster_ip`.
    fn pillar_get(&self, key: &str) -> Result<String>;

    /// Look up a grain on the local minion, e.g. `id`.
    fn grain_get(&self, key: &str) -> Result<String>;

    /// Look up a grain on every minion, keyed by minion id.
    fn minion_grains(&self, key: &str) -> Result<BTreeMap<String, String>>;
}

impl<T: PillarSource + ?Sized> PillarSource for &T {
    fn pillar_get(&self, key: &str) -> Result<String> {
        (**self).pillar_get(key)
    }

    fn grain_get(&self, key: &str) -> Result<String> {
        (**self).grain_get(key)
    }

    fn minion_grains(&self, key: &str) -> Result<BTreeMap<String, String>> {
        (**self).minion_grains(key)
    }
}

/// A fixed set of answers, for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pillar: BTreeMap<String, String>,
    grains: BTreeMap<String, String>,
    minions: BTreeMap<String, BTreeMap<String, String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pillar(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pillar.insert(key.into(), value.into());
        self
    }

    pub fn with_grain(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.grains.insert(key.into(), value.into());
        self
    }

    /// Register a minion; its `id` grain is set to `id`.
    pub fn with_minion(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.minions
            .entry(id.clone())
            .or_default()
            .insert("id".to_string(), id);
        self
    }
}

impl PillarSource for StaticSource {
    fn pillar_get(&self, key: &str) -> Result<String> {
        self.pillar.get(key).cloned().ok_or_else(|| Error::MissingValue {
            key: key.to_string(),
        })
    }

    fn grain_get(&self, key: &str) -> Result<String> {
        self.grains.get(key).cloned().ok_or_else(|| Error::MissingValue {
            key: key.to_string(),
        })
    }

    fn minion_grains(&self, key: &str) -> Result<BTreeMap<String, String>> {
        Ok(self
            .minions
            .iter()
            .filter_map(|(id, grains)| grains.get(key).map(|v| (id.clone(), v.clone())))
            .collect())
    }
}
