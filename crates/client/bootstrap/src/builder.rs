//! Builds the oracles, id source and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::Result;
use expedition_core::{ExpeditionGenerator, IdGenerator};

use crate::config::BootstrapConfig;
use crate::ids::RandomIds;
use crate::oracles::{ContentOracleFactory, OracleBundle, OracleFactory};

/// Builder that assembles oracles, identifiers and configuration for clients.
pub struct GeneratorBuilder {
    config: BootstrapConfig,
    oracle_factory: Arc<dyn OracleFactory>,
    ids: Arc<dyn IdGenerator>,
}

impl GeneratorBuilder {
    pub fn new(config: BootstrapConfig) -> Self {
        let default_factory = match &config.data_dir {
            Some(dir) => ContentOracleFactory::new(dir.clone()),
            None => ContentOracleFactory::default_paths(),
        };
        Self {
            config,
            oracle_factory: Arc::new(default_factory),
            ids: Arc::new(RandomIds::new()),
        }
    }

    /// Provide a custom oracle factory.
    pub fn oracle_factory(mut self, factory: impl OracleFactory + 'static) -> Self {
        self.oracle_factory = Arc::new(factory);
        self
    }

    /// Provide a custom id source (e.g. `SequentialIds` for reproducible files).
    pub fn ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    pub fn build(self) -> Result<GeneratorSetup> {
        let oracles = self.oracle_factory.build()?;
        tracing::debug!(
            mage_slots = oracles.config.mage_slots,
            treasure_slots = oracles.config.treasure_slots,
            "generation config loaded"
        );

        Ok(GeneratorSetup {
            config: self.config,
            oracles,
            ids: self.ids,
        })
    }
}

pub struct GeneratorSetup {
    pub config: BootstrapConfig,
    pub oracles: OracleBundle,
    pub ids: Arc<dyn IdGenerator>,
}

impl GeneratorSetup {
    pub fn generator(&self) -> ExpeditionGenerator<'_> {
        let env = self.oracles.generation_env(self.ids.as_ref());
        ExpeditionGenerator::with_config(env, self.oracles.config.clone())
    }
}
