//! Front-end configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use expedition_core::{ExpeditionRequest, MarketId, VariantId};

/// Configuration required to bootstrap expedition generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapConfig {
    pub data_dir: Option<PathBuf>,
    pub seed: Option<String>,
    pub variant_id: String,
    pub market_id: String,
    pub name: String,
    pub big_pocket_variant: bool,
}

impl BootstrapConfig {
    pub const DEFAULT_VARIANT: &'static str = "standard";
    pub const DEFAULT_MARKET: &'static str = "random";
    pub const DEFAULT_NAME: &'static str = "Expedition";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Content data directory (default: bundled data)
    /// - `EXPEDITION_SEED` - Seed text (default: the expedition id)
    /// - `EXPEDITION_VARIANT` - Variant id (default: `standard`)
    /// - `EXPEDITION_MARKET` - Market setup id (default: `random`)
    /// - `EXPEDITION_NAME` - Display name (default: `Expedition`)
    /// - `EXPEDITION_BIG_POCKET` - Big pocket variant (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("CONTENT_DATA_DIR").ok().map(PathBuf::from);
        config.seed = env::var("EXPEDITION_SEED").ok();

        if let Ok(variant) = env::var("EXPEDITION_VARIANT") {
            config.variant_id = variant;
        }
        if let Ok(market) = env::var("EXPEDITION_MARKET") {
            config.market_id = market;
        }
        if let Ok(name) = env::var("EXPEDITION_NAME") {
            config.name = name;
        }

        if let Some(enable) = read_env::<bool>("EXPEDITION_BIG_POCKET") {
            config.big_pocket_variant = enable;
        } else if env::var("EXPEDITION_BIG_POCKET").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.big_pocket_variant = true;
        }

        config
    }

    /// Request for one expedition from this configuration.
    pub fn request(&self) -> ExpeditionRequest {
        let mut request = ExpeditionRequest::new(
            self.name.clone(),
            VariantId::new(self.variant_id.clone()),
            MarketId::new(self.market_id.clone()),
        )
        .with_big_pocket_variant(self.big_pocket_variant);
        request.seed_value = self.seed.clone();
        request
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed: None,
            variant_id: Self::DEFAULT_VARIANT.to_owned(),
            market_id: Self::DEFAULT_MARKET.to_owned(),
            name: Self::DEFAULT_NAME.to_owned(),
            big_pocket_variant: false,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
