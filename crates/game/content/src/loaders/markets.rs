//! Market setup loader.

use std::path::Path;

use expedition_core::MarketSetup;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, check_ids, read_file};

/// Market list structure for TOML files (`[[markets]]` tables).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketCatalog {
    pub markets: Vec<MarketSetup>,
}

/// Loader for market setups from TOML files.
pub struct MarketLoader;

impl MarketLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<MarketSetup>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<MarketSetup>> {
        let catalog: MarketCatalog = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse market TOML: {}", e))?;
        check_ids(
            "market",
            catalog.markets.iter().map(|market| market.id.as_str()),
        )?;

        Ok(catalog.markets)
    }
}
