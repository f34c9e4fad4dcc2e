//! Treasure catalog loader.

use std::path::Path;

use expedition_core::Treasure;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, check_ids, read_file};

/// Treasure catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreasureCatalog {
    pub treasures: Vec<Treasure>,
}

/// Loader for the treasure catalog from RON files.
pub struct TreasureLoader;

impl TreasureLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Treasure>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Treasure>> {
        let catalog: TreasureCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse treasure catalog RON: {}", e))?;
        check_ids(
            "treasure",
            catalog.treasures.iter().map(|treasure| treasure.id.as_str()),
        )?;

        Ok(catalog.treasures)
    }
}
