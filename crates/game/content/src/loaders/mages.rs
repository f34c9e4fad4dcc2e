//! Mage roster loader.

use std::path::Path;

use expedition_core::Mage;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, check_ids, read_file};

/// Mage roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MageRoster {
    pub mages: Vec<Mage>,
}

/// Loader for the mage roster from RON files.
pub struct MageLoader;

impl MageLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Mage>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Mage>> {
        let roster: MageRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse mage roster RON: {}", e))?;
        check_ids("mage", roster.mages.iter().map(|mage| mage.id.as_str()))?;

        Ok(roster.mages)
    }
}
