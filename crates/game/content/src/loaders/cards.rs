//! Supply card catalog loader.

use std::path::Path;

use expedition_core::Card;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, check_ids, read_file};

/// Card catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardCatalog {
    pub cards: Vec<Card>,
}

/// Loader for the card catalog from RON files.
pub struct CardLoader;

impl CardLoader {
    /// Load the card catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a CardCatalog
    pub fn load(path: &Path) -> LoadResult<Vec<Card>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Card>> {
        let catalog: CardCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse card catalog RON: {}", e))?;
        check_ids("card", catalog.cards.iter().map(|card| card.id.as_str()))?;

        Ok(catalog.cards)
    }
}
