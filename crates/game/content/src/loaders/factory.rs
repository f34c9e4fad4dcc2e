//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use expedition_core::{Card, GenerationConfig, Mage, MarketSetup, Treasure, Variant};

use crate::loaders::{
    CardLoader, ConfigLoader, LoadResult, MageLoader, MarketLoader, SelectionLoader,
    TreasureLoader, VariantLoader,
};
use crate::oracle::ExpansionSelection;

/// Everything a data directory defines.
#[derive(Clone, Debug)]
pub struct ContentSet {
    pub config: GenerationConfig,
    pub selection: ExpansionSelection,
    pub cards: Vec<Card>,
    pub mages: Vec<Mage>,
    pub treasures: Vec<Treasure>,
    pub variants: Vec<Variant>,
    pub markets: Vec<MarketSetup>,
}

/// Content factory that loads all expedition content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── settings.toml
/// ├── markets.toml
/// ├── cards.ron
/// ├── mages.ron
/// ├── treasures.ron
/// └── variants.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load generation configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GenerationConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the expansion selection from `settings.toml`.
    pub fn load_selection(&self) -> LoadResult<ExpansionSelection> {
        SelectionLoader::load(&self.data_dir.join("settings.toml"))
    }

    /// Load the card catalog from `cards.ron`.
    pub fn load_cards(&self) -> LoadResult<Vec<Card>> {
        CardLoader::load(&self.data_dir.join("cards.ron"))
    }

    /// Load the mage roster from `mages.ron`.
    pub fn load_mages(&self) -> LoadResult<Vec<Mage>> {
        MageLoader::load(&self.data_dir.join("mages.ron"))
    }

    /// Load the treasure catalog from `treasures.ron`.
    pub fn load_treasures(&self) -> LoadResult<Vec<Treasure>> {
        TreasureLoader::load(&self.data_dir.join("treasures.ron"))
    }

    /// Load variants from `variants.ron`.
    pub fn load_variants(&self) -> LoadResult<Vec<Variant>> {
        VariantLoader::load(&self.data_dir.join("variants.ron"))
    }

    /// Load market setups from `markets.toml`.
    pub fn load_markets(&self) -> LoadResult<Vec<MarketSetup>> {
        MarketLoader::load(&self.data_dir.join("markets.toml"))
    }

    /// Load every file of the data directory.
    pub fn load_all(&self) -> LoadResult<ContentSet> {
        let dir = self.data_dir.display();
        let content = ContentSet {
            config: self
                .load_config()
                .with_context(|| format!("loading config.toml from {dir}"))?,
            selection: self
                .load_selection()
                .with_context(|| format!("loading settings.toml from {dir}"))?,
            cards: self
                .load_cards()
                .with_context(|| format!("loading cards.ron from {dir}"))?,
            mages: self
                .load_mages()
                .with_context(|| format!("loading mages.ron from {dir}"))?,
            treasures: self
                .load_treasures()
                .with_context(|| format!("loading treasures.ron from {dir}"))?,
            variants: self
                .load_variants()
                .with_context(|| format!("loading variants.ron from {dir}"))?,
            markets: self
                .load_markets()
                .with_context(|| format!("loading markets.toml from {dir}"))?,
        };

        tracing::debug!(
            cards = content.cards.len(),
            mages = content.mages.len(),
            treasures = content.treasures.len(),
            variants = content.variants.len(),
            markets = content.markets.len(),
            "loaded content from {dir}"
        );
        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
