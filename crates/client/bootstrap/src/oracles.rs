//! Helpers for constructing oracle bundles consumed by the generator.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use expedition_content::{
    CardOracleImpl, ContentFactory, SettingsOracleImpl, TreasureOracleImpl, VariantOracleImpl,
};
use expedition_core::{
    CardOracle, Env, GenerationConfig, GenerationEnv, IdGenerator, SettingsOracle,
    TreasureOracle, VariantOracle,
};

/// Content oracles plus the generation config they were loaded with.
#[derive(Clone)]
pub struct OracleBundle {
    pub cards: Arc<CardOracleImpl>,
    pub variants: Arc<VariantOracleImpl>,
    pub treasures: Arc<TreasureOracleImpl>,
    pub settings: Arc<SettingsOracleImpl>,
    pub config: GenerationConfig,
}

impl OracleBundle {
    /// Bundles the oracles into an environment that hands out ids from `ids`.
    pub fn generation_env<'a>(&'a self, ids: &'a dyn IdGenerator) -> GenerationEnv<'a> {
        let cards: &'a dyn CardOracle = self.cards.as_ref();
        let variants: &'a dyn VariantOracle = self.variants.as_ref();
        let treasures: &'a dyn TreasureOracle = self.treasures.as_ref();
        let settings: &'a dyn SettingsOracle = self.settings.as_ref();
        Env::with_all(cards, variants, treasures, settings, ids)
    }
}

pub trait OracleFactory: Send + Sync {
    fn build(&self) -> Result<OracleBundle>;
}

/// Oracle factory that loads expedition content from data files.
///
/// This factory uses the expedition-content crate's loaders to read RON/TOML
/// files and construct oracle implementations from real content.
///
/// # Directory Structure
///
/// The factory expects the following files in the data directory:
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
#[derive(Clone, Debug)]
pub struct ContentOracleFactory {
    data_dir: PathBuf,
}

impl ContentOracleFactory {
    /// Create a new content oracle factory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create with default paths (expedition-content/data).
    ///
    /// This tries to find the data directory in the following order:
    /// 1. CONTENT_DATA_DIR environment variable
    /// 2. Relative to current executable (../../crates/game/content/data)
    /// 3. Relative to current directory (crates/game/content/data)
    pub fn default_paths() -> Self {
        let data_dir = if let Ok(env_dir) = std::env::var("CONTENT_DATA_DIR") {
            PathBuf::from(env_dir)
        } else if let Ok(exe_path) = std::env::current_exe() {
            // Try relative to executable (target/<profile>/expedition)
            exe_path
                .parent()
                .and_then(|p| p.parent())
                .and_then(|p| p.parent())
                .map(|root| root.join("crates/game/content/data"))
                .filter(|dir| dir.exists())
                .unwrap_or_else(|| {
                    std::env::current_dir()
                        .unwrap_or_else(|_| PathBuf::from("."))
                        .join("crates/game/content/data")
                })
        } else {
            PathBuf::from("crates/game/content/data")
        };

        Self::new(data_dir)
    }

    pub fn data_dir(&self) -> &std::path::Path {
        &self.data_dir
    }
}

impl OracleFactory for ContentOracleFactory {
    fn build(&self) -> Result<OracleBundle> {
        if !self.data_dir.exists() {
            anyhow::bail!(
                "Content data directory not found: {}\n\
                 Current working directory: {}\n\
                 Set CONTENT_DATA_DIR environment variable to override.",
                self.data_dir.display(),
                std::env::current_dir()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "<unknown>".to_string())
            );
        }

        let content = ContentFactory::new(&self.data_dir)
            .load_all()
            .with_context(|| format!("loading content from {}", self.data_dir.display()))?;

        let settings = SettingsOracleImpl::new(
            &content.selection,
            &content.mages,
            &content.cards,
            &content.treasures,
            content.markets,
        );

        Ok(OracleBundle {
            cards: Arc::new(CardOracleImpl::from_cards(content.cards)),
            variants: Arc::new(VariantOracleImpl::new(content.variants)),
            treasures: Arc::new(TreasureOracleImpl::new(content.treasures)),
            settings: Arc::new(settings),
            config: content.config,
        })
    }
}
