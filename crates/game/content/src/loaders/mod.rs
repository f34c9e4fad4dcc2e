//! Content loaders for reading expedition data from files.
//!
//! Catalogs (cards, mages, treasures, variants) are RON; market setups, the
//! generation config and the expansion selection are TOML. Every loader
//! deserializes straight into `expedition-core` types.

pub mod cards;
pub mod config;
pub mod factory;
pub mod mages;
pub mod markets;
pub mod selection;
pub mod treasures;
pub mod variants;

pub use cards::CardLoader;
pub use config::ConfigLoader;
pub use factory::{ContentFactory, ContentSet};
pub use mages::MageLoader;
pub use markets::MarketLoader;
pub use selection::SelectionLoader;
pub use treasures::TreasureLoader;
pub use variants::VariantLoader;

use std::collections::HashSet;
use std::path::Path;

use expedition_core::SENTINEL;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Rejects empty, duplicate and sentinel identifiers.
///
/// `"EMPTY"` marks unfilled slots in generated expeditions, so no content
/// may use it as an id.
pub(crate) fn check_ids<'a>(kind: &str, ids: impl IntoIterator<Item = &'a str>) -> LoadResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            anyhow::bail!("{} with an empty id", kind);
        }
        if id == SENTINEL {
            anyhow::bail!("{} id '{}' is reserved", kind, SENTINEL);
        }
        if !seen.insert(id) {
            anyhow::bail!("Duplicate {} id '{}'", kind, id);
        }
    }
    Ok(())
}
