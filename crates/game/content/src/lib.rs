//! Data-driven expedition content and loaders.
//!
//! This crate houses static content and provides loaders for RON/TOML data
//! files:
//! - Supply cards, mages and treasures (RON catalogs)
//! - Variants with their battle lists (RON)
//! - Market setups (TOML)
//! - Generation configuration and expansion selection (TOML)
//!
//! Content is consumed through the oracle implementations in [`oracle`] and
//! never appears in generated expeditions beyond its identifiers.

pub mod oracle;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use oracle::{
    CardOracleImpl, ExpansionSelection, SettingsOracleImpl, TreasureOracleImpl, VariantOracleImpl,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    CardLoader, ConfigLoader, ContentFactory, ContentSet, LoadResult, MageLoader, MarketLoader,
    SelectionLoader, TreasureLoader, VariantLoader,
};
