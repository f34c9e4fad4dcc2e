//! Domain types: identifiers, static entities, variants, markets, settings
//! snapshots and the generated expedition record.
mod entities;
mod expedition;
mod ids;
mod market;
mod settings;
mod variant;

pub use entities::{Card, CardKind, Mage, Treasure};
pub use expedition::{Barracks, Battle, BattleStatus, Expedition, ExpeditionSeed};
pub use ids::{BattleId, CardId, ExpeditionId, MageId, MarketId, TreasureId, VariantId};
pub use market::{CostOperation, MarketSetup, MarketTile};
pub use settings::SettingsSnapshot;
pub use variant::{BattleConfig, NemesisTier, TreasureConfig, Variant};
