//! Deterministic expedition generation and the data types shared across
//! clients.
//!
//! `expedition-core` defines the canonical pipeline (seeded streams, sampling
//! without replacement, mage/supply/treasure selection, battle layout) and
//! exposes pure APIs that can be reused by the CLI and offline audit tools.
//! Every expedition is built by [`generator::ExpeditionGenerator`] from one
//! seed; content is read through the oracle traits in [`env`].
pub mod config;
pub mod env;
pub mod error;
pub mod generator;
pub mod rng;
pub mod sample;
pub mod state;

pub use config::GenerationConfig;
pub use env::{
    CardOracle, Env, GenerationEnv, IdGenerator, OracleError, SequentialIds, SettingsOracle,
    TreasureOracle, VariantOracle,
};
pub use error::{ErrorSeverity, GameError, GenerationError, Reference};
pub use generator::{
    ExpeditionError, ExpeditionGenerator, ExpeditionRequest, GenerationStage, Replay, ReplayError,
    ReplayField, SeedSource,
};
pub use rng::{RngState, StreamState};
pub use sample::{DrawResult, SENTINEL, Slot, SlotCount, draw, sample_without_replacement};
pub use state::{
    Barracks, Battle, BattleConfig, BattleId, BattleStatus, Card, CardId, CardKind,
    CostOperation, Expedition, ExpeditionId, ExpeditionSeed, Mage, MageId, MarketId, MarketSetup,
    MarketTile, NemesisTier, SettingsSnapshot, Treasure, TreasureConfig, TreasureId, Variant,
    VariantId,
};
