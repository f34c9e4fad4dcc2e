//! Expedition generation pipeline.
//!
//! The [`ExpeditionGenerator`] assembles a complete [`Expedition`] from one
//! seed. Sub-generators run in a fixed order (mages, supply, treasures), each
//! starting from the state the previous one returned, so no two steps ever
//! share a draw. Battles are laid out from the variant and take no draws.
//!
//! Failures carry the [`GenerationStage`] they happened in. Nothing is
//! returned unless every stage succeeded.

mod battles;
mod errors;
mod mages;
mod replay;
mod supply;
mod treasures;

pub mod sort;

pub use battles::sequence_battles;
pub use errors::{ExpeditionError, GenerationStage, ReplayError, ReplayField};
pub use mages::select_mages;
pub use replay::Replay;
pub use supply::select_supply;
pub use treasures::select_treasures;

use crate::config::GenerationConfig;
use crate::env::GenerationEnv;
use crate::error::GenerationError;
use crate::rng::RngState;
use crate::sample::{DrawResult, Slot};
use crate::state::{
    Barracks, CardId, Expedition, ExpeditionId, ExpeditionSeed, MarketId, SettingsSnapshot,
    TreasureId, Variant, VariantId,
};

/// Where the stream of an expedition is seeded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedSource {
    /// Caller-supplied seed text.
    Explicit(String),
    /// The freshly generated expedition id.
    ExpeditionId,
}

impl SeedSource {
    /// Missing and empty seed values both fall back to the expedition id.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(seed) if !seed.is_empty() => Self::Explicit(seed.to_owned()),
            _ => Self::ExpeditionId,
        }
    }

    pub fn resolve(&self, expedition_id: &ExpeditionId) -> RngState {
        match self {
            Self::Explicit(seed) => RngState::from_seed(seed.as_str()),
            Self::ExpeditionId => RngState::from_seed(expedition_id.as_str()),
        }
    }
}

/// Inputs of one expedition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpeditionRequest {
    pub variant_id: VariantId,
    pub name: String,
    pub big_pocket_variant: bool,
    pub market_id: MarketId,
    /// Reused as is when present; otherwise a snapshot of the current
    /// selection is taken.
    pub existing_settings_snapshot: Option<SettingsSnapshot>,
    pub seed_value: Option<String>,
}

impl ExpeditionRequest {
    pub fn new(name: impl Into<String>, variant_id: VariantId, market_id: MarketId) -> Self {
        Self {
            variant_id,
            name: name.into(),
            big_pocket_variant: false,
            market_id,
            existing_settings_snapshot: None,
            seed_value: None,
        }
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed_value = Some(seed.into());
        self
    }

    pub fn with_big_pocket_variant(mut self, big_pocket_variant: bool) -> Self {
        self.big_pocket_variant = big_pocket_variant;
        self
    }

    pub fn with_settings_snapshot(mut self, snapshot: SettingsSnapshot) -> Self {
        self.existing_settings_snapshot = Some(snapshot);
        self
    }

    pub fn seed_source(&self) -> SeedSource {
        SeedSource::from_value(self.seed_value.as_deref())
    }
}

/// Builds expeditions against a set of oracles.
pub struct ExpeditionGenerator<'a> {
    env: GenerationEnv<'a>,
    config: GenerationConfig,
}

impl<'a> ExpeditionGenerator<'a> {
    pub fn new(env: GenerationEnv<'a>) -> Self {
        Self::with_config(env, GenerationConfig::default())
    }

    pub fn with_config(env: GenerationEnv<'a>, config: GenerationConfig) -> Self {
        Self { env, config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generates a complete expedition.
    ///
    /// # Errors
    ///
    /// Returns an [`ExpeditionError`] tagged with the failing stage when a
    /// reference cannot be resolved, a slot count is negative or an oracle is
    /// missing from the environment.
    pub fn generate(&self, request: ExpeditionRequest) -> Result<Expedition, ExpeditionError> {
        let ids = self
            .env
            .ids()
            .map_err(ExpeditionError::at(GenerationStage::Settings))?;
        let id = ExpeditionId::new(ids.next_id());
        let seed = request.seed_source().resolve(&id);

        let settings_snapshot = self
            .snapshot(&request)
            .map_err(ExpeditionError::at(GenerationStage::Settings))?;

        let rolled = roll_barracks(
            &self.env,
            &self.config,
            &settings_snapshot,
            &request.variant_id,
            seed,
        )?;
        let battles = sequence_battles(&rolled.variant, &id, ids);

        Ok(Expedition {
            id,
            name: request.name,
            score: 0,
            seed: ExpeditionSeed::from_final(rolled.seed),
            settings_snapshot,
            generation: self.config.clone(),
            barracks: rolled.barracks,
            upgraded_basic_nemesis_cards: Vec::new(),
            banished: Vec::new(),
            variant_id: request.variant_id,
            big_pocket_variant: request.big_pocket_variant,
            battles,
            finished: false,
        })
    }

    fn snapshot(&self, request: &ExpeditionRequest) -> Result<SettingsSnapshot, GenerationError> {
        let snapshot = self.env.settings()?.settings_snapshot(
            request.existing_settings_snapshot.as_ref(),
            &request.market_id,
        )?;
        snapshot.check_unique()?;
        Ok(snapshot)
    }
}

/// Runs mages, supply and treasures in order from `seed`.
///
/// Shared by generation and replay, so both consume the stream the same way.
/// Replay passes the parameters stored on the expedition, never the
/// generator's current ones.
fn roll_barracks(
    env: &GenerationEnv<'_>,
    config: &GenerationConfig,
    snapshot: &SettingsSnapshot,
    variant_id: &VariantId,
    seed: RngState,
) -> Result<Rolled, ExpeditionError> {
    let mages = config
        .mage_slot_count()
        .map(|slots| select_mages(&snapshot.available_mage_ids, slots, seed))
        .map_err(ExpeditionError::at(GenerationStage::Mages))?;

    let supply = roll_supply(env, snapshot, mages.seed)
        .map_err(ExpeditionError::at(GenerationStage::Supply))?;

    let (variant, treasures) = roll_treasures(env, config, snapshot, variant_id, supply.seed)
        .map_err(ExpeditionError::at(GenerationStage::Treasures))?;

    Ok(Rolled {
        barracks: Barracks {
            mage_ids: mages.result,
            supply_ids: supply.result,
            treasure_ids: treasures.result,
        },
        variant,
        seed: treasures.seed,
    })
}

fn roll_supply(
    env: &GenerationEnv<'_>,
    snapshot: &SettingsSnapshot,
    seed: RngState,
) -> Result<DrawResult<Slot<CardId>>, GenerationError> {
    select_supply(
        env.cards()?,
        &snapshot.available_card_ids,
        &snapshot.supply_setup,
        seed,
    )
}

fn roll_treasures(
    env: &GenerationEnv<'_>,
    config: &GenerationConfig,
    snapshot: &SettingsSnapshot,
    variant_id: &VariantId,
    seed: RngState,
) -> Result<(Variant, DrawResult<Slot<TreasureId>>), GenerationError> {
    let variant = env.variants()?.resolve_variant(variant_id)?;
    let drawn = select_treasures(
        env.treasures()?,
        &snapshot.available_treasure_ids,
        &variant,
        config.treasure_level,
        config.treasure_slot_count()?,
        seed,
    )?;
    Ok((variant, drawn))
}

/// Output of the seeded stages.
struct Rolled {
    barracks: Barracks,
    variant: Variant,
    seed: RngState,
}
