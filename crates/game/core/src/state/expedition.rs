//! The expedition aggregate and its parts.

use super::{
    BattleId, CardId, ExpeditionId, MageId, NemesisTier, SettingsSnapshot, TreasureConfig,
    TreasureId, VariantId,
};
use crate::config::GenerationConfig;
use crate::rng::{RngState, StreamState};
use crate::sample::Slot;

/// Lock state of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BattleStatus {
    Unlocked,
    Locked,
}

/// One battle of an expedition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battle {
    pub id: BattleId,
    pub nemesis_tier: NemesisTier,
    pub treasure: TreasureConfig,
    pub expedition_id: ExpeditionId,
    pub status: BattleStatus,
    pub tries: u32,
}

/// Generated identifier sets of an expedition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Barracks {
    pub mage_ids: Vec<Slot<MageId>>,
    pub supply_ids: Vec<Slot<CardId>>,
    pub treasure_ids: Vec<Slot<TreasureId>>,
}

/// Final random-stream record of an expedition.
///
/// `seed` is the original seed string. `supply_state` is where later supply
/// rolls resume (`Fresh` when creation took no draw at all). `nemesis_state`
/// is always `true` at creation: nemesis rolls must treat the stream as
/// already in use.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpeditionSeed {
    pub seed: String,
    pub supply_state: StreamState,
    pub nemesis_state: bool,
}

impl ExpeditionSeed {
    /// Builds the stored record from the state left by the last sampling step.
    pub fn from_final(state: RngState) -> Self {
        let (seed, supply_state) = state.into_parts();
        Self {
            seed,
            supply_state,
            nemesis_state: true,
        }
    }

    /// Stream for the next supply roll of this expedition.
    pub fn supply_rng(&self) -> RngState {
        RngState::from_parts(self.seed.clone(), self.supply_state)
    }
}

/// One complete generated game session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expedition {
    pub id: ExpeditionId,
    pub name: String,
    pub score: u32,
    pub seed: ExpeditionSeed,
    pub settings_snapshot: SettingsSnapshot,
    /// Slot counts and treasure level the barracks were rolled with.
    pub generation: GenerationConfig,
    pub barracks: Barracks,
    pub upgraded_basic_nemesis_cards: Vec<String>,
    pub banished: Vec<CardId>,
    pub variant_id: VariantId,
    pub big_pocket_variant: bool,
    pub battles: Vec<Battle>,
    pub finished: bool,
}

#[cfg(feature = "serde")]
impl Expedition {
    /// Canonical binary encoding (bincode, little endian, fixed field order).
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// SHA-256 over the canonical encoding, for audit trails.
    pub fn digest(&self) -> Result<[u8; 32], bincode::Error> {
        use sha2::{Digest, Sha256};

        let bytes = self.to_bytes()?;
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&Sha256::digest(&bytes));
        Ok(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_seed_keeps_seed_and_cursor() {
        let state = RngState::from_parts("abc".to_owned(), StreamState::Resume(42));
        let seed = ExpeditionSeed::from_final(state.clone());

        assert_eq!(seed.seed, "abc");
        assert_eq!(seed.supply_state, StreamState::Resume(42));
        assert!(seed.nemesis_state);
        assert_eq!(seed.supply_rng(), state);
    }

    #[test]
    fn untouched_stream_is_recorded_as_fresh() {
        let seed = ExpeditionSeed::from_final(RngState::from_seed("abc"));
        assert_eq!(seed.supply_state, StreamState::Fresh);
        assert!(seed.nemesis_state);
    }
}
