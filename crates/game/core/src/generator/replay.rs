//! Replay and audit of stored expeditions.

use super::{
    ExpeditionError, ExpeditionGenerator, GenerationStage, ReplayError, ReplayField, roll_barracks,
};
use crate::rng::RngState;
use crate::state::{Barracks, Expedition, ExpeditionSeed};

/// Seeded output recomputed from a stored expedition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replay {
    pub barracks: Barracks,
    pub seed: ExpeditionSeed,
}

impl ExpeditionGenerator<'_> {
    /// Re-rolls mages, supply and treasures of `expedition`.
    ///
    /// Reads the stored seed text, settings snapshot, generation parameters
    /// and variant. Current settings and the generator's own config are never
    /// consulted.
    pub fn replay(&self, expedition: &Expedition) -> Result<Replay, ExpeditionError> {
        expedition
            .settings_snapshot
            .check_unique()
            .map_err(ExpeditionError::at(GenerationStage::Settings))?;

        let seed = RngState::from_seed(expedition.seed.seed.as_str());
        let rolled = roll_barracks(
            &self.env,
            &expedition.generation,
            &expedition.settings_snapshot,
            &expedition.variant_id,
            seed,
        )?;

        Ok(Replay {
            barracks: rolled.barracks,
            seed: ExpeditionSeed::from_final(rolled.seed),
        })
    }

    /// Checks that `expedition` is exactly what its seed produces.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::Mismatch`] naming the first field that differs.
    pub fn verify(&self, expedition: &Expedition) -> Result<(), ReplayError> {
        let replay = self.replay(expedition)?;
        let stored = &expedition.barracks;

        let mismatch = if replay.barracks.mage_ids != stored.mage_ids {
            Some(ReplayField::MageIds)
        } else if replay.barracks.supply_ids != stored.supply_ids {
            Some(ReplayField::SupplyIds)
        } else if replay.barracks.treasure_ids != stored.treasure_ids {
            Some(ReplayField::TreasureIds)
        } else if replay.seed != expedition.seed {
            Some(ReplayField::Seed)
        } else {
            None
        };

        match mismatch {
            Some(field) => Err(ReplayError::Mismatch { field }),
            None => Ok(()),
        }
    }
}
