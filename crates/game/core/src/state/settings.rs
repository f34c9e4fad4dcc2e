//! Settings snapshot frozen into every expedition.

use std::collections::HashSet;
use std::hash::Hash;

use super::{CardId, MageId, MarketSetup, TreasureId};
use crate::error::{GenerationError, Reference};

/// The eligible pools and market captured when an expedition is created.
///
/// Later rolls (and replays) read from the snapshot instead of current
/// settings, so changing the selected expansions never alters an existing
/// expedition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettingsSnapshot {
    pub available_mage_ids: Vec<MageId>,
    pub available_card_ids: Vec<CardId>,
    pub available_treasure_ids: Vec<TreasureId>,
    pub supply_setup: MarketSetup,
}

impl SettingsSnapshot {
    /// Sampling is without replacement only if every pool entry is distinct.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DuplicateReference`] for the first id that
    /// appears twice, checking mages, then cards, then treasures.
    pub fn check_unique(&self) -> Result<(), GenerationError> {
        if let Some(id) = first_duplicate(&self.available_mage_ids) {
            return Err(GenerationError::DuplicateReference(Reference::Mage(id.clone())));
        }
        if let Some(id) = first_duplicate(&self.available_card_ids) {
            return Err(GenerationError::DuplicateReference(Reference::Card(id.clone())));
        }
        if let Some(id) = first_duplicate(&self.available_treasure_ids) {
            return Err(GenerationError::DuplicateReference(Reference::Treasure(
                id.clone(),
            )));
        }
        Ok(())
    }
}

fn first_duplicate<T: Eq + Hash>(pool: &[T]) -> Option<&T> {
    let mut seen = HashSet::with_capacity(pool.len());
    pool.iter().find(|id| !seen.insert(*id))
}
