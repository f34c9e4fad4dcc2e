use expedition_core::{Treasure, TreasureId, TreasureOracle};
use std::collections::HashMap;

/// TreasureOracle implementation with static treasure definitions.
pub struct TreasureOracleImpl {
    treasures: HashMap<TreasureId, Treasure>,
}

impl TreasureOracleImpl {
    pub fn new(treasures: impl IntoIterator<Item = Treasure>) -> Self {
        Self {
            treasures: treasures
                .into_iter()
                .map(|treasure| (treasure.id.clone(), treasure))
                .collect(),
        }
    }
}

impl TreasureOracle for TreasureOracleImpl {
    fn treasure(&self, id: &TreasureId) -> Option<Treasure> {
        self.treasures.get(id).cloned()
    }
}
