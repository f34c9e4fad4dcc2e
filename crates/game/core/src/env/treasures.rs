use crate::error::{GenerationError, Reference};
use crate::state::{Treasure, TreasureId};

/// Provides treasure definitions by id.
pub trait TreasureOracle: Send + Sync {
    fn treasure(&self, id: &TreasureId) -> Option<Treasure>;

    /// Keeps the identifiers of `ids` whose treasure has `level`, in input
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `UnresolvedReference` for the first unknown identifier.
    fn treasure_ids_by_level(
        &self,
        ids: &[TreasureId],
        level: u8,
    ) -> Result<Vec<TreasureId>, GenerationError> {
        let mut filtered = Vec::new();
        for id in ids {
            let treasure = self
                .treasure(id)
                .ok_or_else(|| GenerationError::unresolved(Reference::Treasure(id.clone())))?;
            if treasure.level == level {
                filtered.push(treasure.id);
            }
        }
        Ok(filtered)
    }
}
