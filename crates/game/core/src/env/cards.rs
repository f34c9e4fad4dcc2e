use crate::error::{GenerationError, Reference};
use crate::state::{Card, CardId};

/// Resolves supply card identifiers to their definitions.
pub trait CardOracle: Send + Sync {
    fn card(&self, id: &CardId) -> Option<Card>;

    /// Resolves a pool of identifiers, preserving pool order.
    ///
    /// # Errors
    ///
    /// Returns `UnresolvedReference` for the first unknown identifier.
    fn cards_by_ids(&self, ids: &[CardId]) -> Result<Vec<Card>, GenerationError> {
        ids.iter()
            .map(|id| {
                self.card(id)
                    .ok_or_else(|| GenerationError::unresolved(Reference::Card(id.clone())))
            })
            .collect()
    }
}
