use crate::error::{GenerationError, Reference};
use crate::state::{Variant, VariantId};

/// Provides variant definitions (battle layouts) by id.
pub trait VariantOracle: Send + Sync {
    fn variant(&self, id: &VariantId) -> Option<Variant>;

    /// # Errors
    ///
    /// Returns `UnresolvedReference` when no variant has this id.
    fn resolve_variant(&self, id: &VariantId) -> Result<Variant, GenerationError> {
        self.variant(id)
            .ok_or_else(|| GenerationError::unresolved(Reference::Variant(id.clone())))
    }
}
