use expedition_core::{Variant, VariantId, VariantOracle};
use std::collections::HashMap;

/// VariantOracle implementation with static battle layouts.
pub struct VariantOracleImpl {
    variants: HashMap<VariantId, Variant>,
}

impl VariantOracleImpl {
    pub fn new(variants: impl IntoIterator<Item = Variant>) -> Self {
        Self {
            variants: variants
                .into_iter()
                .map(|variant| (variant.id.clone(), variant))
                .collect(),
        }
    }

    /// Variants sorted by id.
    pub fn all(&self) -> Vec<&Variant> {
        let mut variants: Vec<&Variant> = self.variants.values().collect();
        variants.sort_by(|a, b| a.id.cmp(&b.id));
        variants
    }
}

impl VariantOracle for VariantOracleImpl {
    fn variant(&self, id: &VariantId) -> Option<Variant> {
        self.variants.get(id).cloned()
    }
}
