//! Variant loader.

use std::path::Path;

use expedition_core::Variant;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, check_ids, read_file};

/// Variant list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantCatalog {
    pub variants: Vec<Variant>,
}

/// Loader for expedition variants from RON files.
pub struct VariantLoader;

impl VariantLoader {
    /// Load variants from a RON file.
    ///
    /// Every variant needs at least one battle.
    pub fn load(path: &Path) -> LoadResult<Vec<Variant>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Variant>> {
        let catalog: VariantCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse variant RON: {}", e))?;
        check_ids(
            "variant",
            catalog.variants.iter().map(|variant| variant.id.as_str()),
        )?;

        if let Some(variant) = catalog
            .variants
            .iter()
            .find(|variant| variant.config_list.is_empty())
        {
            anyhow::bail!("Variant '{}' has an empty config list", variant.id);
        }

        Ok(catalog.variants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_battle_lists() {
        let variants = VariantLoader::parse(
            r#"(
                variants: [
                    (
                        id: "veteran",
                        name: "Veteran",
                        config_list: [
                            (tier: (tier: 2), treasure: (level: 1, has_treasure: true)),
                            (tier: (tier: 3, is_new_tier: true), treasure: (level: 2, has_treasure: true)),
                        ],
                    ),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(variants.len(), 1);
        assert!(variants[0].starts_with_treasure());
        assert!(!variants[0].config_list[0].tier.is_new_tier);
        assert!(variants[0].config_list[1].tier.is_new_tier);
    }

    #[test]
    fn rejects_empty_config_list() {
        let err = VariantLoader::parse(r#"(variants: [(id: "v", name: "V", config_list: [])])"#)
            .unwrap_err();
        assert!(err.to_string().contains("empty config list"));
    }
}
