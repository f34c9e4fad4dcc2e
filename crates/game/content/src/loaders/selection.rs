//! Expansion selection loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::oracle::ExpansionSelection;

/// Loader for the selected expansions (`settings.toml`).
pub struct SelectionLoader;

impl SelectionLoader {
    pub fn load(path: &Path) -> LoadResult<ExpansionSelection> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ExpansionSelection> {
        let selection: ExpansionSelection = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings TOML: {}", e))?;
        if selection.expansions.is_empty() {
            tracing::warn!("no expansion selected; every pool will be empty");
        }

        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_expansions() {
        let selection = SelectionLoader::parse(r#"expansions = ["Aeon's End", "Depths"]"#).unwrap();
        assert_eq!(selection.expansions, ["Aeon's End", "Depths"]);
        assert!(selection.includes("Depths"));
        assert!(!selection.includes("War Eternal"));
    }
}
