//! Generation configuration loader.

use std::path::Path;

use expedition_core::GenerationConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for generation configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults. Negative slot counts are rejected
    /// here rather than at generation time.
    pub fn load(path: &Path) -> LoadResult<GenerationConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GenerationConfig> {
        let config: GenerationConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid generation config: {}", e))?;

        Ok(config)
    }
}
