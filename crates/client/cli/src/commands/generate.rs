//! Generate a new expedition.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use expedition_bootstrap::{BootstrapConfig, GeneratorBuilder};

use super::{ContentArgs, OutputFormat};
use crate::output;

/// Generate a new expedition
#[derive(Parser, Debug)]
pub struct Generate {
    /// Seed text; the expedition id is used when omitted or empty
    #[arg(short, long)]
    seed: Option<String>,

    /// Variant id (e.g. standard, veteran)
    #[arg(short, long)]
    variant: Option<String>,

    /// Market setup id (e.g. random, balanced)
    #[arg(short, long)]
    market: Option<String>,

    /// Expedition display name
    #[arg(short, long)]
    name: Option<String>,

    /// Enable the big pocket variant
    #[arg(long)]
    big_pocket: bool,

    /// Write the expedition as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    #[command(flatten)]
    content: ContentArgs,
}

impl Generate {
    pub fn execute(self) -> Result<()> {
        let config = self.apply(BootstrapConfig::from_env());
        let setup = GeneratorBuilder::new(config).build()?;

        let request = setup.config.request();
        tracing::info!(
            variant = %request.variant_id,
            market = %request.market_id,
            "generating expedition"
        );
        if matches!(
            request.seed_source(),
            expedition_core::SeedSource::ExpeditionId
        ) {
            tracing::warn!("no seed given; seeding from the expedition id");
        }

        let expedition = setup
            .generator()
            .generate(request)
            .context("expedition generation failed")?;
        tracing::info!(id = %expedition.id, seed = %expedition.seed.seed, "expedition ready");

        if let Some(path) = &self.out {
            output::write_json(path, &expedition)?;
            tracing::info!("saved to {}", path.display());
        }

        match self.format {
            OutputFormat::Summary => output::print_summary(&expedition)?,
            OutputFormat::Json => output::print_json(&expedition)?,
        }
        Ok(())
    }

    /// Command line arguments override environment configuration.
    fn apply(&self, mut config: BootstrapConfig) -> BootstrapConfig {
        if let Some(seed) = &self.seed {
            config.seed = Some(seed.clone());
        }
        if let Some(variant) = &self.variant {
            config.variant_id = variant.clone();
        }
        if let Some(market) = &self.market {
            config.market_id = market.clone();
        }
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if self.big_pocket {
            config.big_pocket_variant = true;
        }
        if let Some(dir) = &self.content.data_dir {
            config.data_dir = Some(dir.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_override_environment() {
        let cmd = Generate::parse_from([
            "generate",
            "--seed",
            "abc",
            "--variant",
            "veteran",
            "--big-pocket",
            "--data-dir",
            "/tmp/content",
        ]);
        let config = cmd.apply(BootstrapConfig {
            seed: Some("env-seed".into()),
            market_id: "balanced".into(),
            ..BootstrapConfig::default()
        });

        assert_eq!(config.seed.as_deref(), Some("abc"));
        assert_eq!(config.variant_id, "veteran");
        assert_eq!(config.market_id, "balanced");
        assert!(config.big_pocket_variant);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/content")));
    }
}
