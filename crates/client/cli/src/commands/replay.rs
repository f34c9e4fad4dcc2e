//! Replay a saved expedition and verify it against its seed.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use expedition_bootstrap::{BootstrapConfig, GeneratorBuilder};
use expedition_core::{Expedition, ReplayError};

use super::{ContentArgs, OutputFormat};
use crate::output;

/// Replay a saved expedition and verify it against its seed
#[derive(Parser, Debug)]
pub struct Replay {
    /// Expedition JSON file written by `generate --out`
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format for the recomputed barracks
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    #[command(flatten)]
    content: ContentArgs,
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let expedition = output::read_json(&self.file)?;

        let mut config = BootstrapConfig::from_env();
        if let Some(dir) = self.content.data_dir {
            config.data_dir = Some(dir);
        }
        let setup = GeneratorBuilder::new(config).build()?;
        let generator = setup.generator();

        let replay = generator
            .replay(&expedition)
            .with_context(|| format!("replaying {}", self.file.display()))?;

        let verdict = generator.verify(&expedition);
        match self.format {
            OutputFormat::Summary => print_outcome(&expedition, verdict.as_ref())?,
            OutputFormat::Json => output::print_json(&replay.barracks)?,
        }

        verdict.with_context(|| format!("{} does not match its seed", self.file.display()))?;
        Ok(())
    }
}

fn print_outcome(
    expedition: &Expedition,
    verdict: Result<&(), &ReplayError>,
) -> Result<()> {
    output::print_summary(expedition)?;
    println!();
    match verdict {
        Ok(_) => println!("{} replay matches", style("✓").green().bold()),
        Err(err) => println!("{} {}", style("✗").red().bold(), err),
    }
    Ok(())
}
