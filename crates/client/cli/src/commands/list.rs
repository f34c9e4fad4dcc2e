//! List the variants and market setups a content directory offers.

use anyhow::Result;
use clap::Parser;
use console::style;

use expedition_bootstrap::{BootstrapConfig, GeneratorBuilder};
use expedition_core::CardKind;

use super::ContentArgs;

/// List variants and market setups
#[derive(Parser, Debug)]
pub struct List {
    #[command(flatten)]
    content: ContentArgs,
}

impl List {
    pub fn execute(self) -> Result<()> {
        let mut config = BootstrapConfig::from_env();
        if let Some(dir) = self.content.data_dir {
            config.data_dir = Some(dir);
        }
        let setup = GeneratorBuilder::new(config).build()?;

        println!("{}", style("Variants:").bold().yellow());
        for variant in setup.oracles.variants.all() {
            let tiers: Vec<String> = variant
                .config_list
                .iter()
                .map(|battle| battle.tier.tier.to_string())
                .collect();
            println!(
                "  {:<12} {} (tiers {})",
                variant.id.as_str(),
                variant.name,
                tiers.join(" → ")
            );
        }
        println!();

        println!("{}", style("Markets:").bold().yellow());
        for market in setup.oracles.settings.markets() {
            println!(
                "  {:<12} {} ({} gems, {} relics, {} spells)",
                market.id.as_str(),
                market.name,
                market.count_of(CardKind::Gem),
                market.count_of(CardKind::Relic),
                market.count_of(CardKind::Spell)
            );
        }
        Ok(())
    }
}
