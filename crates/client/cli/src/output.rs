//! Expedition printing and JSON files.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use expedition_core::{Expedition, Slot};

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    println!("{}", json);
    Ok(())
}

pub fn write_json(path: &Path, expedition: &Expedition) -> Result<()> {
    let json = serde_json::to_string_pretty(expedition).context("Failed to serialize to JSON")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write expedition file: {}", path.display()))
}

pub fn read_json(path: &Path) -> Result<Expedition> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read expedition file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse expedition file: {}", path.display()))
}

pub fn print_summary(expedition: &Expedition) -> Result<()> {
    let digest = expedition.digest().context("Failed to encode expedition")?;

    println!("{}", style("=== Expedition ===").bold().green());
    println!("{} {}", style("Id:").bold().cyan(), expedition.id);
    println!("{} {}", style("Name:").bold().cyan(), expedition.name);
    println!("{} {}", style("Variant:").bold().cyan(), expedition.variant_id);
    println!("{} {}", style("Seed:").bold().cyan(), expedition.seed.seed);
    println!("{} {}", style("Digest:").bold().cyan(), hex::encode(digest));
    println!();

    println!("{}", style("Mages:").bold().yellow());
    print_slots(&expedition.barracks.mage_ids);
    println!("{}", style("Supply:").bold().yellow());
    print_slots(&expedition.barracks.supply_ids);
    println!("{}", style("Treasures:").bold().yellow());
    if expedition.barracks.treasure_ids.is_empty() {
        println!("  (none rolled)");
    } else {
        print_slots(&expedition.barracks.treasure_ids);
    }
    println!();

    println!("{}", style("Battles:").bold().yellow());
    for (index, battle) in expedition.battles.iter().enumerate() {
        let treasure = if battle.treasure.has_treasure {
            format!("treasure level {}", battle.treasure.level)
        } else {
            "no treasure".to_owned()
        };
        println!(
            "  {}. tier {} [{}] {}",
            index + 1,
            battle.nemesis_tier.tier,
            battle.status,
            treasure
        );
    }
    Ok(())
}

fn print_slots<T: std::fmt::Display>(slots: &[Slot<T>]) {
    for slot in slots {
        match slot {
            Slot::Filled(id) => println!("  - {}", id),
            Slot::Empty => println!("  - {}", style(slot).dim()),
        }
    }
}
