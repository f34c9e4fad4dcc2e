use std::fs;
use std::path::PathBuf;

use expedition_content::{
    CardOracleImpl, ContentFactory, ContentSet, SettingsOracleImpl, TreasureOracleImpl,
    VariantOracleImpl,
};
use expedition_core::{
    CardKind, CardOracle, Env, ExpeditionGenerator, ExpeditionRequest, MarketId, SequentialIds,
    VariantId,
};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

struct Oracles {
    cards: CardOracleImpl,
    variants: VariantOracleImpl,
    treasures: TreasureOracleImpl,
    settings: SettingsOracleImpl,
}

fn oracles(content: ContentSet) -> Oracles {
    let settings = SettingsOracleImpl::new(
        &content.selection,
        &content.mages,
        &content.cards,
        &content.treasures,
        content.markets,
    );
    Oracles {
        cards: CardOracleImpl::from_cards(content.cards),
        variants: VariantOracleImpl::new(content.variants),
        treasures: TreasureOracleImpl::new(content.treasures),
        settings,
    }
}

#[test]
fn bundled_data_loads() {
    let content = ContentFactory::new(data_dir()).load_all().unwrap();

    assert_eq!(content.config.mage_slots, 4);
    assert_eq!(content.config.treasure_slots, 5);
    assert!(!content.selection.expansions.is_empty());
    assert!(content.cards.iter().any(|card| card.kind == CardKind::Relic));
    assert!(content.variants.iter().all(|variant| !variant.config_list.is_empty()));
    assert!(content.markets.iter().any(|market| market.id == MarketId::new("balanced")));
}

#[test]
fn bundled_data_generates_and_verifies() {
    let content = ContentFactory::new(data_dir()).load_all().unwrap();
    let config = content.config.clone();
    let oracles = oracles(content);
    let ids = SequentialIds::new("exp");
    let env = Env::with_all(
        &oracles.cards,
        &oracles.variants,
        &oracles.treasures,
        &oracles.settings,
        &ids,
    )
    .into_generation_env();
    let generator = ExpeditionGenerator::with_config(env, config);

    let request = ExpeditionRequest::new("Bundled", VariantId::new("veteran"), MarketId::new("balanced"))
        .with_seed("abc");
    let expedition = generator.generate(request).unwrap();

    assert_eq!(expedition.barracks.mage_ids.len(), 4);
    assert_eq!(expedition.barracks.supply_ids.len(), 9);
    assert_eq!(expedition.barracks.treasure_ids.len(), 5);
    assert_eq!(expedition.battles.len(), 4);

    // Balanced tiles constrain cost per slot.
    let gems: Vec<u32> = expedition.barracks.supply_ids[..3]
        .iter()
        .filter_map(|slot| slot.filled())
        .map(|id| oracles.cards.card(id).unwrap().cost)
        .collect();
    assert_eq!(gems.len(), 3);
    assert!(gems[0] < 4);
    assert_eq!(gems[1], 4);
    assert!(gems[2] > 4);

    assert_eq!(generator.verify(&expedition), Ok(()));
}

#[test]
fn unselected_expansions_never_appear() {
    let content = ContentFactory::new(data_dir()).load_all().unwrap();
    let void_cards: Vec<_> = content
        .cards
        .iter()
        .filter(|card| card.expansion == "Void")
        .map(|card| card.id.clone())
        .collect();
    let oracles = oracles(content);
    let ids = SequentialIds::new("exp");
    let env = Env::with_all(
        &oracles.cards,
        &oracles.variants,
        &oracles.treasures,
        &oracles.settings,
        &ids,
    )
    .into_generation_env();

    for seed in ["a", "b", "c", "d"] {
        let request =
            ExpeditionRequest::new("Run", VariantId::new("standard"), MarketId::new("random"))
                .with_seed(seed);
        let expedition = ExpeditionGenerator::new(env).generate(request).unwrap();
        assert!(
            !expedition
                .settings_snapshot
                .available_card_ids
                .iter()
                .any(|id| void_cards.contains(id))
        );
    }
}

#[test]
fn sentinel_id_in_data_dir_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    for file in [
        "config.toml",
        "settings.toml",
        "markets.toml",
        "mages.ron",
        "treasures.ron",
        "variants.ron",
    ] {
        fs::copy(data_dir().join(file), dir.path().join(file)).unwrap();
    }
    fs::write(
        dir.path().join("cards.ron"),
        r#"(cards: [(id: "EMPTY", name: "Blank", expansion: "Aeon's End", kind: gem, cost: 1)])"#,
    )
    .unwrap();

    let err = ContentFactory::new(dir.path()).load_all().unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("cards.ron"));
    assert!(message.contains("reserved"));
}

#[test]
fn empty_variant_in_data_dir_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("variants.ron"),
        r#"(variants: [(id: "hollow", name: "Hollow", config_list: [])])"#,
    )
    .unwrap();

    let err = ContentFactory::new(dir.path()).load_variants().unwrap_err();
    assert!(err.to_string().contains("empty config list"));
}
