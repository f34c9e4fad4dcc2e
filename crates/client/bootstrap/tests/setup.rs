use std::path::PathBuf;

use expedition_bootstrap::{BootstrapConfig, GeneratorBuilder};
use expedition_core::{BattleStatus, SequentialIds, StreamState};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../game/content/data")
}

fn config(seed: Option<&str>) -> BootstrapConfig {
    BootstrapConfig {
        data_dir: Some(data_dir()),
        seed: seed.map(str::to_owned),
        variant_id: "veteran".into(),
        market_id: "balanced".into(),
        ..BootstrapConfig::default()
    }
}

#[test]
fn seeded_setups_agree() {
    let first = GeneratorBuilder::new(config(Some("abc")))
        .ids(SequentialIds::new("exp"))
        .build()
        .unwrap();
    let second = GeneratorBuilder::new(config(Some("abc")))
        .ids(SequentialIds::new("exp"))
        .build()
        .unwrap();

    let a = first.generator().generate(first.config.request()).unwrap();
    let b = second.generator().generate(second.config.request()).unwrap();
    assert_eq!(a.digest().unwrap(), b.digest().unwrap());
    assert_eq!(a.battles[0].status, BattleStatus::Unlocked);
    assert!(matches!(a.seed.supply_state, StreamState::Resume(_)));
}

#[test]
fn random_ids_seed_unseeded_expeditions() {
    let setup = GeneratorBuilder::new(config(None)).build().unwrap();
    let generator = setup.generator();

    let first = generator.generate(setup.config.request()).unwrap();
    let second = generator.generate(setup.config.request()).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.seed.seed, first.id.as_str());
    assert_eq!(generator.verify(&first), Ok(()));
}
