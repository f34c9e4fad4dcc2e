//! Opening treasure roll.

use crate::env::TreasureOracle;
use crate::error::GenerationError;
use crate::rng::RngState;
use crate::sample::{DrawResult, Slot, SlotCount, sample_without_replacement};
use crate::state::{TreasureId, Variant};

/// Rolls the treasures of the first battle.
///
/// Only variants whose first battle is above tier 1 and carries a treasure
/// roll anything; every other variant gets an empty result and `seed` back
/// as is. The pool is narrowed to treasures of `level` first.
///
/// # Errors
///
/// Returns `UnresolvedReference` if a pool identifier has no treasure.
pub fn select_treasures(
    treasures: &dyn TreasureOracle,
    pool: &[TreasureId],
    variant: &Variant,
    level: u8,
    slots: SlotCount,
    seed: RngState,
) -> Result<DrawResult<Slot<TreasureId>>, GenerationError> {
    if !variant.starts_with_treasure() {
        return Ok(DrawResult::skipped(seed));
    }

    let eligible = treasures.treasure_ids_by_level(pool, level)?;
    Ok(sample_without_replacement(&eligible, slots, seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Reference;
    use crate::state::{BattleConfig, NemesisTier, Treasure, TreasureConfig, VariantId};

    struct Treasures(Vec<Treasure>);

    impl TreasureOracle for Treasures {
        fn treasure(&self, id: &TreasureId) -> Option<Treasure> {
            self.0.iter().find(|treasure| &treasure.id == id).cloned()
        }
    }

    fn treasure(id: &str, level: u8) -> Treasure {
        Treasure {
            id: TreasureId::new(id),
            name: id.to_owned(),
            expansion: "base".into(),
            level,
        }
    }

    fn oracle() -> Treasures {
        Treasures(vec![
            treasure("T1", 1),
            treasure("T2", 1),
            treasure("T3", 2),
            treasure("T4", 1),
        ])
    }

    fn pool() -> Vec<TreasureId> {
        ["T1", "T2", "T3", "T4"]
            .into_iter()
            .map(TreasureId::from)
            .collect()
    }

    fn variant(tier: u8, treasure: TreasureConfig) -> Variant {
        Variant {
            id: VariantId::new("v"),
            name: "Variant".into(),
            config_list: vec![
                BattleConfig::new(NemesisTier::new(tier), treasure),
                BattleConfig::new(NemesisTier::new(tier + 1), TreasureConfig::level(2)),
            ],
        }
    }

    #[test]
    fn tier_one_start_skips_and_keeps_state() {
        let seed = RngState::from_seed("abc");
        let drawn = select_treasures(
            &oracle(),
            &pool(),
            &variant(1, TreasureConfig::level(1)),
            1,
            SlotCount::new(5),
            seed.clone(),
        )
        .unwrap();

        assert!(drawn.result.is_empty());
        assert_eq!(drawn.seed, seed);
    }

    #[test]
    fn start_without_treasure_skips() {
        let seed = RngState::from_seed("abc");
        let drawn = select_treasures(
            &oracle(),
            &pool(),
            &variant(2, TreasureConfig::NONE),
            1,
            SlotCount::new(5),
            seed.clone(),
        )
        .unwrap();

        assert!(drawn.result.is_empty());
        assert_eq!(drawn.seed, seed);
    }

    #[test]
    fn empty_config_list_skips() {
        let empty = Variant {
            id: VariantId::new("empty"),
            name: "Empty".into(),
            config_list: Vec::new(),
        };
        let seed = RngState::from_seed("abc");
        let drawn =
            select_treasures(&oracle(), &pool(), &empty, 1, SlotCount::new(5), seed.clone())
                .unwrap();
        assert_eq!(drawn, DrawResult::skipped(seed));
    }

    #[test]
    fn rolls_level_one_treasures_with_sentinel_fill() {
        let seed = RngState::from_seed("abc");
        let drawn = select_treasures(
            &oracle(),
            &pool(),
            &variant(2, TreasureConfig::level(1)),
            1,
            SlotCount::new(5),
            seed.clone(),
        )
        .unwrap();

        assert_eq!(drawn.result.len(), 5);
        assert_eq!(drawn.empty_slots(), 2);
        assert!(drawn.filled().all(|id| id != &TreasureId::new("T3")));
        assert_ne!(drawn.seed, seed);
    }

    #[test]
    fn unknown_treasure_is_unresolved() {
        let mut pool = pool();
        pool.push(TreasureId::new("Ghost"));
        let err = select_treasures(
            &oracle(),
            &pool,
            &variant(3, TreasureConfig::level(1)),
            1,
            SlotCount::new(5),
            RngState::from_seed("abc"),
        )
        .unwrap_err();

        assert_eq!(
            err,
            GenerationError::unresolved(Reference::Treasure(TreasureId::new("Ghost")))
        );
    }
}
