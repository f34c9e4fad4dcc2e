//! Battle sequencing. Not seed dependent.

use crate::env::IdGenerator;
use crate::state::{Battle, BattleId, BattleStatus, ExpeditionId, Variant};

/// Builds one battle per config entry, in order.
///
/// Only the first battle starts unlocked.
pub fn sequence_battles(
    variant: &Variant,
    expedition_id: &ExpeditionId,
    ids: &dyn IdGenerator,
) -> Vec<Battle> {
    variant
        .config_list
        .iter()
        .enumerate()
        .map(|(index, config)| Battle {
            id: BattleId::new(ids.next_id()),
            nemesis_tier: config.tier,
            treasure: config.treasure,
            expedition_id: expedition_id.clone(),
            status: if index == 0 {
                BattleStatus::Unlocked
            } else {
                BattleStatus::Locked
            },
            tries: 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequentialIds;
    use crate::state::{BattleConfig, NemesisTier, TreasureConfig, VariantId};

    fn variant() -> Variant {
        Variant {
            id: VariantId::new("v"),
            name: "Variant".into(),
            config_list: vec![
                BattleConfig::new(NemesisTier::new(1), TreasureConfig::NONE),
                BattleConfig::new(NemesisTier::new(2), TreasureConfig::level(1)),
                BattleConfig::new(
                    NemesisTier {
                        tier: 3,
                        is_new_tier: true,
                    },
                    TreasureConfig::level(2),
                ),
            ],
        }
    }

    #[test]
    fn only_first_battle_is_unlocked() {
        let ids = SequentialIds::new("battle");
        let battles = sequence_battles(&variant(), &ExpeditionId::new("exp"), &ids);

        let status: Vec<BattleStatus> = battles.iter().map(|battle| battle.status).collect();
        assert_eq!(
            status,
            [BattleStatus::Unlocked, BattleStatus::Locked, BattleStatus::Locked]
        );
        assert!(battles.iter().all(|battle| battle.tries == 0));
    }

    #[test]
    fn carries_config_and_fresh_ids() {
        let ids = SequentialIds::new("battle");
        let variant = variant();
        let battles = sequence_battles(&variant, &ExpeditionId::new("exp"), &ids);

        for (battle, config) in battles.iter().zip(&variant.config_list) {
            assert_eq!(battle.nemesis_tier, config.tier);
            assert_eq!(battle.treasure, config.treasure);
            assert_eq!(battle.expedition_id, ExpeditionId::new("exp"));
        }
        let ids: Vec<&str> = battles.iter().map(|battle| battle.id.as_str()).collect();
        assert_eq!(ids, ["battle-1", "battle-2", "battle-3"]);
    }

    #[test]
    fn empty_variant_has_no_battles() {
        let empty = Variant {
            id: VariantId::new("empty"),
            name: "Empty".into(),
            config_list: Vec::new(),
        };
        let battles = sequence_battles(&empty, &ExpeditionId::new("exp"), &SequentialIds::new("b"));
        assert!(battles.is_empty());
    }
}
