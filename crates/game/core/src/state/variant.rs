//! Expedition variants and their battle configuration lists.

use super::VariantId;

/// Nemesis difficulty marker for one battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NemesisTier {
    pub tier: u8,
    /// Whether this battle introduces a tier the expedition has not seen yet.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_new_tier: bool,
}

impl NemesisTier {
    pub const fn new(tier: u8) -> Self {
        Self {
            tier,
            is_new_tier: false,
        }
    }
}

/// Treasure reward attached to a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreasureConfig {
    pub level: u8,
    pub has_treasure: bool,
}

impl TreasureConfig {
    pub const NONE: Self = Self {
        level: 0,
        has_treasure: false,
    };

    pub const fn level(level: u8) -> Self {
        Self {
            level,
            has_treasure: true,
        }
    }
}

/// One entry of a variant's battle list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    pub tier: NemesisTier,
    pub treasure: TreasureConfig,
}

impl BattleConfig {
    pub const fn new(tier: NemesisTier, treasure: TreasureConfig) -> Self {
        Self { tier, treasure }
    }
}

/// A named rule configuration selecting which battles occur and in what order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variant {
    pub id: VariantId,
    pub name: String,
    pub config_list: Vec<BattleConfig>,
}

impl Variant {
    /// Returns true when the expedition opens with a treasure roll.
    ///
    /// Only the first battle is inspected: treasure is rolled up front when it
    /// is above tier 1 and carries a treasure reward.
    pub fn starts_with_treasure(&self) -> bool {
        self.config_list
            .first()
            .is_some_and(|first| first.tier.tier > 1 && first.treasure.has_treasure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(config_list: Vec<BattleConfig>) -> Variant {
        Variant {
            id: VariantId::new("v"),
            name: "Variant".into(),
            config_list,
        }
    }

    #[test]
    fn tier_one_opening_has_no_treasure() {
        let v = variant(vec![BattleConfig::new(
            NemesisTier::new(1),
            TreasureConfig::level(1),
        )]);
        assert!(!v.starts_with_treasure());
    }

    #[test]
    fn higher_tier_opening_with_treasure() {
        let v = variant(vec![
            BattleConfig::new(NemesisTier::new(2), TreasureConfig::level(1)),
            BattleConfig::new(NemesisTier::new(1), TreasureConfig::NONE),
        ]);
        assert!(v.starts_with_treasure());
    }

    #[test]
    fn higher_tier_opening_without_treasure() {
        let v = variant(vec![BattleConfig::new(
            NemesisTier::new(3),
            TreasureConfig::NONE,
        )]);
        assert!(!v.starts_with_treasure());
    }

    #[test]
    fn empty_config_list_has_no_treasure() {
        assert!(!variant(Vec::new()).starts_with_treasure());
    }
}
