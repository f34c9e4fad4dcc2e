//! Static entity definitions consumed by the generator.
//!
//! Entities are reference data: they are resolved through oracles, never
//! stored in an expedition, and never mutated.

use super::{CardId, MageId, TreasureId};

/// A playable mage.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mage {
    pub id: MageId,
    pub name: String,
    pub expansion: String,
}

/// Supply card category.
///
/// Declaration order is the supply sampling order: gems, then relics, then
/// spells.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CardKind {
    Gem,
    Relic,
    Spell,
}

/// A supply card.
///
/// `cost` only orders the final supply; it never influences which card is
/// drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub expansion: String,
    pub kind: CardKind,
    pub cost: u32,
}

impl Card {
    pub fn new(id: impl Into<CardId>, kind: CardKind, cost: u32) -> Self {
        let id = id.into();
        Self {
            name: id.as_str().to_owned(),
            id,
            expansion: String::new(),
            kind,
            cost,
        }
    }

    pub fn with_expansion(mut self, expansion: impl Into<String>) -> Self {
        self.expansion = expansion.into();
        self
    }
}

/// A treasure card. Only level-1 treasures are rolled at expedition start.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Treasure {
    pub id: TreasureId,
    pub name: String,
    pub expansion: String,
    pub level: u8,
}
