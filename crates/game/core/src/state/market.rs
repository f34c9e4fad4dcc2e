//! Market setups: how many supply cards of each category to draw, and under
//! which cost constraint.

use super::{CardKind, MarketId};

/// Cost constraint of a single market tile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CostOperation {
    #[default]
    Any,
    Equal {
        cost: u32,
    },
    LessThan {
        cost: u32,
    },
    GreaterThan {
        cost: u32,
    },
    /// Inclusive on both ends.
    Between {
        min: u32,
        max: u32,
    },
    OneOf {
        costs: Vec<u32>,
    },
}

impl CostOperation {
    pub fn accepts(&self, cost: u32) -> bool {
        match self {
            Self::Any => true,
            Self::Equal { cost: value } => cost == *value,
            Self::LessThan { cost: value } => cost < *value,
            Self::GreaterThan { cost: value } => cost > *value,
            Self::Between { min, max } => (*min..=*max).contains(&cost),
            Self::OneOf { costs } => costs.contains(&cost),
        }
    }
}

/// One supply slot of a market.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketTile {
    pub kind: CardKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub operation: CostOperation,
}

impl MarketTile {
    pub const fn any(kind: CardKind) -> Self {
        Self {
            kind,
            operation: CostOperation::Any,
        }
    }

    pub const fn new(kind: CardKind, operation: CostOperation) -> Self {
        Self { kind, operation }
    }
}

/// A market layout. The number of tiles per category is that category's
/// draw count.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSetup {
    pub id: MarketId,
    pub name: String,
    pub tiles: Vec<MarketTile>,
}

impl MarketSetup {
    /// Tiles of one category, in market order.
    pub fn tiles_of(&self, kind: CardKind) -> impl Iterator<Item = &MarketTile> {
        self.tiles.iter().filter(move |tile| tile.kind == kind)
    }

    pub fn count_of(&self, kind: CardKind) -> usize {
        self.tiles_of(kind).count()
    }
}
