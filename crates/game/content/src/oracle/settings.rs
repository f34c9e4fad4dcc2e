//! [`expedition_core::SettingsOracle`] over the selected expansions.

use expedition_core::{
    Card, CardId, GenerationError, Mage, MageId, MarketId, MarketSetup, Reference,
    SettingsOracle, SettingsSnapshot, Treasure, TreasureId,
};

/// Expansions whose content is eligible for new expeditions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpansionSelection {
    #[cfg_attr(feature = "serde", serde(default))]
    pub expansions: Vec<String>,
}

impl ExpansionSelection {
    pub fn new(expansions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            expansions: expansions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn includes(&self, expansion: &str) -> bool {
        self.expansions.iter().any(|selected| selected == expansion)
    }
}

/// Builds settings snapshots from the selection captured at startup.
///
/// Pools keep catalog order, which keeps every snapshot (and therefore every
/// seeded roll) stable across runs.
pub struct SettingsOracleImpl {
    mage_ids: Vec<MageId>,
    card_ids: Vec<CardId>,
    treasure_ids: Vec<TreasureId>,
    markets: Vec<MarketSetup>,
}

impl SettingsOracleImpl {
    pub fn new(
        selection: &ExpansionSelection,
        mages: &[Mage],
        cards: &[Card],
        treasures: &[Treasure],
        markets: Vec<MarketSetup>,
    ) -> Self {
        Self {
            mage_ids: mages
                .iter()
                .filter(|mage| selection.includes(&mage.expansion))
                .map(|mage| mage.id.clone())
                .collect(),
            card_ids: cards
                .iter()
                .filter(|card| selection.includes(&card.expansion))
                .map(|card| card.id.clone())
                .collect(),
            treasure_ids: treasures
                .iter()
                .filter(|treasure| selection.includes(&treasure.expansion))
                .map(|treasure| treasure.id.clone())
                .collect(),
            markets,
        }
    }

    pub fn markets(&self) -> &[MarketSetup] {
        &self.markets
    }

    pub fn market(&self, id: &MarketId) -> Option<&MarketSetup> {
        self.markets.iter().find(|market| &market.id == id)
    }
}

impl SettingsOracle for SettingsOracleImpl {
    fn settings_snapshot(
        &self,
        existing: Option<&SettingsSnapshot>,
        market_id: &MarketId,
    ) -> Result<SettingsSnapshot, GenerationError> {
        if let Some(existing) = existing {
            return Ok(existing.clone());
        }

        let supply_setup = self
            .market(market_id)
            .cloned()
            .ok_or_else(|| GenerationError::unresolved(Reference::Market(market_id.clone())))?;

        Ok(SettingsSnapshot {
            available_mage_ids: self.mage_ids.clone(),
            available_card_ids: self.card_ids.clone(),
            available_treasure_ids: self.treasure_ids.clone(),
            supply_setup,
        })
    }
}
