//! [`expedition_core::CardOracle`] backed by an in-memory catalog.
use expedition_core::{Card, CardId, CardOracle};
use std::collections::HashMap;

/// CardOracle implementation with static card definitions.
///
/// Keeps insertion order so pools built from it are stable.
pub struct CardOracleImpl {
    cards: Vec<Card>,
    index: HashMap<CardId, usize>,
}

impl CardOracleImpl {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut oracle = Self::new();
        for card in cards {
            oracle.add(card);
        }
        oracle
    }

    /// Add a card; a card with the same id is replaced in place.
    pub fn add(&mut self, card: Card) {
        match self.index.get(&card.id) {
            Some(&slot) => self.cards[slot] = card,
            None => {
                self.index.insert(card.id.clone(), self.cards.len());
                self.cards.push(card);
            }
        }
    }

    pub fn all(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for CardOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl CardOracle for CardOracleImpl {
    fn card(&self, id: &CardId) -> Option<Card> {
        self.index.get(id).map(|&slot| self.cards[slot].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expedition_core::CardKind;

    #[test]
    fn replaces_duplicate_ids_in_place() {
        let oracle = CardOracleImpl::from_cards([
            Card::new("Jade", CardKind::Gem, 2),
            Card::new("Ignite", CardKind::Spell, 4),
            Card::new("Jade", CardKind::Gem, 3),
        ]);

        assert_eq!(oracle.all().len(), 2);
        assert_eq!(oracle.card(&CardId::new("Jade")).unwrap().cost, 3);
        assert_eq!(oracle.all()[0].id, CardId::new("Jade"));
    }

    #[test]
    fn resolves_cards_by_ids_in_request_order() {
        let oracle = CardOracleImpl::from_cards([
            Card::new("Jade", CardKind::Gem, 2),
            Card::new("Ignite", CardKind::Spell, 4),
        ]);
        let cards = oracle
            .cards_by_ids(&[CardId::new("Ignite"), CardId::new("Jade")])
            .unwrap();
        assert_eq!(cards[0].id, CardId::new("Ignite"));
        assert!(oracle.cards_by_ids(&[CardId::new("Ghost")]).is_err());
    }
}
