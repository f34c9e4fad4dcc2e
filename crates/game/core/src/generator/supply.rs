//! Supply selection.
//!
//! Gems, relics and spells are rolled as three independent sequences and
//! only joined at the end. Each category starts from the state the previous
//! category left, in [`CardKind`] declaration order.

use strum::IntoEnumIterator;

use crate::env::CardOracle;
use crate::error::GenerationError;
use crate::generator::sort;
use crate::rng::RngState;
use crate::sample::{DrawResult, Slot, take};
use crate::state::{Card, CardId, CardKind, MarketSetup, MarketTile};

/// Rolls the supply for `setup` out of the card pool `pool`.
///
/// The result is `gems ++ relics ++ spells`, each category sorted by cost.
///
/// # Errors
///
/// Returns `UnresolvedReference` if a pool identifier has no card.
pub fn select_supply(
    cards: &dyn CardOracle,
    pool: &[CardId],
    setup: &MarketSetup,
    seed: RngState,
) -> Result<DrawResult<Slot<CardId>>, GenerationError> {
    let available = cards.cards_by_ids(pool)?;

    let mut seed = seed;
    let mut result = Vec::with_capacity(setup.tiles.len());
    for kind in CardKind::iter() {
        let category: Vec<Card> = available
            .iter()
            .filter(|card| card.kind == kind)
            .cloned()
            .collect();

        let drawn = draw_category(category, setup.tiles_of(kind), seed);
        seed = drawn.seed;
        result.extend(
            sort::by_cost(drawn.result)
                .into_iter()
                .map(|slot| slot.map(|card| card.id)),
        );
    }

    Ok(DrawResult { result, seed })
}

/// One draw per tile, from the cards of `remaining` the tile accepts.
///
/// A drawn card leaves the category pool. A tile without candidates yields
/// an empty slot and no draw. With only `Any` tiles this is plain sampling
/// without replacement.
fn draw_category<'t>(
    mut remaining: Vec<Card>,
    tiles: impl Iterator<Item = &'t MarketTile>,
    seed: RngState,
) -> DrawResult<Slot<Card>> {
    let mut seed = seed;
    let mut result = Vec::new();

    for tile in tiles {
        let mut candidates: Vec<usize> = remaining
            .iter()
            .enumerate()
            .filter(|(_, card)| tile.operation.accepts(card.cost))
            .map(|(index, _)| index)
            .collect();

        match take(&mut candidates, &seed) {
            Some((index, next)) => {
                result.push(Slot::Filled(remaining.remove(index)));
                seed = next;
            }
            None => result.push(Slot::Empty),
        }
    }

    DrawResult { result, seed }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::sample::{SlotCount, sample_without_replacement};
    use crate::state::{CostOperation, MarketId};

    struct Cards(HashMap<CardId, Card>);

    impl Cards {
        fn new(cards: Vec<Card>) -> Self {
            Self(cards.into_iter().map(|card| (card.id.clone(), card)).collect())
        }
    }

    impl CardOracle for Cards {
        fn card(&self, id: &CardId) -> Option<Card> {
            self.0.get(id).cloned()
        }
    }

    fn market(tiles: Vec<MarketTile>) -> MarketSetup {
        MarketSetup {
            id: MarketId::new("m"),
            name: "Market".into(),
            tiles,
        }
    }

    fn catalog() -> Vec<Card> {
        vec![
            Card::new("G3", CardKind::Gem, 3),
            Card::new("G4", CardKind::Gem, 4),
            Card::new("G6", CardKind::Gem, 6),
            Card::new("R2", CardKind::Relic, 2),
            Card::new("R5", CardKind::Relic, 5),
            Card::new("S3", CardKind::Spell, 3),
            Card::new("S5", CardKind::Spell, 5),
            Card::new("S7", CardKind::Spell, 7),
            Card::new("S8", CardKind::Spell, 8),
        ]
    }

    fn pool(cards: &[Card]) -> Vec<CardId> {
        cards.iter().map(|card| card.id.clone()).collect()
    }

    fn cost_of(cards: &[Card], id: &CardId) -> u32 {
        cards.iter().find(|card| &card.id == id).unwrap().cost
    }

    fn kind_of(cards: &[Card], id: &CardId) -> CardKind {
        cards.iter().find(|card| &card.id == id).unwrap().kind
    }

    #[test]
    fn categories_are_grouped_and_cost_sorted() {
        let cards = catalog();
        let oracle = Cards::new(cards.clone());
        let setup = market(vec![
            MarketTile::any(CardKind::Spell),
            MarketTile::any(CardKind::Gem),
            MarketTile::any(CardKind::Relic),
            MarketTile::any(CardKind::Gem),
            MarketTile::any(CardKind::Spell),
            MarketTile::any(CardKind::Spell),
        ]);

        let drawn =
            select_supply(&oracle, &pool(&cards), &setup, RngState::from_seed("abc")).unwrap();
        let ids: Vec<CardId> = drawn.filled().cloned().collect();
        assert_eq!(ids.len(), 6);

        let kinds: Vec<CardKind> = ids.iter().map(|id| kind_of(&cards, id)).collect();
        assert_eq!(
            kinds,
            [
                CardKind::Gem,
                CardKind::Gem,
                CardKind::Relic,
                CardKind::Spell,
                CardKind::Spell,
                CardKind::Spell
            ]
        );

        let gem_costs: Vec<u32> = ids[..2].iter().map(|id| cost_of(&cards, id)).collect();
        assert!(gem_costs.windows(2).all(|pair| pair[0] <= pair[1]));
        let spell_costs: Vec<u32> = ids[3..].iter().map(|id| cost_of(&cards, id)).collect();
        assert!(spell_costs.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn any_tiles_match_plain_sampling() {
        let cards = catalog();
        let oracle = Cards::new(cards.clone());
        let setup = market(vec![
            MarketTile::any(CardKind::Gem),
            MarketTile::any(CardKind::Gem),
        ]);
        let gems: Vec<Card> = cards
            .iter()
            .filter(|card| card.kind == CardKind::Gem)
            .cloned()
            .collect();

        let supply =
            select_supply(&oracle, &pool(&cards), &setup, RngState::from_seed("seed")).unwrap();
        let plain = sample_without_replacement(&gems, SlotCount::new(2), RngState::from_seed("seed"));

        assert_eq!(supply.seed, plain.seed);
        let expected: Vec<CardId> = sort::by_cost(plain.result)
            .into_iter()
            .filter_map(|slot| slot.into_option().map(|card| card.id))
            .collect();
        let actual: Vec<CardId> = supply.filled().cloned().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn tile_operations_constrain_cost() {
        let cards = catalog();
        let oracle = Cards::new(cards.clone());
        let setup = market(vec![
            MarketTile::new(CardKind::Spell, CostOperation::GreaterThan { cost: 6 }),
            MarketTile::new(CardKind::Spell, CostOperation::Equal { cost: 3 }),
        ]);

        let drawn =
            select_supply(&oracle, &pool(&cards), &setup, RngState::from_seed("ops")).unwrap();
        let ids: Vec<CardId> = drawn.filled().cloned().collect();

        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0], CardId::new("S3"));
        assert!(ids[1] == CardId::new("S7") || ids[1] == CardId::new("S8"));
    }

    #[test]
    fn unsatisfiable_tile_is_empty_and_takes_no_draw() {
        let cards = catalog();
        let oracle = Cards::new(cards.clone());
        let seed = RngState::from_seed("abc");
        let setup = market(vec![MarketTile::new(
            CardKind::Relic,
            CostOperation::Equal { cost: 99 },
        )]);

        let drawn = select_supply(&oracle, &pool(&cards), &setup, seed.clone()).unwrap();
        assert_eq!(drawn.result, vec![Slot::Empty]);
        assert_eq!(drawn.seed, seed);
    }

    #[test]
    fn exhausted_category_fills_with_sentinels() {
        let cards = catalog();
        let oracle = Cards::new(cards.clone());
        let setup = market(vec![MarketTile::any(CardKind::Relic); 4]);

        let drawn =
            select_supply(&oracle, &pool(&cards), &setup, RngState::from_seed("abc")).unwrap();
        assert_eq!(drawn.result.len(), 4);
        assert_eq!(drawn.empty_slots(), 2);
        assert!(drawn.result[2..].iter().all(Slot::is_empty));
    }

    #[test]
    fn unknown_card_is_unresolved() {
        let oracle = Cards::new(catalog());
        let setup = market(vec![MarketTile::any(CardKind::Gem)]);
        let pool = vec![CardId::new("G3"), CardId::new("Ghost")];

        let err = select_supply(&oracle, &pool, &setup, RngState::from_seed("abc")).unwrap_err();
        assert_eq!(
            err,
            GenerationError::unresolved(crate::error::Reference::Card(CardId::new("Ghost")))
        );
    }
}
