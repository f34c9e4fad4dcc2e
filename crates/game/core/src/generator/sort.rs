//! Cost ordering for generated supply.

use crate::sample::Slot;
use crate::state::Card;

/// Orders a drawn category by ascending cost.
///
/// The sort is stable: cards of equal cost keep their draw order. Empty
/// slots go last.
pub fn by_cost(mut cards: Vec<Slot<Card>>) -> Vec<Slot<Card>> {
    cards.sort_by_key(|slot| match slot {
        Slot::Filled(card) => (false, card.cost),
        Slot::Empty => (true, 0),
    });
    cards
}
