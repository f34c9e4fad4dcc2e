//! Mage selection.

use crate::rng::RngState;
use crate::sample::{DrawResult, Slot, SlotCount, sample_without_replacement};
use crate::state::MageId;

/// Rolls `slots` distinct mages. Draw order is kept as is.
pub fn select_mages(pool: &[MageId], slots: SlotCount, seed: RngState) -> DrawResult<Slot<MageId>> {
    sample_without_replacement(pool, slots, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<MageId> {
        ["M1", "M2", "M3", "M4", "M5"]
            .into_iter()
            .map(MageId::from)
            .collect()
    }

    #[test]
    fn rolls_four_distinct_mages_for_abc() {
        let pool = pool();
        let first = select_mages(&pool, SlotCount::new(4), RngState::from_seed("abc"));
        let second = select_mages(&pool, SlotCount::new(4), RngState::from_seed("abc"));

        assert_eq!(first, second);
        assert_eq!(first.result.len(), 4);
        let mut ids: Vec<&MageId> = first.filled().collect();
        assert!(ids.iter().all(|id| pool.contains(id)));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn advances_the_stream() {
        let seed = RngState::from_seed("abc");
        let drawn = select_mages(&pool(), SlotCount::new(4), seed.clone());
        assert_ne!(drawn.seed, seed);
    }
}
