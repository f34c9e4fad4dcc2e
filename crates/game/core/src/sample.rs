//! Sampling without replacement over identifier pools.
//!
//! Every sampling step returns a [`DrawResult`]: the drawn values in draw
//! order and the state the next step must start from. Pools are borrowed and
//! never modified; draws remove entries from a private working copy.

use crate::error::GenerationError;
use crate::rng::RngState;

/// Wire text of [`Slot::Empty`].
pub const SENTINEL: &str = "EMPTY";

/// One requested slot of a sample: a drawn value, or the sentinel when the
/// pool ran out.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot<T> {
    Filled(T),
    Empty,
}

impl<T> Slot<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Self::Filled(_))
    }

    pub fn filled(&self) -> Option<&T> {
        match self {
            Self::Filled(value) => Some(value),
            Self::Empty => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Filled(value) => Some(value),
            Self::Empty => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Slot<U> {
        match self {
            Self::Filled(value) => Slot::Filled(f(value)),
            Self::Empty => Slot::Empty,
        }
    }
}

impl<T: core::fmt::Display> core::fmt::Display for Slot<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Filled(value) => value.fmt(f),
            Self::Empty => f.write_str(SENTINEL),
        }
    }
}

// Slots of identifiers travel as plain strings, the sentinel as "EMPTY".
#[cfg(feature = "serde")]
impl<T: AsRef<str>> serde::Serialize for Slot<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Filled(value) => serializer.serialize_str(value.as_ref()),
            Self::Empty => serializer.serialize_str(SENTINEL),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: From<String>> serde::Deserialize<'de> for Slot<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw == SENTINEL {
            Ok(Self::Empty)
        } else {
            Ok(Self::Filled(T::from(raw)))
        }
    }
}

/// Result of one sampling step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawResult<T> {
    pub result: Vec<T>,
    pub seed: RngState,
}

impl<T> DrawResult<T> {
    /// A step that took no draw: empty result, state passed through untouched.
    pub fn skipped(seed: RngState) -> Self {
        Self {
            result: Vec::new(),
            seed,
        }
    }
}

impl<T> DrawResult<Slot<T>> {
    /// Slots the pool could not satisfy.
    pub fn empty_slots(&self) -> usize {
        self.result.iter().filter(|slot| slot.is_empty()).count()
    }

    pub fn filled(&self) -> impl Iterator<Item = &T> {
        self.result.iter().filter_map(Slot::filled)
    }
}

/// Number of slots a sampling step must fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotCount(usize);

impl SlotCount {
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for SlotCount {
    type Error = GenerationError;

    fn try_from(requested: i64) -> Result<Self, Self::Error> {
        usize::try_from(requested)
            .map(Self)
            .map_err(|_| GenerationError::InvalidSlotCount { requested })
    }
}

/// Picks one element of `pool` using only `state`.
///
/// Returns `None` for an empty pool; that is not a draw and yields no state.
pub fn draw<T: Clone>(pool: &[T], state: &RngState) -> Option<(T, RngState)> {
    let (index, next) = state.next_index(pool.len())?;
    Some((pool[index].clone(), next))
}

/// Draws one element out of a working pool, removing it.
pub(crate) fn take<T>(working: &mut Vec<T>, state: &RngState) -> Option<(T, RngState)> {
    let (index, next) = state.next_index(working.len())?;
    Some((working.remove(index), next))
}

/// Draws up to `count` distinct elements of `pool`.
///
/// Drawn values come back in draw order. Slots the pool cannot fill are
/// appended as [`Slot::Empty`] and consume no draw.
pub fn sample_without_replacement<T: Clone>(
    pool: &[T],
    count: SlotCount,
    seed: RngState,
) -> DrawResult<Slot<T>> {
    let mut working = pool.to_vec();
    let mut result = Vec::with_capacity(count.get());
    let mut seed = seed;

    while result.len() < count.get() {
        match take(&mut working, &seed) {
            Some((value, next)) => {
                result.push(Slot::Filled(value));
                seed = next;
            }
            None => break,
        }
    }
    result.resize(count.get(), Slot::Empty);

    DrawResult { result, seed }
}
