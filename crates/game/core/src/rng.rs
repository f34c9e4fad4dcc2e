//! Seeded, replayable random streams.
//!
//! An [`RngState`] names a position in a pseudo-random stream: the seed string
//! that defines the stream, plus the cursor of the last draw. It is a plain
//! value. Drawing never mutates a state; it returns the next one, so every
//! step of the generator has to hand its final state to the step after it.
//!
//! # Determinism
//!
//! The stream only depends on the seed string and the number of draws taken.
//! No wall clock, no process entropy, no global generator.

use sha2::{Digest, Sha256};

/// Position of a stream relative to its seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StreamState {
    /// No draw taken yet; the next draw starts at the seed-derived origin.
    Fresh,
    /// PCG cursor after the most recent draw.
    Resume(u64),
}

/// Immutable handle to the next draw of a seeded stream.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RngState {
    seed: String,
    state: StreamState,
}

impl RngState {
    /// Starts a fresh stream for `seed`.
    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            state: StreamState::Fresh,
        }
    }

    pub fn from_parts(seed: String, state: StreamState) -> Self {
        Self { seed, state }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn into_parts(self) -> (String, StreamState) {
        (self.seed, self.state)
    }

    /// Draws 32 bits and returns them with the following state.
    pub fn next_u32(&self) -> (u32, RngState) {
        let cursor = Pcg::step(self.cursor());
        let next = Self {
            seed: self.seed.clone(),
            state: StreamState::Resume(cursor),
        };
        (Pcg::output(cursor), next)
    }

    /// Draws an index in `0..len`.
    ///
    /// Returns `None` without drawing when `len` is zero.
    pub fn next_index(&self, len: usize) -> Option<(usize, RngState)> {
        if len == 0 {
            return None;
        }
        let (value, next) = self.next_u32();
        // Multiply-shift keeps the mapping proportional to `value / 2^32`.
        let index = ((u128::from(value) * len as u128) >> 32) as usize;
        Some((index, next))
    }

    fn cursor(&self) -> u64 {
        match self.state {
            StreamState::Fresh => origin(&self.seed),
            StreamState::Resume(cursor) => cursor,
        }
    }
}

/// Stream origin: the first 8 bytes (little endian) of SHA-256(seed).
fn origin(seed: &str) -> u64 {
    let hash = Sha256::digest(seed.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash[..8]);
    u64::from_le_bytes(bytes)
}

/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output.
///
/// The LCG step has no fixed point (the increment is odd while
/// `MULTIPLIER - 1` is even), so every draw moves the cursor.
struct Pcg;

impl Pcg {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}
