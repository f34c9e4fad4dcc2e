//! Random identifiers for expeditions and battles.
use std::sync::atomic::{AtomicU64, Ordering};

use expedition_core::IdGenerator;
use rand::Rng;
use rand::distributions::Alphanumeric;

/// Random alphanumeric ids tagged with an issue counter.
///
/// The counter suffix keeps ids unique for the lifetime of the generator
/// without remembering what was issued. Identifiers never feed the sampling
/// stream unless no seed was given, in which case the expedition id becomes
/// the seed.
#[derive(Debug)]
pub struct RandomIds {
    len: usize,
    issued: AtomicU64,
}

impl RandomIds {
    pub const DEFAULT_LEN: usize = 12;
    pub const MIN_LEN: usize = 8;

    pub fn new() -> Self {
        Self::with_len(Self::DEFAULT_LEN)
    }

    /// Random part of `len` characters, never shorter than [`Self::MIN_LEN`].
    pub fn with_len(len: usize) -> Self {
        Self {
            len: len.max(Self::MIN_LEN),
            issued: AtomicU64::new(0),
        }
    }

    fn random_part(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.len)
            .map(char::from)
            .collect()
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{n}", self.random_part())
    }
}
