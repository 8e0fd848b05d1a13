//! Uniform integer sources.
//!
//! Every random decision in the engine goes through [`RandomSource`]. Callers
//! own the source and pass it by mutable reference, so a single seeded stream
//! can be threaded through a whole game session and replayed exactly.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of unbiased integers.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[0, max]`.
    fn uniform(&mut self, max: u64) -> u64;

    /// Returns a uniformly distributed integer in `[low, high]`.
    ///
    /// Callers must ensure `low <= high`.
    fn uniform_between(&mut self, low: i64, high: i64) -> i64 {
        let span = (i128::from(high) - i128::from(low)) as u64;
        let offset = self.uniform(span);
        (i128::from(low) + i128::from(offset)) as i64
    }
}

impl RandomSource for StdRng {
    fn uniform(&mut self, max: u64) -> u64 {
        self.random_range(0..=max)
    }
}

impl RandomSource for ThreadRng {
    fn uniform(&mut self, max: u64) -> u64 {
        self.random_range(0..=max)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self, max: u64) -> u64 {
        (**self).uniform(max)
    }
}

/// Create a reproducible random stream from a seed.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A deterministic source that replays a fixed script of values.
///
/// Each scripted value is reduced modulo `max + 1` so it always lands in the
/// requested range. The script cycles when exhausted; an empty script always
/// yields zero. Every call is counted, which makes it possible to assert that
/// an operation consumed no randomness at all.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<u64>,
    cursor: usize,
    calls: usize,
}

impl ScriptedSource {
    /// Create a source replaying `script` in order.
    pub fn new(script: impl Into<Vec<u64>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
            calls: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, max: u64) -> u64 {
        self.calls += 1;
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        match max.checked_add(1) {
            Some(modulus) => value % modulus,
            None => value,
        }
    }
}
