//! Repeated weighted draws with self-adjusting weights.
//!
//! A [`Generator`] owns a pool of [`GeneratorOption`]s and a random source.
//! Each draw is one round: a weighted table is built from every option with a
//! positive weight, one option is picked, and then every option's [`Bump`]
//! policy runs so the weights for the next round can react to what happened.
//!
//! ```
//! use tb_core::{Bump, Generator, seeded};
//!
//! let mut generator = Generator::with_shared_bump(
//!     Bump::Decay,
//!     [(1, "apple"), (1, "banana")],
//!     seeded(7),
//! )
//! .unwrap();
//!
//! let first = *generator.draw().unwrap();
//! let second = *generator.draw().unwrap();
//! assert_ne!(first, second);
//! ```

pub mod bump;
pub mod option;

pub use bump::Bump;
pub use option::{GeneratorOption, OptionState};

use rand::rngs::StdRng;

use crate::dice::{Die, DieKind};
use crate::error::{SelectError, SelectResult};
use crate::random::RandomSource;

/// Tunable behaviour of a [`Generator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// When every weight is zero, draw uniformly over all options for that
    /// one round instead of failing.
    pub always_ensure_selection: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            always_ensure_selection: true,
        }
    }
}

impl GeneratorConfig {
    /// Enable or disable the uniform fallback for exhausted pools.
    pub fn with_always_ensure_selection(mut self, enabled: bool) -> Self {
        self.always_ensure_selection = enabled;
        self
    }
}

/// A pool of weighted options drawn from round after round.
///
/// A generator holds plain mutable state and no locks; give each game
/// session its own instance.
#[derive(Debug, Clone)]
pub struct Generator<T, R = StdRng> {
    pool: Vec<GeneratorOption<T>>,
    rng: R,
    round: u64,
    last_selected: Option<usize>,
    config: GeneratorConfig,
}

impl<T, R: RandomSource> Generator<T, R> {
    /// Build a generator from `(weight, payload, policy)` entries.
    ///
    /// Rejects negative weights and weights whose sum does not fit in a
    /// `u64`, as well as an empty pool.
    pub fn new(
        entries: impl IntoIterator<Item = (i64, T, Option<Bump>)>,
        rng: R,
    ) -> SelectResult<Self> {
        let mut total: u64 = 0;
        let pool = entries
            .into_iter()
            .enumerate()
            .map(|(index, (weight, payload, bump))| -> SelectResult<GeneratorOption<T>> {
                let positive = u64::try_from(weight)
                    .map_err(|_| SelectError::NegativeWeight { index, weight })?;
                total = total
                    .checked_add(positive)
                    .ok_or(SelectError::WeightOverflow)?;
                Ok(GeneratorOption::new(weight, payload, bump))
            })
            .collect::<SelectResult<Vec<_>>>()?;
        if pool.is_empty() {
            return Err(SelectError::EmptyPool);
        }
        Ok(Self {
            pool,
            rng,
            round: 0,
            last_selected: None,
            config: GeneratorConfig::default(),
        })
    }

    /// Build a generator whose weights never change.
    pub fn with_weights(entries: impl IntoIterator<Item = (i64, T)>, rng: R) -> SelectResult<Self> {
        Self::new(
            entries
                .into_iter()
                .map(|(weight, payload)| (weight, payload, None)),
            rng,
        )
    }

    /// Build a generator where every option uses the same policy.
    pub fn with_shared_bump(
        bump: Bump,
        entries: impl IntoIterator<Item = (i64, T)>,
        rng: R,
    ) -> SelectResult<Self> {
        Self::new(
            entries
                .into_iter()
                .map(|(weight, payload)| (weight, payload, Some(bump))),
            rng,
        )
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Enable or disable the uniform fallback for exhausted pools.
    pub fn set_always_ensure_selection(&mut self, enabled: bool) {
        self.config.always_ensure_selection = enabled;
    }

    /// Run one round and return the index of the chosen option.
    ///
    /// Fails with [`SelectError::Exhausted`] when every weight is zero and
    /// the fallback is disabled; the round counter does not move then.
    ///
    /// Weights grown past `u64::MAX / n` by a policy are clamped to that
    /// ceiling for the draw, so the table total always fits.
    pub fn draw_index(&mut self) -> SelectResult<usize> {
        let candidates = self
            .pool
            .iter()
            .filter(|option| option.current_weight() > 0)
            .count();
        let ceiling = weight_ceiling(candidates);
        let mut entries: Vec<(i64, i64)> = self
            .pool
            .iter()
            .enumerate()
            .filter(|(_, option)| option.current_weight() > 0)
            .map(|(index, option)| (index as i64, option.current_weight().min(ceiling)))
            .collect();

        if entries.is_empty() {
            if !self.config.always_ensure_selection {
                tracing::warn!(
                    round = self.round,
                    options = self.pool.len(),
                    "every option has zero weight"
                );
                return Err(SelectError::Exhausted {
                    options: self.pool.len(),
                });
            }
            tracing::debug!(round = self.round, "every option has zero weight, drawing uniformly");
            entries = (0..self.pool.len()).map(|index| (index as i64, 1)).collect();
        }

        let mut die = Die::weighted(entries)?;
        let total = match die.kind() {
            DieKind::Weighted(table) => table.total(),
            _ => 0,
        };
        let index = die.roll(&mut self.rng) as usize;

        self.round += 1;
        self.pool[index].mark_selected(self.round);
        for option in &mut self.pool {
            option.advance_round(self.round);
        }
        self.last_selected = Some(index);

        tracing::debug!(round = self.round, index, total, "option drawn");
        Ok(index)
    }

    /// Run one round and return the chosen payload.
    pub fn draw(&mut self) -> SelectResult<&T> {
        let index = self.draw_index()?;
        Ok(self.pool[index].payload())
    }

    /// Run `count` rounds and collect the payloads.
    ///
    /// Stops at the first failed round. With `clear_last_selected` the
    /// last-pick pointer is cleared afterwards; weights and history are kept.
    pub fn draw_many(&mut self, count: usize, clear_last_selected: bool) -> SelectResult<Vec<T>>
    where
        T: Clone,
    {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.draw()?.clone());
        }
        if clear_last_selected {
            self.clear_last_selected();
        }
        Ok(results)
    }

    /// Index of the most recent pick, if any.
    pub fn last_selected_index(&self) -> Option<usize> {
        self.last_selected
    }

    /// Forget the most recent pick without touching weights or history.
    pub fn clear_last_selected(&mut self) {
        self.last_selected = None;
    }

    /// Restore every option to its configured weight and clear all history.
    pub fn reset(&mut self) {
        self.last_selected = None;
        self.round = 0;
        for option in &mut self.pool {
            option.reset();
        }
    }

    /// Number of rounds drawn since construction or the last reset.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// The options in pool order.
    pub fn options(&self) -> &[GeneratorOption<T>] {
        &self.pool
    }

    /// The option at `index`.
    pub fn option(&self, index: usize) -> Option<&GeneratorOption<T>> {
        self.pool.get(index)
    }

    /// Number of options in the pool.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Always false: a pool holds at least one option.
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// The random source driving this generator.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

/// Largest weight `candidates` entries can each carry without the sum
/// overflowing a `u64`.
fn weight_ceiling(candidates: usize) -> i64 {
    let share = u64::MAX / candidates.max(1) as u64;
    i64::try_from(share).unwrap_or(i64::MAX)
}
