//! Serialisable pool definitions.
//!
//! A [`PoolDef`] describes a generator as data so game content can live in
//! JSON files next to the rest of a game's configuration:
//!
//! ```json
//! {
//!   "bump": { "kind": "temp_drop", "drop": 1 },
//!   "options": [
//!     { "weight": 3, "payload": "rusty key" },
//!     { "weight": 1, "payload": "golden key", "bump": { "kind": "decay" } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SelectResult;
use crate::generator::{Bump, Generator, GeneratorConfig};
use crate::random::RandomSource;

/// One option of a [`PoolDef`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDef<T> {
    /// Initial weight.
    pub weight: i64,
    /// Value returned when the option is drawn.
    pub payload: T,
    /// Policy for this option, overriding the pool-wide one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bump: Option<Bump>,
}

/// A generator described as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolDef<T> {
    /// See [`GeneratorConfig::always_ensure_selection`].
    #[serde(default = "default_true")]
    pub always_ensure_selection: bool,
    /// Policy for options that do not name their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bump: Option<Bump>,
    /// The options in pool order.
    pub options: Vec<OptionDef<T>>,
}

fn default_true() -> bool {
    true
}

impl<T> PoolDef<T> {
    /// Build a generator, validating weights and pool size.
    pub fn into_generator<R: RandomSource>(self, rng: R) -> SelectResult<Generator<T, R>> {
        let shared = self.bump;
        let config =
            GeneratorConfig::default().with_always_ensure_selection(self.always_ensure_selection);
        let entries = self
            .options
            .into_iter()
            .map(|option| (option.weight, option.payload, option.bump.or(shared)));
        Ok(Generator::new(entries, rng)?.with_config(config))
    }
}
