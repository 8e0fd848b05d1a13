//! Adaptive weighted-selection engine for TrashBoat party games.
//!
//! Provides dice over four sampling policies, generators whose option
//! weights adjust themselves after every draw through feedback policies,
//! and slice helpers for uniform picks. All randomness flows through a
//! caller-owned [`RandomSource`], so a seeded stream replays exactly.
//!
//! The engine knows nothing about chat sessions, inventories, or points:
//! callers hand it plain weights and payloads and get plain values back.

pub mod dice;
pub mod error;
pub mod generator;
pub mod pick;
pub mod pool;
pub mod random;

pub use dice::{DiceSet, Die, DieKind, WeightedTable};
pub use error::{SelectError, SelectResult};
pub use generator::{Bump, Generator, GeneratorConfig, GeneratorOption, OptionState};
pub use pick::{PickExt, PopRandom};
pub use pool::{OptionDef, PoolDef};
pub use random::{RandomSource, ScriptedSource, seeded};
