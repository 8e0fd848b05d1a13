//! Error types for the selection engine.

/// Errors that can occur while configuring or drawing from the engine.
///
/// Every variant except [`SelectError::Exhausted`] is a configuration error
/// and is raised at construction time. Exhaustion is the only error a draw
/// can produce.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// A generator was built without any options.
    #[error("a generator needs at least one option")]
    EmptyPool,

    /// A selection die was built without any values.
    #[error("a selection die needs at least one value")]
    EmptySelection,

    /// A weighted die was built without any entries.
    #[error("a weighted die needs at least one entry")]
    EmptyTable,

    /// A range die was built with its bounds reversed.
    #[error("invalid range: {low} is greater than {high}")]
    InvalidRange {
        /// Lower bound as given.
        low: i64,
        /// Upper bound as given.
        high: i64,
    },

    /// A weight below zero was supplied at construction.
    #[error("entry {index} has negative weight {weight}")]
    NegativeWeight {
        /// Position of the offending entry.
        index: usize,
        /// The rejected weight.
        weight: i64,
    },

    /// The sum of all weights does not fit in the table.
    #[error("total weight overflows")]
    WeightOverflow,

    /// A dice set was built without any dice.
    #[error("a dice set needs at least one die")]
    EmptyDiceSet,

    /// Text could not be parsed into a die.
    #[error("parse error: {0}")]
    Parse(String),

    /// Every option has zero weight and the uniform fallback is disabled.
    #[error("no option of {options} has a positive weight")]
    Exhausted {
        /// Number of options in the exhausted pool.
        options: usize,
    },
}

impl SelectError {
    /// Returns true for the recoverable draw-time failure.
    pub fn is_exhaustion(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}

/// Convenience result type for engine operations.
pub type SelectResult<T> = Result<T, SelectError>;
