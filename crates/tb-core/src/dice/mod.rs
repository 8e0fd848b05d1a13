//! Single-shot value generators.
//!
//! A [`Die`] produces integers under one of four sampling policies: an
//! inclusive range, a uniform pick from a list, a constant, or a weighted
//! table. Dice can be combined into a [`DiceSet`] whose rolls are summed.

pub mod set;
pub mod table;

pub use set::DiceSet;
pub use table::WeightedTable;

use std::str::FromStr;

use crate::error::{SelectError, SelectResult};
use crate::random::RandomSource;

/// The sampling policy of a die.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DieKind {
    /// Any integer in `low..=high`, uniformly.
    Range {
        /// Inclusive lower bound.
        low: i64,
        /// Inclusive upper bound.
        high: i64,
    },
    /// One of the listed values, uniformly.
    Selection(Vec<i64>),
    /// Always the same value.
    Constant(i64),
    /// A value drawn in proportion to its weight.
    Weighted(WeightedTable),
}

/// A die with one sampling policy and a cached last result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    kind: DieKind,
    result: Option<i64>,
}

impl Die {
    /// A die rolling any integer in `low..=high`.
    pub fn range(low: i64, high: i64) -> SelectResult<Self> {
        if low > high {
            return Err(SelectError::InvalidRange { low, high });
        }
        Ok(Self::from_kind(DieKind::Range { low, high }))
    }

    /// A die picking uniformly from `values`.
    pub fn selection(values: impl Into<Vec<i64>>) -> SelectResult<Self> {
        let values = values.into();
        if values.is_empty() {
            return Err(SelectError::EmptySelection);
        }
        Ok(Self::from_kind(DieKind::Selection(values)))
    }

    /// A die that always rolls `value`.
    pub fn constant(value: i64) -> Self {
        Self::from_kind(DieKind::Constant(value))
    }

    /// A die picking a value in proportion to its weight.
    pub fn weighted(entries: impl IntoIterator<Item = (i64, i64)>) -> SelectResult<Self> {
        Ok(Self::from_kind(DieKind::Weighted(WeightedTable::new(
            entries,
        )?)))
    }

    fn from_kind(kind: DieKind) -> Self {
        Self { kind, result: None }
    }

    /// The sampling policy of this die.
    pub fn kind(&self) -> &DieKind {
        &self.kind
    }

    /// Roll the die, caching and returning the result.
    pub fn roll(&mut self, rng: &mut impl RandomSource) -> i64 {
        let value = match &self.kind {
            DieKind::Range { low, high } => rng.uniform_between(*low, *high),
            DieKind::Selection(values) => {
                let index = rng.uniform(values.len() as u64 - 1) as usize;
                values[index]
            }
            DieKind::Constant(value) => *value,
            DieKind::Weighted(table) => table.sample(rng),
        };
        self.result = Some(value);
        value
    }

    /// The result of the last roll, or `None` if the die has not been rolled.
    pub fn last_result(&self) -> Option<i64> {
        self.result
    }

    /// Forget the last result.
    pub fn reset(&mut self) {
        self.result = None;
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range { low, high } => write!(f, "{low}..={high}"),
            Self::Selection(values) => {
                let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "{{{}}}", values.join(", "))
            }
            Self::Constant(value) => write!(f, "{value}"),
            Self::Weighted(table) => {
                let entries: Vec<String> = table
                    .entries()
                    .iter()
                    .map(|(value, weight)| format!("{value}:{weight}"))
                    .collect();
                write!(f, "{{{}}}", entries.join(", "))
            }
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.kind, f)
    }
}

/// Parses the textual forms produced by `Display`, plus `dN` as a
/// shorthand for `1..=N`.
///
/// ```
/// use tb_core::Die;
///
/// let die: Die = "{1:2, 5:1}".parse().unwrap();
/// assert_eq!(die.to_string(), "{1:2, 5:1}");
/// assert_eq!("d6".parse::<Die>().unwrap().to_string(), "1..=6");
/// ```
impl FromStr for Die {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(inner) = s.strip_prefix('{').and_then(|r| r.strip_suffix('}')) {
            let items: Vec<&str> = inner
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .collect();
            if items.iter().any(|item| item.contains(':')) {
                let entries = items
                    .iter()
                    .map(|item| -> SelectResult<(i64, i64)> {
                        let (value, weight) = item.split_once(':').ok_or_else(|| {
                            SelectError::Parse(format!("missing weight in '{item}'"))
                        })?;
                        Ok((parse_int(value)?, parse_int(weight)?))
                    })
                    .collect::<SelectResult<Vec<_>>>()?;
                return Self::weighted(entries);
            }
            let values = items
                .iter()
                .map(|item| parse_int(item))
                .collect::<SelectResult<Vec<_>>>()?;
            return Self::selection(values);
        }

        if let Some((low, high)) = s.split_once("..=") {
            return Self::range(parse_int(low)?, parse_int(high)?);
        }

        if let Some(sides) = s.strip_prefix(['d', 'D']) {
            let sides = parse_int(sides)?;
            if sides < 1 {
                return Err(SelectError::Parse(format!("a die needs at least one side: '{s}'")));
            }
            return Self::range(1, sides);
        }

        Ok(Self::constant(parse_int(s)?))
    }
}

fn parse_int(s: &str) -> SelectResult<i64> {
    let s = s.trim();
    s.parse::<i64>()
        .map_err(|_| SelectError::Parse(format!("'{s}' is not an integer")))
}
