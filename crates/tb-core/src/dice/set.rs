//! Sets of dice rolled together.

use crate::error::{SelectError, SelectResult};
use crate::random::RandomSource;

use super::Die;

/// Most dice a parsed set may hold.
pub const MAX_DICE: usize = 10_000;

/// An ordered set of dice whose results are summed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceSet {
    dice: Vec<Die>,
    total: Option<i64>,
}

impl DiceSet {
    /// Create a set from at least one die.
    pub fn new(dice: impl Into<Vec<Die>>) -> SelectResult<Self> {
        let dice = dice.into();
        if dice.is_empty() {
            return Err(SelectError::EmptyDiceSet);
        }
        Ok(Self { dice, total: None })
    }

    /// Parse a `+`-separated list of dice, e.g. `2d6 + {1, 3} + 4`.
    ///
    /// A leading count before a `dN` term repeats that die. A set holding
    /// more than [`MAX_DICE`] dice is a parse error.
    pub fn parse(notation: &str) -> SelectResult<Self> {
        let mut dice = Vec::new();
        for term in notation.split('+') {
            let term = term.trim();
            match term.split_once(['d', 'D']) {
                Some((count, sides)) if !count.is_empty() && !sides.contains(['{', '.']) => {
                    let count: usize = count
                        .trim()
                        .parse()
                        .map_err(|_| SelectError::Parse(format!("bad dice count in '{term}'")))?;
                    if count > MAX_DICE - dice.len() {
                        return Err(SelectError::Parse(format!(
                            "too many dice in '{term}' (at most {MAX_DICE})"
                        )));
                    }
                    let die: Die = format!("d{sides}").parse()?;
                    dice.extend(std::iter::repeat_n(die, count));
                }
                _ if dice.len() == MAX_DICE => {
                    return Err(SelectError::Parse(format!("more than {MAX_DICE} dice")));
                }
                _ => dice.push(term.parse()?),
            }
        }
        Self::new(dice)
    }

    /// The dice in this set.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Returns how many dice are in the set.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Always false: a set holds at least one die.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Roll every die and return the sum.
    pub fn roll(&mut self, rng: &mut impl RandomSource) -> i64 {
        let total = self
            .dice
            .iter_mut()
            .fold(0i64, |sum, die| sum.saturating_add(die.roll(rng)));
        self.total = Some(total);
        total
    }

    /// The sum from the last roll, or `None` if not rolled.
    pub fn last_total(&self) -> Option<i64> {
        self.total
    }

    /// The cached result of each die.
    pub fn results(&self) -> Vec<Option<i64>> {
        self.dice.iter().map(Die::last_result).collect()
    }

    /// Forget the total and every die's result.
    pub fn reset(&mut self) {
        for die in &mut self.dice {
            die.reset();
        }
        self.total = None;
    }
}

impl std::fmt::Display for DiceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dice: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", dice.join(" + "))
    }
}
