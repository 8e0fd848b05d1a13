//! Cumulative-distribution sampling over weighted entries.

use crate::error::{SelectError, SelectResult};
use crate::random::RandomSource;

/// An ordered list of `(value, weight)` entries with its running totals.
///
/// Entry order is part of the contract: when a draw lands exactly on a
/// cumulative boundary the earliest entry wins, so reordering the input can
/// change which value a given draw maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedTable {
    entries: Vec<(i64, u64)>,
    cumulative: Vec<u64>,
}

impl WeightedTable {
    /// Build a table, rejecting empty input, negative weights, and totals
    /// that do not fit in a `u64`.
    pub fn new(entries: impl IntoIterator<Item = (i64, i64)>) -> SelectResult<Self> {
        let mut table = Self {
            entries: Vec::new(),
            cumulative: Vec::new(),
        };
        let mut total: u64 = 0;
        for (index, (value, weight)) in entries.into_iter().enumerate() {
            let weight =
                u64::try_from(weight).map_err(|_| SelectError::NegativeWeight { index, weight })?;
            total = total
                .checked_add(weight)
                .ok_or(SelectError::WeightOverflow)?;
            table.entries.push((value, weight));
            table.cumulative.push(total);
        }
        if table.entries.is_empty() {
            return Err(SelectError::EmptyTable);
        }
        Ok(table)
    }

    /// The entries in input order.
    pub fn entries(&self) -> &[(i64, u64)] {
        &self.entries
    }

    /// Sum of all weights.
    pub fn total(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Draw one value.
    ///
    /// A table with a zero total or a single entry returns its first value
    /// without touching the random source.
    pub fn sample(&self, rng: &mut impl RandomSource) -> i64 {
        let total = self.total();
        if total == 0 || self.entries.len() == 1 {
            return self.entries[0].0;
        }

        let draw = rng.uniform(total - 1) + 1;
        match self.cumulative.iter().position(|&sum| sum >= draw) {
            Some(index) => self.entries[index].0,
            None => self.entries[self.entries.len() - 1].0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedSource, seeded};

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            WeightedTable::new(Vec::<(i64, i64)>::new()),
            Err(SelectError::EmptyTable)
        );
        assert_eq!(
            WeightedTable::new([(1, 2), (2, -1)]),
            Err(SelectError::NegativeWeight {
                index: 1,
                weight: -1
            })
        );
        assert_eq!(
            WeightedTable::new([(1, i64::MAX), (2, i64::MAX), (3, i64::MAX)]),
            Err(SelectError::WeightOverflow)
        );
    }

    #[test]
    fn total_and_entries() {
        let table = WeightedTable::new([(10, 1), (20, 0), (30, 3)]).unwrap();
        assert_eq!(table.total(), 4);
        assert_eq!(table.entries(), &[(10, 1), (20, 0), (30, 3)]);
    }

    #[test]
    fn boundaries_map_to_first_match() {
        // cumulative: [1, 1, 4]
        let table = WeightedTable::new([(10, 1), (20, 0), (30, 3)]).unwrap();
        // draw = scripted + 1
        let mut source = ScriptedSource::new([0, 1, 2, 3]);
        assert_eq!(table.sample(&mut source), 10);
        assert_eq!(table.sample(&mut source), 30);
        assert_eq!(table.sample(&mut source), 30);
        assert_eq!(table.sample(&mut source), 30);
    }

    #[test]
    fn input_order_breaks_ties() {
        let a = WeightedTable::new([(1, 2), (2, 2)]).unwrap();
        let b = WeightedTable::new([(2, 2), (1, 2)]).unwrap();
        let mut source = ScriptedSource::new([1]);
        assert_eq!(a.sample(&mut source), 1);
        assert_eq!(b.sample(&mut source), 2);
    }

    #[test]
    fn degenerate_tables_skip_randomness() {
        let mut source = ScriptedSource::new([5]);
        let zero = WeightedTable::new([(7, 0), (8, 0)]).unwrap();
        let single = WeightedTable::new([(9, 4)]).unwrap();
        assert_eq!(zero.sample(&mut source), 7);
        assert_eq!(single.sample(&mut source), 9);
        assert_eq!(source.calls(), 0);
    }

    #[test]
    fn zero_weight_never_drawn() {
        let table = WeightedTable::new([(1, 1), (2, 0), (3, 3)]).unwrap();
        let mut rng = seeded(42);
        let mut counts = [0u32; 4];
        for _ in 0..20_000 {
            counts[table.sample(&mut rng) as usize] += 1;
        }
        assert_eq!(counts[2], 0);
        let ratio = f64::from(counts[3]) / f64::from(counts[1]);
        assert!((2.7..3.3).contains(&ratio), "ratio was {ratio}");
    }
}
