//! Uniform picks from slices and vectors.

use crate::random::RandomSource;

/// Random element access for slices.
pub trait PickExt<T> {
    /// A uniformly chosen index, or `None` if empty.
    fn pick_index(&self, rng: &mut impl RandomSource) -> Option<usize>;

    /// A uniformly chosen element, or `None` if empty.
    fn pick(&self, rng: &mut impl RandomSource) -> Option<&T>;

    /// `len` independent picks, with replacement.
    fn sample(&self, len: usize, rng: &mut impl RandomSource) -> Vec<&T>;

    /// `len` picks dealt from a shuffled deck of the elements.
    ///
    /// Every element is dealt once before any is dealt again; the deck is
    /// refilled whenever it runs out.
    fn deck_sample(&self, len: usize, rng: &mut impl RandomSource) -> Vec<&T>;
}

impl<T> PickExt<T> for [T] {
    fn pick_index(&self, rng: &mut impl RandomSource) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some(rng.uniform(self.len() as u64 - 1) as usize)
    }

    fn pick(&self, rng: &mut impl RandomSource) -> Option<&T> {
        self.pick_index(rng).map(|index| &self[index])
    }

    fn sample(&self, len: usize, rng: &mut impl RandomSource) -> Vec<&T> {
        if self.is_empty() {
            return Vec::new();
        }
        (0..len).filter_map(|_| self.pick(rng)).collect()
    }

    fn deck_sample(&self, len: usize, rng: &mut impl RandomSource) -> Vec<&T> {
        let mut dealt = Vec::with_capacity(len);
        if self.is_empty() {
            return dealt;
        }
        let mut deck: Vec<&T> = Vec::new();
        while dealt.len() < len {
            if deck.is_empty() {
                deck = self.iter().collect();
            }
            if let Some(card) = deck.pop_random(rng) {
                dealt.push(card);
            }
        }
        dealt
    }
}

/// Random removal for vectors.
pub trait PopRandom<T> {
    /// Remove and return a uniformly chosen element, or `None` if empty.
    fn pop_random(&mut self, rng: &mut impl RandomSource) -> Option<T>;
}

impl<T> PopRandom<T> for Vec<T> {
    fn pop_random(&mut self, rng: &mut impl RandomSource) -> Option<T> {
        let index = self.pick_index(rng)?;
        Some(self.remove(index))
    }
}
