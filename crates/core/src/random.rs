//! Random permutation utility.
//!
//! Every randomized choice in the engine goes through [`RandomSource`], so a
//! seeded or scripted source makes decks and quizzes reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns an index in `0..=upper`.
    fn index_upto(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn index_upto(&mut self, upper: usize) -> usize {
        self.random_range(0..=upper)
    }
}

/// Returns a shuffled copy of `items` (Fisher–Yates); `items` is left untouched.
pub fn shuffle<T: Clone, R: RandomSource + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.index_upto(i);
        out.swap(i, j);
    }
    out
}

/// Reproducible generator for a given seed.
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the operating system.
#[must_use]
pub fn entropy_rng() -> StdRng {
    StdRng::from_os_rng()
}
