//! Random source used for every draw a colony makes.
//!
//! Any [`rand::Rng`] is a [`RandomSource`]. Tests may implement the trait
//! directly to replay a fixed sequence of draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The two kinds of draws the search needs.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..bound`. `bound` is always positive.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random_range(0.0..1.0)
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
