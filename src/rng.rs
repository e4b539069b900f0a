//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for the
//! optimizer. Every stochastic operator (multiplier sampling, the SUS offset,
//! crossover cut points, mutation coins) takes it by `&mut`, so a run seeded with
//! [`RandomNumberGenerator::from_seed`] is reproducible bit for bit.
//!
//! ## Example
//!
//! ```rust
//! use mkpga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let multipliers = rng.fetch_uniform(0.8, 1.2, 5);
//!
//! for value in multipliers {
//!     assert!((0.8..1.2).contains(&value));
//! }
//! ```

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates `num` uniform values in `[from, to)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mkpga::rng::RandomNumberGenerator;
    ///
    /// let mut rng = RandomNumberGenerator::new();
    /// let values = rng.fetch_uniform(0.0, 1.0, 5);
    /// assert_eq!(values.len(), 5);
    /// ```
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> Vec<f64> {
        (0..num).map(|_| self.uniform(from, to)).collect()
    }

    /// Draws one uniform value in `[from, to)`. A degenerate range yields `from`.
    pub fn uniform(&mut self, from: f64, to: f64) -> f64 {
        if from < to {
            self.rng.gen_range(from..to)
        } else {
            from
        }
    }

    /// Returns `true` with probability `probability`.
    ///
    /// Exactly one value is drawn per call, whatever the probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }

    /// Draws an index uniformly from `0..len`.
    ///
    /// `len` must be positive.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Draws `amount` distinct values from `from..to` without replacement, in draw order.
    ///
    /// `amount` is capped at the size of the range.
    pub fn distinct_in_range(&mut self, from: usize, to: usize, amount: usize) -> Vec<usize> {
        let length = to.saturating_sub(from);
        let amount = amount.min(length);
        index::sample(&mut self.rng, length, amount)
            .into_iter()
            .map(|offset| from + offset)
            .collect()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
