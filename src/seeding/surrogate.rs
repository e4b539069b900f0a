//! # Surrogate seeding
//!
//! Collapses the `m` constraints into a single surrogate constraint with randomized
//! multipliers `λ`, then packs items greedily by profit per surrogate weight
//! (Dantzig's rule). Different multiplier draws rank the items differently, which is
//! what gives the initial population its diversity.

use std::cmp::Ordering;

use crate::chromosome::Chromosome;
use crate::instance::ProblemInstance;
use crate::rng::RandomNumberGenerator;

/// Stands in for a zero surrogate weight or a zero capacity in divisions.
pub const SURROGATE_EPSILON: f64 = 1e-9;

/// Range of the random factor applied to each `1 / capacity_i`.
pub const LAMBDA_JITTER: (f64, f64) = (0.8, 1.2);

/// Draws one multiplier per constraint: `λ_i = U(0.8, 1.2) / capacity_i`.
///
/// Zero capacities divide by [`SURROGATE_EPSILON`] instead.
pub fn sample_lambdas(instance: &ProblemInstance, rng: &mut RandomNumberGenerator) -> Vec<f64> {
    let (low, high) = LAMBDA_JITTER;
    instance
        .capacity()
        .iter()
        .map(|&cap| rng.uniform(low, high) / cap.max(SURROGATE_EPSILON))
        .collect()
}

/// Packs items by surrogate efficiency under the surrogate capacity.
///
/// The result respects `Σ_i λ_i · usage_i ≤ Σ_i λ_i · capacity_i` but may violate
/// individual constraints.
///
/// # Example
///
/// ```rust
/// use mkpga::instance::ProblemInstance;
/// use mkpga::seeding::seed;
///
/// let instance = ProblemInstance::new(
///     vec![10.0, 20.0, 30.0],
///     vec![vec![2, 3, 4]],
///     vec![5.0],
///     None,
/// ).unwrap();
///
/// let chromosome = seed(&instance, &[1.0 / 5.0]);
/// assert!(chromosome.get(2));
/// ```
pub fn seed(instance: &ProblemInstance, lambdas: &[f64]) -> Chromosome {
    let n = instance.num_items();
    let weights = instance.weights();

    let surrogate_weight: Vec<f64> = (0..n)
        .map(|item| {
            let w: f64 = lambdas
                .iter()
                .zip(weights)
                .map(|(lambda, row)| lambda * row[item] as f64)
                .sum();
            if w == 0.0 {
                SURROGATE_EPSILON
            } else {
                w
            }
        })
        .collect();

    let surrogate_capacity: f64 = lambdas
        .iter()
        .zip(instance.capacity())
        .map(|(lambda, cap)| lambda * cap)
        .sum();

    let mut order: Vec<(usize, f64)> = surrogate_weight
        .iter()
        .enumerate()
        .map(|(item, w)| (item, instance.profit()[item] / w))
        .collect();
    order.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut chromosome = Chromosome::empty(n);
    let mut used = 0.0;
    for (item, _) in order {
        let w = surrogate_weight[item];
        if used + w <= surrogate_capacity {
            chromosome.set(item, true);
            used += w;
        }
    }
    chromosome
}
