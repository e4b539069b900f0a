//! # Population seeding
//!
//! Builds the starting population from the surrogate heuristic. Every chromosome
//! comes from a fresh draw of surrogate multipliers; depending on the
//! [`FeasibilityMode`] it is then repaired and completed, or left as is to be scored
//! through a penalty.
//!
//! ```rust
//! use mkpga::instance::ProblemInstance;
//! use mkpga::rng::RandomNumberGenerator;
//! use mkpga::seeding::{initialize_population, FeasibilityMode};
//!
//! let instance: ProblemInstance = "2 4  5 6 7 8  6 6  1 2 3 4  4 3 2 1".parse().unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let population = initialize_population(&instance, 10, FeasibilityMode::Repaired, &mut rng);
//! assert_eq!(population.len(), 10);
//! assert!(population.iter().all(|c| c.is_feasible(&instance)));
//! ```

pub mod surrogate;

pub use surrogate::{sample_lambdas, seed};

use tracing::debug;

use crate::chromosome::Chromosome;
use crate::constraints::repair_and_complete;
use crate::instance::ProblemInstance;
use crate::rng::RandomNumberGenerator;

/// How the optimizer treats chromosomes that violate the capacity constraints.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeasibilityMode {
    /// Seeds are repaired and completed, so the population is always feasible.
    #[default]
    Repaired,
    /// Seeds are kept as produced and infeasibility is scored by a penalty.
    Penalized,
}

/// Builds `size` chromosomes from independent surrogate draws.
pub fn initialize_population(
    instance: &ProblemInstance,
    size: usize,
    mode: FeasibilityMode,
    rng: &mut RandomNumberGenerator,
) -> Vec<Chromosome> {
    let population: Vec<Chromosome> = (0..size)
        .map(|_| {
            let lambdas = sample_lambdas(instance, rng);
            let seeded = seed(instance, &lambdas);
            match mode {
                FeasibilityMode::Repaired => repair_and_complete(seeded, instance),
                FeasibilityMode::Penalized => seeded,
            }
        })
        .collect();

    debug!(
        size,
        ?mode,
        feasible = population.iter().filter(|c| c.is_feasible(instance)).count(),
        "initial population built"
    );
    population
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> ProblemInstance {
        ProblemInstance::new(
            vec![10.0, 10.0, 12.0, 3.0],
            vec![vec![6, 0, 3, 1], vec![0, 6, 3, 1]],
            vec![5.0, 20.0],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_repaired_population_is_feasible() {
        let mut rng = RandomNumberGenerator::from_seed(17);
        let population =
            initialize_population(&instance(), 25, FeasibilityMode::Repaired, &mut rng);

        assert_eq!(population.len(), 25);
        for chromosome in &population {
            assert_eq!(chromosome.len(), 4);
            assert!(chromosome.is_feasible(&instance()));
        }
    }

    #[test]
    fn test_penalized_population_keeps_raw_seeds() {
        let mut rng = RandomNumberGenerator::from_seed(17);
        let instance = instance();
        let population = initialize_population(&instance, 5, FeasibilityMode::Penalized, &mut rng);

        let mut replay = RandomNumberGenerator::from_seed(17);
        for chromosome in &population {
            let lambdas = sample_lambdas(&instance, &mut replay);
            assert_eq!(chromosome, &seed(&instance, &lambdas));
        }
    }

    #[test]
    fn test_zero_size_is_empty() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let population = initialize_population(&instance(), 0, FeasibilityMode::Repaired, &mut rng);
        assert!(population.is_empty());
    }
}
