use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// Selection strategies choose individuals from a population according to their
/// fitness scores. Selected individuals are returned as clones, so the caller may
/// modify them freely.
///
/// # Examples
///
/// ```
/// use mkpga::chromosome::Chromosome;
/// use mkpga::rng::RandomNumberGenerator;
/// use mkpga::selection::{SelectionStrategy, StochasticUniversalSampling};
///
/// let population = vec![
///     Chromosome::from_bits(&[1, 0]),
///     Chromosome::from_bits(&[0, 1]),
///     Chromosome::from_bits(&[1, 1]),
/// ];
/// let fitness = vec![0.5, 0.8, 0.3];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let selection = StochasticUniversalSampling::new();
/// let selected = selection.select(&population, &fitness, 2, &mut rng).unwrap();
/// assert_eq!(selected.len(), 2);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` individuals from `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The fitness vector length doesn't match the population length
    /// - A fitness value is negative or not finite
    fn select(
        &self,
        population: &[Chromosome],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>>;
}

/// Checks that `fitness` lines up with `population` and holds usable proportions.
pub(crate) fn validate_fitness(population: &[Chromosome], fitness: &[f64]) -> Result<()> {
    if fitness.len() != population.len() {
        return Err(GeneticError::Configuration(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }

    if let Some(bad) = fitness.iter().find(|f| !f.is_finite() || **f < 0.0) {
        return Err(GeneticError::Configuration(format!(
            "Proportional selection requires finite non-negative fitness values, found {}",
            bad
        )));
    }

    Ok(())
}
