//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! offspring from a set of selected parents. The operators it is built from live in the
//! submodules: [`crossover`] for m-point crossover and [`mutation`] for bit-flip
//! mutation. [`PairwiseBreedStrategy`] wires them together.
pub mod crossover;
pub mod mutation;
pub mod pairwise;

use std::fmt::Debug;

use crate::{
    chromosome::Chromosome, error::Result, evolution::options::EvolutionOptions,
    instance::ProblemInstance, rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Turns a slice of parents into offspring. Implementations must return feasible
/// chromosomes of the instance's length.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds offspring from `parents`.
    ///
    /// ## Parameters
    ///
    /// - `parents`: the selected parents, consumed in order.
    /// - `instance`: the instance offspring are repaired against.
    /// - `evol_options`: rates, crossover points and the pass-through policy.
    /// - `rng`: the run's random number generator.
    ///
    /// ## Errors
    ///
    /// Fails when a parent does not match the instance's number of items.
    fn breed(
        &self,
        parents: &[Chromosome],
        instance: &ProblemInstance,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>>;
}

/// What survives when a parent pair skips crossover.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PassThrough {
    /// The first parent of the pair.
    #[default]
    FirstParent,
    /// The parent with the higher base fitness, the first one on ties.
    FitterParent,
    /// Both parents, each mutated and repaired on its own.
    BothParents,
}

pub use crossover::{crossover, m_point_crossover, DEFAULT_CROSSOVER_POINTS};
pub use mutation::{mutate, mutate_and_repair, DEFAULT_MUTATION_RATE};
pub use pairwise::PairwiseBreedStrategy;
