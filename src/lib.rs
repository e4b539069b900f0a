//! # mkpga
//!
//! A genetic algorithm for the 0/1 multidimensional knapsack problem.
//!
//! The starting population is seeded from surrogate relaxations of the instance,
//! then evolved with stochastic universal sampling, m-point crossover and bit-flip
//! mutation. Offspring are kept feasible by a repair operator followed by greedy
//! completion; alternatively, infeasible chromosomes can be scored with one of four
//! penalty formulas.
//!
//! ```rust
//! use mkpga::evolution::{solve, EvolutionOptions};
//! use mkpga::instance::ProblemInstance;
//! use mkpga::rng::RandomNumberGenerator;
//!
//! // m = 2 constraints, n = 4 items, profits, capacities, weight rows, optimum.
//! let instance: ProblemInstance = "2 4  5 6 7 8  6 6  1 2 3 4  4 3 2 1  14".parse()?;
//! let options = EvolutionOptions::builder().num_generations(30).population_size(10).build();
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let result = solve(&instance, &options, &mut rng)?;
//! let best = result.best.expect("a repaired run always has a feasible solution");
//! assert!(best.chromosome.is_feasible(&instance));
//! # Ok::<(), mkpga::GeneticError>(())
//! ```
pub mod breeding;
pub mod chromosome;
pub mod constraints;
pub mod error;
pub mod evolution;
pub mod instance;
pub mod rng;
pub mod seeding;
pub mod selection;

// Re-export commonly used types for convenience
pub use breeding::{BreedStrategy, PairwiseBreedStrategy, PassThrough};
pub use chromosome::Chromosome;
pub use constraints::{PenalizedChallenge, PenaltyCombination, PenaltyFormula};
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{
    run, solve, Challenge, EvolutionLauncher, EvolutionOptions, EvolutionResult, LogLevel,
    ProfitChallenge, Solution,
};
pub use instance::ProblemInstance;
pub use rng::RandomNumberGenerator;
pub use seeding::FeasibilityMode;
pub use selection::{SelectionStrategy, StochasticUniversalSampling};
