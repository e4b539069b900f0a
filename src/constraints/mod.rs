//! # Constraints Module
//!
//! Everything that deals with the capacity constraints of a knapsack instance.
//!
//! ## Overview
//!
//! A chromosome is feasible when, for every constraint, the weight of its packed
//! items does not exceed the capacity. This module provides the two ways the
//! optimizer copes with infeasible chromosomes:
//!
//! - **Repair**: [`repair`] removes items until every constraint holds, and
//!   [`complete_greedy`] then packs further items that still fit.
//! - **Penalty**: [`penalty`] scores how badly a chromosome violates the
//!   constraints, and [`PenalizedChallenge`] folds that score into the fitness.
//!
//! ## Basic Usage
//!
//! ```rust
//! use mkpga::chromosome::Chromosome;
//! use mkpga::constraints::{complete_greedy, repair, PenalizedChallenge, PenaltyFormula};
//! use mkpga::evolution::Challenge;
//! use mkpga::instance::ProblemInstance;
//!
//! let instance = ProblemInstance::new(
//!     vec![10.0, 20.0, 30.0],
//!     vec![vec![2, 3, 4]],
//!     vec![5.0],
//!     None,
//! ).unwrap();
//!
//! let overweight = Chromosome::from_bits(&[1, 1, 1]);
//!
//! // Penalized: the fitness of 60 is discounted by Pen1 = 1/9.
//! let challenge = PenalizedChallenge::new(PenaltyFormula::Pen1);
//! assert!((challenge.score(&overweight, &instance) - 60.0 / 9.0).abs() < 1e-9);
//!
//! // Repaired: drop the heaviest item, then refill.
//! let fixed = complete_greedy(repair(overweight, &instance), &instance);
//! assert!(fixed.is_feasible(&instance));
//! ```

pub mod completion;
pub mod penalty;
pub mod repair;

pub use completion::{complete_greedy, complete_greedy_in_place};
pub use penalty::{penalty, PenaltyFormula};
pub use repair::{repair, repair_in_place};

use crate::chromosome::Chromosome;
use crate::evolution::Challenge;
use crate::instance::ProblemInstance;

/// Repairs then completes `chromosome`, the standard way back to a full feasible knapsack.
pub fn repair_and_complete(chromosome: Chromosome, instance: &ProblemInstance) -> Chromosome {
    complete_greedy(repair(chromosome, instance), instance)
}

/// How the penalty factor is combined with the base fitness.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PenaltyCombination {
    /// `fitness · factor`
    #[default]
    Multiplicative,
    /// `max(0, fitness − weight · (1 − factor))`
    Subtractive { weight: f64 },
}

impl PenaltyCombination {
    pub fn apply(self, fitness: f64, factor: f64) -> f64 {
        match self {
            PenaltyCombination::Multiplicative => fitness * factor,
            PenaltyCombination::Subtractive { weight } => {
                (fitness - weight * (1.0 - factor)).max(0.0)
            }
        }
    }
}

/// A challenge that scores the profit of a chromosome discounted by its penalty factor.
///
/// Feasible chromosomes keep their full profit under every formula and combination.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PenalizedChallenge {
    formula: PenaltyFormula,
    combination: PenaltyCombination,
}

impl PenalizedChallenge {
    /// Creates a multiplicative penalized challenge using `formula`.
    pub fn new(formula: PenaltyFormula) -> Self {
        Self {
            formula,
            combination: PenaltyCombination::Multiplicative,
        }
    }

    pub fn with_combination(mut self, combination: PenaltyCombination) -> Self {
        self.combination = combination;
        self
    }

    pub fn formula(&self) -> PenaltyFormula {
        self.formula
    }

    pub fn combination(&self) -> PenaltyCombination {
        self.combination
    }
}

impl Challenge for PenalizedChallenge {
    fn score(&self, chromosome: &Chromosome, instance: &ProblemInstance) -> f64 {
        let fitness = chromosome.fitness(instance);
        let factor = penalty(chromosome, instance, self.formula);
        self.combination.apply(fitness, factor)
    }
}
