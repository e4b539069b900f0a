use crate::{chromosome::Chromosome, instance::ProblemInstance};

/// Scores a chromosome against an instance. Higher is better.
///
/// Scores feed proportional selection, so implementations should return finite,
/// non-negative values.
pub trait Challenge {
    fn score(&self, chromosome: &Chromosome, instance: &ProblemInstance) -> f64;
}

/// The plain objective: total profit of the packed items.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfitChallenge;

impl Challenge for ProfitChallenge {
    fn score(&self, chromosome: &Chromosome, instance: &ProblemInstance) -> f64 {
        chromosome.fitness(instance)
    }
}
