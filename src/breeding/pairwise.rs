//! # PairwiseBreedStrategy
//!
//! Parents are mated in consecutive pairs `(0, 1), (2, 3), ...`. Each pair yields the
//! better child of an m-point crossover, or passes through unchanged when the
//! crossover coin says so. Every offspring is then mutated, repaired and completed.
//! A trailing unpaired parent is ignored.
use tracing::trace;

use super::{crossover, mutate_and_repair, BreedStrategy, PassThrough};
use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    instance::ProblemInstance,
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone, Default)]
pub struct PairwiseBreedStrategy;

impl PairwiseBreedStrategy {
    /// Creates a new `PairwiseBreedStrategy` instance.
    pub fn new() -> Self {
        Self
    }
}

impl BreedStrategy for PairwiseBreedStrategy {
    fn breed(
        &self,
        parents: &[Chromosome],
        instance: &ProblemInstance,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>> {
        if let Some(parent) = parents.iter().find(|p| p.len() != instance.num_items()) {
            return Err(GeneticError::Configuration(format!(
                "Parent has {} genes, instance has {} items",
                parent.len(),
                instance.num_items()
            )));
        }

        let crossover_rate = evol_options.get_crossover_rate();
        let mut offspring = Vec::with_capacity(parents.len());

        for pair in parents.chunks_exact(2) {
            let (parent1, parent2) = (&pair[0], &pair[1]);

            // The coin is only drawn when crossover can actually be skipped.
            let crossed = crossover_rate >= 1.0 || rng.chance(crossover_rate);
            let children = if crossed {
                vec![crossover(
                    parent1,
                    parent2,
                    instance,
                    evol_options.get_crossover_points(),
                    rng,
                )]
            } else {
                trace!(policy = ?evol_options.get_pass_through(), "pair skipped crossover");
                pass_through(parent1, parent2, instance, evol_options.get_pass_through())
            };

            for child in children {
                offspring.push(mutate_and_repair(
                    child,
                    evol_options.get_mutation_rate(),
                    instance,
                    rng,
                ));
            }
        }

        Ok(offspring)
    }
}

fn pass_through(
    parent1: &Chromosome,
    parent2: &Chromosome,
    instance: &ProblemInstance,
    policy: PassThrough,
) -> Vec<Chromosome> {
    match policy {
        PassThrough::FirstParent => vec![parent1.clone()],
        PassThrough::FitterParent => {
            if parent1.fitness(instance) >= parent2.fitness(instance) {
                vec![parent1.clone()]
            } else {
                vec![parent2.clone()]
            }
        }
        PassThrough::BothParents => vec![parent1.clone(), parent2.clone()],
    }
}
