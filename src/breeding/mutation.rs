use crate::chromosome::Chromosome;
use crate::constraints::repair_and_complete;
use crate::instance::ProblemInstance;
use crate::rng::RandomNumberGenerator;

/// Default per-gene flip probability.
pub const DEFAULT_MUTATION_RATE: f64 = 0.05;

/// Bit-flip mutation: every gene flips independently with probability `rate`.
///
/// One random value is drawn per gene, in gene order. The result may be infeasible.
pub fn mutate(chromosome: Chromosome, rate: f64, rng: &mut RandomNumberGenerator) -> Chromosome {
    let mut mutated = chromosome;
    for item in 0..mutated.len() {
        if rng.chance(rate) {
            mutated.flip(item);
        }
    }
    mutated
}

/// Mutates, then repairs and completes so the offspring is a full feasible knapsack.
pub fn mutate_and_repair(
    chromosome: Chromosome,
    rate: f64,
    instance: &ProblemInstance,
    rng: &mut RandomNumberGenerator,
) -> Chromosome {
    repair_and_complete(mutate(chromosome, rate, rng), instance)
}
