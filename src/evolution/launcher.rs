use tracing::{debug, info, trace};

use super::{
    challenge::{Challenge, ProfitChallenge},
    history::{GenerationStats, History},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    breeding::{BreedStrategy, PairwiseBreedStrategy},
    chromosome::Chromosome,
    constraints::PenalizedChallenge,
    error::{GeneticError, OptionExt, Result},
    instance::ProblemInstance,
    rng::RandomNumberGenerator,
    seeding::{initialize_population, FeasibilityMode},
    selection::{SelectionStrategy, StochasticUniversalSampling},
};

/// A chromosome together with the score it was recorded with.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The recorded chromosome.
    pub chromosome: Chromosome,
    /// Its score under the run's challenge.
    pub score: f64,
}

/// The outcome of a run: the best feasible solution ever seen and the per-generation history.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvolutionResult {
    /// `None` when no feasible chromosome was ever evaluated.
    pub best: Option<Solution>,
    pub history: History,
}

impl EvolutionResult {
    pub fn best_score(&self) -> Option<f64> {
        self.best.as_ref().map(|solution| solution.score)
    }
}

/// Manages the evolution process using a selection strategy, a breeding strategy and
/// a challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<S, B, C>
where
    S: SelectionStrategy,
    B: BreedStrategy,
    C: Challenge,
{
    selection_strategy: S,
    breed_strategy: B,
    challenge: C,
}

impl<S, B, C> EvolutionLauncher<S, B, C>
where
    S: SelectionStrategy,
    B: BreedStrategy,
    C: Challenge,
{
    /// Creates a new `EvolutionLauncher` instance.
    ///
    /// # Arguments
    ///
    /// * `selection_strategy` - Picks the parents of every generation from the scores.
    /// * `breed_strategy` - Turns parents into feasible offspring.
    /// * `challenge` - Scores chromosomes.
    pub fn new(selection_strategy: S, breed_strategy: B, challenge: C) -> Self {
        Self {
            selection_strategy,
            breed_strategy,
            challenge,
        }
    }

    pub fn challenge(&self) -> &C {
        &self.challenge
    }

    /// Evolves `population` for `options.get_num_generations()` generations.
    ///
    /// The population size of the run is the length of `population`. Every
    /// generation is scored, recorded in the history, then replaced by bred
    /// offspring; with elitism the best feasible chromosome seen so far overwrites
    /// the weakest offspring.
    ///
    /// # Returns
    ///
    /// The best feasible solution ever evaluated, if any, and the history. An empty
    /// population yields no solution and an empty history.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail validation
    /// - A chromosome's length differs from the instance's number of items
    /// - The challenge produces a non-finite score
    /// - Selection or breeding fails
    pub fn evolve(
        &self,
        instance: &ProblemInstance,
        population: Vec<Chromosome>,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        options.validate()?;

        if let Some(chromosome) = population
            .iter()
            .find(|c| c.len() != instance.num_items())
        {
            return Err(GeneticError::Configuration(format!(
                "Chromosome has {} genes, instance has {} items",
                chromosome.len(),
                instance.num_items()
            )));
        }

        let size = population.len();
        info!(
            generations = options.get_num_generations(),
            population = size,
            items = instance.num_items(),
            constraints = instance.num_constraints(),
            "evolution started"
        );

        if population.is_empty() {
            info!("empty population, nothing to evolve");
            return Ok(EvolutionResult::default());
        }

        let mut current = population;
        let mut best: Option<Solution> = None;
        let mut history = History::with_capacity(options.get_num_generations());

        for generation in 0..options.get_num_generations() {
            let scores = self.score_all(&current, instance)?;

            if let Some((index, score)) = best_feasible(&current, &scores, instance) {
                if best.as_ref().map_or(true, |b| score > b.score) {
                    trace!(generation, score, "best solution improved");
                    best = Some(Solution {
                        chromosome: current[index].clone(),
                        score,
                    });
                }
            }

            let stats = GenerationStats::from_scores(&scores)
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
            match options.get_log_level() {
                LogLevel::Verbose => debug!(
                    generation,
                    best = stats.best,
                    mean = stats.mean,
                    worst = stats.worst,
                    best_ever = ?best.as_ref().map(|b| b.score),
                    "generation evaluated"
                ),
                LogLevel::Minimal => debug!(generation, best = stats.best, "generation evaluated"),
                LogLevel::None => {}
            }
            history.push(stats);

            let parents = self
                .selection_strategy
                .select(&current, &scores, size, rng)?;
            let mut offspring = self
                .breed_strategy
                .breed(&parents, instance, options, rng)?;

            offspring.truncate(size);
            while offspring.len() < size {
                let filler = match &best {
                    Some(solution) if options.get_elitism() => solution.chromosome.clone(),
                    _ => parents[rng.index(parents.len())].clone(),
                };
                offspring.push(filler);
            }

            if options.get_elitism() {
                if let Some(solution) = &best {
                    let weakest = self.weakest(&offspring, instance);
                    offspring[weakest] = solution.chromosome.clone();
                }
            }

            current = offspring;
        }

        let best_score = best.as_ref().map(|b| b.score);
        info!(
            best = ?best_score,
            gap_percent = ?best_score.and_then(|score| instance.optimality_gap(score)),
            "evolution finished"
        );

        Ok(EvolutionResult { best, history })
    }

    fn score_all(&self, population: &[Chromosome], instance: &ProblemInstance) -> Result<Vec<f64>> {
        population
            .iter()
            .map(|chromosome| {
                let score = self.challenge.score(chromosome, instance);
                if score.is_finite() {
                    Ok(score)
                } else {
                    Err(GeneticError::FitnessCalculation(format!(
                        "Non-finite fitness score encountered: {}",
                        score
                    )))
                }
            })
            .collect()
    }

    /// Index of the lowest-scoring chromosome, the first one on ties.
    fn weakest(&self, population: &[Chromosome], instance: &ProblemInstance) -> usize {
        population
            .iter()
            .map(|chromosome| self.challenge.score(chromosome, instance))
            .enumerate()
            .fold((0, f64::INFINITY), |(worst, worst_score), (index, score)| {
                if score < worst_score {
                    (index, score)
                } else {
                    (worst, worst_score)
                }
            })
            .0
    }
}

/// Index and score of the best feasible chromosome, the first one on ties.
fn best_feasible(
    population: &[Chromosome],
    scores: &[f64],
    instance: &ProblemInstance,
) -> Option<(usize, f64)> {
    population
        .iter()
        .zip(scores)
        .enumerate()
        .filter(|(_, (chromosome, _))| chromosome.is_feasible(instance))
        .fold(None, |best: Option<(usize, f64)>, (index, (_, &score))| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((index, score)),
        })
}

/// Evolves `population` with SUS selection, pairwise breeding and the challenge
/// implied by the options' feasibility mode.
///
/// # Example
///
/// ```rust
/// use mkpga::evolution::{run, EvolutionOptions};
/// use mkpga::instance::ProblemInstance;
/// use mkpga::rng::RandomNumberGenerator;
/// use mkpga::seeding::{initialize_population, FeasibilityMode};
///
/// let instance: ProblemInstance = "1 3  10 20 30  5  2 3 4  50".parse().unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(11);
/// let options = EvolutionOptions::builder().num_generations(10).population_size(6).build();
///
/// let population = initialize_population(&instance, 6, FeasibilityMode::Repaired, &mut rng);
/// let result = run(&instance, population, &options, &mut rng).unwrap();
///
/// assert_eq!(result.history.len(), 10);
/// assert!(result.best_score().unwrap() >= 30.0);
/// ```
pub fn run(
    instance: &ProblemInstance,
    population: Vec<Chromosome>,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<EvolutionResult> {
    match options.get_feasibility_mode() {
        FeasibilityMode::Repaired => EvolutionLauncher::new(
            StochasticUniversalSampling::new(),
            PairwiseBreedStrategy::new(),
            ProfitChallenge,
        )
        .evolve(instance, population, options, rng),
        FeasibilityMode::Penalized => EvolutionLauncher::new(
            StochasticUniversalSampling::new(),
            PairwiseBreedStrategy::new(),
            PenalizedChallenge::new(options.get_penalty())
                .with_combination(options.get_penalty_combination()),
        )
        .evolve(instance, population, options, rng),
    }
}

/// Seeds a population of `options.get_population_size()` chromosomes and runs it.
pub fn solve(
    instance: &ProblemInstance,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<EvolutionResult> {
    options.validate()?;
    let population = initialize_population(
        instance,
        options.get_population_size(),
        options.get_feasibility_mode(),
        rng,
    );
    run(instance, population, options, rng)
}
