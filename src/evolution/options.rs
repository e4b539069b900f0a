//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every knob of a run: the number of generations,
//! the population size, elitism, the operator rates, how infeasible chromosomes are
//! treated and how much per-generation logging is emitted.
//!
//! ## Example
//!
//! ```rust
//! use mkpga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Defaults: 100 generations, 30 individuals, elitism, 5% mutation, 3-point crossover.
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 30);
//!
//! // Fluent construction.
//! let custom_options = EvolutionOptions::builder()
//!     .num_generations(250)
//!     .population_size(50)
//!     .mutation_rate(0.02)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert!(custom_options.validate().is_ok());
//! ```
//!
//! ## `LogLevel`
//!
//! - `Verbose`: a `debug!` event per generation with the best, mean and worst score
//!   and the best score found so far.
//! - `Minimal`: a `debug!` event per generation with the best score only.
//! - `None`: no per-generation events. Run start and end are always reported.

use crate::breeding::{PassThrough, DEFAULT_CROSSOVER_POINTS, DEFAULT_MUTATION_RATE};
use crate::constraints::{PenaltyCombination, PenaltyFormula};
use crate::error::{GeneticError, Result};
use crate::seeding::FeasibilityMode;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    population_size: usize,
    elitism: bool,
    mutation_rate: f64,
    crossover_points: usize,
    /// Probability that a parent pair is crossed rather than passed through.
    crossover_rate: f64,
    pass_through: PassThrough,
    feasibility_mode: FeasibilityMode,
    penalty: PenaltyFormula,
    penalty_combination: PenaltyCombination,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn new(
        num_generations: usize,
        log_level: LogLevel,
        population_size: usize,
        mutation_rate: f64,
    ) -> Self {
        Self {
            num_generations,
            log_level,
            population_size,
            mutation_rate,
            ..Self::default()
        }
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_elitism(&self) -> bool {
        self.elitism
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_crossover_points(&self) -> usize {
        self.crossover_points
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_pass_through(&self) -> PassThrough {
        self.pass_through
    }

    pub fn get_feasibility_mode(&self) -> FeasibilityMode {
        self.feasibility_mode
    }

    pub fn get_penalty(&self) -> PenaltyFormula {
        self.penalty
    }

    pub fn get_penalty_combination(&self) -> PenaltyCombination {
        self.penalty_combination
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Turns elitism on or off.
    pub fn set_elitism(&mut self, elitism: bool) {
        self.elitism = elitism;
    }

    /// Sets the per-gene mutation probability.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the number of crossover cut points.
    pub fn set_crossover_points(&mut self, crossover_points: usize) {
        self.crossover_points = crossover_points;
    }

    /// Sets the probability that a parent pair is crossed.
    pub fn set_crossover_rate(&mut self, crossover_rate: f64) {
        self.crossover_rate = crossover_rate;
    }

    pub fn set_pass_through(&mut self, pass_through: PassThrough) {
        self.pass_through = pass_through;
    }

    pub fn set_feasibility_mode(&mut self, feasibility_mode: FeasibilityMode) {
        self.feasibility_mode = feasibility_mode;
    }

    pub fn set_penalty(&mut self, penalty: PenaltyFormula) {
        self.penalty = penalty;
    }

    pub fn set_penalty_combination(&mut self, penalty_combination: PenaltyCombination) {
        self.penalty_combination = penalty_combination;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks that every rate is a probability and that the penalty weight is usable.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` naming the first offending option.
    pub fn validate(&self) -> Result<()> {
        check_probability("mutation_rate", self.mutation_rate)?;
        check_probability("crossover_rate", self.crossover_rate)?;

        if let PenaltyCombination::Subtractive { weight } = self.penalty_combination {
            if !weight.is_finite() || weight < 0.0 {
                return Err(GeneticError::Configuration(format!(
                    "Subtractive penalty weight must be finite and non-negative, got {}",
                    weight
                )));
            }
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mkpga::breeding::PassThrough;
    /// use mkpga::evolution::options::EvolutionOptions;
    /// use mkpga::seeding::FeasibilityMode;
    ///
    /// let options = EvolutionOptions::builder()
    ///     .crossover_rate(0.8)
    ///     .pass_through(PassThrough::FitterParent)
    ///     .feasibility_mode(FeasibilityMode::Penalized)
    ///     .build();
    /// assert_eq!(options.get_crossover_rate(), 0.8);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GeneticError::Configuration(format!(
            "{} must lie in [0, 1], got {}",
            name, value
        )))
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 100,
            population_size: 30,
            elitism: true,
            mutation_rate: DEFAULT_MUTATION_RATE,
            crossover_points: DEFAULT_CROSSOVER_POINTS,
            crossover_rate: 1.0,
            pass_through: PassThrough::default(),
            feasibility_mode: FeasibilityMode::default(),
            penalty: PenaltyFormula::default(),
            penalty_combination: PenaltyCombination::default(),
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields take the values of [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    population_size: Option<usize>,
    elitism: Option<bool>,
    mutation_rate: Option<f64>,
    crossover_points: Option<usize>,
    crossover_rate: Option<f64>,
    pass_through: Option<PassThrough>,
    feasibility_mode: Option<FeasibilityMode>,
    penalty: Option<PenaltyFormula>,
    penalty_combination: Option<PenaltyCombination>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn elitism(mut self, value: bool) -> Self {
        self.elitism = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn crossover_points(mut self, value: usize) -> Self {
        self.crossover_points = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn pass_through(mut self, value: PassThrough) -> Self {
        self.pass_through = Some(value);
        self
    }

    pub fn feasibility_mode(mut self, value: FeasibilityMode) -> Self {
        self.feasibility_mode = Some(value);
        self
    }

    pub fn penalty(mut self, value: PenaltyFormula) -> Self {
        self.penalty = Some(value);
        self
    }

    pub fn penalty_combination(mut self, value: PenaltyCombination) -> Self {
        self.penalty_combination = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            elitism: self.elitism.unwrap_or(defaults.elitism),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            crossover_points: self.crossover_points.unwrap_or(defaults.crossover_points),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            pass_through: self.pass_through.unwrap_or(defaults.pass_through),
            feasibility_mode: self.feasibility_mode.unwrap_or(defaults.feasibility_mode),
            penalty: self.penalty.unwrap_or(defaults.penalty),
            penalty_combination: self
                .penalty_combination
                .unwrap_or(defaults.penalty_combination),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EvolutionOptions::default();
        assert_eq!(options.get_num_generations(), 100);
        assert_eq!(options.get_population_size(), 30);
        assert!(options.get_elitism());
        assert_eq!(options.get_mutation_rate(), 0.05);
        assert_eq!(options.get_crossover_points(), 3);
        assert_eq!(options.get_crossover_rate(), 1.0);
        assert_eq!(options.get_pass_through(), PassThrough::FirstParent);
        assert_eq!(options.get_feasibility_mode(), FeasibilityMode::Repaired);
        assert_eq!(options.get_penalty(), PenaltyFormula::Pen3);
        assert_eq!(
            options.get_penalty_combination(),
            PenaltyCombination::Multiplicative
        );
        assert_eq!(*options.get_log_level(), LogLevel::None);
    }

    #[test]
    fn test_builder_matches_default_when_empty() {
        assert_eq!(EvolutionOptions::builder().build(), EvolutionOptions::default());
    }

    #[test]
    fn test_new_and_setters() {
        let mut options = EvolutionOptions::new(10, LogLevel::Verbose, 8, 0.1);
        assert_eq!(options.get_num_generations(), 10);
        assert_eq!(options.get_population_size(), 8);
        assert_eq!(options.get_mutation_rate(), 0.1);

        options.set_elitism(false);
        options.set_crossover_points(1);
        options.set_penalty(PenaltyFormula::Pen2);
        assert!(!options.get_elitism());
        assert_eq!(options.get_crossover_points(), 1);
        assert_eq!(options.get_penalty(), PenaltyFormula::Pen2);
    }

    #[test]
    fn test_validate_rejects_bad_rates() {
        let options = EvolutionOptions::builder().mutation_rate(1.5).build();
        assert!(matches!(options.validate(), Err(GeneticError::Configuration(_))));

        let options = EvolutionOptions::builder().crossover_rate(-0.1).build();
        assert!(matches!(options.validate(), Err(GeneticError::Configuration(_))));

        let options = EvolutionOptions::builder().mutation_rate(f64::NAN).build();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let options = EvolutionOptions::builder()
            .penalty_combination(PenaltyCombination::Subtractive { weight: -1.0 })
            .build();
        assert!(options.validate().is_err());

        let options = EvolutionOptions::builder()
            .penalty_combination(PenaltyCombination::Subtractive { weight: 50.0 })
            .build();
        assert!(options.validate().is_ok());
    }
}
