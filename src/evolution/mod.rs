pub mod builder;
pub mod challenge;
pub mod history;
pub mod launcher;
pub mod options;

pub use builder::EvolutionLauncherBuilder;
pub use challenge::{Challenge, ProfitChallenge};
pub use history::{GenerationStats, History};
pub use launcher::{run, solve, EvolutionLauncher, EvolutionResult, Solution};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
