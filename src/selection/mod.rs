pub mod selection_strategy;
pub mod sus;

pub use selection_strategy::SelectionStrategy;
pub use sus::StochasticUniversalSampling;
