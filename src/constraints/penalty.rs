//! # Penalty formulas
//!
//! Four ways of turning a constraint violation into a discount factor in `[0, 1]`.
//! Feasible chromosomes always get `1.0`. For an infeasible chromosome let `I` be
//! the violated constraints, `sum_j` the total weight of item `j` over `I`, and `J`
//! the packed items:
//!
//! | Formula | Factor |
//! |---|---|
//! | `Pen1` | `1 / Σ_{j∈J} sum_j` |
//! | `Pen2` | `1 / Σ_{j∈J, sum_j>0} 1/sum_j` |
//! | `Pen3` | `1 / Σ_{j∈J} profit_j·sum_j` |
//! | `Pen4` | `1 / Σ_{j∈J, sum_j>0} profit_j/sum_j` |
//!
//! A zero denominator (or no qualifying term) yields `0`. Infeasible factors are
//! capped just below `1.0` so that an infeasible chromosome never scores like a
//! feasible one.

use crate::chromosome::Chromosome;
use crate::error::GeneticError;
use crate::instance::ProblemInstance;

/// Largest factor an infeasible chromosome can receive.
pub const INFEASIBLE_CEILING: f64 = 1.0 - f64::EPSILON;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PenaltyFormula {
    Pen1,
    Pen2,
    /// Weights the violation by profit; the strongest of the four.
    #[default]
    Pen3,
    Pen4,
}

impl PenaltyFormula {
    pub const ALL: [PenaltyFormula; 4] = [
        PenaltyFormula::Pen1,
        PenaltyFormula::Pen2,
        PenaltyFormula::Pen3,
        PenaltyFormula::Pen4,
    ];

    /// Raw factor from the per-item violation sums of the packed items.
    fn factor(self, terms: impl Iterator<Item = (f64, f64)>) -> f64 {
        let denominator: f64 = match self {
            PenaltyFormula::Pen1 => terms.map(|(_, sum)| sum).sum(),
            PenaltyFormula::Pen2 => terms
                .filter(|(_, sum)| *sum > 0.0)
                .map(|(_, sum)| 1.0 / sum)
                .sum(),
            PenaltyFormula::Pen3 => terms.map(|(profit, sum)| profit * sum).sum(),
            PenaltyFormula::Pen4 => terms
                .filter(|(_, sum)| *sum > 0.0)
                .map(|(profit, sum)| profit / sum)
                .sum(),
        };
        if denominator > 0.0 {
            1.0 / denominator
        } else {
            0.0
        }
    }
}

impl TryFrom<u8> for PenaltyFormula {
    type Error = GeneticError;

    /// Maps the conventional numbering `1..=4` onto the formulas.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PenaltyFormula::Pen1),
            2 => Ok(PenaltyFormula::Pen2),
            3 => Ok(PenaltyFormula::Pen3),
            4 => Ok(PenaltyFormula::Pen4),
            other => Err(GeneticError::Configuration(format!(
                "Unknown penalty formula {}, expected 1 to 4",
                other
            ))),
        }
    }
}

/// Discount factor for `chromosome` under `formula`.
///
/// # Example
///
/// ```rust
/// use mkpga::chromosome::Chromosome;
/// use mkpga::constraints::{penalty, PenaltyFormula};
/// use mkpga::instance::ProblemInstance;
///
/// let instance = ProblemInstance::new(
///     vec![10.0, 20.0, 30.0],
///     vec![vec![2, 3, 4]],
///     vec![5.0],
///     None,
/// ).unwrap();
///
/// let feasible = Chromosome::from_bits(&[1, 1, 0]);
/// assert_eq!(penalty(&feasible, &instance, PenaltyFormula::Pen3), 1.0);
///
/// let overweight = Chromosome::from_bits(&[1, 1, 1]);
/// assert_eq!(penalty(&overweight, &instance, PenaltyFormula::Pen1), 1.0 / 9.0);
/// ```
pub fn penalty(
    chromosome: &Chromosome,
    instance: &ProblemInstance,
    formula: PenaltyFormula,
) -> f64 {
    let violated = chromosome.violated_constraints(instance);
    if violated.is_empty() {
        return 1.0;
    }

    let weights = instance.weights();
    let profit = instance.profit();
    let terms = chromosome.selected().map(|item| {
        let sum: u64 = violated.iter().map(|&i| weights[i][item]).sum();
        (profit[item], sum as f64)
    });

    let raw = formula.factor(terms);
    if raw.is_finite() {
        raw.clamp(0.0, INFEASIBLE_CEILING)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> ProblemInstance {
        ProblemInstance::new(
            vec![10.0, 20.0, 30.0],
            vec![vec![2, 3, 4], vec![1, 1, 1]],
            vec![5.0, 10.0],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_feasible_is_one_for_every_formula() {
        let chromosome = Chromosome::from_bits(&[1, 1, 0]);
        for formula in PenaltyFormula::ALL {
            assert_eq!(penalty(&chromosome, &instance(), formula), 1.0);
        }
    }

    #[test]
    fn test_formulas_on_single_violation() {
        // Only constraint 0 is violated: sum_j = [2, 3, 4].
        let chromosome = Chromosome::from_bits(&[1, 1, 1]);
        let instance = instance();

        let pen1 = penalty(&chromosome, &instance, PenaltyFormula::Pen1);
        assert!((pen1 - 1.0 / 9.0).abs() < 1e-12);

        let pen3 = penalty(&chromosome, &instance, PenaltyFormula::Pen3);
        assert!((pen3 - 1.0 / (20.0 + 60.0 + 120.0)).abs() < 1e-12);

        let pen4 = penalty(&chromosome, &instance, PenaltyFormula::Pen4);
        assert!((pen4 - 1.0 / (5.0 + 20.0 / 3.0 + 7.5)).abs() < 1e-12);

        // 1/2 + 1/3 + 1/4 > 1, so Pen2 stays below one without clamping.
        let pen2 = penalty(&chromosome, &instance, PenaltyFormula::Pen2);
        assert!((pen2 - 1.0 / (0.5 + 1.0 / 3.0 + 0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_infeasible_factor_is_capped_below_one() {
        // One packed item of weight 9 against capacity 5: Pen2 raw value is 9.
        let instance =
            ProblemInstance::new(vec![0.5], vec![vec![9]], vec![5.0], None).unwrap();
        let chromosome = Chromosome::from_bits(&[1]);
        for formula in PenaltyFormula::ALL {
            let value = penalty(&chromosome, &instance, formula);
            assert!((0.0..1.0).contains(&value), "{:?} gave {}", formula, value);
        }
    }

    #[test]
    fn test_zero_profit_gives_zero() {
        let instance = ProblemInstance::new(vec![0.0], vec![vec![9]], vec![5.0], None).unwrap();
        let chromosome = Chromosome::from_bits(&[1]);
        assert_eq!(penalty(&chromosome, &instance, PenaltyFormula::Pen3), 0.0);
        assert_eq!(penalty(&chromosome, &instance, PenaltyFormula::Pen4), 0.0);
    }

    #[test]
    fn test_default_and_numbering() {
        assert_eq!(PenaltyFormula::default(), PenaltyFormula::Pen3);
        assert_eq!(PenaltyFormula::try_from(1).unwrap(), PenaltyFormula::Pen1);
        assert_eq!(PenaltyFormula::try_from(4).unwrap(), PenaltyFormula::Pen4);
        assert!(matches!(
            PenaltyFormula::try_from(5),
            Err(GeneticError::Configuration(_))
        ));
    }
}
