//! # Repair
//!
//! Drives an arbitrary chromosome to feasibility by removing items only. Each step
//! targets the most violated constraint and drops the packed item that weighs the
//! most in it, so the result is always a subset of the input and the loop ends after
//! at most `n` removals (the empty knapsack is feasible for non-negative capacities).

use tracing::trace;

use crate::chromosome::Chromosome;
use crate::instance::ProblemInstance;

/// Returns a feasible copy of `chromosome` obtained by removals only.
///
/// # Example
///
/// ```rust
/// use mkpga::chromosome::Chromosome;
/// use mkpga::constraints::repair;
/// use mkpga::instance::ProblemInstance;
///
/// let instance = ProblemInstance::new(
///     vec![10.0, 20.0, 30.0],
///     vec![vec![2, 3, 4]],
///     vec![5.0],
///     None,
/// ).unwrap();
///
/// let repaired = repair(Chromosome::from_bits(&[1, 1, 1]), &instance);
/// assert_eq!(repaired, Chromosome::from_bits(&[1, 1, 0]));
/// ```
pub fn repair(chromosome: Chromosome, instance: &ProblemInstance) -> Chromosome {
    let mut repaired = chromosome;
    repair_in_place(&mut repaired, instance);
    repaired
}

/// Repairs `chromosome` in place and returns how many items were removed.
pub fn repair_in_place(chromosome: &mut Chromosome, instance: &ProblemInstance) -> usize {
    let weights = instance.weights();
    let mut usage = chromosome.usage(instance);
    let mut removed = 0;

    while let Some(row) = most_violated(&usage, instance.capacity()) {
        let Some(item) = heaviest_selected(chromosome, &weights[row]) else {
            break;
        };

        chromosome.set(item, false);
        for (used, weights_row) in usage.iter_mut().zip(weights) {
            *used -= weights_row[item];
        }
        removed += 1;
    }

    if removed > 0 {
        trace!(removed, "repaired chromosome");
    }
    removed
}

/// Index of the constraint with the largest positive violation, lowest index on ties.
fn most_violated(usage: &[u64], capacity: &[f64]) -> Option<usize> {
    let mut worst: Option<(usize, f64)> = None;
    for (i, (&used, &cap)) in usage.iter().zip(capacity).enumerate() {
        let violation = used as f64 - cap;
        if violation <= 0.0 {
            continue;
        }
        match worst {
            Some((_, largest)) if largest >= violation => {}
            _ => worst = Some((i, violation)),
        }
    }
    worst.map(|(i, _)| i)
}

/// Packed item with the largest coefficient in `row`, lowest index on ties.
fn heaviest_selected(chromosome: &Chromosome, row: &[u64]) -> Option<usize> {
    chromosome.selected().fold(None, |best, item| match best {
        Some(current) if row[current] >= row[item] => Some(current),
        _ => Some(item),
    })
}
