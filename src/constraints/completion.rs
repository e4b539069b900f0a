//! # Greedy completion
//!
//! Packs further items into a feasible chromosome. Unpacked items are ranked once by
//! profit over total weight and tried in that order; an item is added when it fits
//! every constraint, otherwise it is skipped for good.

use std::cmp::Ordering;

use crate::chromosome::Chromosome;
use crate::instance::ProblemInstance;

/// Keeps the ranking finite for items that weigh nothing.
pub const COMPLETION_EPSILON: f64 = 1e-6;

/// Returns `chromosome` with as many profitable items added as fit.
///
/// The input must be feasible; the output is feasible and at least as profitable.
///
/// # Example
///
/// ```rust
/// use mkpga::chromosome::Chromosome;
/// use mkpga::constraints::complete_greedy;
/// use mkpga::instance::ProblemInstance;
///
/// let instance = ProblemInstance::new(
///     vec![10.0, 20.0, 30.0],
///     vec![vec![2, 3, 4]],
///     vec![5.0],
///     None,
/// ).unwrap();
///
/// let filled = complete_greedy(Chromosome::from_bits(&[1, 0, 0]), &instance);
/// assert_eq!(filled, Chromosome::from_bits(&[1, 1, 0]));
/// ```
pub fn complete_greedy(chromosome: Chromosome, instance: &ProblemInstance) -> Chromosome {
    let mut completed = chromosome;
    complete_greedy_in_place(&mut completed, instance);
    completed
}

/// Completes `chromosome` in place and returns how many items were added.
pub fn complete_greedy_in_place(chromosome: &mut Chromosome, instance: &ProblemInstance) -> usize {
    let weights = instance.weights();
    let capacity = instance.capacity();
    let mut usage = chromosome.usage(instance);

    let mut candidates: Vec<(usize, f64)> = (0..chromosome.len())
        .filter(|&item| !chromosome.get(item))
        .map(|item| {
            let score =
                instance.profit()[item] / (instance.column_sum(item) as f64 + COMPLETION_EPSILON);
            (item, score)
        })
        .collect();
    // Stable sort keeps ascending item order among equal scores.
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut added = 0;
    for (item, _) in candidates {
        let fits = usage
            .iter()
            .zip(weights)
            .zip(capacity)
            .all(|((&used, row), &cap)| (used + row[item]) as f64 <= cap);
        if !fits {
            continue;
        }

        chromosome.set(item, true);
        for (used, row) in usage.iter_mut().zip(weights) {
            *used += row[item];
        }
        added += 1;
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_until_capacity() {
        let instance = ProblemInstance::new(
            vec![10.0, 20.0, 30.0],
            vec![vec![2, 3, 4]],
            vec![5.0],
            None,
        )
        .unwrap();
        let mut chromosome = Chromosome::from_bits(&[1, 0, 0]);
        assert_eq!(complete_greedy_in_place(&mut chromosome, &instance), 1);
        assert_eq!(chromosome, Chromosome::from_bits(&[1, 1, 0]));
    }

    #[test]
    fn test_prefers_higher_ratio_then_skips() {
        // Ratios: item 0 = 1.0, item 1 = 3.0, item 2 = 2.0. Item 1 goes in first,
        // item 2 no longer fits, item 0 still does.
        let instance = ProblemInstance::new(
            vec![4.0, 12.0, 10.0],
            vec![vec![4, 4, 5]],
            vec![8.0],
            None,
        )
        .unwrap();
        let filled = complete_greedy(Chromosome::empty(3), &instance);
        assert_eq!(filled, Chromosome::from_bits(&[1, 1, 0]));
    }

    #[test]
    fn test_equal_scores_try_lowest_index_first() {
        let instance =
            ProblemInstance::new(vec![5.0, 5.0], vec![vec![2, 2]], vec![2.0], None).unwrap();
        let filled = complete_greedy(Chromosome::empty(2), &instance);
        assert_eq!(filled, Chromosome::from_bits(&[1, 0]));
    }

    #[test]
    fn test_weightless_items_are_always_added() {
        let instance = ProblemInstance::new(
            vec![1.0, 0.0, 7.0],
            vec![vec![0, 0, 9], vec![0, 0, 9]],
            vec![0.0, 0.0],
            None,
        )
        .unwrap();
        let filled = complete_greedy(Chromosome::empty(3), &instance);
        assert_eq!(filled, Chromosome::from_bits(&[1, 1, 0]));
        assert!(filled.is_feasible(&instance));
    }

    #[test]
    fn test_full_knapsack_is_unchanged() {
        let instance = ProblemInstance::new(
            vec![10.0, 20.0, 30.0],
            vec![vec![2, 3, 4]],
            vec![5.0],
            None,
        )
        .unwrap();
        let full = Chromosome::from_bits(&[1, 1, 0]);
        assert_eq!(complete_greedy(full.clone(), &instance), full);
    }
}
