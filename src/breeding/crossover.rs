//! # M-point crossover
//!
//! Cuts both parents at the same `m` random positions and alternates the source of
//! each segment: even segments go parent 1 → child 1 and parent 2 → child 2, odd
//! segments are swapped. Offspring are repaired and completed before the better of
//! the two is kept.

use std::iter;

use crate::chromosome::Chromosome;
use crate::constraints::repair_and_complete;
use crate::instance::ProblemInstance;
use crate::rng::RandomNumberGenerator;

/// Default number of cut points.
pub const DEFAULT_CROSSOVER_POINTS: usize = 3;

/// Produces the two raw children of an m-point crossover.
///
/// `min(points, n − 1)` distinct cut points are drawn from `1..n`. Parents must have
/// the same length; the children are not repaired.
///
/// # Example
///
/// ```rust
/// use mkpga::breeding::m_point_crossover;
/// use mkpga::chromosome::Chromosome;
/// use mkpga::rng::RandomNumberGenerator;
///
/// let ones = Chromosome::from_bits(&[1; 8]);
/// let zeros = Chromosome::from_bits(&[0; 8]);
/// let mut rng = RandomNumberGenerator::from_seed(4);
///
/// let (first, second) = m_point_crossover(&ones, &zeros, 3, &mut rng);
/// assert_eq!(first.count_selected() + second.count_selected(), 8);
/// ```
pub fn m_point_crossover(
    parent1: &Chromosome,
    parent2: &Chromosome,
    points: usize,
    rng: &mut RandomNumberGenerator,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    debug_assert_eq!(n, parent2.len(), "parents must have the same length");

    let mut cuts = rng.distinct_in_range(1, n, points);
    cuts.sort_unstable();

    let bounds: Vec<usize> = iter::once(0).chain(cuts).chain(iter::once(n)).collect();

    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);
    for (segment, window) in bounds.windows(2).enumerate() {
        let range = window[0]..window[1];
        let (first, second) = if segment % 2 == 0 {
            (parent1, parent2)
        } else {
            (parent2, parent1)
        };
        child1.extend_from_slice(&first.genes()[range.clone()]);
        child2.extend_from_slice(&second.genes()[range]);
    }

    (Chromosome::from_genes(child1), Chromosome::from_genes(child2))
}

/// Crosses two parents, restores both children to full feasible knapsacks and
/// returns the more profitable one (the first child on ties).
pub fn crossover(
    parent1: &Chromosome,
    parent2: &Chromosome,
    instance: &ProblemInstance,
    points: usize,
    rng: &mut RandomNumberGenerator,
) -> Chromosome {
    let (child1, child2) = m_point_crossover(parent1, parent2, points, rng);
    let child1 = repair_and_complete(child1, instance);
    let child2 = repair_and_complete(child2, instance);

    if child1.fitness(instance) >= child2.fitness(instance) {
        child1
    } else {
        child2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment_count(child: &Chromosome) -> usize {
        1 + child
            .genes()
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .count()
    }

    #[test]
    fn test_children_are_complementary() {
        let ones = Chromosome::from_bits(&[1; 10]);
        let zeros = Chromosome::from_bits(&[0; 10]);
        let mut rng = RandomNumberGenerator::from_seed(8);

        let (child1, child2) = m_point_crossover(&ones, &zeros, 3, &mut rng);
        assert_eq!(child1.len(), 10);
        assert_eq!(child2.len(), 10);
        for k in 0..10 {
            assert_ne!(child1.get(k), child2.get(k));
        }
        // Three cuts make four alternating segments, the first from parent 1.
        assert_eq!(segment_count(&child1), 4);
        assert!(child1.get(0));
    }

    #[test]
    fn test_points_are_capped_by_length() {
        let ones = Chromosome::from_bits(&[1; 3]);
        let zeros = Chromosome::from_bits(&[0; 3]);
        let mut rng = RandomNumberGenerator::from_seed(2);

        let (child1, _) = m_point_crossover(&ones, &zeros, 10, &mut rng);
        assert_eq!(child1, Chromosome::from_bits(&[1, 0, 1]));
    }

    #[test]
    fn test_single_gene_parents_are_copied() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let (child1, child2) = m_point_crossover(
            &Chromosome::from_bits(&[1]),
            &Chromosome::from_bits(&[0]),
            3,
            &mut rng,
        );
        assert_eq!(child1, Chromosome::from_bits(&[1]));
        assert_eq!(child2, Chromosome::from_bits(&[0]));
    }

    #[test]
    fn test_zero_points_copies_parents() {
        let parent1 = Chromosome::from_bits(&[1, 0, 1, 1]);
        let parent2 = Chromosome::from_bits(&[0, 1, 0, 0]);
        let mut rng = RandomNumberGenerator::from_seed(2);
        let (child1, child2) = m_point_crossover(&parent1, &parent2, 0, &mut rng);
        assert_eq!(child1, parent1);
        assert_eq!(child2, parent2);
    }

    #[test]
    fn test_crossover_returns_feasible_best_child() {
        let instance = ProblemInstance::new(
            vec![10.0, 20.0, 30.0, 5.0],
            vec![vec![2, 3, 4, 1]],
            vec![6.0],
            None,
        )
        .unwrap();
        let parent1 = Chromosome::from_bits(&[1, 1, 0, 1]);
        let parent2 = Chromosome::from_bits(&[0, 0, 1, 1]);
        let mut rng = RandomNumberGenerator::from_seed(21);

        let mut replay = rng.clone();
        let (raw1, raw2) = m_point_crossover(&parent1, &parent2, 3, &mut replay);
        let best = repair_and_complete(raw1, &instance)
            .fitness(&instance)
            .max(repair_and_complete(raw2, &instance).fitness(&instance));

        let child = crossover(&parent1, &parent2, &instance, 3, &mut rng);
        assert!(child.is_feasible(&instance));
        assert_eq!(child.fitness(&instance), best);
    }
}
