//! # Chromosome
//!
//! A `Chromosome` is a fixed-length binary vector with one gene per item: a set gene
//! means the item is packed. The same type is used in both feasibility modes; in
//! repaired mode every chromosome in the population satisfies all capacity
//! constraints, in penalized mode the constraints may be violated and the violation
//! is scored by [`crate::constraints::penalty`].
//!
//! ## Example
//!
//! ```rust
//! use mkpga::chromosome::Chromosome;
//! use mkpga::instance::ProblemInstance;
//!
//! let instance = ProblemInstance::new(
//!     vec![10.0, 20.0, 30.0],
//!     vec![vec![2, 3, 4]],
//!     vec![5.0],
//!     None,
//! ).unwrap();
//!
//! let chromosome = Chromosome::from_bits(&[1, 1, 0]);
//! assert_eq!(chromosome.fitness(&instance), 30.0);
//! assert!(chromosome.is_feasible(&instance));
//! ```

use std::fmt;

use crate::instance::ProblemInstance;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    /// An empty knapsack over `len` items.
    pub fn empty(len: usize) -> Self {
        Self {
            genes: vec![false; len],
        }
    }

    pub fn from_genes(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Builds a chromosome from `0`/`1` values; any non-zero value counts as set.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            genes: bits.iter().map(|&b| b != 0).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn get(&self, item: usize) -> bool {
        self.genes[item]
    }

    pub fn set(&mut self, item: usize, value: bool) {
        self.genes[item] = value;
    }

    pub fn flip(&mut self, item: usize) {
        self.genes[item] = !self.genes[item];
    }

    /// The genes as `0`/`1` values.
    pub fn to_bits(&self) -> Vec<u8> {
        self.genes.iter().map(|&g| u8::from(g)).collect()
    }

    /// Indices of the packed items, ascending.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(item, &set)| set.then_some(item))
    }

    pub fn count_selected(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// `true` when every item packed here is also packed in `other`.
    pub fn is_subset_of(&self, other: &Chromosome) -> bool {
        self.genes
            .iter()
            .zip(other.genes.iter())
            .all(|(&mine, &theirs)| !mine || theirs)
    }

    /// Base fitness: total profit of the packed items.
    pub fn fitness(&self, instance: &ProblemInstance) -> f64 {
        self.selected().fold(0.0, |total, item| total + instance.profit()[item])
    }

    /// Weight used in each constraint.
    pub fn usage(&self, instance: &ProblemInstance) -> Vec<u64> {
        instance
            .weights()
            .iter()
            .map(|row| self.selected().map(|item| row[item]).sum())
            .collect()
    }

    /// Indices of the constraints whose capacity is exceeded.
    pub fn violated_constraints(&self, instance: &ProblemInstance) -> Vec<usize> {
        self.usage(instance)
            .into_iter()
            .zip(instance.capacity())
            .enumerate()
            .filter_map(|(i, (used, &cap))| (used as f64 > cap).then_some(i))
            .collect()
    }

    pub fn is_feasible(&self, instance: &ProblemInstance) -> bool {
        self.usage(instance)
            .into_iter()
            .zip(instance.capacity())
            .all(|(used, &cap)| used as f64 <= cap)
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(genes: Vec<bool>) -> Self {
        Self::from_genes(genes)
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &gene in &self.genes {
            write!(f, "{}", u8::from(gene))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> ProblemInstance {
        ProblemInstance::new(
            vec![10.0, 20.0, 30.0],
            vec![vec![2, 3, 4], vec![1, 0, 5]],
            vec![5.0, 5.0],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_fitness_and_usage() {
        let chromosome = Chromosome::from_bits(&[1, 0, 1]);
        assert_eq!(chromosome.fitness(&instance()), 40.0);
        assert_eq!(chromosome.usage(&instance()), vec![6, 6]);
        assert_eq!(chromosome.violated_constraints(&instance()), vec![0, 1]);
        assert!(!chromosome.is_feasible(&instance()));
    }

    #[test]
    fn test_empty_is_feasible() {
        let chromosome = Chromosome::empty(3);
        assert!(chromosome.is_feasible(&instance()));
        let fitness = chromosome.fitness(&instance());
        assert_eq!(fitness, 0.0);
        assert!(fitness.is_sign_positive());
        assert_eq!(chromosome.count_selected(), 0);
    }

    #[test]
    fn test_selected_and_subset() {
        let big = Chromosome::from_bits(&[1, 1, 0, 1]);
        let small = Chromosome::from_bits(&[0, 1, 0, 1]);
        assert_eq!(big.selected().collect::<Vec<_>>(), vec![0, 1, 3]);
        assert!(small.is_subset_of(&big));
        assert!(!big.is_subset_of(&small));
    }

    #[test]
    fn test_flip_and_display() {
        let mut chromosome = Chromosome::from_bits(&[1, 0, 1]);
        chromosome.flip(1);
        chromosome.set(0, false);
        assert_eq!(chromosome.to_string(), "011");
        assert_eq!(chromosome.to_bits(), vec![0, 1, 1]);
    }
}
