//! # ProblemInstance
//!
//! A multidimensional knapsack instance: `n` items with a profit each, `m` capacity
//! constraints with one integer weight per item, and an optional known optimum.
//! Instances are immutable once built and are shared read-only by every operator.
//!
//! ## Dataset format
//!
//! Instances are read from a whitespace-separated stream of integers:
//! `m`, `n`, `n` profits, `m` capacities, `m` rows of `n` weights, and finally the
//! known optimum, which is informational only.
//!
//! ```rust
//! use mkpga::instance::ProblemInstance;
//!
//! let instance: ProblemInstance = "1 3  10 20 30  5  2 3 4  30".parse().unwrap();
//! assert_eq!(instance.num_items(), 3);
//! assert_eq!(instance.num_constraints(), 1);
//! assert_eq!(instance.known_optimum(), Some(30.0));
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{GeneticError, Result, ResultExt};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemInstance {
    profit: Vec<f64>,
    /// Row-major: `weights[i][j]` is the weight of item `j` in constraint `i`.
    weights: Vec<Vec<u64>>,
    capacity: Vec<f64>,
    known_optimum: Option<f64>,
}

impl ProblemInstance {
    /// Builds an instance, checking dimensions and signs.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::MalformedInstance` when the weight matrix does not have
    /// one row per capacity and one column per profit, when a profit or capacity is
    /// negative or not finite, or when the weights of a row or a column do not sum
    /// within `u64`.
    pub fn new(
        profit: Vec<f64>,
        weights: Vec<Vec<u64>>,
        capacity: Vec<f64>,
        known_optimum: Option<f64>,
    ) -> Result<Self> {
        if weights.len() != capacity.len() {
            return Err(GeneticError::MalformedInstance(format!(
                "{} weight rows for {} capacities",
                weights.len(),
                capacity.len()
            )));
        }
        if let Some((row, found)) = weights
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != profit.len())
            .map(|(i, row)| (i, row.len()))
        {
            return Err(GeneticError::MalformedInstance(format!(
                "weight row {} has {} entries, expected {}",
                row,
                found,
                profit.len()
            )));
        }
        // Usage and penalty sums stay below these totals, so they cannot overflow.
        if let Some(row) = weights
            .iter()
            .position(|row| checked_total(row.iter().copied()).is_none())
        {
            return Err(GeneticError::MalformedInstance(format!(
                "weights of constraint {} overflow",
                row
            )));
        }
        if let Some(item) = (0..profit.len())
            .find(|&j| checked_total(weights.iter().map(|row| row[j])).is_none())
        {
            return Err(GeneticError::MalformedInstance(format!(
                "weights of item {} overflow",
                item
            )));
        }
        if let Some(p) = profit.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(GeneticError::MalformedInstance(format!(
                "profit {} is not a non-negative number",
                p
            )));
        }
        if let Some(c) = capacity.iter().find(|c| !c.is_finite() || **c < 0.0) {
            return Err(GeneticError::MalformedInstance(format!(
                "capacity {} is not a non-negative number",
                c
            )));
        }

        Ok(Self {
            profit,
            weights,
            capacity,
            known_optimum,
        })
    }

    /// Reads and parses a dataset file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).context(format!("Failed to open {}", path.display()))?;
        let instance = Self::from_reader(file)?;
        debug!(
            path = %path.display(),
            items = instance.num_items(),
            constraints = instance.num_constraints(),
            "instance loaded"
        );
        Ok(instance)
    }

    /// Parses a dataset from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        contents.parse()
    }

    /// Number of items (`n`).
    pub fn num_items(&self) -> usize {
        self.profit.len()
    }

    /// Number of capacity constraints (`m`).
    pub fn num_constraints(&self) -> usize {
        self.capacity.len()
    }

    pub fn profit(&self) -> &[f64] {
        &self.profit
    }

    pub fn weights(&self) -> &[Vec<u64>] {
        &self.weights
    }

    pub fn capacity(&self) -> &[f64] {
        &self.capacity
    }

    pub fn known_optimum(&self) -> Option<f64> {
        self.known_optimum
    }

    /// Sum of the weights of item `item` over every constraint.
    pub fn column_sum(&self, item: usize) -> u64 {
        self.weights.iter().map(|row| row[item]).sum()
    }

    /// Relative distance of `fitness` below the known optimum, in percent.
    ///
    /// `None` when the optimum is unknown or zero.
    pub fn optimality_gap(&self, fitness: f64) -> Option<f64> {
        self.known_optimum
            .filter(|optimum| *optimum != 0.0)
            .map(|optimum| (optimum - fitness) / optimum * 100.0)
    }
}

impl FromStr for ProblemInstance {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = Tokens::new(s);

        let m = tokens.count("constraint count")?;
        let n = tokens.count("item count")?;

        let profit = (0..n)
            .map(|j| tokens.value(&format!("profit {}", j)).map(|v| v as f64))
            .collect::<Result<Vec<_>>>()?;
        let capacity = (0..m)
            .map(|i| tokens.value(&format!("capacity {}", i)).map(|v| v as f64))
            .collect::<Result<Vec<_>>>()?;
        let weights = (0..m)
            .map(|i| {
                (0..n)
                    .map(|j| tokens.value(&format!("weight ({}, {})", i, j)))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let known_optimum = match tokens.next_token() {
            Some(_) => Some(tokens.last_as_value("known optimum")? as f64),
            None => None,
        };

        if let Some(extra) = tokens.next_token() {
            return Err(GeneticError::MalformedInstance(format!(
                "unexpected trailing token '{}'",
                extra
            )));
        }

        Self::new(profit, weights, capacity, known_optimum)
    }
}

fn checked_total(mut weights: impl Iterator<Item = u64>) -> Option<u64> {
    weights.try_fold(0u64, |total, w| total.checked_add(w))
}

/// Cursor over the integer tokens of a dataset.
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    last: Option<&'a str>,
}

impl<'a> Tokens<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            inner: s.split_whitespace(),
            last: None,
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        self.last = self.inner.next();
        self.last
    }

    fn integer(&mut self, what: &str) -> Result<i64> {
        match self.next_token() {
            Some(_) => self.last_as_integer(what),
            None => Err(GeneticError::MalformedInstance(format!(
                "unexpected end of data while reading {}",
                what
            ))),
        }
    }

    fn last_as_integer(&self, what: &str) -> Result<i64> {
        let token = self.last.unwrap_or_default();
        token.parse::<i64>().map_err(|_| {
            GeneticError::MalformedInstance(format!("{} '{}' is not an integer", what, token))
        })
    }

    fn last_as_value(&self, what: &str) -> Result<u64> {
        let value = self.last_as_integer(what)?;
        u64::try_from(value).map_err(|_| {
            GeneticError::MalformedInstance(format!("{} is negative: {}", what, value))
        })
    }

    fn value(&mut self, what: &str) -> Result<u64> {
        self.integer(what)?;
        self.last_as_value(what)
    }

    fn count(&mut self, what: &str) -> Result<usize> {
        let value = self.value(what)?;
        usize::try_from(value).map_err(|_| {
            GeneticError::MalformedInstance(format!("{} {} is too large", what, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "2 3\n10 20 30\n5 6\n2 3 4\n1 1 1\n30\n";

    #[test]
    fn test_parse_small_instance() {
        let instance: ProblemInstance = SMALL.parse().unwrap();

        assert_eq!(instance.num_constraints(), 2);
        assert_eq!(instance.num_items(), 3);
        assert_eq!(instance.profit(), &[10.0, 20.0, 30.0]);
        assert_eq!(instance.capacity(), &[5.0, 6.0]);
        assert_eq!(instance.weights()[0], vec![2, 3, 4]);
        assert_eq!(instance.weights()[1], vec![1, 1, 1]);
        assert_eq!(instance.known_optimum(), Some(30.0));
        assert_eq!(instance.column_sum(2), 5);
    }

    #[test]
    fn test_optimum_is_optional() {
        let instance: ProblemInstance = "1 2 4 5 3 1 1".parse().unwrap();
        assert_eq!(instance.known_optimum(), None);
        assert_eq!(instance.optimality_gap(4.0), None);
    }

    #[test]
    fn test_truncated_data_is_malformed() {
        let result = "2 3 10 20 30 5 6 2 3 4".parse::<ProblemInstance>();
        match result {
            Err(GeneticError::MalformedInstance(msg)) => assert!(msg.contains("end of data")),
            other => panic!("Expected MalformedInstance, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_capacity_is_malformed() {
        let result = "1 2 4 5 -3 1 1 9".parse::<ProblemInstance>();
        assert!(matches!(result, Err(GeneticError::MalformedInstance(_))));
    }

    #[test]
    fn test_non_integer_token_is_malformed() {
        let result = "1 2 4 five 3 1 1 9".parse::<ProblemInstance>();
        match result {
            Err(GeneticError::MalformedInstance(msg)) => assert!(msg.contains("five")),
            other => panic!("Expected MalformedInstance, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_tokens_are_malformed() {
        let result = "1 2 4 5 3 1 1 9 10".parse::<ProblemInstance>();
        assert!(matches!(result, Err(GeneticError::MalformedInstance(_))));
    }

    #[test]
    fn test_new_rejects_mismatched_dimensions() {
        let result = ProblemInstance::new(vec![1.0, 2.0], vec![vec![1]], vec![3.0], None);
        assert!(matches!(result, Err(GeneticError::MalformedInstance(_))));

        let result = ProblemInstance::new(vec![1.0], vec![vec![1]], vec![3.0, 4.0], None);
        assert!(matches!(result, Err(GeneticError::MalformedInstance(_))));
    }

    #[test]
    fn test_overflowing_row_is_malformed() {
        let dataset = format!("1 3  1 1 1  5  {max} {max} {max}", max = i64::MAX);
        match dataset.parse::<ProblemInstance>() {
            Err(GeneticError::MalformedInstance(msg)) => assert!(msg.contains("constraint 0")),
            other => panic!("Expected MalformedInstance, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_column_is_malformed() {
        // Each row fits on its own; item 0 overflows across the two rows.
        let result = ProblemInstance::new(
            vec![1.0],
            vec![vec![u64::MAX], vec![1]],
            vec![3.0, 3.0],
            None,
        );
        match result {
            Err(GeneticError::MalformedInstance(msg)) => assert!(msg.contains("item 0")),
            other => panic!("Expected MalformedInstance, got {:?}", other),
        }
    }

    #[test]
    fn test_largest_row_total_is_accepted() {
        let instance =
            ProblemInstance::new(vec![1.0, 1.0], vec![vec![u64::MAX - 1, 1]], vec![3.0], None)
                .unwrap();
        let full = crate::chromosome::Chromosome::from_bits(&[1, 1]);
        assert_eq!(full.usage(&instance), vec![u64::MAX]);
        assert!(!full.is_feasible(&instance));
    }

    #[test]
    fn test_zero_capacity_is_accepted() {
        let instance = ProblemInstance::new(vec![1.0], vec![vec![1]], vec![0.0], None).unwrap();
        assert_eq!(instance.capacity(), &[0.0]);
    }

    #[test]
    fn test_optimality_gap() {
        let instance: ProblemInstance = SMALL.parse().unwrap();
        let gap = instance.optimality_gap(27.0).unwrap();
        assert!((gap - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_reader() {
        let instance = ProblemInstance::from_reader(SMALL.as_bytes()).unwrap();
        assert_eq!(instance.num_items(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ProblemInstance::load("/no/such/dataset.txt");
        match result {
            Err(GeneticError::Other(msg)) => assert!(msg.contains("Failed to open")),
            other => panic!("Expected Other, got {:?}", other),
        }
    }
}
