//! Per-generation score statistics.

/// Best, mean and worst score of one generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub best: f64,
    pub mean: f64,
    pub worst: f64,
}

impl GenerationStats {
    /// Summarizes `scores`, or returns `None` when there is nothing to summarize.
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let (best, worst, sum) = scores.iter().fold(
            (f64::NEG_INFINITY, f64::INFINITY, 0.0),
            |(best, worst, sum), &score| (best.max(score), worst.min(score), sum + score),
        );

        Some(Self {
            best,
            mean: sum / scores.len() as f64,
            worst,
        })
    }
}

/// Append-only record of every generation's statistics, oldest first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct History {
    generations: Vec<GenerationStats>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            generations: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn generations(&self) -> &[GenerationStats] {
        &self.generations
    }

    pub fn first(&self) -> Option<&GenerationStats> {
        self.generations.first()
    }

    pub fn last(&self) -> Option<&GenerationStats> {
        self.generations.last()
    }

    pub fn best(&self) -> impl Iterator<Item = f64> + '_ {
        self.generations.iter().map(|g| g.best)
    }

    pub fn mean(&self) -> impl Iterator<Item = f64> + '_ {
        self.generations.iter().map(|g| g.mean)
    }

    pub fn worst(&self) -> impl Iterator<Item = f64> + '_ {
        self.generations.iter().map(|g| g.worst)
    }
}
