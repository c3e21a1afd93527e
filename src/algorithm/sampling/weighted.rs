//! Weighted categorical draws
//!
//! Every weighted choice in the generator (arrival hour, age bracket,
//! ethnicity, insurance, referral destination) goes through
//! [`WeightedTable`], which inverts a uniform draw against cumulative weights.

use rand::Rng;

use crate::error::{EdSynthError, Result};

/// A fixed set of outcomes with relative weights
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    outcomes: Vec<T>,
    /// Running sum of weights; `cumulative[i]` covers outcomes `0..=i`
    cumulative: Vec<f64>,
}

impl<T> WeightedTable<T> {
    /// Build a table from `(outcome, weight)` pairs
    ///
    /// # Errors
    /// Fails when there are no outcomes, when a weight is negative or not
    /// finite, or when all weights are zero.
    pub fn new(entries: impl IntoIterator<Item = (T, f64)>) -> Result<Self> {
        let mut outcomes = Vec::new();
        let mut cumulative = Vec::new();
        let mut total = 0.0;

        for (outcome, weight) in entries {
            if !weight.is_finite() || weight < 0.0 {
                return Err(EdSynthError::sampling(format!(
                    "Invalid weight {weight} at position {}",
                    outcomes.len()
                )));
            }
            total += weight;
            outcomes.push(outcome);
            cumulative.push(total);
        }

        if outcomes.is_empty() {
            return Err(EdSynthError::sampling("Weighted table has no outcomes"));
        }
        if total <= 0.0 {
            return Err(EdSynthError::sampling("Weighted table has zero total weight"));
        }

        Ok(Self {
            outcomes,
            cumulative,
        })
    }

    /// Draw one outcome
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.outcomes[self.sample_index(rng)]
    }

    /// Draw the index of one outcome
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let target = rng.random::<f64>() * self.total_weight();
        // First outcome whose cumulative weight exceeds the target; zero-weight
        // outcomes share their predecessor's bound and are never selected.
        let index = self.cumulative.partition_point(|&bound| bound <= target);
        index.min(self.outcomes.len() - 1)
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or_default()
    }

    /// Probability of drawing the outcome at `index`
    #[must_use]
    pub fn probability(&self, index: usize) -> Option<f64> {
        let upper = *self.cumulative.get(index)?;
        let lower = if index == 0 { 0.0 } else { self.cumulative[index - 1] };
        Some((upper - lower) / self.total_weight())
    }

    #[must_use]
    pub fn outcomes(&self) -> &[T] {
        &self.outcomes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl<T: Copy> WeightedTable<T> {
    /// Draw one outcome by value
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        *self.sample(rng)
    }
}
