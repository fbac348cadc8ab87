//! Processing statistics tracking.
//!
//! Counts outcomes over one run. The scan is single-threaded, so the counters
//! are plain integers owned by the driver.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::Outcome;

/// Per-outcome counters for one run.
///
/// Every `Outcome` variant is initialized to zero on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    outcomes: HashMap<Outcome, usize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    /// Creates counters with every outcome at zero.
    pub fn new() -> Self {
        let outcomes = Outcome::iter().map(|outcome| (outcome, 0)).collect();
        ProcessingStats { outcomes }
    }

    /// Increment the counter for `outcome`.
    pub fn record(&mut self, outcome: Outcome) {
        *self.outcomes.entry(outcome).or_insert(0) += 1;
    }

    /// Get the count for an outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    /// Total count of outcomes reported at warning level.
    pub fn total_failures(&self) -> usize {
        Outcome::iter()
            .filter(Outcome::is_failure)
            .map(|o| self.count(o))
            .sum()
    }
}
