//! Shared per-class instance bookkeeping.
//!
//! Both classification pipelines track how many training instances each class
//! has received; the class prior is that count over the total. [`ClassTally`]
//! is the one piece of model state the text and tabular pipelines share.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, XystonError};

/// Per-class instance counts plus the running total.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClassTally {
    counts: HashMap<String, usize>,
    total: usize,
}

impl ClassTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        ClassTally::default()
    }

    /// Record one training instance for the given class.
    pub fn record(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Total number of recorded instances across all classes.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of recorded instances for one class.
    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Number of distinct classes seen.
    pub fn class_count(&self) -> usize {
        self.counts.len()
    }

    /// Check whether no instances have been recorded.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over the class labels seen so far.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Compute the prior distribution: each class's fraction of the total.
    ///
    /// The priors sum to 1. Fails with an empty-model error when nothing has
    /// been recorded, since the fraction is undefined at a zero total.
    pub fn priors(&self) -> Result<HashMap<String, f64>> {
        if self.total == 0 {
            return Err(XystonError::empty_model(
                "no training instances were added",
            ));
        }
        let total = self.total as f64;
        Ok(self
            .counts
            .iter()
            .map(|(label, count)| (label.clone(), *count as f64 / total))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let mut tally = ClassTally::new();
        tally.record("spam");
        tally.record("spam");
        tally.record("ham");

        assert_eq!(tally.total(), 3);
        assert_eq!(tally.count("spam"), 2);
        assert_eq!(tally.count("ham"), 1);
        assert_eq!(tally.count("other"), 0);
        assert_eq!(tally.class_count(), 2);
    }

    #[test]
    fn test_priors_sum_to_one() {
        let mut tally = ClassTally::new();
        tally.record("a");
        tally.record("a");
        tally.record("a");
        tally.record("b");

        let priors = tally.priors().unwrap();
        assert_eq!(priors["a"], 0.75);
        assert_eq!(priors["b"], 0.25);
        assert!((priors.values().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_priors_fail_on_empty_tally() {
        let tally = ClassTally::new();
        assert!(matches!(
            tally.priors(),
            Err(XystonError::EmptyModel(_))
        ));
    }
}
