//! Posterior distributions over class labels.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A mapping from class label to estimated probability for one classified
/// instance.
///
/// Probabilities normally sum to 1; the tabular pipeline returns an all-zero
/// distribution when every class score collapses to zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Posterior {
    probabilities: HashMap<String, f64>,
}

impl Posterior {
    pub(crate) fn new(probabilities: HashMap<String, f64>) -> Self {
        Posterior { probabilities }
    }

    /// Get the probability for a class label, or 0.0 for an unknown label.
    pub fn probability(&self, label: &str) -> f64 {
        self.probabilities.get(label).copied().unwrap_or(0.0)
    }

    /// Get the most probable class and its probability.
    ///
    /// Ties break toward the lexicographically smaller label so repeated
    /// calls pick the same winner.
    pub fn best(&self) -> Option<(&str, f64)> {
        self.ranked().into_iter().next()
    }

    /// All classes and probabilities, most probable first.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .probabilities
            .iter()
            .map(|(label, probability)| (label.as_str(), *probability))
            .collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }

    /// Iterate over (label, probability) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probabilities
            .iter()
            .map(|(label, probability)| (label.as_str(), *probability))
    }

    /// Sum of all class probabilities.
    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }

    /// Number of classes in the distribution.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Check if the distribution has no classes.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posterior(entries: &[(&str, f64)]) -> Posterior {
        Posterior::new(
            entries
                .iter()
                .map(|(label, probability)| (label.to_string(), *probability))
                .collect(),
        )
    }

    #[test]
    fn test_best_and_ranked() {
        let posterior = posterior(&[("spam", 0.7), ("ham", 0.2), ("news", 0.1)]);

        assert_eq!(posterior.best(), Some(("spam", 0.7)));
        let ranked = posterior.ranked();
        assert_eq!(ranked[0], ("spam", 0.7));
        assert_eq!(ranked[1], ("ham", 0.2));
        assert_eq!(ranked[2], ("news", 0.1));
    }

    #[test]
    fn test_ties_break_on_label() {
        let posterior = posterior(&[("b", 0.5), ("a", 0.5)]);
        assert_eq!(posterior.best(), Some(("a", 0.5)));
    }

    #[test]
    fn test_unknown_label_probability() {
        let posterior = posterior(&[("spam", 1.0)]);
        assert_eq!(posterior.probability("ham"), 0.0);
    }

    #[test]
    fn test_total() {
        let posterior = posterior(&[("a", 0.25), ("b", 0.75)]);
        assert!((posterior.total() - 1.0).abs() < 1e-12);
    }
}
