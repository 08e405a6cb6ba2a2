//! Classification reporting and batch evaluation.
//!
//! [`evaluate`] classifies a whole labeled document set against a fitted
//! model and aggregates accuracy. The fitted model is read-only, so the
//! documents are classified in parallel.

use std::fmt;

use chrono::{DateTime, Utc};
use log::info;
use rayon::prelude::*;
use serde::Serialize;

use crate::classifier::text::TextClassifier;
use crate::corpus::LabeledDocument;
use crate::error::Result;

/// The classification outcome for one document.
#[derive(Clone, Debug, Serialize)]
pub struct DocumentResult {
    /// Document display name.
    pub name: String,
    /// The label the document carried.
    pub expected: String,
    /// The label the classifier chose.
    pub predicted: String,
    /// Posterior probability of the chosen label.
    pub confidence: f64,
    /// Remaining labels with their probabilities, most probable first.
    pub alternatives: Vec<(String, f64)>,
}

impl DocumentResult {
    /// Check whether the prediction matches the document's label.
    pub fn is_correct(&self) -> bool {
        self.predicted == self.expected
    }
}

/// Aggregated results of classifying a labeled document set.
#[derive(Clone, Debug, Serialize)]
pub struct Evaluation {
    /// Per-document outcomes, in corpus order.
    pub results: Vec<DocumentResult>,
    /// Number of correct predictions.
    pub correct: usize,
    /// Number of documents classified.
    pub total: usize,
    /// When the evaluation ran.
    pub generated_at: DateTime<Utc>,
}

impl Evaluation {
    /// Fraction of correct predictions, or 0.0 for an empty set.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<30}{:<30}{:<30}{:<15}{}",
            "TEXT", "CLASSIFICATION", "TRUE CLASSIFICATION", "PROBABILITY", "OTHER PROBABILITIES"
        )?;
        for result in &self.results {
            let mark = if result.is_correct() { "" } else { "*" };
            let alternatives = result
                .alternatives
                .iter()
                .map(|(label, probability)| format!("{label}:{:.4}", probability * 100.0))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                f,
                "{:<30}{:<30}{:<30}{:<15}[{}]",
                format!("{mark}{}", result.name),
                result.predicted,
                result.expected,
                format!("{:.4}", result.confidence * 100.0),
                alternatives
            )?;
        }
        write!(
            f,
            "accuracy: {}/{}: {:.2}%",
            self.correct,
            self.total,
            self.accuracy() * 100.0
        )
    }
}

/// Classify every document and aggregate accuracy.
///
/// Classification performs no mutation, so the documents are scored with a
/// parallel iterator over the shared model. The first classification error
/// aborts the evaluation.
pub fn evaluate(
    classifier: &TextClassifier,
    documents: &[LabeledDocument],
) -> Result<Evaluation> {
    let results: Vec<DocumentResult> = documents
        .par_iter()
        .map(|document| {
            let posterior = classifier.classify(&document.tokens)?;
            let ranked = posterior.ranked();
            let (predicted, confidence) = ranked
                .first()
                .map(|(label, probability)| (label.to_string(), *probability))
                .unwrap_or_default();
            Ok(DocumentResult {
                name: document.name.clone(),
                expected: document.label.clone(),
                predicted,
                confidence,
                alternatives: ranked
                    .iter()
                    .skip(1)
                    .map(|(label, probability)| (label.to_string(), *probability))
                    .collect(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let correct = results.iter().filter(|result| result.is_correct()).count();
    let total = results.len();
    info!("evaluated {total} documents, {correct} correct");

    Ok(Evaluation {
        results,
        correct,
        total,
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stop_words::StopWordList;

    fn document(label: &str, name: &str, tokens: &[&str]) -> LabeledDocument {
        LabeledDocument {
            label: label.to_string(),
            name: name.to_string(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn fitted_classifier() -> TextClassifier {
        let mut classifier = TextClassifier::with_stop_words(StopWordList::empty());
        classifier.add_document(&["buy", "now", "buy"], "spam");
        classifier.add_document(&["free", "money"], "spam");
        classifier.add_document(&["meeting", "today"], "ham");
        classifier.add_document(&["project", "update"], "ham");
        classifier.fit().unwrap();
        classifier
    }

    #[test]
    fn test_evaluate_accuracy() {
        let classifier = fitted_classifier();
        let documents = vec![
            document("spam", "offer", &["buy", "free", "money"]),
            document("ham", "standup", &["meeting", "project"]),
            document("ham", "mislabeled", &["buy", "buy", "free"]),
        ];

        let evaluation = evaluate(&classifier, &documents).unwrap();
        assert_eq!(evaluation.total, 3);
        assert_eq!(evaluation.correct, 2);
        assert!((evaluation.accuracy() - 2.0 / 3.0).abs() < 1e-12);

        let miss = &evaluation.results[2];
        assert!(!miss.is_correct());
        assert_eq!(miss.predicted, "spam");
        assert_eq!(miss.alternatives.len(), 1);
    }

    #[test]
    fn test_display_table() {
        let classifier = fitted_classifier();
        let documents = vec![
            document("spam", "offer", &["buy", "free"]),
            document("spam", "missed", &["meeting", "today"]),
        ];

        let evaluation = evaluate(&classifier, &documents).unwrap();
        let rendered = evaluation.to_string();

        assert!(rendered.contains("TRUE CLASSIFICATION"));
        // Misses are marked with an asterisk
        assert!(rendered.contains("*missed"));
        assert!(rendered.ends_with("accuracy: 1/2: 50.00%"));
    }

    #[test]
    fn test_empty_evaluation() {
        let classifier = fitted_classifier();
        let evaluation = evaluate(&classifier, &[]).unwrap();
        assert_eq!(evaluation.total, 0);
        assert_eq!(evaluation.accuracy(), 0.0);
    }
}
