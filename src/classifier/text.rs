//! Naive Bayes classification over token sequences.
//!
//! Training counts per-class token frequencies (stop words excluded) and a
//! global vocabulary; fitting derives Laplace-smoothed per-(token, class)
//! probabilities. Classification scores the raw, unfiltered input tokens in
//! the log domain and normalizes to a posterior distribution.
//!
//! # Examples
//!
//! ```
//! use xyston::analysis::stop_words::StopWordList;
//! use xyston::classifier::text::TextClassifier;
//!
//! let mut classifier = TextClassifier::with_stop_words(StopWordList::empty());
//! classifier.add_document(&["buy", "now", "buy"], "spam");
//! classifier.add_document(&["free", "money"], "spam");
//! classifier.add_document(&["meeting", "today"], "ham");
//! classifier.add_document(&["project", "update"], "ham");
//! classifier.fit().unwrap();
//!
//! let posterior = classifier.classify(&["buy", "buy", "free"]).unwrap();
//! assert!(posterior.probability("spam") > 0.5);
//! ```

use std::collections::{HashMap, HashSet};

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::stop_words::StopWordList;
use crate::classifier::model::ClassTally;
use crate::classifier::posterior::Posterior;
use crate::error::{Result, XystonError};

/// Largest rescaled log-score magnitude [`LogScale::Adaptive`] allows, well
/// inside the range where `exp` neither overflows nor flushes to zero.
const SAFE_EXPONENT: f64 = 64.0;

/// Policy for rescaling accumulated log-scores before exponentiation.
///
/// A document's accumulated log-score grows linearly with its length, and
/// `exp` of a large negative score flushes to zero. Dividing every class's
/// score by one shared scale keeps exponentiation representable. Because the
/// divisor is identical across classes, the ranking and the normalized
/// posterior shape are preserved; the true posterior magnitudes are not —
/// a deliberate approximation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum LogScale {
    /// Divide by a fixed constant. The default of 10000 suits moderately
    /// sized documents; very long documents may still flush to zero.
    Fixed(f64),
    /// Divide by the smallest scale ≥ 1 that keeps every class's rescaled
    /// score within a safe exponentiation range, whatever the input length.
    Adaptive,
}

impl Default for LogScale {
    fn default() -> Self {
        LogScale::Fixed(10_000.0)
    }
}

impl LogScale {
    fn resolve<I: Iterator<Item = f64>>(&self, log_scores: I) -> f64 {
        match self {
            LogScale::Fixed(scale) => *scale,
            LogScale::Adaptive => {
                let max_magnitude = log_scores.map(f64::abs).fold(0.0, f64::max);
                (max_magnitude / SAFE_EXPONENT).max(1.0)
            }
        }
    }
}

/// Probability assigned to a vocabulary token that was never observed with a
/// class during training.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnseenTokenPolicy {
    /// The Laplace formula with a zero count, `1/(V + T_c)` — the same
    /// smoothing as observed pairs, so an unseen token is always less likely
    /// than any observed one.
    #[default]
    Smoothed,
    /// The unsmoothed reciprocal `1/T_c` of the class's token volume. With a
    /// small class this can exceed smoothed observed probabilities; kept for
    /// compatibility with systems that score this way. A class with no token
    /// volume skips the token instead of dividing by zero.
    ClassReciprocal,
}

/// Trained statistics for one class.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct TextClassStatistics {
    prior: f64,
    /// token → smoothed probability, for tokens observed with this class
    token_probabilities: HashMap<String, f64>,
    /// Total (post-filter) token occurrences in this class's documents
    token_total: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct TextModel {
    vocabulary_size: usize,
    classes: HashMap<String, TextClassStatistics>,
}

/// A naive Bayes text classifier over token sequences.
///
/// Stop words are excluded from the trained frequency statistics but the raw
/// tokens still enter the vocabulary, and classification input is never
/// filtered — a stop word occurring in training text therefore still
/// participates in scoring new text that contains it. This asymmetry is part
/// of the model's contract.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextClassifier {
    stop_words: StopWordList,
    log_scale: LogScale,
    unseen_token_policy: UnseenTokenPolicy,
    /// Per class: one filtered frequency map per training document
    documents: HashMap<String, Vec<HashMap<String, u64>>>,
    vocabulary: HashSet<String>,
    tally: ClassTally,
    model: Option<TextModel>,
}

impl TextClassifier {
    /// Create a classifier with the default English stop-word list.
    pub fn new() -> Self {
        Self::with_stop_words(StopWordList::new())
    }

    /// Create a classifier with an explicit stop-word list.
    pub fn with_stop_words(stop_words: StopWordList) -> Self {
        TextClassifier {
            stop_words,
            log_scale: LogScale::default(),
            unseen_token_policy: UnseenTokenPolicy::default(),
            documents: HashMap::new(),
            vocabulary: HashSet::new(),
            tally: ClassTally::new(),
            model: None,
        }
    }

    /// Set the log-score rescaling policy.
    pub fn log_scale(mut self, log_scale: LogScale) -> Self {
        self.log_scale = log_scale;
        self
    }

    /// Set the probability policy for vocabulary tokens unseen with a class.
    pub fn unseen_token_policy(mut self, policy: UnseenTokenPolicy) -> Self {
        self.unseen_token_policy = policy;
        self
    }

    /// Check whether [`fit`](TextClassifier::fit) has produced a model.
    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    /// Total number of training documents added.
    pub fn document_count(&self) -> usize {
        self.tally.total()
    }

    /// Number of distinct classes seen.
    pub fn class_count(&self) -> usize {
        self.tally.class_count()
    }

    /// Number of distinct tokens seen across all training documents.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Get a fitted class's prior probability.
    pub fn prior(&self, label: &str) -> Option<f64> {
        self.model
            .as_ref()
            .and_then(|model| model.classes.get(label))
            .map(|class| class.prior)
    }

    /// Get the smoothed probability for a (token, class) pair observed during
    /// training. `None` when the pair was never observed.
    pub fn token_probability(&self, label: &str, token: &str) -> Option<f64> {
        self.model
            .as_ref()
            .and_then(|model| model.classes.get(label))
            .and_then(|class| class.token_probabilities.get(token).copied())
    }

    /// Get a fitted class's total token count (stop words excluded).
    pub fn class_token_total(&self, label: &str) -> Option<u64> {
        self.model
            .as_ref()
            .and_then(|model| model.classes.get(label))
            .map(|class| class.token_total)
    }

    /// Add one labeled training document.
    ///
    /// Tokens matching the stop-word list (case-insensitively) are excluded
    /// from the class's frequency statistics; every raw token still enters
    /// the global vocabulary.
    pub fn add_document<S: AsRef<str>>(&mut self, tokens: &[S], label: &str) {
        let mut frequencies: HashMap<String, u64> = HashMap::new();
        for token in tokens {
            let token = token.as_ref();
            if !self.vocabulary.contains(token) {
                self.vocabulary.insert(token.to_string());
            }
            if !self.stop_words.contains(token) {
                *frequencies.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        self.documents
            .entry(label.to_string())
            .or_default()
            .push(frequencies);
        self.tally.record(label);
        // Any fitted statistics are stale now
        self.model = None;
    }

    /// Derive per-class token probabilities from the accumulated documents.
    ///
    /// For every token observed with a class,
    /// `P(token|class) = (count + 1) / (V + T_c)` where `V` is the vocabulary
    /// size and `T_c` the class's total token occurrences. Callable
    /// repeatedly; every call recomputes from the accumulated documents.
    pub fn fit(&mut self) -> Result<()> {
        let priors = self.tally.priors()?;
        let vocabulary_size = self.vocabulary.len();

        let mut classes = HashMap::with_capacity(self.documents.len());
        for (label, documents) in &self.documents {
            let mut counts: AHashMap<String, u64> = AHashMap::new();
            for frequencies in documents {
                for (token, frequency) in frequencies {
                    *counts.entry(token.clone()).or_insert(0) += frequency;
                }
            }
            let token_total: u64 = counts.values().sum();
            let denominator = (vocabulary_size as u64 + token_total) as f64;
            let token_probabilities = counts
                .into_iter()
                .map(|(token, count)| (token, (count + 1) as f64 / denominator))
                .collect();

            classes.insert(
                label.clone(),
                TextClassStatistics {
                    prior: priors.get(label).copied().unwrap_or(0.0),
                    token_probabilities,
                    token_total,
                },
            );
        }

        debug!(
            "fitted text model: {} classes, {} documents, vocabulary of {}",
            classes.len(),
            self.tally.total(),
            vocabulary_size
        );
        self.model = Some(TextModel {
            vocabulary_size,
            classes,
        });
        Ok(())
    }

    /// Classify a token sequence, yielding a posterior over classes.
    ///
    /// Input tokens are not stop-word filtered. Per class the score starts at
    /// `ln(prior)`; each distinct input token found in the vocabulary adds
    /// its log-probability times its input frequency — the smoothed trained
    /// probability when the (token, class) pair was observed, otherwise the
    /// configured [`UnseenTokenPolicy`] probability. Tokens outside the
    /// vocabulary contribute nothing. Scores are rescaled by the configured
    /// [`LogScale`], exponentiated, and normalized; a zero total is a fatal
    /// error for the call.
    pub fn classify<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Posterior> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| XystonError::empty_model("classifier has not been fitted"))?;

        let mut frequencies: AHashMap<&str, u64> = AHashMap::new();
        for token in tokens {
            *frequencies.entry(token.as_ref()).or_insert(0) += 1;
        }
        // Fixed accumulation order keeps repeated calls bit-identical
        let mut token_frequencies: Vec<(&str, u64)> = frequencies.into_iter().collect();
        token_frequencies.sort_unstable();

        let mut log_scores: Vec<(&String, f64)> = Vec::with_capacity(model.classes.len());
        for (label, class) in &model.classes {
            let mut log_score = class.prior.ln();
            for &(token, frequency) in &token_frequencies {
                if !self.vocabulary.contains(token) {
                    continue;
                }
                let token_probability = match class.token_probabilities.get(token) {
                    Some(&probability) => probability,
                    None => match self.unseen_token_policy {
                        UnseenTokenPolicy::Smoothed => {
                            1.0 / (model.vocabulary_size as u64 + class.token_total) as f64
                        }
                        UnseenTokenPolicy::ClassReciprocal => {
                            // A class whose every token was stop-filtered has
                            // no volume to take a reciprocal of
                            if class.token_total == 0 {
                                continue;
                            }
                            1.0 / class.token_total as f64
                        }
                    },
                };
                log_score += token_probability.ln() * frequency as f64;
            }
            log_scores.push((label, log_score));
        }
        log_scores.sort_by(|a, b| a.0.cmp(b.0));

        let scale = self
            .log_scale
            .resolve(log_scores.iter().map(|(_, log_score)| *log_score));
        let mut total = 0.0;
        let mut scores = HashMap::with_capacity(log_scores.len());
        for (label, log_score) in log_scores {
            let weight = (log_score / scale).exp();
            total += weight;
            scores.insert(label.clone(), weight);
        }

        if total == 0.0 {
            return Err(XystonError::zero_total_score(format!(
                "all {} class scores vanished during normalization",
                scores.len()
            )));
        }
        for score in scores.values_mut() {
            *score /= total;
        }
        Ok(Posterior::new(scores))
    }
}

impl Default for TextClassifier {
    fn default() -> Self {
        Self::new()
    }
}
