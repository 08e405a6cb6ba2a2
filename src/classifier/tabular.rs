//! Naive Bayes classification over fixed-schema tabular instances.
//!
//! Instances are ordered sequences of attribute values, all sharing one
//! [`Schema`]. Numeric attributes are modeled per class with a Gaussian
//! density (mean and sample standard deviation); categorical attributes with
//! per-value relative frequencies.
//!
//! # Examples
//!
//! ```
//! use xyston::classifier::tabular::TabularClassifier;
//!
//! let mut classifier = TabularClassifier::new();
//! classifier.add_instance(&["85", "sunny"], "stay-in").unwrap();
//! classifier.add_instance(&["91", "sunny"], "stay-in").unwrap();
//! classifier.add_instance(&["64", "overcast"], "go-out").unwrap();
//! classifier.add_instance(&["70", "rainy"], "go-out").unwrap();
//! classifier.fit().unwrap();
//!
//! let posterior = classifier.classify(&["68", "rainy"]).unwrap();
//! assert_eq!(posterior.best().unwrap().0, "go-out");
//! ```

use std::collections::HashMap;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::classifier::model::ClassTally;
use crate::classifier::posterior::Posterior;
use crate::classifier::schema::{AttributeType, AttributeValue, Schema};
use crate::classifier::stats;
use crate::error::{Result, XystonError};

/// Trained statistics for one (class, attribute) pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum AttributeStatistic {
    /// Gaussian parameters for a numeric column.
    Numeric {
        /// Mean of the training values.
        mean: f64,
        /// Sample standard deviation (Bessel's correction); 0.0 when the
        /// class had fewer than two instances or identical values.
        stdev: f64,
    },
    /// Relative value frequencies for a categorical column.
    Categorical {
        /// value → fraction of the class's instances carrying it
        value_probabilities: HashMap<String, f64>,
    },
}

/// Trained statistics for one class.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct ClassStatistics {
    prior: f64,
    attributes: Vec<AttributeStatistic>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct TabularModel {
    classes: HashMap<String, ClassStatistics>,
}

/// A naive Bayes classifier over fixed-width numeric/categorical instances.
///
/// Training accumulates instances per class; [`fit`](TabularClassifier::fit)
/// derives the statistics; [`classify`](TabularClassifier::classify) is
/// read-only thereafter. Adding another instance invalidates the fitted model
/// until the next `fit`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TabularClassifier {
    schema: Option<Schema>,
    instances: HashMap<String, Vec<Vec<AttributeValue>>>,
    tally: ClassTally,
    model: Option<TabularModel>,
}

impl TabularClassifier {
    /// Create a classifier that infers its schema from the first instance.
    pub fn new() -> Self {
        TabularClassifier::default()
    }

    /// Create a classifier with a caller-supplied schema.
    pub fn with_schema(schema: Schema) -> Self {
        TabularClassifier {
            schema: Some(schema),
            ..TabularClassifier::default()
        }
    }

    /// Get the schema, if one has been supplied or inferred.
    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// Check whether [`fit`](TabularClassifier::fit) has produced a model.
    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    /// Total number of training instances added.
    pub fn instance_count(&self) -> usize {
        self.tally.total()
    }

    /// Number of distinct classes seen.
    pub fn class_count(&self) -> usize {
        self.tally.class_count()
    }

    /// Get a fitted class's prior probability.
    pub fn prior(&self, label: &str) -> Option<f64> {
        self.model
            .as_ref()
            .and_then(|model| model.classes.get(label))
            .map(|class| class.prior)
    }

    /// Get the fitted statistics for one (class, attribute index) pair.
    pub fn attribute_statistic(&self, label: &str, index: usize) -> Option<&AttributeStatistic> {
        self.model
            .as_ref()
            .and_then(|model| model.classes.get(label))
            .and_then(|class| class.attributes.get(index))
    }

    /// Add one labeled training instance.
    ///
    /// The first instance fixes the schema (unless one was supplied); every
    /// instance is validated against it, so width and type violations are
    /// reported instead of corrupting the statistics.
    pub fn add_instance<S: AsRef<str>>(&mut self, values: &[S], label: &str) -> Result<()> {
        let schema = self.schema.get_or_insert_with(|| Schema::infer(values));
        let instance = schema.convert(values)?;

        self.instances
            .entry(label.to_string())
            .or_default()
            .push(instance);
        self.tally.record(label);
        // Any fitted statistics are stale now
        self.model = None;
        Ok(())
    }

    /// Derive per-class statistics from the accumulated instances.
    ///
    /// Callable repeatedly; every call recomputes from the instance lists.
    pub fn fit(&mut self) -> Result<()> {
        let schema = self
            .schema
            .as_ref()
            .ok_or_else(|| XystonError::empty_model("no training instances were added"))?;
        let priors = self.tally.priors()?;

        let mut classes = HashMap::with_capacity(self.instances.len());
        for (label, instances) in &self.instances {
            let attributes = schema
                .attributes()
                .iter()
                .enumerate()
                .map(|(index, attribute_type)| {
                    Self::attribute_statistic_for(attribute_type, instances, index)
                })
                .collect();

            classes.insert(
                label.clone(),
                ClassStatistics {
                    prior: priors.get(label).copied().unwrap_or(0.0),
                    attributes,
                },
            );
        }

        debug!(
            "fitted tabular model: {} classes, {} instances, {} attributes",
            classes.len(),
            self.tally.total(),
            schema.len()
        );
        self.model = Some(TabularModel { classes });
        Ok(())
    }

    fn attribute_statistic_for(
        attribute_type: &AttributeType,
        instances: &[Vec<AttributeValue>],
        index: usize,
    ) -> AttributeStatistic {
        match attribute_type {
            AttributeType::Numeric => {
                let values: Vec<f64> = instances
                    .iter()
                    .filter_map(|instance| match instance.get(index) {
                        Some(AttributeValue::Numeric(x)) => Some(*x),
                        _ => None,
                    })
                    .collect();
                AttributeStatistic::Numeric {
                    mean: stats::mean(&values),
                    stdev: stats::sample_stdev(&values),
                }
            }
            AttributeType::Categorical => {
                let mut value_counts: AHashMap<String, usize> = AHashMap::new();
                for instance in instances {
                    if let Some(AttributeValue::Categorical(value)) = instance.get(index) {
                        *value_counts.entry(value.clone()).or_insert(0) += 1;
                    }
                }
                let instance_count = instances.len() as f64;
                AttributeStatistic::Categorical {
                    value_probabilities: value_counts
                        .into_iter()
                        .map(|(value, count)| (value, count as f64 / instance_count))
                        .collect(),
                }
            }
        }
    }

    /// Classify an instance, yielding a posterior distribution over classes.
    ///
    /// Per class the score starts at `ln(prior)`; each numeric attribute with
    /// nonzero spread adds the log Gaussian density at the instance's value,
    /// each categorical attribute adds the log frequency of the observed
    /// value when the class has seen it. Zero-spread attributes and unseen
    /// categorical values contribute nothing. Scores are exponentiated and
    /// normalized; if every score is zero the unnormalized zero distribution
    /// is returned rather than dividing by zero.
    pub fn classify<S: AsRef<str>>(&self, values: &[S]) -> Result<Posterior> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| XystonError::empty_model("classifier has not been fitted"))?;
        let schema = self
            .schema
            .as_ref()
            .ok_or_else(|| XystonError::empty_model("classifier has no schema"))?;
        let instance = schema.convert(values)?;

        // Fixed accumulation order keeps repeated calls bit-identical
        let mut classes: Vec<(&String, &ClassStatistics)> = model.classes.iter().collect();
        classes.sort_by(|a, b| a.0.cmp(b.0));

        let mut total = 0.0;
        let mut scores = HashMap::with_capacity(classes.len());
        for (label, class) in classes {
            let mut log_score = class.prior.ln();
            for (statistic, value) in class.attributes.iter().zip(&instance) {
                match (statistic, value) {
                    (AttributeStatistic::Numeric { mean, stdev }, AttributeValue::Numeric(x)) => {
                        if *stdev != 0.0 {
                            log_score += stats::gaussian_log_density(*x, *mean, *stdev);
                        }
                    }
                    (
                        AttributeStatistic::Categorical {
                            value_probabilities,
                        },
                        AttributeValue::Categorical(value),
                    ) => {
                        if let Some(probability) = value_probabilities.get(value) {
                            log_score += probability.ln();
                        }
                    }
                    // schema.convert keeps value kinds aligned with the statistics
                    _ => {}
                }
            }
            let weight = log_score.exp();
            total += weight;
            scores.insert(label.clone(), weight);
        }

        if total > 0.0 {
            for score in scores.values_mut() {
                *score /= total;
            }
        }
        Ok(Posterior::new(scores))
    }
}
