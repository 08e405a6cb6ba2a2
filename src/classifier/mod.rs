//! Naive Bayes classifiers for Xyston.
//!
//! Two independent pipelines are provided:
//!
//! - [`TextClassifier`] learns per-class token frequency tables from token
//!   sequences and scores new documents with Laplace-smoothed token
//!   probabilities.
//! - [`TabularClassifier`] learns per-class, per-attribute statistics from
//!   fixed-width instances of mixed numeric/categorical attributes, using
//!   Gaussian density estimation for numeric columns and value frequencies
//!   for categorical columns.
//!
//! Both accumulate labeled training instances, derive their statistics in an
//! explicit `fit` step, and then classify read-only, producing a [`Posterior`]
//! distribution over class labels. Scoring runs in the log domain so long
//! products of small probabilities cannot underflow.

pub mod model;
pub mod posterior;
pub mod schema;
pub mod stats;
pub mod tabular;
pub mod text;

pub use posterior::Posterior;
pub use schema::{AttributeType, AttributeValue, Schema};
pub use tabular::{AttributeStatistic, TabularClassifier};
pub use text::{LogScale, TextClassifier, UnseenTokenPolicy};
