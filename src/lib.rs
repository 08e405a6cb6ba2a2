//! # Xyston
//!
//! A naive Bayes classification library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Text classification over token streams with Laplace smoothing
//! - Tabular classification over mixed numeric/categorical attributes
//! - Log-domain scoring with configurable underflow protection
//! - Pluggable tokenizers and stop-word lists
//! - Directory corpus loading and parallel batch evaluation

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod report;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
