//! Error types for the xyston library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`XystonError`] enum.
//!
//! # Examples
//!
//! ```
//! use xyston::error::{Result, XystonError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(XystonError::empty_model("no training instances"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::classifier::schema::AttributeType;

/// The main error type for xyston operations.
#[derive(Error, Debug)]
pub enum XystonError {
    /// I/O errors (reading corpora, stop-word files, model files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, stop-word loading).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Schema-related errors (attribute count or layout mismatches).
    #[error("Schema error: {0}")]
    Schema(String),

    /// An attribute value cannot be reconciled with the type recorded in the
    /// schema for its column.
    #[error("type mismatch at attribute {index}: expected a {expected} value, got {value:?}")]
    TypeMismatch {
        /// Zero-based attribute index within the instance.
        index: usize,
        /// The type the schema records for this column.
        expected: AttributeType,
        /// The offending raw value.
        value: String,
    },

    /// Classification was attempted on a model with no trained statistics.
    #[error("empty model: {0}")]
    EmptyModel(String),

    /// Every class score collapsed to zero during text classification, so the
    /// posterior cannot be normalized.
    #[error("zero total score: {0}")]
    ZeroTotalScore(String),

    /// Corpus-related errors (missing directories, malformed sample files).
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with [`XystonError`].
pub type Result<T> = std::result::Result<T, XystonError>;

impl XystonError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        XystonError::Analysis(msg.into())
    }

    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        XystonError::Schema(msg.into())
    }

    /// Create a new empty-model error.
    pub fn empty_model<S: Into<String>>(msg: S) -> Self {
        XystonError::EmptyModel(msg.into())
    }

    /// Create a new zero-total-score error.
    pub fn zero_total_score<S: Into<String>>(msg: S) -> Self {
        XystonError::ZeroTotalScore(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        XystonError::Corpus(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        XystonError::InvalidOperation(msg.into())
    }
}
