//! Text analysis module for Xyston.
//!
//! This module provides the tokenization and stop-word handling that feeds the
//! text classification pipeline. The same tokenizer must be used for training
//! and classification so both sides see an identical token stream.

pub mod stop_words;
pub mod token;
pub mod tokenizer;
