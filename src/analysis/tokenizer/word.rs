//! Regex word tokenizer implementation.
//!
//! This module provides a tokenizer that extracts word tokens using a regular
//! expression. The default pattern `\w+` matches runs of word characters.
//!
//! # Examples
//!
//! ```
//! use xyston::analysis::tokenizer::Tokenizer;
//! use xyston::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("buy now, pay later!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0].text, "buy");
//! assert_eq!(tokens[3].text, "later");
//! ```

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, XystonError};

/// A tokenizer that extracts word tokens with a regular expression.
///
/// By default only the pattern matches are emitted. With
/// [`keep_separators`](WordTokenizer::keep_separators) enabled, the trimmed
/// non-word runs between matches are emitted as tokens too, so punctuation
/// sequences participate in the token stream alongside the words they
/// surround.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The regex pattern used to extract word tokens
    pattern: Arc<Regex>,
    /// Whether to also emit the trimmed text between matches
    keep_separators: bool,
}

impl WordTokenizer {
    /// Create a new word tokenizer with the default `\w+` pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new word tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| XystonError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordTokenizer {
            pattern: Arc::new(regex),
            keep_separators: false,
        })
    }

    /// Set whether the trimmed text between matches is emitted as tokens.
    pub fn keep_separators(mut self, keep: bool) -> Self {
        self.keep_separators = keep;
        self
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default word pattern should be valid")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut last_end = 0;

        for mat in self.pattern.find_iter(text) {
            if self.keep_separators && mat.start() > last_end {
                let gap = text[last_end..mat.start()].trim();
                if !gap.is_empty() {
                    tokens.push(Token::with_offsets(gap, position, last_end, mat.start()));
                    position += 1;
                }
            }

            tokens.push(Token::with_offsets(
                mat.as_str(),
                position,
                mat.start(),
                mat.end(),
            ));
            position += 1;
            last_end = mat.end();
        }

        // Trailing separator run, if any
        if self.keep_separators && last_end < text.len() {
            let gap = text[last_end..].trim();
            if !gap.is_empty() {
                tokens.push(Token::with_offsets(gap, position, last_end, text.len()));
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenizer() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello, world!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
    }

    #[test]
    fn test_keep_separators() {
        let tokenizer = WordTokenizer::new().unwrap().keep_separators(true);
        let tokens: Vec<Token> = tokenizer.tokenize("hello, world!").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["hello", ",", "world", "!"]);
    }

    #[test]
    fn test_whitespace_only_separators_are_dropped() {
        let tokenizer = WordTokenizer::new().unwrap().keep_separators(true);
        let tokens: Vec<Token> = tokenizer.tokenize("one two").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "one");
        assert_eq!(tokens[1].text, "two");
    }

    #[test]
    fn test_custom_pattern() {
        let tokenizer = WordTokenizer::with_pattern(r"[a-z]+").unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("abc123def").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "abc");
        assert_eq!(tokens[1].text, "def");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(WordTokenizer::with_pattern("[unclosed").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordTokenizer::new().unwrap().name(), "word");
    }
}
