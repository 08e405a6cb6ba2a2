//! Stop-word list implementation.
//!
//! A [`StopWordList`] is the set of common words the text trainer excludes
//! from class statistics. Matching is case-insensitive: the list stores
//! lowercase words and lowercases lookups. The list is an explicit
//! configuration value handed to the trainer at construction time, which keeps
//! tests deterministic and lets callers supply their own vocabularies.
//!
//! # Examples
//!
//! ```
//! use xyston::analysis::stop_words::StopWordList;
//!
//! let stop_words = StopWordList::new(); // default English list
//! assert!(stop_words.contains("the"));
//! assert!(stop_words.contains("The"));
//! assert!(!stop_words.contains("laser"));
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default English stop words list.
///
/// Common English words that typically carry no class signal.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A case-insensitive set of words to exclude from training statistics.
///
/// # Examples
///
/// ```
/// use xyston::analysis::stop_words::StopWordList;
///
/// let stop_words = StopWordList::from_words(vec!["Foo", "bar"]);
/// assert!(stop_words.contains("foo"));
/// assert!(stop_words.contains("BAR"));
/// assert_eq!(stop_words.len(), 2);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StopWordList {
    /// The stop words, stored lowercase
    words: HashSet<String>,
}

impl StopWordList {
    /// Create a stop-word list with the default English stop words.
    pub fn new() -> Self {
        Self::with_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create an empty stop-word list (no tokens are filtered).
    pub fn empty() -> Self {
        StopWordList {
            words: HashSet::new(),
        }
    }

    /// Create a stop-word list from an existing set of words.
    ///
    /// Words are lowercased on the way in.
    pub fn with_words(words: HashSet<String>) -> Self {
        StopWordList {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Create a stop-word list from a list of words.
    ///
    /// # Examples
    ///
    /// ```
    /// use xyston::analysis::stop_words::StopWordList;
    ///
    /// let stop_words = StopWordList::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(stop_words.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words.into_iter().map(|s| s.into()).collect();
        Self::with_words(words)
    }

    /// Load a stop-word list from a file.
    ///
    /// Every `[A-Za-z]+` run in the file becomes one stop word, lowercased,
    /// so the file layout (one word per line, comma separated, prose) does
    /// not matter.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let word_pattern = Regex::new(r"[A-Za-z]+").expect("stop word pattern should be valid");
        let words = word_pattern
            .find_iter(&content)
            .map(|m| m.as_str().to_string())
            .collect();
        Ok(Self::with_words(words))
    }

    /// Check whether a word is a stop word, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
