//! Labeled corpus loading.
//!
//! A directory corpus has one subdirectory per class, each holding `.txt`
//! documents:
//!
//! ```text
//! corpus/
//!   spam/
//!     cheap_watches.txt
//!     lottery_win.txt
//!   ham/
//!     weekly_report.txt
//! ```
//!
//! Every file is read line by line and tokenized with the caller's tokenizer;
//! the same tokenizer must then be used for whatever text is classified
//! against the trained model. Smaller datasets can instead live in a single
//! JSON file of [`TextSample`] records.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, XystonError};

/// One labeled, tokenized document from a corpus directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LabeledDocument {
    /// Class label (the subdirectory name).
    pub label: String,
    /// Display name (the file stem, underscores replaced with spaces).
    pub name: String,
    /// Tokenized document content.
    pub tokens: Vec<String>,
}

/// A raw labeled text sample, as stored in JSON sample files.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextSample {
    /// Raw document text.
    pub text: String,
    /// Class label.
    pub label: String,
}

/// Tokenize a document line by line, concatenating the per-line streams.
pub fn tokenize_document(text: &str, tokenizer: &dyn Tokenizer) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in text.lines() {
        tokens.extend(tokenizer.tokenize(line)?.map(|token| token.text));
    }
    Ok(tokens)
}

/// Load a labeled corpus from a directory of per-class subdirectories.
///
/// Classes and files are visited in sorted order so the resulting document
/// list is deterministic. Files without a `.txt` extension are skipped.
pub fn load_directory<P: AsRef<Path>>(
    root: P,
    tokenizer: &dyn Tokenizer,
) -> Result<Vec<LabeledDocument>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(XystonError::corpus(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let mut class_dirs: Vec<_> = std::fs::read_dir(root)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .filter(|entry| entry.path().is_dir())
        .collect();
    class_dirs.sort_by_key(|entry| entry.file_name());

    if class_dirs.is_empty() {
        return Err(XystonError::corpus(format!(
            "no class subdirectories under {}",
            root.display()
        )));
    }

    let mut documents = Vec::new();
    for class_dir in class_dirs {
        let label = class_dir.file_name().to_string_lossy().into_owned();

        let mut files: Vec<_> = std::fs::read_dir(class_dir.path())?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|extension| extension == "txt")
            })
            .collect();
        files.sort();

        for path in files {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().replace('_', " "))
                .unwrap_or_default();
            let content = std::fs::read_to_string(&path)?;
            documents.push(LabeledDocument {
                label: label.clone(),
                name,
                tokens: tokenize_document(&content, tokenizer)?,
            });
        }
    }

    info!(
        "loaded {} documents from {}",
        documents.len(),
        root.display()
    );
    Ok(documents)
}

/// Load labeled samples from a JSON file.
///
/// The file holds an array of `{"text": ..., "label": ...}` records.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<TextSample>> {
    let content = std::fs::read_to_string(path)?;
    let samples: Vec<TextSample> = serde_json::from_str(&content)?;
    Ok(samples)
}
