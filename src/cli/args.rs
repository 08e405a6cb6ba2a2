//! Command line argument parsing for the xyston CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Xyston - a naive Bayes text classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "xyston")]
#[command(about = "A naive Bayes text classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct XystonArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl XystonArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Tokenizer used to split document text
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenizerKind {
    /// Split on whitespace
    Whitespace,
    /// Extract \w+ word runs
    Word,
    /// Split on Unicode word boundaries (UAX #29)
    UnicodeWord,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a text model from a labeled corpus
    Train(TrainArgs),

    /// Train on TRAINING/ and report accuracy for TRAINING/ and TESTING/
    Evaluate(EvaluateArgs),

    /// Classify text with a trained model
    Classify(ClassifyArgs),
}

/// Arguments for training a model
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Directory with one subdirectory of .txt files per class
    #[arg(
        value_name = "CORPUS_DIR",
        required_unless_present = "samples",
        conflicts_with = "samples"
    )]
    pub corpus_dir: Option<PathBuf>,

    /// JSON sample file ([{"text": ..., "label": ...}]) instead of a corpus directory
    #[arg(short, long, value_name = "SAMPLES_FILE")]
    pub samples: Option<PathBuf>,

    /// Where to write the fitted model (JSON)
    #[arg(short, long, value_name = "MODEL_FILE")]
    pub output: PathBuf,

    /// Stop-word file; defaults to the built-in English list
    #[arg(long, value_name = "STOP_WORDS_FILE")]
    pub stop_words: Option<PathBuf>,

    /// Disable stop-word filtering entirely
    #[arg(long, conflicts_with = "stop_words")]
    pub no_stop_words: bool,

    /// Tokenizer used for document text
    #[arg(long, value_enum, default_value = "word")]
    pub tokenizer: TokenizerKind,

    /// Fixed divisor applied to log-scores before exponentiation
    #[arg(long, value_name = "SCALE")]
    pub log_scale: Option<f64>,

    /// Scale log-scores adaptively to the input length
    #[arg(long, conflicts_with = "log_scale")]
    pub adaptive_scale: bool,
}

/// Arguments for the train-and-test evaluation run
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Directory containing TRAINING/ and TESTING/ class subdirectories
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Stop-word file; defaults to the built-in English list
    #[arg(long, value_name = "STOP_WORDS_FILE")]
    pub stop_words: Option<PathBuf>,

    /// Disable stop-word filtering entirely
    #[arg(long, conflicts_with = "stop_words")]
    pub no_stop_words: bool,

    /// Tokenizer used for document text
    #[arg(long, value_enum, default_value = "word")]
    pub tokenizer: TokenizerKind,

    /// Scale log-scores adaptively to the input length
    #[arg(long)]
    pub adaptive_scale: bool,
}

/// Arguments for classifying text
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Fitted model file (JSON), as written by `train`
    #[arg(short, long, value_name = "MODEL_FILE")]
    pub model: PathBuf,

    /// Text to classify; omit to read a file or stdin
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text to classify from a file
    #[arg(short, long, value_name = "INPUT_FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Tokenizer used for document text (must match training)
    #[arg(long, value_enum, default_value = "word")]
    pub tokenizer: TokenizerKind,
}
