//! Command implementations for the xyston CLI.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use crate::analysis::stop_words::StopWordList;
use crate::analysis::tokenizer::{
    Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer, WordTokenizer,
};
use crate::classifier::text::{LogScale, TextClassifier};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus;
use crate::error::{Result, XystonError};
use crate::report;

/// Execute a CLI command.
pub fn execute_command(args: XystonArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Evaluate(evaluate_args) => evaluate(evaluate_args.clone(), &args),
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
    }
}

fn build_tokenizer(kind: TokenizerKind) -> Result<Box<dyn Tokenizer>> {
    Ok(match kind {
        TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer::new()),
        TokenizerKind::Word => Box::new(WordTokenizer::new()?),
        TokenizerKind::UnicodeWord => Box::new(UnicodeWordTokenizer::new()),
    })
}

fn build_stop_words(file: &Option<PathBuf>, disabled: bool) -> Result<StopWordList> {
    if disabled {
        return Ok(StopWordList::empty());
    }
    match file {
        Some(path) => StopWordList::from_file(path),
        None => Ok(StopWordList::new()),
    }
}

/// Train a model and write it to disk as JSON.
fn train(args: TrainArgs, cli_args: &XystonArgs) -> Result<()> {
    let tokenizer = build_tokenizer(args.tokenizer)?;
    let stop_words = build_stop_words(&args.stop_words, args.no_stop_words)?;

    let mut classifier = TextClassifier::with_stop_words(stop_words);
    if args.adaptive_scale {
        classifier = classifier.log_scale(LogScale::Adaptive);
    } else if let Some(scale) = args.log_scale {
        classifier = classifier.log_scale(LogScale::Fixed(scale));
    }

    let start = Instant::now();
    if let Some(samples_path) = &args.samples {
        if cli_args.verbosity() > 1 {
            println!("Loading samples from: {}", samples_path.display());
        }
        for sample in corpus::load_samples(samples_path)? {
            let tokens = corpus::tokenize_document(&sample.text, tokenizer.as_ref())?;
            classifier.add_document(&tokens, &sample.label);
        }
    } else if let Some(corpus_dir) = &args.corpus_dir {
        if cli_args.verbosity() > 1 {
            println!("Loading corpus from: {}", corpus_dir.display());
        }
        for document in corpus::load_directory(corpus_dir, tokenizer.as_ref())? {
            classifier.add_document(&document.tokens, &document.label);
        }
    } else {
        return Err(XystonError::invalid_operation(
            "either a corpus directory or a samples file is required",
        ));
    }
    classifier.fit()?;

    fs::write(&args.output, serde_json::to_string(&classifier)?)?;

    output_result(
        "Model trained successfully",
        &TrainingResult {
            documents: classifier.document_count(),
            classes: classifier.class_count(),
            vocabulary: classifier.vocabulary_size(),
            duration_ms: start.elapsed().as_millis() as u64,
            model_path: args.output.display().to_string(),
        },
        cli_args,
    )
}

/// Train on TRAINING/ and report evaluation tables for both splits.
fn evaluate(args: EvaluateArgs, cli_args: &XystonArgs) -> Result<()> {
    let tokenizer = build_tokenizer(args.tokenizer)?;
    let stop_words = build_stop_words(&args.stop_words, args.no_stop_words)?;

    let training = corpus::load_directory(args.data_dir.join("TRAINING"), tokenizer.as_ref())?;

    let mut classifier = TextClassifier::with_stop_words(stop_words);
    if args.adaptive_scale {
        classifier = classifier.log_scale(LogScale::Adaptive);
    }
    for document in &training {
        classifier.add_document(&document.tokens, &document.label);
    }
    classifier.fit()?;

    let training_evaluation = report::evaluate(&classifier, &training)?;
    output_evaluation("training", &training_evaluation, cli_args)?;

    let testing = corpus::load_directory(args.data_dir.join("TESTING"), tokenizer.as_ref())?;
    let testing_evaluation = report::evaluate(&classifier, &testing)?;
    output_evaluation("testing", &testing_evaluation, cli_args)?;

    Ok(())
}

/// Load a model and classify one document.
fn classify(args: ClassifyArgs, cli_args: &XystonArgs) -> Result<()> {
    let tokenizer = build_tokenizer(args.tokenizer)?;
    let classifier: TextClassifier = serde_json::from_str(&fs::read_to_string(&args.model)?)?;

    let text = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let tokens = corpus::tokenize_document(&text, tokenizer.as_ref())?;
    let posterior = classifier.classify(&tokens)?;
    output_posterior(&posterior, cli_args)
}
