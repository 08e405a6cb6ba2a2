//! Output formatting for CLI commands.

use serde::Serialize;

use crate::classifier::posterior::Posterior;
use crate::cli::args::{OutputFormat, XystonArgs};
use crate::error::Result;
use crate::report::{DocumentResult, Evaluation};

/// Result structure for model training.
#[derive(Debug, Serialize)]
pub struct TrainingResult {
    pub documents: usize,
    pub classes: usize,
    pub vocabulary: usize,
    pub duration_ms: u64,
    pub model_path: String,
}

/// Result structure for one evaluation split.
#[derive(Debug, Serialize)]
pub struct EvaluationOutput<'a> {
    pub split: &'a str,
    pub accuracy: f64,
    pub correct: usize,
    pub total: usize,
    pub results: &'a [DocumentResult],
}

fn to_json<T: Serialize>(value: &T, cli_args: &XystonArgs) -> Result<String> {
    let json = if cli_args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Print a command result either as a human-readable summary line plus JSON
/// payload, or as the JSON payload alone.
pub fn output_result<T: Serialize>(message: &str, result: &T, cli_args: &XystonArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Human => {
            if cli_args.verbosity() > 0 {
                println!("{message}");
            }
            println!("{}", to_json(result, cli_args)?);
        }
        OutputFormat::Json => {
            println!("{}", to_json(result, cli_args)?);
        }
    }
    Ok(())
}

/// Print one evaluation split.
pub fn output_evaluation(split: &str, evaluation: &Evaluation, cli_args: &XystonArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Human => {
            if cli_args.verbosity() > 0 {
                println!("Running on {split} data (asterisk marks a miss)...");
            }
            println!("{evaluation}");
        }
        OutputFormat::Json => {
            let output = EvaluationOutput {
                split,
                accuracy: evaluation.accuracy(),
                correct: evaluation.correct,
                total: evaluation.total,
                results: &evaluation.results,
            };
            println!("{}", to_json(&output, cli_args)?);
        }
    }
    Ok(())
}

/// Print a posterior distribution, most probable class first.
pub fn output_posterior(posterior: &Posterior, cli_args: &XystonArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Human => {
            for (label, probability) in posterior.ranked() {
                println!("{label:<30}{:.4}%", probability * 100.0);
            }
        }
        OutputFormat::Json => {
            println!("{}", to_json(posterior, cli_args)?);
        }
    }
    Ok(())
}
