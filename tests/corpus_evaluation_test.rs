//! Directory corpus loading, evaluation, and model persistence round-trips.

use std::fs;
use std::path::Path;

use xyston::analysis::tokenizer::WordTokenizer;
use xyston::classifier::text::TextClassifier;
use xyston::corpus;
use xyston::report;

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

fn write_dataset(root: &Path) {
    let training = root.join("TRAINING");
    write_file(
        &training.join("spam"),
        "offer1.txt",
        "free money offer, buy now!",
    );
    write_file(&training.join("spam"), "offer2.txt", "cheap pills buy cheap");
    write_file(
        &training.join("ham"),
        "standup.txt",
        "team meeting today agenda",
    );
    write_file(
        &training.join("ham"),
        "report.txt",
        "project status report update",
    );

    let testing = root.join("TESTING");
    write_file(&testing.join("spam"), "new_offer.txt", "buy cheap pills now");
    write_file(&testing.join("ham"), "minutes.txt", "meeting agenda project");
}

#[test]
fn corpus_trains_and_evaluates_cleanly() {
    let root = tempfile::tempdir().unwrap();
    write_dataset(root.path());
    let tokenizer = WordTokenizer::new().unwrap();

    let training = corpus::load_directory(root.path().join("TRAINING"), &tokenizer).unwrap();
    assert_eq!(training.len(), 4);

    let mut classifier = TextClassifier::new();
    for document in &training {
        classifier.add_document(&document.tokens, &document.label);
    }
    classifier.fit().unwrap();
    assert_eq!(classifier.class_count(), 2);

    // The classes are cleanly separable, so the model must reproduce the
    // training labels and generalize to the held-out files
    let training_evaluation = report::evaluate(&classifier, &training).unwrap();
    assert_eq!(training_evaluation.correct, training_evaluation.total);

    let testing = corpus::load_directory(root.path().join("TESTING"), &tokenizer).unwrap();
    let testing_evaluation = report::evaluate(&classifier, &testing).unwrap();
    assert_eq!(testing_evaluation.correct, 2);
    assert_eq!(testing_evaluation.total, 2);
    assert_eq!(testing_evaluation.accuracy(), 1.0);

    let rendered = testing_evaluation.to_string();
    assert!(rendered.contains("accuracy: 2/2: 100.00%"));
}

#[test]
fn fitted_model_round_trips_through_json() {
    let root = tempfile::tempdir().unwrap();
    write_dataset(root.path());
    let tokenizer = WordTokenizer::new().unwrap();

    let training = corpus::load_directory(root.path().join("TRAINING"), &tokenizer).unwrap();
    let mut classifier = TextClassifier::new();
    for document in &training {
        classifier.add_document(&document.tokens, &document.label);
    }
    classifier.fit().unwrap();

    let json = serde_json::to_string(&classifier).unwrap();
    let restored: TextClassifier = serde_json::from_str(&json).unwrap();

    assert!(restored.is_fitted());
    assert_eq!(restored.vocabulary_size(), classifier.vocabulary_size());

    let tokens = ["buy", "cheap", "pills"];
    let original = classifier.classify(&tokens).unwrap();
    let roundtripped = restored.classify(&tokens).unwrap();
    assert_eq!(original, roundtripped);
}
