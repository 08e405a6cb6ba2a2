//! Classification throughput benchmarks.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use xyston::analysis::stop_words::StopWordList;
use xyston::classifier::tabular::TabularClassifier;
use xyston::classifier::text::TextClassifier;

fn text_classification_benchmark(c: &mut Criterion) {
    let mut classifier = TextClassifier::with_stop_words(StopWordList::empty());
    for i in 0..200 {
        let tokens: Vec<String> = (0..50).map(|j| format!("spamword{}", (i + j) % 97)).collect();
        classifier.add_document(&tokens, "spam");
        let tokens: Vec<String> = (0..50).map(|j| format!("hamword{}", (i + j) % 89)).collect();
        classifier.add_document(&tokens, "ham");
    }
    classifier.fit().unwrap();

    let document: Vec<String> = (0..200).map(|j| format!("spamword{}", j % 97)).collect();

    c.bench_function("classify_text_200_tokens", |b| {
        b.iter(|| classifier.classify(black_box(&document)).unwrap())
    });
}

fn tabular_classification_benchmark(c: &mut Criterion) {
    let mut classifier = TabularClassifier::new();
    for i in 0..500 {
        let temperature = format!("{}", 60 + (i % 30));
        let outlook = if i % 3 == 0 { "sunny" } else { "rainy" };
        let label = if i % 2 == 0 { "go-out" } else { "stay-in" };
        classifier
            .add_instance(&[temperature.as_str(), outlook], label)
            .unwrap();
    }
    classifier.fit().unwrap();

    c.bench_function("classify_tabular_2_attributes", |b| {
        b.iter(|| classifier.classify(black_box(&["72", "sunny"])).unwrap())
    });
}

criterion_group!(
    benches,
    text_classification_benchmark,
    tabular_classification_benchmark
);
criterion_main!(benches);
