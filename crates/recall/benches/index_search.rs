use criterion::{criterion_group, criterion_main, Criterion};
use recall_core::{Config, Retriever};
use recall_index::TfIdfIndex;
use std::hint::black_box;
use tempfile::TempDir;

fn sample_docs() -> Vec<String> {
    (0..100)
        .map(|i| format!("document {} covers topic {} with shared keywords", i, i % 7))
        .collect()
}

fn bench_build_index_100_docs(c: &mut Criterion) {
    let docs = sample_docs();
    c.bench_function("build_index_100_docs", |b| {
        b.iter(|| TfIdfIndex::build(black_box(docs.clone()), 4000));
    });
}

fn bench_answer_100_docs(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data.json");
    let json = serde_json::to_string(&sample_docs()).unwrap();
    std::fs::write(&path, json).unwrap();

    let retriever = Retriever::new(path, Config::new());
    retriever.ensure_index();

    c.bench_function("answer_100_docs", |b| {
        b.iter(|| retriever.answer(black_box("shared keywords for topic 3")));
    });
}

criterion_group!(benches, bench_build_index_100_docs, bench_answer_100_docs);
criterion_main!(benches);
