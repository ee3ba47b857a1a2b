//! Criterion benchmarks for the signgloss pipeline.
//!
//! Covers the full translation path plus the normalization and gloss stages
//! in isolation.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use signgloss::analysis::Normalizer;
use signgloss::pipeline::Translator;
use signgloss::resolve::{StaticAssetStore, SynonymPolicy};
use signgloss::synonym::SynonymTable;

const SENTENCES: &[&str] = &[
    "I will go to the market tomorrow",
    "She was reading a book in the morning",
    "What is your name",
    "They are eating dinner now",
    "I hear a strange sound outside",
];

fn benchmark_translator() -> Translator {
    let assets = StaticAssetStore::from_words([
        "will", "before", "now", "me", "go", "market", "tomorrow", "book", "name", "what",
        "your", "eat", "listen", "sound",
    ]);
    Translator::builder()
        .assets(Arc::new(assets))
        .synonyms(Arc::new(SynonymTable::from_pairs([
            ("hear", "listen"),
            ("strange", "odd"),
        ])))
        .policy(SynonymPolicy::VerifyAsset)
        .build()
}

fn bench_normalizer(c: &mut Criterion) {
    let normalizer = Normalizer::new();
    let mut group = c.benchmark_group("normalizer");
    group.throughput(Throughput::Elements(SENTENCES.len() as u64));
    group.bench_function("normalize", |b| {
        b.iter(|| {
            for sentence in SENTENCES {
                black_box(normalizer.normalize(black_box(sentence)).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_translate(c: &mut Criterion) {
    let translator = benchmark_translator();
    let mut group = c.benchmark_group("translate");
    group.throughput(Throughput::Elements(SENTENCES.len() as u64));
    group.bench_function("full_pipeline", |b| {
        b.iter(|| {
            for sentence in SENTENCES {
                black_box(translator.translate(black_box(sentence)).unwrap());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_normalizer, bench_translate);
criterion_main!(benches);
