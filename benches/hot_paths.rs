//! Performance benchmarks for shelfwise hot paths.
//!
//! Measures the operations that dominate runtime:
//! - Levenshtein distance over typical product words
//! - Normalization plus index build for a whole catalog
//! - End-to-end search at several catalog sizes
//! - Autocomplete over index keys
//!
//! Run with: `cargo bench`
//! View reports: `open target/criterion/report/index.html`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shelfwise::bench_utils::{synthetic_rows, SAMPLE_QUERIES};
use shelfwise::services::distance::{levenshtein, within};
use shelfwise::services::{normalize_rows, IndexSnapshot};
use shelfwise::{SearchEngine, SearchOptions};

// ============================================================================
// Edit Distance
// ============================================================================

fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");

    let pairs = [
        ("short", "cat", "bat"),
        ("word", "facewash", "fcewash"),
        ("phrase", "himalaya neem face wash", "himalya neem facewash"),
    ];
    for (label, a, b) in pairs {
        group.bench_with_input(BenchmarkId::new("exact", label), &(a, b), |bench, (a, b)| {
            bench.iter(|| levenshtein(black_box(a), black_box(b)));
        });
    }

    // Length-difference shortcut rejects without running the DP
    group.bench_function("within_rejected_by_length", |bench| {
        bench.iter(|| within(black_box("tea"), black_box("toothpaste whitening"), 2));
    });

    group.finish();
}

// ============================================================================
// Index Build
// ============================================================================

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [1_000, 10_000, 50_000] {
        let rows = synthetic_rows(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |bench, rows| {
            bench.iter(|| {
                let normalized = normalize_rows(black_box(rows));
                IndexSnapshot::build(normalized.products, 1)
            });
        });
    }

    group.finish();
}

// ============================================================================
// Search
// ============================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1_000, 10_000] {
        let engine = SearchEngine::new();
        engine.load_catalog(&synthetic_rows(size));
        let options = SearchOptions::with_limit(20);

        for query in SAMPLE_QUERIES {
            group.bench_with_input(
                BenchmarkId::new(*query, size),
                query,
                |bench, query| {
                    bench.iter(|| engine.search(black_box(query), &options));
                },
            );
        }
    }

    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let engine = SearchEngine::new();
    engine.load_catalog(&synthetic_rows(10_000));

    c.bench_function("suggest_10k", |bench| {
        bench.iter(|| engine.suggest(black_box("he"), 10));
    });
}

criterion_group!(
    benches,
    bench_levenshtein,
    bench_index_build,
    bench_search,
    bench_suggest
);
criterion_main!(benches);
