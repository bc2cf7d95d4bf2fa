//! Performance benchmarks for block splitting
//!
//! Run with: cargo bench --bench split_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hangul_splitter_core::{keep_only_hangul, split_hangul_blocks, SplitOptions};
use std::hint::black_box;

/// Generate test text of roughly the given size in bytes
fn generate_text(size: usize) -> String {
    let base_sentence = "다람쥐 헌 쳇바퀴에 타고파. 괜찮아요, 값은 2,000원입니다! ";
    let repeat_count = size / base_sentence.len() + 1;

    base_sentence
        .repeat(repeat_count)
        .chars()
        .scan(0, |bytes, ch| {
            *bytes += ch.len_utf8();
            (*bytes <= size).then_some(ch)
        })
        .collect()
}

/// Benchmark different text sizes with default options
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("split", size), &text, |b, text| {
            b.iter(|| split_hangul_blocks(black_box(text), SplitOptions::default()));
        });
    }

    group.finish();
}

/// Benchmark each option combination on the same input
fn bench_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("options");
    let text = generate_text(102_400);

    for (name, split, spaces) in [
        ("plain", false, false),
        ("split_complex", true, false),
        ("spaces", false, true),
        ("split_complex_spaces", true, true),
    ] {
        let options = SplitOptions {
            split_complex_letters: split,
            insert_spaces_between_letters: spaces,
        };

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("split", name), &text, |b, text| {
            b.iter(|| split_hangul_blocks(black_box(text), options));
        });
    }

    group.finish();
}

/// Benchmark the keep-only-Hangul filter
fn bench_filter(c: &mut Criterion) {
    let text = generate_text(102_400);

    c.bench_function("keep_only_hangul", |b| {
        b.iter(|| keep_only_hangul(black_box(&text), true));
    });
}

criterion_group!(benches, bench_text_sizes, bench_options, bench_filter);
criterion_main!(benches);
