// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the gallery search filter.
//!
//! Measures filtering of the sample data and of a large synthetic gallery.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_image_loader::showcase::{self, ShowcaseItem};
use std::hint::black_box;

/// Sample items repeated `copies` times with unique ids.
fn large_gallery(copies: u32) -> Vec<ShowcaseItem> {
    let sample = showcase::sample_items();
    let per_copy = sample.len() as u32;
    (0..copies)
        .flat_map(|copy| {
            sample.iter().cloned().map(move |item| ShowcaseItem {
                id: copy * per_copy + item.id,
                ..item
            })
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("showcase_filter");

    let sample = showcase::sample_items();
    group.bench_function("sample_circle", |b| {
        b.iter(|| black_box(showcase::filter(black_box("Circle"), &sample)));
    });

    let large = large_gallery(1_000);
    group.bench_function("large_empty_query", |b| {
        b.iter(|| black_box(showcase::filter(black_box(""), &large)));
    });
    group.bench_function("large_no_match", |b| {
        b.iter(|| black_box(showcase::filter(black_box("zzz"), &large)));
    });

    group.finish();
}

fn bench_toggle_like(c: &mut Criterion) {
    let mut group = c.benchmark_group("showcase_filter");

    let mut large = large_gallery(1_000);
    group.bench_function("toggle_like_last", |b| {
        b.iter(|| black_box(showcase::toggle_like(&mut large, black_box(12_000))));
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_toggle_like);
criterion_main!(benches);
