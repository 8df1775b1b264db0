// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use tracery_selection::IndexSelection;

fn bench_add_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/add");

    // Hypothesis: adjacent adds coalesce into one interval and stay cheap;
    // striped adds grow the interval list and pay for the ordered insert.
    for len in [256usize, 1_024, 4_096] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("adjacent", len), &len, |b, &len| {
            b.iter_batched(
                IndexSelection::new,
                |mut sel| {
                    for index in 0..len {
                        sel.add(index);
                    }
                    black_box(sel.len());
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("striped", len), &len, |b, &len| {
            b.iter_batched(
                IndexSelection::new,
                |mut sel| {
                    for index in (0..len * 2).step_by(2) {
                        sel.add(index);
                    }
                    black_box(sel.len());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_toggle_and_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/queries");

    for len in [1_024usize, 8_192] {
        let mut sel = IndexSelection::new();
        for index in (0..len).step_by(2) {
            sel.add(index);
        }

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("contains_sweep", len), &len, |b, &len| {
            b.iter(|| {
                let mut hits = 0usize;
                for index in 0..len {
                    hits += usize::from(sel.contains(black_box(index)));
                }
                black_box(hits);
            });
        });

        group.bench_with_input(BenchmarkId::new("toggle_stripe", len), &len, |b, &len| {
            b.iter_batched(
                || sel.clone(),
                |mut sel| {
                    for index in (1..len).step_by(4) {
                        sel.toggle(index);
                    }
                    black_box(sel.len());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_transactions(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/transaction");

    // A marquee-style resolution: clear plus a burst of adds, coalesced.
    group.bench_function("marquee_resolution", |b| {
        b.iter_batched(
            || {
                let mut sel = IndexSelection::new();
                sel.add_range(0, 2_047);
                sel
            },
            |mut sel| {
                sel.transaction(|sel| {
                    sel.clear();
                    for index in (0..2_048).step_by(3) {
                        sel.add(index);
                    }
                });
                black_box(sel.revision());
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_add_patterns, bench_toggle_and_contains, bench_transactions);
criterion_main!(benches);
