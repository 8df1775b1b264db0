// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Shape as _};
use tracery_pick::{MarqueeMode, marquee_hits, pick_top, world_tolerance};
use tracery_scene::Entity;

/// A `side x side` grid of 10-unit squares spaced 15 units apart.
fn grid_scene(side: usize) -> Vec<Entity> {
    (0..side * side)
        .map(|i| {
            let x = (i % side) as f64 * 15.0;
            let y = (i / side) as f64 * 15.0;
            Entity::new(
                format!("e{i}"),
                Rect::new(x, y, x + 10.0, y + 10.0).to_path(0.1),
            )
        })
        .collect()
}

fn bench_point_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("picking/point");

    // Hypothesis: the bbox pre-filter makes misses cheap regardless of
    // entity count, while hits near the top of the z-order stay cheap
    // because iteration runs last-to-first.
    for side in [8usize, 16, 32] {
        let mut entities = grid_scene(side);
        let tolerance = world_tolerance(6.0, 1.0);
        let last = (side - 1) as f64 * 15.0;
        let hit = Point::new(last, last + 5.0);
        let miss = Point::new(-100.0, -100.0);
        // Warm the pick-outline memos so the measurement is steady-state.
        let _ = pick_top(&mut entities, hit, tolerance);

        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_function(BenchmarkId::new("top_hit", side * side), |b| {
            b.iter(|| black_box(pick_top(&mut entities, black_box(hit), tolerance)));
        });
        group.bench_function(BenchmarkId::new("miss", side * side), |b| {
            b.iter(|| black_box(pick_top(&mut entities, black_box(miss), tolerance)));
        });
    }

    group.finish();
}

fn bench_marquee(c: &mut Criterion) {
    let mut group = c.benchmark_group("picking/marquee");

    // Hypothesis: window mode is corner tests only; crossing mode pays for
    // outline intersection on every entity the rectangle's band touches.
    for side in [8usize, 16, 32] {
        let mut entities = grid_scene(side);
        let tolerance = world_tolerance(6.0, 1.0);
        let extent = side as f64 * 15.0;
        let all = Rect::new(-5.0, -5.0, extent + 5.0, extent + 5.0);
        let band = Rect::new(-5.0, extent / 2.0, extent + 5.0, extent / 2.0 + 4.0);
        // Warm the outlines the crossing band will test.
        let _ = marquee_hits(&mut entities, band, MarqueeMode::Crossing, tolerance);

        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_function(BenchmarkId::new("window_all", side * side), |b| {
            b.iter(|| {
                black_box(marquee_hits(
                    &mut entities,
                    black_box(all),
                    MarqueeMode::Window,
                    tolerance,
                ));
            });
        });
        group.bench_function(BenchmarkId::new("crossing_band", side * side), |b| {
            b.iter(|| {
                black_box(marquee_hits(
                    &mut entities,
                    black_box(band),
                    MarqueeMode::Crossing,
                    tolerance,
                ));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_point_pick, bench_marquee);
criterion_main!(benches);
