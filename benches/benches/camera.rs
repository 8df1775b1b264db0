// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use tracery_camera::{Camera, nice_step};

fn bench_zoom_about(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera/zoom_about");

    // Every zoom recomputes both transforms and re-anchors the cursor's
    // world point, so this is the per-wheel-notch cost.
    group.bench_function("wheel_sequence", |b| {
        let anchor = Point::new(123.0, 217.0);
        b.iter_batched(
            || Camera::new(Size::new(1920.0, 1080.0)),
            |mut camera| {
                for step in 0..16 {
                    let factor = if step % 2 == 0 { 1.12 } else { 1.0 / 1.12 };
                    camera.zoom_about_screen_point(anchor, factor);
                }
                black_box(camera.translation());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_zoom_to_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera/zoom_to_fit");

    group.bench_function("fit_and_project", |b| {
        let bounds = Rect::new(-310.0, 42.0, 1887.5, 904.0);
        b.iter_batched(
            || Camera::new(Size::new(1920.0, 1080.0)),
            |mut camera| {
                camera.zoom_to_fit(bounds, 24.0);
                black_box(camera.world_to_screen_point(Point::new(0.0, 0.0)));
                black_box(camera.visible_world_rect());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_nice_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera/nice_step");

    // Sweep twelve decades the way continuous zooming does.
    group.bench_function("ladder_sweep", |b| {
        b.iter(|| {
            let mut raw = 1e-6;
            let mut acc = 0.0;
            while raw < 1e6 {
                acc += nice_step(black_box(raw));
                raw *= 1.07;
            }
            black_box(acc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_zoom_about, bench_zoom_to_fit, bench_nice_step);
criterion_main!(benches);
