// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Insets, Point, Size};
use understory_bounce::{BounceDetector, BounceEvent, Directions, SurfaceGeometry};

/// A fling past the bottom of a 480px viewport over 2000px of content that
/// overshoots, pulls back, then stops settling.
fn trajectory() -> Vec<SurfaceGeometry> {
    let mut ys: Vec<f64> = (0..32).map(|i| 1400.0 + f64::from(i) * 6.0).collect();
    ys.extend((0..16).map(|i| 1590.0 - f64::from(i) * 4.0));
    let last = ys.len() - 1;
    ys.iter()
        .enumerate()
        .map(|(i, &y)| SurfaceGeometry {
            content_offset: Point::new(0.0, y),
            content_size: Size::new(320.0, 2000.0),
            viewport_size: Size::new(320.0, 480.0),
            content_inset: Insets::ZERO,
            is_settling: i != last,
        })
        .collect()
}

fn detector_with(surfaces: u32) -> BounceDetector<u32, Vec<BounceEvent<u32>>> {
    let mut detector = BounceDetector::new(Vec::new());
    for surface in 0..surfaces {
        detector.start_observing(surface, Directions::ALL);
    }
    detector
}

fn bench_on_offset_changed(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounce/on_offset_changed");
    let samples = trajectory();

    // Hypothesis: per-sample cost is flat in the number of registered
    // surfaces (one hash lookup), so total time scales with samples only.
    for surfaces in [1_u32, 64, 1_024, 16_384] {
        let driven = u64::from(surfaces.min(64));
        group.throughput(Throughput::Elements(samples.len() as u64 * driven));

        group.bench_with_input(BenchmarkId::from_parameter(surfaces), &samples, |b, samples| {
            b.iter_batched(
                || detector_with(surfaces),
                |mut detector| {
                    // Drive at most 64 surfaces so larger registries measure lookup cost.
                    for surface in 0..surfaces.min(64) {
                        let mut previous = Point::new(0.0, 1390.0);
                        for geometry in samples {
                            detector.on_offset_changed(surface, previous, geometry);
                            previous = geometry.content_offset;
                        }
                    }
                    black_box(detector.into_listener());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_untracked_samples(c: &mut Criterion) {
    let samples = trajectory();
    c.bench_function("bounce/untracked", |b| {
        let mut detector = detector_with(1_024);
        b.iter(|| {
            for geometry in &samples {
                detector.on_offset_changed(black_box(u32::MAX), Point::ZERO, geometry);
            }
        });
    });
}

fn bench_current_bouncing_directions(c: &mut Criterion) {
    let samples = trajectory();
    let mut detector = detector_with(1);
    let mut previous = Point::ZERO;
    // Stop while still past the bound.
    for geometry in &samples[..40] {
        detector.on_offset_changed(0, previous, geometry);
        previous = geometry.content_offset;
    }
    c.bench_function("bounce/current_bouncing_directions", |b| {
        b.iter(|| black_box(detector.current_bouncing_directions(black_box(0))));
    });
}

criterion_group!(
    benches,
    bench_on_offset_changed,
    bench_untracked_samples,
    bench_current_bouncing_directions
);
criterion_main!(benches);
