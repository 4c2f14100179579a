// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the motion layer.
//!
//! Measures the performance of:
//! - Easing curve evaluation
//! - Tween sampling across a full set of running transitions

use criterion::{criterion_group, criterion_main, Criterion};
use iced_reel::motion::{Animation, Animator, Easing, Property, Target, Tweener};
use std::hint::black_box;
use std::time::{Duration, Instant};

const EASINGS: [Easing; 7] = [
    Easing::Linear,
    Easing::Power1Out,
    Easing::Power2In,
    Easing::Power2Out,
    Easing::Power3Out,
    Easing::BackIn(2.0),
    Easing::BackOut(1.7),
];

/// Benchmark evaluating every easing curve over 100 samples.
fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion");

    group.bench_function("easing_curves", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for easing in EASINGS {
                for step in 0..=100_u8 {
                    sum += easing.apply(black_box(f32::from(step) / 100.0));
                }
            }
            black_box(sum)
        });
    });

    group.finish();
}

/// Benchmark one frame of the tweener with every player target in flight.
///
/// Mirrors a busy moment: play/pause morph, centre play, fill and volume
/// slider all animating at once.
fn bench_tween_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion");
    let targets = [
        (Target::ProgressFill, Property::Width),
        (Target::ProgressHandle, Property::Left),
        (Target::PlayIcon, Property::Scale),
        (Target::PlayIcon, Property::Opacity),
        (Target::PauseIcon, Property::Scale),
        (Target::PauseIcon, Property::Opacity),
        (Target::CenterPlay, Property::Scale),
        (Target::CenterPlay, Property::Opacity),
        (Target::VolumeSlider, Property::Width),
        (Target::ControlsOverlay, Property::Opacity),
    ];

    group.bench_function("tween_frame", |b| {
        b.iter_batched(
            || {
                let mut tweener = Tweener::new();
                for (i, (target, property)) in targets.into_iter().enumerate() {
                    tweener.animate(
                        Animation::to(target, property, 1.0)
                            .from(0.0)
                            .over_millis(300)
                            .ease(EASINGS[i % EASINGS.len()]),
                    );
                }
                let start = Instant::now();
                tweener.tick(start);
                (tweener, start)
            },
            |(mut tweener, start)| {
                tweener.tick(start + Duration::from_millis(150));
                for (target, property) in targets {
                    black_box(tweener.value(target, property));
                }
                tweener
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_easing, bench_tween_frame);
criterion_main!(benches);
