// Rust guideline compliant 2026-02-06

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use etaprinter_core::{render_bar, render_full, Estimate, ManualClock, StepTiming, TrackerBuilder};
use std::io;

fn bench_render_bar(c: &mut Criterion) {
    c.bench_function("render_bar_50", |b| b.iter(|| render_bar(black_box(50))));
}

fn bench_render_full(c: &mut Criterion) {
    let timing = StepTiming {
        items_per_group: 3,
        duration_millis: 7,
    };
    let estimate = Estimate::new(timing, 10_000);
    c.bench_function("render_full", |b| {
        b.iter(|| {
            render_full(
                black_box(Some("bananas")),
                black_box(42),
                estimate.speed,
                estimate.unit,
                estimate.eta,
            )
        })
    });
}

fn bench_measure(c: &mut Criterion) {
    c.bench_function("measure_fast_step", |b| {
        b.iter(|| StepTiming::measure(black_box(1_000_000_000), black_box(3)))
    });
}

fn bench_tracker_run(c: &mut Criterion) {
    c.bench_function("tracker_1000_updates", |b| {
        b.iter(|| {
            let clock = ManualClock::new();
            let mut tracker = TrackerBuilder::new(1000)
                .clock(clock.clone())
                .build(io::sink())
                .expect("Failed to create tracker");
            for _ in 0..1000 {
                clock.advance_millis(1);
                tracker.update(1).expect("Failed to update tracker");
            }
            black_box(tracker.is_closed())
        })
    });
}

criterion_group!(
    benches,
    bench_render_bar,
    bench_render_full,
    bench_measure,
    bench_tracker_run
);
criterion_main!(benches);
