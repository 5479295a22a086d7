//! Per-update cost of each online statistic.
//!
//! Run with: `cargo bench -p fast-window`
//!
//! Each benchmark fits a statistic on a fixed history and then measures
//! streaming a block of new observations through `update`. Rolling
//! statistics are measured across window sizes to confirm the update cost
//! does not grow with the window.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fast_window::kernels::rolling_std;
use fast_window::online::{
    EwmMean, ExpandingMean, ExpandingStd, RollingMax, RollingMean, RollingStd,
    SeasonalRollingMean, Shift,
};
use fast_window::traits::OnlineTransform;

const HISTORY: usize = 10_000;
const STREAM: usize = 10_000;

/// Generate a deterministic series for benchmarks.
fn generate_series(size: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(size);
    let mut level = 100.0;
    for i in 0..size {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f64;
        level += (t * 0.1).sin() * 2.0 + (t * 0.03).cos() * 1.5;
        data.push(level + (t * 0.7).sin());
    }
    data
}

fn stream<S: OnlineTransform<f64>>(stat: &mut S, values: &[f64]) -> f64 {
    let mut acc = 0.0;
    for &value in values {
        acc += stat.update(black_box(value)).unwrap_or(0.0);
    }
    acc
}

fn bench_rolling(c: &mut Criterion) {
    let data = generate_series(HISTORY + STREAM);
    let (history, live) = data.split_at(HISTORY);

    let mut group = c.benchmark_group("rolling_update");
    group.throughput(Throughput::Elements(STREAM as u64));

    for window in [8, 64, 512] {
        group.bench_with_input(BenchmarkId::new("mean", window), &window, |b, &window| {
            let mut stat = RollingMean::new(window, None).unwrap();
            stat.fit_transform(history).unwrap();
            b.iter(|| stream(&mut stat, live));
        });
        group.bench_with_input(BenchmarkId::new("std", window), &window, |b, &window| {
            let mut stat = RollingStd::new(window, None).unwrap();
            stat.fit_transform(history).unwrap();
            b.iter(|| stream(&mut stat, live));
        });
        group.bench_with_input(BenchmarkId::new("max", window), &window, |b, &window| {
            let mut stat = RollingMax::new(window, None).unwrap();
            stat.fit_transform(history).unwrap();
            b.iter(|| stream(&mut stat, live));
        });
    }
    group.finish();
}

fn bench_unbounded(c: &mut Criterion) {
    let data = generate_series(HISTORY + STREAM);
    let (history, live) = data.split_at(HISTORY);

    let mut group = c.benchmark_group("unbounded_update");
    group.throughput(Throughput::Elements(STREAM as u64));

    group.bench_function("expanding_mean", |b| {
        let mut stat = ExpandingMean::new();
        stat.fit_transform(history).unwrap();
        b.iter(|| stream(&mut stat, live));
    });
    group.bench_function("expanding_std", |b| {
        let mut stat = ExpandingStd::new();
        stat.fit_transform(history).unwrap();
        b.iter(|| stream(&mut stat, live));
    });
    group.bench_function("ewm_mean", |b| {
        let mut stat = EwmMean::new(0.1).unwrap();
        stat.fit_transform(history).unwrap();
        b.iter(|| stream(&mut stat, live));
    });
    group.bench_function("shift", |b| {
        let mut stat = Shift::new(24).unwrap();
        stat.fit_transform(history).unwrap();
        b.iter(|| stream(&mut stat, live));
    });
    group.finish();
}

fn bench_seasonal(c: &mut Criterion) {
    let data = generate_series(HISTORY + STREAM);
    let (history, live) = data.split_at(HISTORY);

    let mut group = c.benchmark_group("seasonal_update");
    group.throughput(Throughput::Elements(STREAM as u64));

    for season_length in [7, 24, 168] {
        group.bench_with_input(
            BenchmarkId::new("rolling_mean", season_length),
            &season_length,
            |b, &season_length| {
                let mut stat = SeasonalRollingMean::new(season_length, 4, None).unwrap();
                stat.fit_transform(history).unwrap();
                b.iter(|| stream(&mut stat, live));
            },
        );
    }
    group.finish();
}

/// One online update against recomputing the batch kernel on the extended series.
fn bench_update_vs_recompute(c: &mut Criterion) {
    let data = generate_series(HISTORY + 1);
    let (history, next) = data.split_at(HISTORY);

    let mut group = c.benchmark_group("std_next_value");
    group.bench_function("online_update", |b| {
        let mut stat = RollingStd::new(64, None).unwrap();
        stat.fit_transform(history).unwrap();
        b.iter(|| stat.update(black_box(next[0])).unwrap());
    });
    group.bench_function("batch_recompute", |b| {
        b.iter(|| rolling_std(black_box(&data), 64, None).unwrap().values[HISTORY]);
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_rolling,
    bench_unbounded,
    bench_seasonal,
    bench_update_vs_recompute
);
criterion_main!(benches);
