//! Shared test utilities for fast-window tests.

use fast_window::traits::OnlineTransform;

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Relative tolerance for online-versus-batch comparisons.
#[allow(dead_code)]
pub const REL_TOLERANCE: f64 = 1e-8;

/// Approximate equality; two NaN values are considered equal.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Relative equality scaled by `max(|a|, |b|, 1)`; two NaN values are equal.
#[allow(dead_code)]
pub fn rel_eq(a: f64, b: f64, rel: f64) -> bool {
    approx_eq(a, b, rel * a.abs().max(b.abs()).max(1.0))
}

/// Deterministic series with trend, a period-7 season and pseudo-random noise.
#[allow(dead_code)]
pub fn sample_series(len: usize) -> Vec<f64> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|i| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let noise = ((state >> 11) as f64 / (1u64 << 53) as f64) - 0.5;
            let season = [0.0, 3.0, 5.0, 4.0, 1.0, -2.0, -4.0][i % 7];
            100.0 + 0.1 * i as f64 + season + 10.0 * noise
        })
        .collect()
}

/// Fits on `data[..split]`, updates with the rest, and returns the full output.
#[allow(dead_code)]
pub fn replay<S: OnlineTransform<f64> + ?Sized>(stat: &mut S, data: &[f64], split: usize) -> Vec<f64> {
    let mut output = stat.fit_transform(&data[..split]).unwrap();
    for &value in &data[split..] {
        output.push(stat.update(value).unwrap());
    }
    output
}

/// Asserts two series agree position by position under [`rel_eq`].
#[allow(dead_code)]
pub fn assert_series_eq(actual: &[f64], expected: &[f64], rel: f64, context: &str) {
    assert_eq!(actual.len(), expected.len(), "{context}: length mismatch");
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(rel_eq(a, e, rel), "{context}: index {i}: got {a}, expected {e}");
    }
}

/// Verify that the first `n` values are NaN and the rest are not.
#[allow(dead_code)]
pub fn verify_nan_prefix(data: &[f64], expected_nan_count: usize) -> bool {
    data.iter()
        .enumerate()
        .all(|(i, v)| v.is_nan() == (i < expected_nan_count))
}
