//! Online/batch equivalence tests.
//!
//! For every statistic and every split point `m`, fitting on `x[..m]` and
//! updating with `x[m..]` one value at a time must reproduce the batch
//! reduction over the whole of `x`.

#![allow(clippy::cast_precision_loss)]

mod common;

use common::{assert_series_eq, replay, sample_series, REL_TOLERANCE};
use fast_window::kernels::{
    ewm_mean, expanding_max, expanding_mean, expanding_min, expanding_std, rolling_max,
    rolling_mean, rolling_min, rolling_std, shift_array,
};
use fast_window::online::{
    EwmMean, ExpandingMax, ExpandingMean, ExpandingMin, ExpandingStd, RollingMax, RollingMean,
    RollingMin, RollingStd, Shift,
};
use fast_window::traits::OnlineTransform;

const LEN: usize = 40;

fn check_all_splits<S, F>(make: F, expected: &[f64], context: &str)
where
    S: OnlineTransform<f64>,
    F: Fn() -> S,
{
    let data = sample_series(LEN);
    for split in 0..=LEN {
        let mut stat = make();
        let output = replay(&mut stat, &data, split);
        assert_series_eq(&output, expected, REL_TOLERANCE, &format!("{context}, split {split}"));
    }
}

// ==================== Rolling ====================

#[test]
fn equivalence_rolling_mean() {
    let data = sample_series(LEN);
    for (window, min_samples) in [(1, None), (3, None), (5, Some(2)), (7, Some(7)), (50, Some(4))] {
        let expected = rolling_mean(&data, window, min_samples).unwrap();
        check_all_splits(
            || RollingMean::new(window, min_samples).unwrap(),
            &expected,
            &format!("rolling_mean({window}, {min_samples:?})"),
        );
    }
}

#[test]
fn equivalence_rolling_max_min() {
    let data = sample_series(LEN);
    for (window, min_samples) in [(1, None), (4, None), (6, Some(3))] {
        let expected_max = rolling_max(&data, window, min_samples).unwrap();
        let expected_min = rolling_min(&data, window, min_samples).unwrap();
        check_all_splits(
            || RollingMax::new(window, min_samples).unwrap(),
            &expected_max,
            &format!("rolling_max({window})"),
        );
        check_all_splits(
            || RollingMin::new(window, min_samples).unwrap(),
            &expected_min,
            &format!("rolling_min({window})"),
        );
    }
}

#[test]
fn equivalence_rolling_std() {
    let data = sample_series(LEN);
    for (window, min_samples) in [(2, None), (5, None), (6, Some(2)), (8, Some(5)), (30, None)] {
        let expected = rolling_std(&data, window, min_samples).unwrap().values;
        check_all_splits(
            || RollingStd::new(window, min_samples).unwrap(),
            &expected,
            &format!("rolling_std({window}, {min_samples:?})"),
        );
    }
}

// ==================== Expanding ====================

#[test]
fn equivalence_expanding() {
    let data = sample_series(LEN);
    check_all_splits(ExpandingMean::new, &expanding_mean(&data).unwrap(), "expanding_mean");
    check_all_splits(ExpandingMax::new, &expanding_max(&data), "expanding_max");
    check_all_splits(ExpandingMin::new, &expanding_min(&data), "expanding_min");
    check_all_splits(
        ExpandingStd::new,
        &expanding_std(&data).unwrap().values,
        "expanding_std",
    );
}

// ==================== EWM and Shift ====================

#[test]
fn equivalence_ewm_mean() {
    let data = sample_series(LEN);
    for alpha in [0.05, 0.3, 0.5, 1.0] {
        let expected = ewm_mean(&data, alpha).unwrap();
        check_all_splits(
            || EwmMean::new(alpha).unwrap(),
            &expected,
            &format!("ewm_mean({alpha})"),
        );
    }
}

#[test]
fn equivalence_shift() {
    let data = sample_series(LEN);
    for offset in [1, 2, 7, 45] {
        let expected = shift_array(&data, offset).unwrap();
        check_all_splits(
            || Shift::new(offset).unwrap(),
            &expected,
            &format!("shift({offset})"),
        );
    }
}

// ==================== Boxed ====================

#[test]
fn equivalence_through_trait_objects() {
    let data = sample_series(LEN);
    let mut stats: Vec<Box<dyn OnlineTransform<f64>>> = vec![
        Box::new(RollingMean::new(4, None).unwrap()),
        Box::new(RollingStd::new(4, Some(2)).unwrap()),
        Box::new(ExpandingMax::new()),
        Box::new(Shift::new(3).unwrap()),
    ];
    let expected = [
        rolling_mean(&data, 4, None).unwrap(),
        rolling_std(&data, 4, Some(2)).unwrap().values,
        expanding_max(&data),
        shift_array(&data, 3).unwrap(),
    ];
    for (stat, expected) in stats.iter_mut().zip(&expected) {
        let output = replay(stat.as_mut(), &data, 17);
        assert_series_eq(&output, expected, REL_TOLERANCE, stat.name());
    }
}

#[test]
fn equivalence_update_many_matches_update() {
    let data = sample_series(LEN);
    let mut one_by_one = RollingStd::new(5, None).unwrap();
    let mut batched = RollingStd::new(5, None).unwrap();
    one_by_one.fit_transform(&data[..10]).unwrap();
    batched.fit_transform(&data[..10]).unwrap();

    let expected: Vec<f64> = data[10..]
        .iter()
        .map(|&v| one_by_one.update(v).unwrap())
        .collect();
    let got = batched.update_many(&data[10..]).unwrap();
    assert_eq!(got, expected);
}
