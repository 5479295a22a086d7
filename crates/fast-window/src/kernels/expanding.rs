//! Expanding (cumulative) reductions.
//!
//! An expanding window covers the series from its first element up to the
//! current position. Unlike the rolling kernels these are defined from index
//! 0 onward, except [`expanding_std`] which needs two observations.
//!
//! # Example
//!
//! ```
//! use fast_window::kernels::expanding::{expanding_max, expanding_mean};
//!
//! let data = vec![2.0_f64, 4.0, 3.0];
//! assert_eq!(expanding_mean(&data).unwrap(), vec![2.0, 3.0, 3.0]);
//! assert_eq!(expanding_max(&data), vec![2.0, 4.0, 4.0]);
//! ```

use super::rolling::{rolling_std, RollingStdOutput};
use super::rolling_extrema::Extremum;
use crate::error::Result;
use crate::traits::SeriesElement;

/// Folds `value` into a running extremum.
///
/// A NaN `current` (nothing seen yet) adopts `value`; a NaN `value` is ignored.
#[inline]
pub(crate) fn extend_extremum<T: SeriesElement>(current: T, value: T, kind: Extremum) -> T {
    if current.is_nan() {
        return value;
    }
    let replaces = match kind {
        Extremum::Max => value > current,
        Extremum::Min => value < current,
    };
    if replaces {
        value
    } else {
        current
    }
}

/// Computes the expanding mean: `out[i] = mean(data[..=i])`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if a count cannot be represented in `T`.
pub fn expanding_mean<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    let mut sum = T::zero();
    data.iter()
        .enumerate()
        .map(|(i, &value)| {
            sum = sum + value;
            Ok(sum / T::from_usize(i + 1)?)
        })
        .collect()
}

fn expanding_extremum<T: SeriesElement>(data: &[T], kind: Extremum) -> Vec<T> {
    let mut current = T::nan();
    data.iter()
        .map(|&value| {
            current = extend_extremum(current, value, kind);
            current
        })
        .collect()
}

/// Computes the expanding maximum: `out[i] = max(data[..=i])`.
#[must_use]
pub fn expanding_max<T: SeriesElement>(data: &[T]) -> Vec<T> {
    expanding_extremum(data, Extremum::Max)
}

/// Computes the expanding minimum: `out[i] = min(data[..=i])`.
#[must_use]
pub fn expanding_min<T: SeriesElement>(data: &[T]) -> Vec<T> {
    expanding_extremum(data, Extremum::Min)
}

/// Computes the expanding sample standard deviation with its terminal state.
///
/// Equivalent to [`rolling_std`] with a window spanning the whole series and
/// `min_samples = 2`; the first position is always NaN.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if a count cannot be represented in `T`.
///
/// # Example
///
/// ```
/// use fast_window::kernels::expanding::expanding_std;
///
/// let out = expanding_std(&[1.0_f64, 2.0, 3.0]).unwrap();
/// assert!(out.values[0].is_nan());
/// assert!((out.values[2] - 1.0).abs() < 1e-10);
/// ```
pub fn expanding_std<T: SeriesElement>(data: &[T]) -> Result<RollingStdOutput<T>> {
    rolling_std(data, data.len().max(1), Some(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::approx_eq;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_expanding_mean() {
        let result = expanding_mean(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        assert!(approx_eq(result[0], 1.0, EPSILON));
        assert!(approx_eq(result[1], 1.5, EPSILON));
        assert!(approx_eq(result[3], 2.5, EPSILON));
    }

    #[test]
    fn test_expanding_mean_empty() {
        assert!(expanding_mean::<f64>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_expanding_max_min() {
        let data = [3.0_f64, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(expanding_max(&data), vec![3.0, 3.0, 4.0, 4.0, 5.0]);
        assert_eq!(expanding_min(&data), vec![3.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_expanding_max_ignores_nan() {
        let result = expanding_max(&[f64::NAN, 2.0, f64::NAN, 1.0]);
        assert!(result[0].is_nan());
        assert!(approx_eq(result[1], 2.0, EPSILON));
        assert!(approx_eq(result[2], 2.0, EPSILON));
        assert!(approx_eq(result[3], 2.0, EPSILON));
    }

    #[test]
    fn test_expanding_std() {
        let out = expanding_std(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!(out.values[0].is_nan());
        assert!(approx_eq(out.values[1], 2.0_f64.sqrt(), EPSILON));
        assert!(approx_eq(out.values[7], (32.0_f64 / 7.0).sqrt(), EPSILON));
        assert_eq!(out.terminal.unwrap().count(), 8);
    }

    #[test]
    fn test_expanding_std_single_and_empty() {
        let single = expanding_std(&[3.0_f64]).unwrap();
        assert!(single.values[0].is_nan());
        assert_eq!(single.terminal.unwrap().count(), 1);

        let empty = expanding_std::<f64>(&[]).unwrap();
        assert!(empty.values.is_empty());
        assert!(empty.terminal.is_none());
    }
}
