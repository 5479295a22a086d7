//! Comparison and missing-value helpers.
//!
//! Online and batch outputs are compared under a tolerance, with NaN treated
//! as equal to NaN: a missing value on both sides is agreement, a missing
//! value on one side only is a mismatch.
//!
//! # Example
//!
//! ```
//! use fast_window::utils::{first_mismatch, missing_prefix, EPSILON};
//!
//! let batch = [f64::NAN, 1.5, 2.0];
//! let online = [f64::NAN, 1.5, 2.0 + 1e-12];
//! assert_eq!(first_mismatch(&batch, &online, EPSILON), None);
//! assert_eq!(missing_prefix(&batch), 1);
//! ```

use crate::traits::SeriesElement;

/// Absolute tolerance for comparisons of short computations.
pub const EPSILON: f64 = 1e-10;

/// Relative tolerance for comparisons after long streams of updates.
pub const LOOSE_EPSILON: f64 = 1e-8;

/// Returns true if `a` and `b` differ by less than `tolerance`, or are both NaN.
///
/// ```
/// use fast_window::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => true,
        (false, false) => (a - b).abs() < tolerance,
        _ => false,
    }
}

/// Returns true if the relative difference of `a` and `b` is below
/// `rel_tolerance`, or both are NaN.
///
/// Falls back to an absolute comparison against `rel_tolerance` when both
/// values are smaller than one in magnitude, so values near zero compare sanely.
///
/// ```
/// use fast_window::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
/// assert!(approx_eq_relative(0.0, 1e-12, 1e-9));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    let scale = a.abs().max(b.abs()).max(T::one());
    approx_eq(a, b, rel_tolerance * scale)
}

/// Returns the first index where `a` and `b` disagree under [`approx_eq_relative`].
///
/// A length difference counts as a mismatch at the shorter length.
#[must_use]
pub fn first_mismatch<T: SeriesElement>(a: &[T], b: &[T], rel_tolerance: T) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(&x, &y)| !approx_eq_relative(x, y, rel_tolerance))
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}

/// Counts the leading missing values of a statistic's output.
///
/// For a rolling statistic with `min_samples = s` and no missing inputs this
/// is `min(s - 1, len)`.
#[inline]
#[must_use]
pub fn missing_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}
