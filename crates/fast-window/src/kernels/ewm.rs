//! Exponentially weighted moving average.
//!
//! # Formula
//!
//! ```text
//! out[0] = x[0]
//! out[i] = alpha * x[i] + (1 - alpha) * out[i - 1]
//! ```
//!
//! Defined from the first observation onward; no lookback period. Only the
//! first observation seeds the average, so a NaN anywhere makes every later
//! value NaN.

use crate::error::Result;
use crate::traits::{validate_alpha, SeriesElement};

/// Computes the exponentially weighted mean with smoothing factor `alpha`.
///
/// # Errors
///
/// Returns `Error::InvalidAlpha` unless `0 < alpha <= 1`, or
/// `Error::NumericConversion` if `alpha` cannot be represented in `T`.
///
/// # Example
///
/// ```
/// use fast_window::kernels::ewm::ewm_mean;
///
/// let result = ewm_mean(&[2.0_f64, 4.0], 0.5).unwrap();
/// assert_eq!(result, vec![2.0, 3.0]);
/// ```
pub fn ewm_mean<T: SeriesElement>(data: &[T], alpha: f64) -> Result<Vec<T>> {
    validate_alpha(alpha)?;
    let alpha = T::from_f64(alpha)?;
    let mut result = Vec::with_capacity(data.len());
    let mut smoothed = None;

    for &value in data {
        let next = ewm_step(smoothed, value, alpha);
        smoothed = Some(next);
        result.push(next);
    }

    Ok(result)
}

/// One step of the EWM recurrence; with no history (`None`) the value is adopted.
///
/// A NaN in the history propagates to every later step.
#[inline]
pub(crate) fn ewm_step<T: SeriesElement>(smoothed: Option<T>, value: T, alpha: T) -> T {
    match smoothed {
        None => value,
        Some(prev) => alpha * value + (T::one() - alpha) * prev,
    }
}
