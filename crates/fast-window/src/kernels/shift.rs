//! Lag operator over a whole series.

use crate::error::Result;
use crate::traits::{validate_offset, SeriesElement};

/// Shifts `data` forward by `offset`: `out[i] = data[i - offset]`, NaN for `i < offset`.
///
/// # Errors
///
/// Returns `Error::InvalidOffset` if `offset` is zero.
///
/// # Example
///
/// ```
/// use fast_window::kernels::shift::shift_array;
///
/// let result = shift_array(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 2).unwrap();
/// assert!(result[0].is_nan() && result[1].is_nan());
/// assert_eq!(&result[2..], &[1.0, 2.0, 3.0]);
/// ```
pub fn shift_array<T: SeriesElement>(data: &[T], offset: usize) -> Result<Vec<T>> {
    validate_offset(offset)?;
    let lead = offset.min(data.len());
    let mut result = vec![T::nan(); lead];
    result.extend_from_slice(&data[..data.len() - lead]);
    Ok(result)
}
