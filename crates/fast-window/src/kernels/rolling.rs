//! Rolling mean and rolling standard deviation over a trailing window.
//!
//! Both kernels share the missing-value policy of every bounded statistic in
//! this crate: position `i` is NaN while the trailing window
//! `data[i + 1 - min(i + 1, window_size)..=i]` holds fewer than `min_samples`
//! values, and a real value from there on.
//!
//! [`rolling_std`] additionally exposes the terminal Welford state so the
//! online [`RollingStd`](crate::online::RollingStd) can continue from where the
//! batch pass stopped without a second pass over the data.
//!
//! # Example
//!
//! ```
//! use fast_window::kernels::rolling::{rolling_mean, rolling_std};
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0];
//!
//! let mean = rolling_mean(&data, 3, Some(2)).unwrap();
//! assert!(mean[0].is_nan());
//! assert!((mean[1] - 1.5).abs() < 1e-10);
//! assert!((mean[3] - 3.0).abs() < 1e-10);
//!
//! let std = rolling_std(&data, 3, None).unwrap();
//! assert!(std.values[1].is_nan());
//! assert!((std.values[2] - 1.0).abs() < 1e-10);
//! assert_eq!(std.terminal.unwrap().count(), 3);
//! ```

use super::running_stat::RunningStat;
use crate::error::Result;
use crate::traits::{resolve_min_samples, SeriesElement};

/// Computes the rolling mean over a trailing window of `window_size` values.
///
/// `min_samples` defaults to `window_size` and is clipped to it.
///
/// # Errors
///
/// Returns `Error::InvalidWindowSize` if `window_size` is zero and
/// `Error::InvalidMinSamples` if `min_samples` is `Some(0)`.
pub fn rolling_mean<T: SeriesElement>(
    data: &[T],
    window_size: usize,
    min_samples: Option<usize>,
) -> Result<Vec<T>> {
    let min_samples = resolve_min_samples(window_size, min_samples)?;
    let mut result = vec![T::nan(); data.len()];
    let mut sum = T::zero();

    for (i, &value) in data.iter().enumerate() {
        sum = sum + value;
        if i >= window_size {
            sum = sum - data[i - window_size];
        }
        let count = (i + 1).min(window_size);
        if !sum.is_finite() {
            // NaN/inf poison a running sum after they leave the window
            sum = window_sum(data[i + 1 - count..=i].iter().copied());
        }
        if count >= min_samples {
            result[i] = sum / T::from_usize(count)?;
        }
    }

    Ok(result)
}

/// Sums a window from scratch.
#[inline]
pub(crate) fn window_sum<T: SeriesElement>(values: impl IntoIterator<Item = T>) -> T {
    values.into_iter().fold(T::zero(), |acc, v| acc + v)
}

/// Output of [`rolling_std`]: the batch values plus the terminal accumulator.
#[derive(Debug, Clone)]
pub struct RollingStdOutput<T> {
    /// Rolling sample standard deviation, NaN below `min_samples`.
    pub values: Vec<T>,
    /// Welford state over the last `min(window_size, len)` values.
    ///
    /// `None` when the series is shorter than `min_samples`: no value was
    /// emitted, so no terminal state is reported.
    pub terminal: Option<RunningStat<T>>,
}

/// Computes the rolling sample standard deviation using Welford's algorithm.
///
/// While the window grows each value is folded in with the standard Welford
/// update; once the window is full each step evicts the oldest value and adds
/// the newest in one combined O(1) update. A missing (NaN) value makes every
/// window holding it NaN; the accumulator is rebuilt from the window while its
/// state is non-finite, so values resume once the NaN has been evicted.
///
/// `min_samples` defaults to `window_size` and is clipped to it. Windows of
/// fewer than two values have no sample standard deviation and yield NaN.
///
/// # Errors
///
/// Returns `Error::InvalidWindowSize` if `window_size` is zero and
/// `Error::InvalidMinSamples` if `min_samples` is `Some(0)`.
///
/// # Example
///
/// ```
/// use fast_window::kernels::rolling::rolling_std;
///
/// let out = rolling_std(&[1.0_f64, 2.0], 5, None).unwrap();
/// assert!(out.values.iter().all(|v| v.is_nan()));
/// assert!(out.terminal.is_none());
/// ```
pub fn rolling_std<T: SeriesElement>(
    data: &[T],
    window_size: usize,
    min_samples: Option<usize>,
) -> Result<RollingStdOutput<T>> {
    let min_samples = resolve_min_samples(window_size, min_samples)?;
    let mut values = vec![T::nan(); data.len()];

    if data.len() < min_samples {
        return Ok(RollingStdOutput {
            values,
            terminal: None,
        });
    }

    let mut stat = RunningStat::new();
    for (i, &value) in data.iter().enumerate() {
        if i < window_size {
            stat.push(value)?;
        } else {
            stat.replace(data[i - window_size], value)?;
            if !stat.is_finite() {
                stat = RunningStat::from_slice(&data[i + 1 - window_size..=i])?;
            }
        }
        if stat.count() >= min_samples {
            values[i] = stat.sample_stddev();
        }
    }

    Ok(RollingStdOutput {
        values,
        terminal: Some(stat),
    })
}
