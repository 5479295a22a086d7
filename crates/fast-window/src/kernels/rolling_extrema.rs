//! Rolling extrema using a monotonic deque for O(n) rolling max/min.
//!
//! # Algorithm
//!
//! The monotonic deque keeps `(index, value)` pairs such that:
//! - For rolling max: values are in decreasing order
//! - For rolling min: values are in increasing order
//!
//! A new value first pops every entry it dominates from the back, then entries
//! older than the window are popped from the front. The front is always the
//! extremum of the current window. Each element is pushed and popped at most
//! once, giving O(1) amortized time per element instead of O(k) for a rescan.
//!
//! The deque stores values alongside indices so the same structure serves the
//! batch kernels here and the online [`RollingMax`](crate::online::RollingMax) /
//! [`RollingMin`](crate::online::RollingMin), which have no backing array.
//!
//! NaN values are never selected as the extremum.
//!
//! # Example
//!
//! ```
//! use fast_window::kernels::rolling_extrema::{rolling_max, rolling_min};
//!
//! let data = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
//!
//! let max_result = rolling_max(&data, 3, None).unwrap();
//! assert!((max_result[2] - 4.0).abs() < 1e-10); // max of [3, 1, 4]
//! assert!((max_result[5] - 9.0).abs() < 1e-10); // max of [1, 5, 9]
//!
//! let min_result = rolling_min(&data, 3, Some(1)).unwrap();
//! assert!((min_result[0] - 3.0).abs() < 1e-10); // min of [3]
//! assert!((min_result[5] - 1.0).abs() < 1e-10); // min of [1, 5, 9]
//! ```

use std::collections::VecDeque;

use crate::error::Result;
use crate::traits::{resolve_min_samples, validate_window_size, SeriesElement};

/// Which extremum a [`MonotonicDeque`] tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Largest value in the window.
    Max,
    /// Smallest value in the window.
    Min,
}

impl Extremum {
    /// Returns true if `candidate` makes `incumbent` redundant.
    #[inline]
    fn dominates<T: SeriesElement>(self, candidate: T, incumbent: T) -> bool {
        match self {
            Self::Max => candidate >= incumbent,
            Self::Min => candidate <= incumbent,
        }
    }
}

/// A monotonic deque for efficiently tracking rolling extrema.
#[derive(Debug, Clone)]
pub struct MonotonicDeque<T> {
    /// `(index, value)` pairs, monotone in value
    deque: VecDeque<(usize, T)>,
    window_size: usize,
    kind: Extremum,
}

impl<T: SeriesElement> MonotonicDeque<T> {
    /// Creates a new monotonic deque for a window of `window_size` values.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindowSize` if `window_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use fast_window::kernels::rolling_extrema::{Extremum, MonotonicDeque};
    ///
    /// let mut deque: MonotonicDeque<f64> = MonotonicDeque::new(2, Extremum::Max).unwrap();
    /// deque.push(0, 5.0);
    /// deque.push(1, 3.0);
    /// assert_eq!(deque.extremum(), 5.0);
    /// deque.push(2, 1.0);
    /// assert_eq!(deque.extremum(), 3.0);
    /// ```
    pub fn new(window_size: usize, kind: Extremum) -> Result<Self> {
        validate_window_size(window_size)?;
        Ok(Self {
            deque: VecDeque::with_capacity(window_size),
            window_size,
            kind,
        })
    }

    /// Returns true if the deque is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Returns the number of candidates currently held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Pushes the value observed at stream position `index`.
    ///
    /// Indices must be strictly increasing across calls.
    #[inline]
    pub fn push(&mut self, index: usize, value: T) {
        if !value.is_nan() {
            while let Some(&(_, back)) = self.deque.back() {
                if self.kind.dominates(value, back) {
                    self.deque.pop_back();
                } else {
                    break;
                }
            }
            self.deque.push_back((index, value));
        }
        self.remove_expired(index);
    }

    /// Removes entries that are outside the window ending at `current_index`.
    #[inline]
    fn remove_expired(&mut self, current_index: usize) {
        if current_index + 1 < self.window_size {
            return;
        }
        let window_start = current_index + 1 - self.window_size;
        while let Some(&(front_idx, _)) = self.deque.front() {
            if front_idx < window_start {
                self.deque.pop_front();
            } else {
                break;
            }
        }
    }

    /// Returns the extremum of the current window, or NaN if it holds no
    /// non-NaN value.
    #[inline]
    #[must_use]
    pub fn extremum(&self) -> T {
        self.deque.front().map_or_else(T::nan, |&(_, value)| value)
    }
}

/// Computes a rolling extremum over a trailing window.
///
/// `min_samples` defaults to `window_size` and is clipped to it.
///
/// # Errors
///
/// Returns `Error::InvalidWindowSize` if `window_size` is zero and
/// `Error::InvalidMinSamples` if `min_samples` is `Some(0)`.
pub fn rolling_extrema<T: SeriesElement>(
    data: &[T],
    window_size: usize,
    min_samples: Option<usize>,
    kind: Extremum,
) -> Result<Vec<T>> {
    let min_samples = resolve_min_samples(window_size, min_samples)?;
    let mut result = vec![T::nan(); data.len()];
    let mut deque = MonotonicDeque::new(window_size, kind)?;

    for (i, &value) in data.iter().enumerate() {
        deque.push(i, value);
        if (i + 1).min(window_size) >= min_samples {
            result[i] = deque.extremum();
        }
    }

    Ok(result)
}

/// Computes the rolling maximum using a monotonic deque.
///
/// # Errors
///
/// See [`rolling_extrema`].
///
/// # Example
///
/// ```
/// use fast_window::kernels::rolling_extrema::rolling_max;
///
/// let result = rolling_max(&[1.0_f64, 3.0, 2.0, 5.0, 4.0], 3, None).unwrap();
/// assert!(result[0].is_nan());
/// assert!(result[1].is_nan());
/// assert!((result[2] - 3.0).abs() < 1e-10);
/// assert!((result[3] - 5.0).abs() < 1e-10);
/// ```
pub fn rolling_max<T: SeriesElement>(
    data: &[T],
    window_size: usize,
    min_samples: Option<usize>,
) -> Result<Vec<T>> {
    rolling_extrema(data, window_size, min_samples, Extremum::Max)
}

/// Computes the rolling minimum using a monotonic deque.
///
/// # Errors
///
/// See [`rolling_extrema`].
pub fn rolling_min<T: SeriesElement>(
    data: &[T],
    window_size: usize,
    min_samples: Option<usize>,
) -> Result<Vec<T>> {
    rolling_extrema(data, window_size, min_samples, Extremum::Min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::approx_eq;

    const EPSILON: f64 = 1e-10;

    fn naive(data: &[f64], window_size: usize, min_samples: usize, kind: Extremum) -> Vec<f64> {
        (0..data.len())
            .map(|i| {
                let start = (i + 1).saturating_sub(window_size);
                let window = &data[start..=i];
                if window.len() < min_samples {
                    return f64::NAN;
                }
                let iter = window.iter().copied().filter(|v| !v.is_nan());
                match kind {
                    Extremum::Max => iter.fold(f64::NAN, f64::max),
                    Extremum::Min => iter.fold(f64::NAN, f64::min),
                }
            })
            .collect()
    }

    #[test]
    fn test_rolling_max_matches_naive() {
        let data = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0, 8.0];
        for window in 1..=6 {
            for min_samples in 1..=window {
                let fast = rolling_max(&data, window, Some(min_samples)).unwrap();
                let slow = naive(&data, window, min_samples, Extremum::Max);
                for (a, b) in fast.iter().zip(&slow) {
                    assert!(approx_eq(*a, *b, EPSILON));
                }
            }
        }
    }

    #[test]
    fn test_rolling_min_matches_naive() {
        let data = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0, 8.0];
        for window in 1..=6 {
            let fast = rolling_min(&data, window, None).unwrap();
            let slow = naive(&data, window, window, Extremum::Min);
            for (a, b) in fast.iter().zip(&slow) {
                assert!(approx_eq(*a, *b, EPSILON));
            }
        }
    }

    #[test]
    fn test_rolling_max_monotonic_decreasing() {
        let data = vec![10.0_f64, 9.0, 8.0, 7.0, 6.0];
        let result = rolling_max(&data, 2, None).unwrap();
        assert!(approx_eq(result[1], 10.0, EPSILON));
        assert!(approx_eq(result[2], 9.0, EPSILON));
        assert!(approx_eq(result[4], 7.0, EPSILON));
    }

    #[test]
    fn test_rolling_max_ties() {
        let data = vec![2.0_f64, 2.0, 2.0, 1.0];
        let result = rolling_max(&data, 2, None).unwrap();
        assert!(approx_eq(result[3], 2.0, EPSILON));
    }

    #[test]
    fn test_rolling_max_skips_nan() {
        let data = vec![1.0_f64, f64::NAN, 0.5];
        let result = rolling_max(&data, 2, None).unwrap();
        assert!(approx_eq(result[1], 1.0, EPSILON));
        assert!(approx_eq(result[2], 0.5, EPSILON));
    }

    #[test]
    fn test_deque_expiry() {
        let mut deque = MonotonicDeque::new(3, Extremum::Max).unwrap();
        deque.push(0, 9.0_f64);
        deque.push(1, 1.0);
        deque.push(2, 2.0);
        assert_eq!(deque.extremum(), 9.0);
        deque.push(3, 0.0);
        assert_eq!(deque.extremum(), 2.0);
        assert!(deque.len() <= 3);
    }

    #[test]
    fn test_deque_empty_is_nan() {
        let deque: MonotonicDeque<f64> = MonotonicDeque::new(3, Extremum::Min).unwrap();
        assert!(deque.is_empty());
        assert!(deque.extremum().is_nan());
    }

    #[test]
    fn test_deque_zero_window() {
        assert!(MonotonicDeque::<f64>::new(0, Extremum::Max).is_err());
    }
}
