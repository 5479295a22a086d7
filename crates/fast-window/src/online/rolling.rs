//! Bounded rolling mean, max and min.
//!
//! Each statistic keeps a [`Window`] of the last `window_size` observations,
//! seeded at fit time from the tail of the fitted series. Every update pushes
//! the new observation (evicting the oldest once full) and reports the
//! statistic over the window, or NaN while the window holds fewer than
//! `min_samples` values.
//!
//! - [`RollingMean`] keeps a running window sum. The sum is recomputed from
//!   the window once per full rotation of the ring buffer, and whenever it
//!   stops being finite, which bounds floating-point drift at O(1) amortized
//!   cost.
//! - [`RollingMax`] / [`RollingMin`] keep a [`MonotonicDeque`] beside the
//!   window, so the extremum is exact and each update is O(1) amortized.

use crate::error::{Error, Result};
use crate::kernels::rolling::{rolling_mean, window_sum};
use crate::kernels::rolling_extrema::{rolling_extrema, Extremum, MonotonicDeque};
use crate::traits::{resolve_min_samples, OnlineTransform, SeriesElement};
use crate::window::Window;

#[derive(Debug, Clone)]
struct MeanState<T> {
    window: Window<T>,
    sum: T,
    evictions: usize,
}

/// Online rolling mean over the last `window_size` observations.
///
/// # Example
///
/// ```
/// use fast_window::online::RollingMean;
/// use fast_window::traits::OnlineTransform;
///
/// let mut mean = RollingMean::new(3, Some(2)).unwrap();
/// let fitted = mean.fit_transform(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert!(fitted[0].is_nan());
/// assert_eq!(&fitted[1..], &[1.5, 2.0, 3.0]);
///
/// // mean of [3, 4, 10]
/// assert!((mean.update(10.0).unwrap() - 17.0 / 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct RollingMean<T> {
    window_size: usize,
    min_samples: usize,
    state: Option<MeanState<T>>,
}

impl<T: SeriesElement> RollingMean<T> {
    /// Creates an unfitted rolling mean.
    ///
    /// `min_samples` defaults to `window_size` and is clipped to it.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindowSize` if `window_size` is zero and
    /// `Error::InvalidMinSamples` if `min_samples` is `Some(0)`.
    pub fn new(window_size: usize, min_samples: Option<usize>) -> Result<Self> {
        Ok(Self {
            window_size,
            min_samples: resolve_min_samples(window_size, min_samples)?,
            state: None,
        })
    }

    /// Returns the window size.
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the effective minimum number of observations.
    #[must_use]
    pub const fn min_samples(&self) -> usize {
        self.min_samples
    }

    /// Returns the current window contents oldest-first, or `None` before fitting.
    #[must_use]
    pub fn window(&self) -> Option<Vec<T>> {
        self.state.as_ref().map(|state| state.window.to_vec())
    }
}

impl<T: SeriesElement> OnlineTransform<T> for RollingMean<T> {
    fn name(&self) -> &'static str {
        "RollingMean"
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    fn fit_transform(&mut self, data: &[T]) -> Result<Vec<T>> {
        let result = rolling_mean(data, self.window_size, Some(self.min_samples))?;
        let window = Window::from_tail(self.window_size, data)?;
        let sum = window.iter().fold(T::zero(), |acc, v| acc + v);
        log::debug!(
            "fitted RollingMean(window_size={}, min_samples={}) on {} values",
            self.window_size,
            self.min_samples,
            data.len()
        );
        self.state = Some(MeanState {
            window,
            sum,
            evictions: 0,
        });
        Ok(result)
    }

    fn update(&mut self, value: T) -> Result<T> {
        let state = self.state.as_mut().ok_or(Error::NotFitted {
            transform: "RollingMean",
        })?;

        match state.window.push(value) {
            None => state.sum = state.sum + value,
            Some(evicted) => {
                state.evictions += 1;
                state.sum = state.sum - evicted + value;
                if state.evictions == self.window_size {
                    state.evictions = 0;
                    state.sum = window_sum(state.window.iter());
                }
            }
        }
        if !state.sum.is_finite() {
            state.sum = window_sum(state.window.iter());
        }

        let count = state.window.len();
        if count < self.min_samples {
            return Ok(T::nan());
        }
        Ok(state.sum / T::from_usize(count)?)
    }
}

#[derive(Debug, Clone)]
struct ExtremumState<T> {
    window: Window<T>,
    deque: MonotonicDeque<T>,
    next_index: usize,
}

/// Shared machinery of [`RollingMax`] and [`RollingMin`].
#[derive(Debug, Clone)]
struct RollingExtremum<T> {
    window_size: usize,
    min_samples: usize,
    kind: Extremum,
    state: Option<ExtremumState<T>>,
}

impl<T: SeriesElement> RollingExtremum<T> {
    fn new(window_size: usize, min_samples: Option<usize>, kind: Extremum) -> Result<Self> {
        Ok(Self {
            window_size,
            min_samples: resolve_min_samples(window_size, min_samples)?,
            kind,
            state: None,
        })
    }

    fn fit_transform(&mut self, data: &[T], name: &'static str) -> Result<Vec<T>> {
        let result = rolling_extrema(data, self.window_size, Some(self.min_samples), self.kind)?;
        let window = Window::from_tail(self.window_size, data)?;
        let mut deque = MonotonicDeque::new(self.window_size, self.kind)?;
        let start = data.len() - window.len();
        for (offset, value) in window.iter().enumerate() {
            deque.push(start + offset, value);
        }
        log::debug!(
            "fitted {name}(window_size={}, min_samples={}) on {} values",
            self.window_size,
            self.min_samples,
            data.len()
        );
        self.state = Some(ExtremumState {
            window,
            deque,
            next_index: data.len(),
        });
        Ok(result)
    }

    fn update(&mut self, value: T, name: &'static str) -> Result<T> {
        let state = self
            .state
            .as_mut()
            .ok_or(Error::NotFitted { transform: name })?;
        state.window.push(value);
        state.deque.push(state.next_index, value);
        state.next_index += 1;
        if state.window.len() < self.min_samples {
            return Ok(T::nan());
        }
        Ok(state.deque.extremum())
    }

    fn window(&self) -> Option<Vec<T>> {
        self.state.as_ref().map(|state| state.window.to_vec())
    }
}

/// Online rolling maximum over the last `window_size` observations.
///
/// # Example
///
/// ```
/// use fast_window::online::RollingMax;
/// use fast_window::traits::OnlineTransform;
///
/// let mut max = RollingMax::new(3, None).unwrap();
/// max.fit_transform(&[5.0_f64, 1.0, 2.0]).unwrap();
/// assert_eq!(max.update(0.0).unwrap(), 2.0); // 5.0 left the window
/// ```
#[derive(Debug, Clone)]
pub struct RollingMax<T> {
    inner: RollingExtremum<T>,
}

/// Online rolling minimum over the last `window_size` observations.
#[derive(Debug, Clone)]
pub struct RollingMin<T> {
    inner: RollingExtremum<T>,
}

impl<T: SeriesElement> RollingMax<T> {
    /// Creates an unfitted rolling maximum.
    ///
    /// # Errors
    ///
    /// See [`RollingMean::new`].
    pub fn new(window_size: usize, min_samples: Option<usize>) -> Result<Self> {
        Ok(Self {
            inner: RollingExtremum::new(window_size, min_samples, Extremum::Max)?,
        })
    }

    /// Returns the window size.
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.inner.window_size
    }

    /// Returns the effective minimum number of observations.
    #[must_use]
    pub const fn min_samples(&self) -> usize {
        self.inner.min_samples
    }

    /// Returns the current window contents oldest-first, or `None` before fitting.
    #[must_use]
    pub fn window(&self) -> Option<Vec<T>> {
        self.inner.window()
    }
}

impl<T: SeriesElement> RollingMin<T> {
    /// Creates an unfitted rolling minimum.
    ///
    /// # Errors
    ///
    /// See [`RollingMean::new`].
    pub fn new(window_size: usize, min_samples: Option<usize>) -> Result<Self> {
        Ok(Self {
            inner: RollingExtremum::new(window_size, min_samples, Extremum::Min)?,
        })
    }

    /// Returns the window size.
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.inner.window_size
    }

    /// Returns the effective minimum number of observations.
    #[must_use]
    pub const fn min_samples(&self) -> usize {
        self.inner.min_samples
    }

    /// Returns the current window contents oldest-first, or `None` before fitting.
    #[must_use]
    pub fn window(&self) -> Option<Vec<T>> {
        self.inner.window()
    }
}

impl<T: SeriesElement> OnlineTransform<T> for RollingMax<T> {
    fn name(&self) -> &'static str {
        "RollingMax"
    }

    fn is_fitted(&self) -> bool {
        self.inner.state.is_some()
    }

    fn fit_transform(&mut self, data: &[T]) -> Result<Vec<T>> {
        self.inner.fit_transform(data, "RollingMax")
    }

    fn update(&mut self, value: T) -> Result<T> {
        self.inner.update(value, "RollingMax")
    }
}

impl<T: SeriesElement> OnlineTransform<T> for RollingMin<T> {
    fn name(&self) -> &'static str {
        "RollingMin"
    }

    fn is_fitted(&self) -> bool {
        self.inner.state.is_some()
    }

    fn fit_transform(&mut self, data: &[T]) -> Result<Vec<T>> {
        self.inner.fit_transform(data, "RollingMin")
    }

    fn update(&mut self, value: T) -> Result<T> {
        self.inner.update(value, "RollingMin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::rolling_extrema::{rolling_max, rolling_min};
    use crate::utils::approx_eq;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_rolling_mean_worked_example() {
        let mut mean = RollingMean::new(3, Some(2)).unwrap();
        let fitted = mean.fit_transform(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        assert!(fitted[0].is_nan());
        assert!(approx_eq(fitted[1], 1.5, EPSILON));
        assert!(approx_eq(fitted[2], 2.0, EPSILON));
        assert!(approx_eq(fitted[3], 3.0, EPSILON));
        assert!(approx_eq(mean.update(10.0).unwrap(), 17.0 / 3.0, EPSILON));
        assert_eq!(mean.window().unwrap(), vec![3.0, 4.0, 10.0]);
    }

    #[test]
    fn test_rolling_mean_not_fitted() {
        let mut mean = RollingMean::<f64>::new(3, None).unwrap();
        assert!(!mean.is_fitted());
        assert!(mean.window().is_none());
        assert!(matches!(
            mean.update(1.0),
            Err(Error::NotFitted {
                transform: "RollingMean"
            })
        ));
    }

    #[test]
    fn test_rolling_mean_fit_short_series_then_fill() {
        let mut mean = RollingMean::new(3, None).unwrap();
        let fitted = mean.fit_transform(&[1.0_f64]).unwrap();
        assert!(fitted[0].is_nan());
        assert!(mean.update(2.0).unwrap().is_nan());
        assert!(approx_eq(mean.update(3.0).unwrap(), 2.0, EPSILON));
        assert!(approx_eq(mean.update(4.0).unwrap(), 3.0, EPSILON));
    }

    #[test]
    fn test_rolling_mean_empty_fit() {
        let mut mean = RollingMean::new(2, Some(1)).unwrap();
        assert!(mean.fit_transform(&[]).unwrap().is_empty());
        assert!(approx_eq(mean.update(4.0_f64).unwrap(), 4.0, EPSILON));
        assert!(approx_eq(mean.update(6.0).unwrap(), 5.0, EPSILON));
    }

    #[test]
    fn test_rolling_mean_long_stream_matches_window() {
        let mut mean = RollingMean::new(7, None).unwrap();
        mean.fit_transform(&[0.1_f64; 7]).unwrap();
        for i in 0..10_000 {
            let value = f64::from(i % 13) * 0.1 + 1e6;
            let got = mean.update(value).unwrap();
            let window = mean.window().unwrap();
            let expected = window.iter().sum::<f64>() / 7.0;
            assert!(approx_eq(got, expected, 1e-6), "step {i}: {got} vs {expected}");
        }
    }

    #[test]
    fn test_rolling_mean_refit_discards_state() {
        let mut mean = RollingMean::new(2, None).unwrap();
        mean.fit_transform(&[100.0_f64, 200.0]).unwrap();
        mean.fit_transform(&[1.0, 3.0]).unwrap();
        assert!(approx_eq(mean.update(5.0).unwrap(), 4.0, EPSILON));
    }

    #[test]
    fn test_rolling_max_min_match_batch() {
        let data = [3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0, 8.0, 9.0, 7.0];
        for split in 0..data.len() {
            let mut max = RollingMax::new(4, Some(2)).unwrap();
            let mut min = RollingMin::new(4, Some(2)).unwrap();
            max.fit_transform(&data[..split]).unwrap();
            min.fit_transform(&data[..split]).unwrap();
            let expected_max = rolling_max(&data, 4, Some(2)).unwrap();
            let expected_min = rolling_min(&data, 4, Some(2)).unwrap();
            for i in split..data.len() {
                assert!(approx_eq(max.update(data[i]).unwrap(), expected_max[i], EPSILON));
                assert!(approx_eq(min.update(data[i]).unwrap(), expected_min[i], EPSILON));
            }
        }
    }

    #[test]
    fn test_rolling_max_window_is_fifo() {
        let mut max = RollingMax::new(3, None).unwrap();
        max.fit_transform(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(max.window().unwrap(), vec![2.0, 3.0, 4.0]);
        max.update(5.0).unwrap();
        assert_eq!(max.window().unwrap(), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_rolling_min_not_fitted() {
        let mut min = RollingMin::<f64>::new(3, None).unwrap();
        assert!(matches!(
            min.update(1.0),
            Err(Error::NotFitted {
                transform: "RollingMin"
            })
        ));
    }
}
