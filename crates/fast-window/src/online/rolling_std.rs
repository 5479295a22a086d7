//! Bounded rolling standard deviation (windowed Welford).
//!
//! State is the window plus a [`RunningStat`] holding the window's running
//! mean and sum of squared deviations (`M2`). Fit takes the terminal state of
//! the batch [`rolling_std`] pass; updates either grow the accumulator or apply
//! the combined evict/insert step, both O(1). While a NaN poisons the
//! accumulator it is rebuilt from the window on each step, so the statistic
//! comes back once the NaN is evicted.
//!
//! When the fitted series is shorter than `min_samples` the batch pass reports
//! no terminal state. The statistic then re-seeds from a second pass with a
//! relaxed minimum of two samples (or, for fewer than two values, directly
//! from the values), so updates have a valid accumulator before the official
//! threshold is reached.

use crate::error::{Error, Result};
use crate::kernels::rolling::rolling_std;
use crate::kernels::running_stat::RunningStat;
use crate::traits::{resolve_min_samples, OnlineTransform, SeriesElement};
use crate::window::Window;

/// Minimum used when re-seeding from a series shorter than `min_samples`.
const RELAXED_MIN_SAMPLES: usize = 2;

#[derive(Debug, Clone)]
struct StdState<T> {
    window: Window<T>,
    stat: RunningStat<T>,
}

/// Online rolling sample standard deviation over the last `window_size` observations.
///
/// # Example
///
/// ```
/// use fast_window::online::RollingStd;
/// use fast_window::traits::OnlineTransform;
///
/// let mut std = RollingStd::new(3, None).unwrap();
/// let fitted = std.fit_transform(&[1.0_f64, 2.0, 3.0]).unwrap();
/// assert!((fitted[2] - 1.0).abs() < 1e-10);
///
/// // window is now [2, 3, 5]
/// let next = std.update(5.0).unwrap();
/// assert!((next - (7.0_f64 / 3.0).sqrt()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct RollingStd<T> {
    window_size: usize,
    min_samples: usize,
    state: Option<StdState<T>>,
}

impl<T: SeriesElement> RollingStd<T> {
    /// Creates an unfitted rolling standard deviation.
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

    /// Returns the running accumulator, or `None` before fitting.
    #[must_use]
    pub fn running_stat(&self) -> Option<&RunningStat<T>> {
        self.state.as_ref().map(|state| &state.stat)
    }
}

impl<T: SeriesElement> OnlineTransform<T> for RollingStd<T> {
    fn name(&self) -> &'static str {
        "RollingStd"
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    fn fit_transform(&mut self, data: &[T]) -> Result<Vec<T>> {
        let output = rolling_std(data, self.window_size, Some(self.min_samples))?;
        let window = Window::from_tail(self.window_size, data)?;

        let stat = if let Some(stat) = output.terminal {
            stat
        } else {
            log::debug!(
                "RollingStd fitted on {} values, below min_samples={}; re-seeding with min_samples={}",
                data.len(),
                self.min_samples,
                RELAXED_MIN_SAMPLES
            );
            match rolling_std(data, self.window_size, Some(RELAXED_MIN_SAMPLES))?.terminal {
                Some(stat) => stat,
                None => RunningStat::from_slice(&window.to_vec())?,
            }
        };

        log::debug!(
            "fitted RollingStd(window_size={}, min_samples={}) on {} values",
            self.window_size,
            self.min_samples,
            data.len()
        );
        self.state = Some(StdState { window, stat });
        Ok(output.values)
    }

    fn update(&mut self, value: T) -> Result<T> {
        let state = self.state.as_mut().ok_or(Error::NotFitted {
            transform: "RollingStd",
        })?;

        match state.window.push(value) {
            None => state.stat.push(value)?,
            Some(old) => {
                state.stat.replace(old, value)?;
                if !state.stat.is_finite() {
                    state.stat = RunningStat::from_values(state.window.iter())?;
                }
            }
        }

        if state.window.len() < self.min_samples {
            return Ok(T::nan());
        }
        Ok(state.stat.sample_stddev())
    }
}
