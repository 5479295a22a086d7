//! Expanding (unbounded) mean, max, min and standard deviation.
//!
//! None of these keep the history: the mean carries a cumulative sum and a
//! count, max/min carry the running extremum, and the standard deviation
//! carries a [`RunningStat`] that only ever grows. Each is seeded from the
//! batch kernel output at fit time and updated in O(1).

use crate::error::{Error, Result};
use crate::kernels::expanding::{
    expanding_max, expanding_mean, expanding_min, expanding_std, extend_extremum,
};
use crate::kernels::rolling_extrema::Extremum;
use crate::kernels::running_stat::RunningStat;
use crate::traits::{OnlineTransform, SeriesElement};

#[derive(Debug, Clone, Copy)]
struct SumState<T> {
    sum: T,
    count: usize,
}

/// Online expanding mean over every observation seen.
///
/// # Example
///
/// ```
/// use fast_window::online::ExpandingMean;
/// use fast_window::traits::OnlineTransform;
///
/// let mut mean = ExpandingMean::new();
/// assert_eq!(mean.fit_transform(&[2.0_f64, 4.0]).unwrap(), vec![2.0, 3.0]);
/// assert_eq!(mean.update(9.0).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExpandingMean<T> {
    state: Option<SumState<T>>,
}

impl<T: SeriesElement> ExpandingMean<T> {
    /// Creates an unfitted expanding mean.
    #[must_use]
    pub const fn new() -> Self {
        Self { state: None }
    }

    /// Returns the number of observations seen, or `None` before fitting.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        self.state.map(|state| state.count)
    }
}

impl<T: SeriesElement> OnlineTransform<T> for ExpandingMean<T> {
    fn name(&self) -> &'static str {
        "ExpandingMean"
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    fn fit_transform(&mut self, data: &[T]) -> Result<Vec<T>> {
        let result = expanding_mean(data)?;
        // The cumulative sum is recovered from the last mean instead of a second pass.
        let sum = match result.last() {
            Some(&last) => last * T::from_usize(data.len())?,
            None => T::zero(),
        };
        log::debug!("fitted ExpandingMean on {} values", data.len());
        self.state = Some(SumState {
            sum,
            count: data.len(),
        });
        Ok(result)
    }

    fn update(&mut self, value: T) -> Result<T> {
        let state = self.state.as_mut().ok_or(Error::NotFitted {
            transform: "ExpandingMean",
        })?;
        state.sum = state.sum + value;
        state.count += 1;
        Ok(state.sum / T::from_usize(state.count)?)
    }
}

/// Shared machinery of [`ExpandingMax`] and [`ExpandingMin`].
#[derive(Debug, Clone)]
struct ExpandingExtremum<T> {
    kind: Extremum,
    current: Option<T>,
}

impl<T: SeriesElement> ExpandingExtremum<T> {
    const fn new(kind: Extremum) -> Self {
        Self {
            kind,
            current: None,
        }
    }

    fn fit_transform(&mut self, data: &[T], name: &'static str) -> Vec<T> {
        let result = match self.kind {
            Extremum::Max => expanding_max(data),
            Extremum::Min => expanding_min(data),
        };
        log::debug!("fitted {name} on {} values", data.len());
        self.current = Some(result.last().copied().unwrap_or_else(T::nan));
        result
    }

    fn update(&mut self, value: T, name: &'static str) -> Result<T> {
        let current = self
            .current
            .as_mut()
            .ok_or(Error::NotFitted { transform: name })?;
        *current = extend_extremum(*current, value, self.kind);
        Ok(*current)
    }
}

/// Online expanding maximum.
///
/// # Example
///
/// ```
/// use fast_window::online::ExpandingMax;
/// use fast_window::traits::OnlineTransform;
///
/// let mut max = ExpandingMax::new();
/// max.fit_transform(&[3.0_f64, 7.0, 5.0]).unwrap();
/// assert_eq!(max.update(6.0).unwrap(), 7.0);
/// assert_eq!(max.update(8.0).unwrap(), 8.0);
/// ```
#[derive(Debug, Clone)]
pub struct ExpandingMax<T> {
    inner: ExpandingExtremum<T>,
}

/// Online expanding minimum.
#[derive(Debug, Clone)]
pub struct ExpandingMin<T> {
    inner: ExpandingExtremum<T>,
}

impl<T: SeriesElement> ExpandingMax<T> {
    /// Creates an unfitted expanding maximum.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: ExpandingExtremum::new(Extremum::Max),
        }
    }
}

impl<T: SeriesElement> Default for ExpandingMax<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SeriesElement> ExpandingMin<T> {
    /// Creates an unfitted expanding minimum.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: ExpandingExtremum::new(Extremum::Min),
        }
    }
}

impl<T: SeriesElement> Default for ExpandingMin<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SeriesElement> OnlineTransform<T> for ExpandingMax<T> {
    fn name(&self) -> &'static str {
        "ExpandingMax"
    }

    fn is_fitted(&self) -> bool {
        self.inner.current.is_some()
    }

    fn fit_transform(&mut self, data: &[T]) -> Result<Vec<T>> {
        Ok(self.inner.fit_transform(data, "ExpandingMax"))
    }

    fn update(&mut self, value: T) -> Result<T> {
        self.inner.update(value, "ExpandingMax")
    }
}

impl<T: SeriesElement> OnlineTransform<T> for ExpandingMin<T> {
    fn name(&self) -> &'static str {
        "ExpandingMin"
    }

    fn is_fitted(&self) -> bool {
        self.inner.current.is_some()
    }

    fn fit_transform(&mut self, data: &[T]) -> Result<Vec<T>> {
        Ok(self.inner.fit_transform(data, "ExpandingMin"))
    }

    fn update(&mut self, value: T) -> Result<T> {
        self.inner.update(value, "ExpandingMin")
    }
}

/// Online expanding sample standard deviation.
///
/// NaN until two observations have been seen.
#[derive(Debug, Clone, Default)]
pub struct ExpandingStd<T> {
    stat: Option<RunningStat<T>>,
}

impl<T: SeriesElement> ExpandingStd<T> {
    /// Creates an unfitted expanding standard deviation.
    #[must_use]
    pub const fn new() -> Self {
        Self { stat: None }
    }

    /// Returns the running accumulator, or `None` before fitting.
    #[must_use]
    pub fn running_stat(&self) -> Option<&RunningStat<T>> {
        self.stat.as_ref()
    }
}

impl<T: SeriesElement> OnlineTransform<T> for ExpandingStd<T> {
    fn name(&self) -> &'static str {
        "ExpandingStd"
    }

    fn is_fitted(&self) -> bool {
        self.stat.is_some()
    }

    fn fit_transform(&mut self, data: &[T]) -> Result<Vec<T>> {
        let output = expanding_std(data)?;
        log::debug!("fitted ExpandingStd on {} values", data.len());
        self.stat = Some(output.terminal.unwrap_or_default());
        Ok(output.values)
    }

    fn update(&mut self, value: T) -> Result<T> {
        let stat = self.stat.as_mut().ok_or(Error::NotFitted {
            transform: "ExpandingStd",
        })?;
        stat.push(value)?;
        Ok(stat.sample_stddev())
    }
}
