//! Running statistics using Welford's algorithm.
//!
//! This module provides the numerically stable accumulator shared by the batch
//! [`rolling_std`](super::rolling::rolling_std) kernel and the online
//! [`RollingStd`](crate::online::RollingStd) / [`ExpandingStd`](crate::online::ExpandingStd)
//! statistics. Sharing one accumulator means the batch output and the
//! incremental updates go through identical floating-point operations.
//!
//! # Algorithm
//!
//! The accumulator maintains:
//! - `count`: Number of elements in the window
//! - `mean`: Running mean of the window
//! - `m2`: Sum of squared deviations from the mean
//!
//! # Formula
//!
//! ```text
//! Growing window (push x):
//!   count += 1
//!   mean' = mean + (x - mean) / count
//!   m2   += (x - mean) * (x - mean')
//!
//! Full window (evict old, push new):
//!   mean' = mean + (new - old) / count
//!   m2   += (new - old) * (new - mean' + old - mean)
//!
//! Sample variance = m2 / (count - 1)
//! ```
//!
//! The combined evict/push step adjusts the deviation sum for a simultaneous
//! removal and insertion without touching any other window element.
//!
//! # Example
//!
//! ```
//! use fast_window::kernels::running_stat::RunningStat;
//!
//! let mut stat: RunningStat<f64> = RunningStat::new();
//! stat.push(1.0).unwrap();
//! stat.push(2.0).unwrap();
//! stat.push(3.0).unwrap();
//! assert!((stat.mean() - 2.0).abs() < 1e-10);
//! assert!((stat.sample_stddev() - 1.0).abs() < 1e-10);
//!
//! // Slide the window: drop 1.0, add 4.0 -> [2, 3, 4]
//! stat.replace(1.0, 4.0).unwrap();
//! assert!((stat.mean() - 3.0).abs() < 1e-10);
//! assert!((stat.sample_stddev() - 1.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Welford, B. P. (1962). "Note on a method for calculating corrected sums
//!   of squares and products". Technometrics. 4 (3): 419-420.
//! - Knuth, D. E. (1997). The Art of Computer Programming, volume 2:
//!   Seminumerical Algorithms (3rd ed.). Section 4.2.2, page 232.

use crate::error::Result;
use crate::traits::SeriesElement;

/// A running mean / sum-of-squared-deviations accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningStat<T> {
    count: usize,
    mean: T,
    m2: T, // Sum of squared differences from the mean
}

impl<T: SeriesElement> Default for RunningStat<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SeriesElement> RunningStat<T> {
    /// Creates a new empty accumulator.
    ///
    /// # Example
    ///
    /// ```
    /// use fast_window::kernels::running_stat::RunningStat;
    ///
    /// let stat: RunningStat<f64> = RunningStat::new();
    /// assert_eq!(stat.count(), 0);
    /// assert!(stat.mean().is_nan());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: T::zero(),
            m2: T::zero(),
        }
    }

    /// Builds an accumulator over every value of `data`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the count cannot be represented in `T`.
    pub fn from_slice(data: &[T]) -> Result<Self> {
        Self::from_values(data.iter().copied())
    }

    /// Builds an accumulator over every value yielded by `values`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the count cannot be represented in `T`.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Result<Self> {
        let mut stat = Self::new();
        for value in values {
            stat.push(value)?;
        }
        Ok(stat)
    }

    /// Adds a value to a growing window.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the new count cannot be represented in `T`.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<()> {
        self.count += 1;
        let prev_mean = self.mean;
        self.mean = prev_mean + (value - prev_mean) / T::from_usize(self.count)?;
        self.m2 = self.m2 + (value - prev_mean) * (value - self.mean);
        Ok(())
    }

    /// Evicts `old` and adds `new` in one step, keeping the count unchanged.
    ///
    /// `old` must be a value currently in the window. `m2` is clamped at zero
    /// to absorb cancellation error.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the count cannot be represented in `T`.
    #[inline]
    pub fn replace(&mut self, old: T, new: T) -> Result<()> {
        let prev_mean = self.mean;
        let delta = new - old;
        self.mean = prev_mean + delta / T::from_usize(self.count)?;
        self.m2 = self.m2 + delta * (new - self.mean + old - prev_mean);
        if self.m2 < T::zero() {
            self.m2 = T::zero();
        }
        Ok(())
    }

    /// Returns the number of values in the window.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the running mean, or NaN if the window is empty.
    #[must_use]
    pub fn mean(&self) -> T {
        if self.count == 0 {
            T::nan()
        } else {
            self.mean
        }
    }

    /// Returns the sum of squared deviations from the mean.
    #[must_use]
    pub fn m2(&self) -> T {
        self.m2
    }

    /// Returns `true` while both the mean and `m2` are finite.
    ///
    /// A NaN or infinite input poisons the incremental state for good, even
    /// after it is evicted, so callers rebuild from the window once this fails.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.m2.is_finite()
    }

    /// Returns the sample variance (Bessel-corrected, divides by `count - 1`).
    ///
    /// Returns NaN when fewer than two values are held or when `m2` is NaN.
    /// A negative `m2` from floating-point cancellation is treated as zero.
    #[must_use]
    pub fn sample_variance(&self) -> T {
        if self.count < 2 {
            return T::nan();
        }
        let m2 = if self.m2 < T::zero() { T::zero() } else { self.m2 };
        T::from_usize(self.count - 1).map_or_else(|_| T::nan(), |denom| m2 / denom)
    }

    /// Returns the sample standard deviation.
    ///
    /// # Example
    ///
    /// ```
    /// use fast_window::kernels::running_stat::RunningStat;
    ///
    /// let stat = RunningStat::from_slice(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// // Sample variance = 32 / 7
    /// assert!((stat.sample_stddev() - (32.0_f64 / 7.0).sqrt()).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn sample_stddev(&self) -> T {
        self.sample_variance().sqrt()
    }
}
