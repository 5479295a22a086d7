//! Core traits for fast-window numeric operations.
//!
//! This module defines the traits used throughout the fast-window library.
//!
//! # Overview
//!
//! - [`SeriesElement`] abstracts over `f32` and `f64` series values.
//! - [`OnlineTransform`] is the two-phase contract shared by every online
//!   statistic: seed the state once with [`fit_transform`](OnlineTransform::fit_transform),
//!   then push one observation at a time through [`update`](OnlineTransform::update).
//!
//! The free functions at the bottom validate constructor parameters so that
//! invalid configurations fail at construction, never at update time.
//!
//! # Example
//!
//! ```
//! use fast_window::online::RollingMean;
//! use fast_window::traits::OnlineTransform;
//!
//! let mut mean = RollingMean::new(3, Some(2)).unwrap();
//! let fitted = mean.fit_transform(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
//! assert!(fitted[0].is_nan());
//! assert!((fitted[3] - 3.0).abs() < 1e-10);
//!
//! let next = mean.update(10.0).unwrap();
//! assert!((next - 17.0 / 3.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// This trait provides a common interface for numeric operations on series data,
/// abstracting over `f32` and `f64` types. NaN is the missing-value sentinel
/// used by every statistic in this crate.
///
/// # Example
///
/// ```
/// use fast_window::traits::SeriesElement;
///
/// fn mean_of<T: SeriesElement>(data: &[T]) -> fast_window::Result<T> {
///     let sum = data.iter().fold(T::zero(), |acc, &x| acc + x);
///     Ok(sum / T::from_usize(data.len())?)
/// }
///
/// let m = mean_of(&[1.0_f64, 2.0, 6.0]).unwrap();
/// assert!((m - 3.0).abs() < 1e-10);
/// ```
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// This is commonly used for converting sample counts to the series element type.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Two-phase streaming contract shared by every online statistic.
///
/// A caller first seeds the statistic with a historical series through
/// [`fit_transform`](Self::fit_transform), which returns the full-history batch
/// output. Each later observation goes through [`update`](Self::update), which
/// returns the value batch recomputation over the extended series would have
/// produced at that position.
///
/// The trait is object safe so heterogeneous statistics can be held as
/// `Box<dyn OnlineTransform<T>>`.
pub trait OnlineTransform<T: SeriesElement> {
    /// Short name of the statistic, used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Returns true once [`fit_transform`](Self::fit_transform) has seeded the state.
    fn is_fitted(&self) -> bool;

    /// Computes the batch output over `data` and seeds the incremental state from it.
    ///
    /// Calling this again discards any previous state.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a sample count cannot be represented in `T`.
    fn fit_transform(&mut self, data: &[T]) -> Result<Vec<T>>;

    /// Pushes one observation and returns the statistic after it.
    ///
    /// A NaN result means not enough history has been seen yet.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFitted` if called before [`fit_transform`](Self::fit_transform).
    fn update(&mut self, value: T) -> Result<T>;

    /// Feeds every value through [`update`](Self::update) in order.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `update`.
    fn update_many(&mut self, values: &[T]) -> Result<Vec<T>> {
        values.iter().map(|&value| self.update(value)).collect()
    }
}

impl<T: SeriesElement, S: OnlineTransform<T> + ?Sized> OnlineTransform<T> for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_fitted(&self) -> bool {
        (**self).is_fitted()
    }

    fn fit_transform(&mut self, data: &[T]) -> Result<Vec<T>> {
        (**self).fit_transform(data)
    }

    fn update(&mut self, value: T) -> Result<T> {
        (**self).update(value)
    }
}

/// Validates that a window size is usable for a bounded statistic.
///
/// # Errors
///
/// Returns `Error::InvalidWindowSize` if the window size is zero.
#[inline]
pub const fn validate_window_size(window_size: usize) -> Result<()> {
    if window_size == 0 {
        Err(Error::InvalidWindowSize {
            window_size,
            reason: "window size must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Resolves the effective `min_samples` for a bounded statistic.
///
/// `None` defaults to `window_size`. Values above `window_size` are clipped to
/// `window_size`, since a window can never hold more observations than that.
///
/// # Errors
///
/// Returns `Error::InvalidWindowSize` if `window_size` is zero, or
/// `Error::InvalidMinSamples` if `min_samples` is `Some(0)`.
pub fn resolve_min_samples(window_size: usize, min_samples: Option<usize>) -> Result<usize> {
    validate_window_size(window_size)?;
    match min_samples {
        None => Ok(window_size),
        Some(0) => Err(Error::InvalidMinSamples {
            min_samples: 0,
            reason: "min_samples must be at least 1",
        }),
        Some(requested) if requested > window_size => {
            log::debug!(
                "clipping min_samples {requested} to window size {window_size}"
            );
            Ok(window_size)
        }
        Some(requested) => Ok(requested),
    }
}

/// Validates the season length of a seasonal statistic.
///
/// # Errors
///
/// Returns `Error::InvalidSeasonLength` if `season_length` is zero.
#[inline]
pub const fn validate_season_length(season_length: usize) -> Result<()> {
    if season_length == 0 {
        Err(Error::InvalidSeasonLength { season_length })
    } else {
        Ok(())
    }
}

/// Validates an exponential smoothing factor.
///
/// # Errors
///
/// Returns `Error::InvalidAlpha` unless `0 < alpha <= 1`. NaN is rejected.
#[inline]
pub fn validate_alpha(alpha: f64) -> Result<()> {
    if alpha > 0.0 && alpha <= 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidAlpha { alpha })
    }
}

/// Validates the offset of a shift.
///
/// # Errors
///
/// Returns `Error::InvalidOffset` if `offset` is zero.
#[inline]
pub const fn validate_offset(offset: usize) -> Result<()> {
    if offset == 0 {
        Err(Error::InvalidOffset { offset })
    } else {
        Ok(())
    }
}
