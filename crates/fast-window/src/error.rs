//! Error types for fast-window.
//!
//! This module defines the error types used throughout the fast-window library.
//! Every error is a programmer-error condition raised at construction time or
//! from calling [`update`](crate::traits::OnlineTransform::update) out of order.
//! Insufficient history is never an error: it is reported as a NaN output.

use thiserror::Error;

/// The main error type for fast-window operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The window size parameter is invalid.
    ///
    /// Returned when a bounded statistic is constructed with a window of zero
    /// elements.
    #[error("invalid window size {window_size}: {reason}")]
    InvalidWindowSize {
        /// The invalid window size that was provided.
        window_size: usize,
        /// Description of why the window size is invalid.
        reason: &'static str,
    },

    /// The minimum sample count is invalid.
    #[error("invalid min_samples {min_samples}: {reason}")]
    InvalidMinSamples {
        /// The invalid minimum sample count that was provided.
        min_samples: usize,
        /// Description of why the value is invalid.
        reason: &'static str,
    },

    /// The season length of a seasonal statistic is invalid.
    #[error("invalid season length {season_length}: season length must be at least 1")]
    InvalidSeasonLength {
        /// The invalid season length that was provided.
        season_length: usize,
    },

    /// The smoothing factor of an exponentially weighted statistic is outside `(0, 1]`.
    #[error("invalid alpha {alpha}: alpha must be in (0, 1]")]
    InvalidAlpha {
        /// The invalid smoothing factor that was provided.
        alpha: f64,
    },

    /// The offset of a shift is invalid.
    #[error("invalid offset {offset}: offset must be positive")]
    InvalidOffset {
        /// The invalid offset that was provided.
        offset: usize,
    },

    /// `update` was called before `fit_transform` seeded the statistic.
    #[error("{transform} is not fitted: call fit_transform before update")]
    NotFitted {
        /// Name of the statistic that was updated.
        transform: &'static str,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when using `NumCast::from()` to convert values
    /// (e.g., converting a sample count to a generic `Float` type) and
    /// the conversion fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the fast-window Error type.
pub type Result<T> = std::result::Result<T, Error>;
