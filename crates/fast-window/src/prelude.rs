//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use fast_window::prelude::*;
//!
//! let mut std = RollingStd::new(4, Some(2)).unwrap();
//! let fitted = std.fit_transform(&[1.0_f64, 2.0, 4.0]).unwrap();
//! assert!(fitted[0].is_nan());
//! let next = std.update(8.0).unwrap();
//! assert!(next > 0.0);
//! ```
//!
//! # Contents
//!
//! - [`Error`] and [`Result`]
//! - [`SeriesElement`] and [`OnlineTransform`]
//! - every online statistic, [`Seasonal`] and its aliases
//! - [`TransformSpec`] for building statistics from configuration

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{OnlineTransform, SeriesElement};

// Online statistics
pub use crate::online::{
    EwmMean, ExpandingMax, ExpandingMean, ExpandingMin, ExpandingStd, RollingMax, RollingMean,
    RollingMin, RollingStd, Seasonal, SeasonalExpandingMax, SeasonalExpandingMean,
    SeasonalExpandingMin, SeasonalExpandingStd, SeasonalRollingMax, SeasonalRollingMean,
    SeasonalRollingMin, SeasonalRollingStd, Shift,
};

// Configuration
pub use crate::config::{ExpandingParams, RollingParams, TransformSpec};
