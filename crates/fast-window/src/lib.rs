//! fast-window: streaming window statistics with batch-consistent updates
//!
//! This crate maintains rolling, seasonal, expanding, exponentially weighted
//! and lagged summaries of a numeric time series. Every statistic works in two
//! phases: `fit_transform` computes the full-history output of a historical
//! series in one batch pass and seeds the incremental state, then `update`
//! folds in one new observation at a time and returns what batch
//! recomputation over the extended series would have produced.
//!
//! # Features
//!
//! - **Incremental**: O(1) updates (amortized for rolling max/min)
//! - **Consistent**: updates agree with the batch kernels at every split point
//! - **Stable**: Welford accumulators for every standard deviation
//! - **Generics**: Works with both `f32` and `f64` data types
//!
//! # Quick Start
//!
//! ```
//! use fast_window::prelude::*;
//!
//! let mut mean = RollingMean::new(3, Some(2)).unwrap();
//! let fitted = mean.fit_transform(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
//!
//! // Fewer than min_samples observations: missing
//! assert!(fitted[0].is_nan());
//! assert!((fitted[1] - 1.5).abs() < 1e-10);
//!
//! // mean of [3, 4, 10]
//! let next = mean.update(10.0).unwrap();
//! assert!((next - 17.0 / 3.0).abs() < 1e-10);
//! ```
//!
//! # Available Statistics
//!
//! ## Rolling
//! - [`online::RollingMean`], [`online::RollingMax`], [`online::RollingMin`]
//! - [`online::RollingStd`]: windowed Welford standard deviation
//!
//! ## Expanding
//! - [`online::ExpandingMean`], [`online::ExpandingMax`],
//!   [`online::ExpandingMin`], [`online::ExpandingStd`]
//!
//! ## Other
//! - [`online::EwmMean`]: exponentially weighted mean
//! - [`online::Shift`]: lag operator
//! - [`online::Seasonal`]: one statistic per seasonal phase
//!
//! The batch reductions the statistics are seeded from live in [`kernels`].
//!
//! # Error Handling
//!
//! Invalid parameters are rejected at construction; insufficient history is
//! reported as NaN, never as an error:
//!
//! ```
//! use fast_window::prelude::*;
//!
//! assert!(RollingMean::<f64>::new(0, None).is_err());
//! assert!(EwmMean::<f64>::new(1.5).is_err());
//!
//! // update before fit_transform
//! let mut shift = Shift::<f64>::new(1).unwrap();
//! assert!(matches!(shift.update(1.0), Err(Error::NotFitted { .. })));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod kernels;
pub mod online;
pub mod prelude;
pub mod traits;
pub mod utils;
pub mod window;

// Re-export commonly used types at crate root
pub use config::TransformSpec;
pub use error::{Error, Result};
pub use traits::{OnlineTransform, SeriesElement};
pub use utils::{approx_eq, approx_eq_relative, first_mismatch, missing_prefix, EPSILON, LOOSE_EPSILON};
