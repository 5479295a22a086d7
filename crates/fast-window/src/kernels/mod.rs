//! Batch reduction kernels.
//!
//! These are pure array-in/array-out functions. The online statistics call
//! them exactly once, at fit time, to produce the historical output and to
//! seed their incremental state.
//!
//! # Kernels
//!
//! - [`rolling`]: rolling mean and Welford rolling standard deviation
//! - [`rolling_extrema`]: Monotonic deque algorithm for O(n) rolling max/min
//! - [`running_stat`]: Welford accumulator shared with the online statistics
//! - [`expanding`]: cumulative mean, max, min and standard deviation
//! - [`ewm`]: exponentially weighted mean
//! - [`shift`]: lag operator
//!
//! # Missing values
//!
//! Rolling kernels emit NaN wherever the trailing window holds fewer than
//! `min_samples` values; `min_samples` defaults to the window size.

pub mod ewm;
pub mod expanding;
pub mod rolling;
pub mod rolling_extrema;
pub mod running_stat;
pub mod shift;

pub use ewm::ewm_mean;
pub use expanding::{expanding_max, expanding_mean, expanding_min, expanding_std};
pub use rolling::{rolling_mean, rolling_std, RollingStdOutput};
pub use rolling_extrema::{rolling_extrema, rolling_max, rolling_min, Extremum, MonotonicDeque};
pub use running_stat::RunningStat;
pub use shift::shift_array;
