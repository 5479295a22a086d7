//! Incremental (online) statistics.
//!
//! Every type here implements [`OnlineTransform`](crate::traits::OnlineTransform):
//! `fit_transform` runs the matching batch kernel once over a historical
//! series and seeds the incremental state from it, and each `update` after
//! that costs O(1) (amortized for the rolling extrema) and returns the value
//! batch recomputation over the extended series would give.
//!
//! # Statistics
//!
//! | Type | State | Batch kernel |
//! |------|-------|--------------|
//! | [`RollingMean`] | window + running sum | [`rolling_mean`](crate::kernels::rolling_mean) |
//! | [`RollingMax`] / [`RollingMin`] | window + monotonic deque | [`rolling_max`](crate::kernels::rolling_max) / [`rolling_min`](crate::kernels::rolling_min) |
//! | [`RollingStd`] | window + Welford accumulator | [`rolling_std`](crate::kernels::rolling_std) |
//! | [`ExpandingMean`] | cumulative sum + count | [`expanding_mean`](crate::kernels::expanding_mean) |
//! | [`ExpandingMax`] / [`ExpandingMin`] | running extremum | [`expanding_max`](crate::kernels::expanding_max) / [`expanding_min`](crate::kernels::expanding_min) |
//! | [`ExpandingStd`] | Welford accumulator | [`expanding_std`](crate::kernels::expanding_std) |
//! | [`EwmMean`] | last smoothed value | [`ewm_mean`](crate::kernels::ewm_mean) |
//! | [`Shift`] | window of pending values | [`shift_array`](crate::kernels::shift_array) |
//!
//! [`Seasonal`] wraps any of these and runs one copy per seasonal phase.
//!
//! # Missing values
//!
//! NaN is returned, never an error, while a statistic has seen too little
//! history to be defined. The only update-time error is calling `update`
//! before `fit_transform`.

mod ewm;
mod expanding;
mod rolling;
mod rolling_std;
mod seasonal;
mod shift;

pub use ewm::EwmMean;
pub use expanding::{ExpandingMax, ExpandingMean, ExpandingMin, ExpandingStd};
pub use rolling::{RollingMax, RollingMean, RollingMin};
pub use rolling_std::RollingStd;
pub use seasonal::{
    Seasonal, SeasonalExpandingMax, SeasonalExpandingMean, SeasonalExpandingMin,
    SeasonalExpandingStd, SeasonalRollingMax, SeasonalRollingMean, SeasonalRollingMin,
    SeasonalRollingStd,
};
pub use shift::Shift;
