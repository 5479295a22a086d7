//! Declarative statistic configuration.
//!
//! A [`TransformSpec`] names one online statistic and its parameters. It is a
//! serde-tagged enum, so a list of them can be read from JSON (or any other
//! serde format) and turned into boxed statistics with [`TransformSpec::build`]:
//!
//! ```json
//! [
//!   {"kind": "rolling_mean", "window_size": 7},
//!   {"kind": "rolling_std", "window_size": 7, "min_samples": 2, "season_length": 24},
//!   {"kind": "expanding_max"},
//!   {"kind": "ewm_mean", "alpha": 0.3},
//!   {"kind": "shift", "offset": 1}
//! ]
//! ```
//!
//! Rolling and expanding statistics take an optional `season_length`; when
//! present the statistic is wrapped in a [`Seasonal`] multiplexer.
//!
//! # Example
//!
//! ```
//! use fast_window::config::{RollingParams, TransformSpec};
//! use fast_window::traits::OnlineTransform;
//!
//! let spec = TransformSpec::RollingMean(RollingParams::new(3).with_min_samples(2));
//! assert_eq!(spec.label(), "rolling_mean_3");
//!
//! let mut stat = spec.build::<f64>().unwrap();
//! stat.fit_transform(&[1.0, 2.0, 3.0, 4.0]).unwrap();
//! assert!((stat.update(10.0).unwrap() - 17.0 / 3.0).abs() < 1e-10);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::online::{
    EwmMean, ExpandingMax, ExpandingMean, ExpandingMin, ExpandingStd, RollingMax, RollingMean,
    RollingMin, RollingStd, Seasonal, Shift,
};
use crate::traits::{OnlineTransform, SeriesElement};

/// Parameters of a bounded rolling statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingParams {
    /// Number of trailing observations in the window.
    pub window_size: usize,
    /// Observations required before a value is emitted; defaults to `window_size`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_samples: Option<usize>,
    /// Number of seasonal phases; `None` for a plain statistic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_length: Option<usize>,
}

impl RollingParams {
    /// Creates non-seasonal parameters with the default `min_samples`.
    #[must_use]
    pub const fn new(window_size: usize) -> Self {
        Self {
            window_size,
            min_samples: None,
            season_length: None,
        }
    }

    /// Sets `min_samples`.
    #[must_use]
    pub const fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = Some(min_samples);
        self
    }

    /// Sets the season length.
    #[must_use]
    pub const fn with_season_length(mut self, season_length: usize) -> Self {
        self.season_length = Some(season_length);
        self
    }
}

/// Parameters of an expanding statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExpandingParams {
    /// Number of seasonal phases; `None` for a plain statistic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_length: Option<usize>,
}

/// One online statistic and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformSpec {
    /// [`RollingMean`]
    RollingMean(RollingParams),
    /// [`RollingMax`]
    RollingMax(RollingParams),
    /// [`RollingMin`]
    RollingMin(RollingParams),
    /// [`RollingStd`]
    RollingStd(RollingParams),
    /// [`ExpandingMean`]
    ExpandingMean(ExpandingParams),
    /// [`ExpandingMax`]
    ExpandingMax(ExpandingParams),
    /// [`ExpandingMin`]
    ExpandingMin(ExpandingParams),
    /// [`ExpandingStd`]
    ExpandingStd(ExpandingParams),
    /// [`EwmMean`]
    EwmMean {
        /// Smoothing factor in `(0, 1]`.
        alpha: f64,
    },
    /// [`Shift`]
    Shift {
        /// Lag in observations.
        offset: usize,
    },
}

impl TransformSpec {
    /// Returns the snake-case kind tag, e.g. `"rolling_mean"`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RollingMean(_) => "rolling_mean",
            Self::RollingMax(_) => "rolling_max",
            Self::RollingMin(_) => "rolling_min",
            Self::RollingStd(_) => "rolling_std",
            Self::ExpandingMean(_) => "expanding_mean",
            Self::ExpandingMax(_) => "expanding_max",
            Self::ExpandingMin(_) => "expanding_min",
            Self::ExpandingStd(_) => "expanding_std",
            Self::EwmMean { .. } => "ewm_mean",
            Self::Shift { .. } => "shift",
        }
    }

    /// Returns the season length, if the statistic is seasonal.
    #[must_use]
    pub const fn season_length(&self) -> Option<usize> {
        match self {
            Self::RollingMean(p) | Self::RollingMax(p) | Self::RollingMin(p) | Self::RollingStd(p) => {
                p.season_length
            }
            Self::ExpandingMean(p)
            | Self::ExpandingMax(p)
            | Self::ExpandingMin(p)
            | Self::ExpandingStd(p) => p.season_length,
            Self::EwmMean { .. } | Self::Shift { .. } => None,
        }
    }

    /// Returns a column label such as `rolling_mean_7`, `seasonal24_rolling_std_7`,
    /// `expanding_max`, `ewm_mean_0.3` or `shift_1`.
    #[must_use]
    pub fn label(&self) -> String {
        let base = match self {
            Self::RollingMean(p) | Self::RollingMax(p) | Self::RollingMin(p) | Self::RollingStd(p) => {
                format!("{}_{}", self.kind(), p.window_size)
            }
            Self::EwmMean { alpha } => format!("{}_{alpha}", self.kind()),
            Self::Shift { offset } => format!("{}_{offset}", self.kind()),
            _ => self.kind().to_string(),
        };
        match self.season_length() {
            Some(season_length) => format!("seasonal{season_length}_{base}"),
            None => base,
        }
    }

    /// Validates the parameters and constructs the unfitted statistic.
    ///
    /// # Errors
    ///
    /// Returns the constructor error of the named statistic, e.g.
    /// `Error::InvalidWindowSize`, `Error::InvalidSeasonLength` or
    /// `Error::InvalidAlpha`.
    pub fn build<T: SeriesElement>(&self) -> Result<Box<dyn OnlineTransform<T>>> {
        match *self {
            Self::RollingMean(p) => with_seasons(
                p.season_length,
                RollingMean::new(p.window_size, p.min_samples)?,
                "SeasonalRollingMean",
            ),
            Self::RollingMax(p) => with_seasons(
                p.season_length,
                RollingMax::new(p.window_size, p.min_samples)?,
                "SeasonalRollingMax",
            ),
            Self::RollingMin(p) => with_seasons(
                p.season_length,
                RollingMin::new(p.window_size, p.min_samples)?,
                "SeasonalRollingMin",
            ),
            Self::RollingStd(p) => with_seasons(
                p.season_length,
                RollingStd::new(p.window_size, p.min_samples)?,
                "SeasonalRollingStd",
            ),
            Self::ExpandingMean(p) => {
                with_seasons(p.season_length, ExpandingMean::new(), "SeasonalExpandingMean")
            }
            Self::ExpandingMax(p) => {
                with_seasons(p.season_length, ExpandingMax::new(), "SeasonalExpandingMax")
            }
            Self::ExpandingMin(p) => {
                with_seasons(p.season_length, ExpandingMin::new(), "SeasonalExpandingMin")
            }
            Self::ExpandingStd(p) => {
                with_seasons(p.season_length, ExpandingStd::new(), "SeasonalExpandingStd")
            }
            Self::EwmMean { alpha } => Ok(Box::new(EwmMean::new(alpha)?)),
            Self::Shift { offset } => Ok(Box::new(Shift::new(offset)?)),
        }
    }
}

/// Boxes `stat`, wrapped in a [`Seasonal`] when a season length is given.
fn with_seasons<T, S>(
    season_length: Option<usize>,
    stat: S,
    seasonal_name: &'static str,
) -> Result<Box<dyn OnlineTransform<T>>>
where
    T: SeriesElement,
    S: OnlineTransform<T> + Clone + 'static,
{
    match season_length {
        None => Ok(Box::new(stat)),
        Some(season_length) => Ok(Box::new(
            Seasonal::with_template(season_length, stat)?.named(seasonal_name),
        )),
    }
}
