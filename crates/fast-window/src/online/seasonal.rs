//! Seasonal multiplexer: one independent statistic per seasonal phase.
//!
//! A [`Seasonal`] wraps `season_length` copies of any [`OnlineTransform`] and
//! routes global stream position `i` to phase `i % season_length`. Phase `s`
//! therefore sees exactly the subsequence `x[s], x[s + L], x[s + 2L], ...` in
//! order, and its output at local position `k` lands at global position
//! `s + k * L`.
//!
//! The wrapped statistic is supplied as an unfitted template that is cloned
//! once per phase at fit time, so the multiplexer is generic over every
//! statistic in [`online`](crate::online) without per-statistic code. The
//! `Seasonal*` aliases bind the common combinations and give them
//! constructors taking the inner statistic's parameters directly.
//!
//! # Example
//!
//! ```
//! use fast_window::online::SeasonalRollingMean;
//! use fast_window::traits::OnlineTransform;
//!
//! // two phases: [1, 3, 5] and [10, 30, 50]
//! let mut seasonal = SeasonalRollingMean::new(2, 2, None).unwrap();
//! let fitted = seasonal.fit_transform(&[1.0_f64, 10.0, 3.0, 30.0, 5.0, 50.0]).unwrap();
//! assert!(fitted[0].is_nan() && fitted[1].is_nan());
//! assert_eq!(&fitted[2..], &[2.0, 20.0, 4.0, 40.0]);
//!
//! assert_eq!(seasonal.update(7.0).unwrap(), 6.0); // phase 0: [5, 7]
//! assert_eq!(seasonal.update(70.0).unwrap(), 60.0); // phase 1: [50, 70]
//! ```

use std::marker::PhantomData;

use super::{
    ExpandingMax, ExpandingMean, ExpandingMin, ExpandingStd, RollingMax, RollingMean, RollingMin,
    RollingStd,
};
use crate::error::{Error, Result};
use crate::traits::{validate_season_length, OnlineTransform, SeriesElement};

/// Runs one copy of `S` per seasonal phase.
#[derive(Debug, Clone)]
pub struct Seasonal<T, S> {
    season_length: usize,
    template: S,
    seasons: Vec<S>,
    n_samples: usize,
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T, S> Seasonal<T, S>
where
    T: SeriesElement,
    S: OnlineTransform<T> + Clone,
{
    /// Creates an unfitted multiplexer cloning `template` for each phase.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSeasonLength` if `season_length` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use fast_window::online::{EwmMean, Seasonal};
    /// use fast_window::traits::OnlineTransform;
    ///
    /// let mut seasonal: Seasonal<f64, _> =
    ///     Seasonal::with_template(3, EwmMean::new(0.5).unwrap()).unwrap();
    /// seasonal.fit_transform(&[1.0_f64, 2.0, 3.0]).unwrap();
    /// assert_eq!(seasonal.update(5.0).unwrap(), 3.0); // phase 0: 0.5 * 5 + 0.5 * 1
    /// ```
    pub fn with_template(season_length: usize, template: S) -> Result<Self> {
        validate_season_length(season_length)?;
        Ok(Self {
            season_length,
            template,
            seasons: Vec::new(),
            n_samples: 0,
            name: "Seasonal",
            _marker: PhantomData,
        })
    }

    pub(crate) fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Returns the number of phases.
    #[must_use]
    pub const fn season_length(&self) -> usize {
        self.season_length
    }

    /// Returns the total number of observations seen across every phase.
    #[must_use]
    pub const fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the phase that the next update will be routed to.
    #[must_use]
    pub const fn next_season(&self) -> usize {
        self.n_samples % self.season_length
    }

    /// Returns the per-phase statistics, empty before fitting.
    #[must_use]
    pub fn seasons(&self) -> &[S] {
        &self.seasons
    }

    /// Returns the statistic of phase `season`, if fitted and in range.
    #[must_use]
    pub fn season(&self, season: usize) -> Option<&S> {
        self.seasons.get(season)
    }
}

impl<T, S> OnlineTransform<T> for Seasonal<T, S>
where
    T: SeriesElement,
    S: OnlineTransform<T> + Clone,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_fitted(&self) -> bool {
        !self.seasons.is_empty()
    }

    fn fit_transform(&mut self, data: &[T]) -> Result<Vec<T>> {
        let mut result = vec![T::nan(); data.len()];
        let mut seasons = Vec::with_capacity(self.season_length);

        for season in 0..self.season_length {
            let phase: Vec<T> = data
                .iter()
                .skip(season)
                .step_by(self.season_length)
                .copied()
                .collect();
            let mut stat = self.template.clone();
            let output = stat.fit_transform(&phase)?;
            for (k, value) in output.into_iter().enumerate() {
                result[season + k * self.season_length] = value;
            }
            seasons.push(stat);
        }

        log::debug!(
            "fitted {}(season_length={}) on {} values",
            self.name,
            self.season_length,
            data.len()
        );
        self.seasons = seasons;
        self.n_samples = data.len();
        Ok(result)
    }

    fn update(&mut self, value: T) -> Result<T> {
        let season = self.next_season();
        let stat = self
            .seasons
            .get_mut(season)
            .ok_or(Error::NotFitted {
                transform: self.name,
            })?;
        let output = stat.update(value)?;
        self.n_samples += 1;
        Ok(output)
    }
}

macro_rules! seasonal_rolling {
    ($alias:ident, $inner:ident, $doc:expr) => {
        #[doc = concat!("Seasonal ", $doc, ": one [`", stringify!($inner), "`] per phase.")]
        pub type $alias<T> = Seasonal<T, $inner<T>>;

        impl<T: SeriesElement> Seasonal<T, $inner<T>> {
            #[doc = concat!("Creates an unfitted seasonal ", $doc, ".")]
            ///
            /// # Errors
            ///
            /// Returns `Error::InvalidSeasonLength` if `season_length` is zero,
            /// `Error::InvalidWindowSize` if `window_size` is zero and
            /// `Error::InvalidMinSamples` if `min_samples` is `Some(0)`.
            pub fn new(
                season_length: usize,
                window_size: usize,
                min_samples: Option<usize>,
            ) -> Result<Self> {
                let template = $inner::new(window_size, min_samples)?;
                Ok(Self::with_template(season_length, template)?.named(stringify!($alias)))
            }
        }
    };
}

macro_rules! seasonal_expanding {
    ($alias:ident, $inner:ident, $doc:expr) => {
        #[doc = concat!("Seasonal ", $doc, ": one [`", stringify!($inner), "`] per phase.")]
        pub type $alias<T> = Seasonal<T, $inner<T>>;

        impl<T: SeriesElement> Seasonal<T, $inner<T>> {
            #[doc = concat!("Creates an unfitted seasonal ", $doc, ".")]
            ///
            /// # Errors
            ///
            /// Returns `Error::InvalidSeasonLength` if `season_length` is zero.
            pub fn new(season_length: usize) -> Result<Self> {
                Ok(Self::with_template(season_length, $inner::new())?.named(stringify!($alias)))
            }
        }
    };
}

seasonal_rolling!(SeasonalRollingMean, RollingMean, "rolling mean");
seasonal_rolling!(SeasonalRollingStd, RollingStd, "rolling standard deviation");
seasonal_rolling!(SeasonalRollingMax, RollingMax, "rolling maximum");
seasonal_rolling!(SeasonalRollingMin, RollingMin, "rolling minimum");
seasonal_expanding!(SeasonalExpandingMean, ExpandingMean, "expanding mean");
seasonal_expanding!(SeasonalExpandingStd, ExpandingStd, "expanding standard deviation");
seasonal_expanding!(SeasonalExpandingMax, ExpandingMax, "expanding maximum");
seasonal_expanding!(SeasonalExpandingMin, ExpandingMin, "expanding minimum");
