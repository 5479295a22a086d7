//! Online exponentially weighted mean.

use crate::error::{Error, Result};
use crate::kernels::ewm::{ewm_mean, ewm_step};
use crate::traits::{validate_alpha, OnlineTransform, SeriesElement};

/// Online exponentially weighted mean with smoothing factor `alpha`.
///
/// The only state is the last smoothed value. Fitting on an empty series
/// leaves no history, so the first update is adopted as is.
///
/// # Example
///
/// ```
/// use fast_window::online::EwmMean;
/// use fast_window::traits::OnlineTransform;
///
/// let mut ewm = EwmMean::new(0.5).unwrap();
/// assert_eq!(ewm.fit_transform(&[2.0_f64, 4.0]).unwrap(), vec![2.0, 3.0]);
/// assert_eq!(ewm.update(8.0).unwrap(), 5.5);
/// ```
#[derive(Debug, Clone)]
pub struct EwmMean<T> {
    alpha: f64,
    weight: T,
    fitted: bool,
    smoothed: Option<T>,
}

impl<T: SeriesElement> EwmMean<T> {
    /// Creates an unfitted EWM mean.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidAlpha` unless `0 < alpha <= 1`.
    pub fn new(alpha: f64) -> Result<Self> {
        validate_alpha(alpha)?;
        Ok(Self {
            alpha,
            weight: T::from_f64(alpha)?,
            fitted: false,
            smoothed: None,
        })
    }

    /// Returns the smoothing factor.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the current smoothed value, or `None` until an observation has
    /// been seen.
    #[must_use]
    pub const fn smoothed(&self) -> Option<T> {
        self.smoothed
    }
}

impl<T: SeriesElement> OnlineTransform<T> for EwmMean<T> {
    fn name(&self) -> &'static str {
        "EwmMean"
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }

    fn fit_transform(&mut self, data: &[T]) -> Result<Vec<T>> {
        let result = ewm_mean(data, self.alpha)?;
        log::debug!("fitted EwmMean(alpha={}) on {} values", self.alpha, data.len());
        self.smoothed = result.last().copied();
        self.fitted = true;
        Ok(result)
    }

    fn update(&mut self, value: T) -> Result<T> {
        if !self.fitted {
            return Err(Error::NotFitted {
                transform: "EwmMean",
            });
        }
        let next = ewm_step(self.smoothed, value, self.weight);
        self.smoothed = Some(next);
        Ok(next)
    }
}
