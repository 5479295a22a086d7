//! Online lag operator (delay line).

use crate::error::{Error, Result};
use crate::kernels::shift::shift_array;
use crate::traits::{validate_offset, OnlineTransform, SeriesElement};
use crate::window::Window;

/// Delays the stream by `offset` observations: `update` at time `t` returns `x[t - offset]`.
///
/// The pending values live in a [`Window`] of capacity `offset`; once it is
/// full, the value evicted by each push is exactly the one `offset` steps back.
///
/// # Example
///
/// ```
/// use fast_window::online::Shift;
/// use fast_window::traits::OnlineTransform;
///
/// let mut shift = Shift::new(2).unwrap();
/// let fitted = shift.fit_transform(&[1.0_f64, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!(fitted[0].is_nan() && fitted[1].is_nan());
/// assert_eq!(&fitted[2..], &[1.0, 2.0, 3.0]);
/// assert_eq!(shift.update(6.0).unwrap(), 4.0);
/// assert_eq!(shift.update(7.0).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct Shift<T> {
    offset: usize,
    pending: Option<Window<T>>,
}

impl<T: SeriesElement> Shift<T> {
    /// Creates an unfitted shift.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOffset` if `offset` is zero.
    pub fn new(offset: usize) -> Result<Self> {
        validate_offset(offset)?;
        Ok(Self {
            offset,
            pending: None,
        })
    }

    /// Returns the lag.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the buffered values oldest-first, or `None` before fitting.
    #[must_use]
    pub fn window(&self) -> Option<Vec<T>> {
        self.pending.as_ref().map(Window::to_vec)
    }
}

impl<T: SeriesElement> OnlineTransform<T> for Shift<T> {
    fn name(&self) -> &'static str {
        "Shift"
    }

    fn is_fitted(&self) -> bool {
        self.pending.is_some()
    }

    fn fit_transform(&mut self, data: &[T]) -> Result<Vec<T>> {
        let result = shift_array(data, self.offset)?;
        log::debug!("fitted Shift(offset={}) on {} values", self.offset, data.len());
        self.pending = Some(Window::from_tail(self.offset, data)?);
        Ok(result)
    }

    fn update(&mut self, value: T) -> Result<T> {
        let pending = self
            .pending
            .as_mut()
            .ok_or(Error::NotFitted { transform: "Shift" })?;
        Ok(pending.push(value).unwrap_or_else(T::nan))
    }
}
