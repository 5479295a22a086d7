//! Fixed-capacity ring buffer holding the most recent observations.
//!
//! [`Window`] backs every bounded online statistic and the [`Shift`](crate::online::Shift)
//! delay line. Storage is allocated once; after the buffer fills, each push
//! overwrites the oldest slot in place and advances the head index.
//!
//! # Invariants
//!
//! - `len() <= capacity()`
//! - iteration is oldest-first
//! - once full, every push evicts exactly one element, the oldest (strict FIFO)
//!
//! # Example
//!
//! ```
//! use fast_window::window::Window;
//!
//! let mut window = Window::new(3).unwrap();
//! assert_eq!(window.push(1.0_f64), None);
//! assert_eq!(window.push(2.0), None);
//! assert_eq!(window.push(3.0), None);
//! assert_eq!(window.push(4.0), Some(1.0));
//! assert_eq!(window.to_vec(), vec![2.0, 3.0, 4.0]);
//! ```

use crate::error::Result;
use crate::traits::validate_window_size;

/// A bounded FIFO buffer of the last `capacity` values.
#[derive(Debug, Clone)]
pub struct Window<T> {
    buf: Vec<T>,
    /// Slot of the oldest element once the buffer is full; 0 before that.
    head: usize,
    capacity: usize,
}

impl<T: Copy> Window<T> {
    /// Creates an empty window holding at most `capacity` values.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindowSize` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        validate_window_size(capacity)?;
        Ok(Self {
            buf: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        })
    }

    /// Creates a window seeded with the last `min(capacity, data.len())` values of `data`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindowSize` if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use fast_window::window::Window;
    ///
    /// let window = Window::from_tail(2, &[1.0_f64, 2.0, 3.0]).unwrap();
    /// assert_eq!(window.to_vec(), vec![2.0, 3.0]);
    /// ```
    pub fn from_tail(capacity: usize, data: &[T]) -> Result<Self> {
        let mut window = Self::new(capacity)?;
        let start = data.len().saturating_sub(capacity);
        window.buf.extend_from_slice(&data[start..]);
        Ok(window)
    }

    /// Pushes a value, returning the evicted oldest value if the window was full.
    #[inline]
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.buf.len() < self.capacity {
            self.buf.push(value);
            return None;
        }
        let evicted = std::mem::replace(&mut self.buf[self.head], value);
        self.head += 1;
        if self.head == self.capacity {
            self.head = 0;
        }
        Some(evicted)
    }

    /// Returns the number of values currently held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the window holds no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns true once the window holds `capacity` values.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.buf.len() == self.capacity
    }

    /// Returns the maximum number of values the window holds.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over the values oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        let (newer, older) = self.buf.split_at(self.head);
        older.iter().chain(newer.iter()).copied()
    }

    /// Copies the values into a `Vec`, oldest-first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_new_rejects_zero_capacity() {
        assert!(matches!(
            Window::<f64>::new(0),
            Err(Error::InvalidWindowSize { .. })
        ));
    }

    #[test]
    fn test_push_below_capacity() {
        let mut window = Window::new(3).unwrap();
        assert!(window.is_empty());
        assert_eq!(window.push(1.0_f64), None);
        assert_eq!(window.push(2.0), None);
        assert_eq!(window.len(), 2);
        assert!(!window.is_full());
        assert_eq!(window.to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_push_evicts_oldest_in_order() {
        let mut window = Window::new(3).unwrap();
        for v in 1..=3 {
            window.push(f64::from(v));
        }
        assert!(window.is_full());

        for v in 4..=10 {
            let evicted = window.push(f64::from(v));
            assert_eq!(evicted, Some(f64::from(v - 3)));
            assert_eq!(window.len(), 3);
            assert_eq!(
                window.to_vec(),
                vec![f64::from(v - 2), f64::from(v - 1), f64::from(v)]
            );
        }
    }

    #[test]
    fn test_capacity_one() {
        let mut window = Window::new(1).unwrap();
        assert_eq!(window.push(5.0_f64), None);
        assert_eq!(window.push(6.0), Some(5.0));
        assert_eq!(window.push(7.0), Some(6.0));
        assert_eq!(window.to_vec(), vec![7.0]);
    }

    #[test]
    fn test_from_tail_longer_than_capacity() {
        let window = Window::from_tail(3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!(window.is_full());
        assert_eq!(window.to_vec(), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_from_tail_shorter_than_capacity() {
        let mut window = Window::from_tail(4, &[1.0_f64, 2.0]).unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(window.push(3.0), None);
        assert_eq!(window.push(4.0), None);
        assert_eq!(window.push(5.0), Some(1.0));
        assert_eq!(window.to_vec(), vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_from_tail_empty() {
        let window = Window::<f64>::from_tail(3, &[]).unwrap();
        assert!(window.is_empty());
        assert_eq!(window.iter().count(), 0);
    }
}
