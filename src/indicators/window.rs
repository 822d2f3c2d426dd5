//! Bounded FIFO of recent close prices.

use crate::models::observation::{validate_price, ObservationError};

pub const DEFAULT_WINDOW_CAPACITY: usize = 100;

/// Fixed-capacity price history, oldest first.
///
/// Backed by a buffer of at most `2 * capacity` slots: eviction only moves a
/// start offset, and the dead prefix is compacted once it reaches
/// `capacity`, so each push is amortized O(1) and `values()` is always one
/// contiguous slice.
#[derive(Debug, Clone)]
pub struct PriceWindow {
    buffer: Vec<f64>,
    start: usize,
    capacity: usize,
}

impl PriceWindow {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Vec::with_capacity(capacity * 2),
            start: 0,
            capacity,
        }
    }

    /// Append a close price, evicting the oldest one once over capacity.
    /// Non-positive or non-finite prices are rejected and leave the window
    /// unchanged.
    pub fn push(&mut self, price: f64) -> Result<(), ObservationError> {
        validate_price(price)?;

        self.buffer.push(price);
        if self.buffer.len() - self.start > self.capacity {
            self.start += 1;
        }
        if self.start >= self.capacity {
            self.buffer.drain(..self.start);
            self.start = 0;
        }
        Ok(())
    }

    pub fn values(&self) -> &[f64] {
        &self.buffer[self.start..]
    }

    pub fn latest(&self) -> Option<f64> {
        self.values().last().copied()
    }

    pub fn len(&self) -> usize {
        self.buffer.len() - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for PriceWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_CAPACITY)
    }
}
