//! Two-tick EMA cross detection.

use serde::{Deserialize, Serialize};

use crate::models::signal::CrossSignal;

/// EMA pair from the previous tick. Both fields are `None` until the first
/// tick has been recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CrossState {
    pub prev_ema9: Option<f64>,
    pub prev_ema21: Option<f64>,
}

impl CrossState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare the current EMA pair against the stored one. Must run before
    /// `record` on the same tick.
    pub fn detect(&self, ema9: f64, ema21: f64) -> Option<CrossSignal> {
        let (prev_fast, prev_slow) = (self.prev_ema9?, self.prev_ema21?);

        if ema9 > ema21 && prev_fast <= prev_slow {
            Some(CrossSignal::GoldenCross)
        } else if ema9 < ema21 && prev_fast >= prev_slow {
            Some(CrossSignal::DeathCross)
        } else {
            None
        }
    }

    pub fn record(&mut self, ema9: f64, ema21: f64) {
        self.prev_ema9 = Some(ema9);
        self.prev_ema21 = Some(ema21);
    }

    pub fn is_seeded(&self) -> bool {
        self.prev_ema9.is_some() && self.prev_ema21.is_some()
    }
}
