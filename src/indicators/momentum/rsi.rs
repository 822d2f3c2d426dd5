//! RSI (Relative Strength Index) indicator

use crate::models::indicators::RsiIndicator;

pub const DEFAULT_RSI_PERIOD: u32 = 14;

/// Calculate RSI with Wilder smoothing (alpha = 1 / period).
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Needs more than `period` closes. Both averages start at zero (the first
/// close has no change) and every price change is smoothed in. An average
/// loss of zero yields 100.
pub fn calculate_rsi(closes: &[f64], period: u32) -> Option<RsiIndicator> {
    if period == 0 || closes.len() <= period as usize {
        return None;
    }

    let alpha = 1.0 / period as f64;
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for delta in closes.windows(2).map(|pair| pair[1] - pair[0]) {
        avg_gain = alpha * delta.max(0.0) + (1.0 - alpha) * avg_gain;
        avg_loss = alpha * (-delta).max(0.0) + (1.0 - alpha) * avg_loss;
    }

    let value = if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    };

    Some(RsiIndicator { value, period })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> Option<RsiIndicator> {
    calculate_rsi(closes, DEFAULT_RSI_PERIOD)
}
