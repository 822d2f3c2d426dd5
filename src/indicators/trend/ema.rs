//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::EmaIndicator;

/// Calculate the EMA of `closes` for a span.
///
/// The recurrence is seeded with the first close and runs over the whole
/// slice, so a single close yields that close for every span.
pub fn calculate_ema(closes: &[f64], period: u32) -> Option<EmaIndicator> {
    let value = math::ema(closes, period as usize)?;
    Some(EmaIndicator { value, period })
}

/// Calculate multiple EMAs at once
pub fn calculate_emas(closes: &[f64], periods: &[u32]) -> Vec<EmaIndicator> {
    periods
        .iter()
        .filter_map(|&period| calculate_ema(closes, period))
        .collect()
}
