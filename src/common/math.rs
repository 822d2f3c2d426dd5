//! Numeric primitives over close-price slices.

/// Smoothing factor for an EMA of the given span.
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One step of the EMA recurrence.
pub fn ema_from_previous(value: f64, previous: f64, alpha: f64) -> f64 {
    value * alpha + previous * (1.0 - alpha)
}

/// Exponential moving average over the whole slice, seeded with the first
/// value (no warm-up averaging).
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 {
        return None;
    }
    let (first, rest) = values.split_first()?;
    let alpha = ema_alpha(period);
    Some(
        rest.iter()
            .fold(*first, |acc, &value| ema_from_previous(value, acc, alpha)),
    )
}

/// Simple mean of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let tail = &values[values.len() - period..];
    Some(tail.iter().sum::<f64>() / period as f64)
}

/// Sample standard deviation (N - 1 denominator) of the last `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period < 2 || values.len() < period {
        return None;
    }
    let mean = sma(values, period)?;
    let tail = &values[values.len() - period..];
    let variance = tail
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (period - 1) as f64;
    Some(variance.sqrt())
}
