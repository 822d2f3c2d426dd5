//! Computes every indicator the classifier reads from the current window.

use crate::config::EngineConfig;
use crate::indicators::momentum::calculate_rsi;
use crate::indicators::trend::calculate_ema;
use crate::indicators::volatility::calculate_bollinger_bands;
use crate::indicators::window::PriceWindow;
use crate::models::indicators::IndicatorSnapshot;

pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Recompute all indicators from the window contents. Returns `None`
    /// only for an empty window.
    pub fn compute(window: &PriceWindow, config: &EngineConfig) -> Option<IndicatorSnapshot> {
        let closes = window.values();
        let price = window.latest()?;

        Some(IndicatorSnapshot {
            price,
            ema_fast: calculate_ema(closes, config.ema_fast_period)?,
            ema_slow: calculate_ema(closes, config.ema_slow_period)?,
            rsi: calculate_rsi(closes, config.rsi_period),
            bollinger: calculate_bollinger_bands(
                closes,
                config.bollinger_period,
                config.bollinger_width,
            ),
            samples: closes.len(),
        })
    }
}
