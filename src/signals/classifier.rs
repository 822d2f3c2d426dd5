//! Turns indicator readings and order flow into named conditions.

use crate::config::EngineConfig;
use crate::models::indicators::{BollingerBandsIndicator, IndicatorSnapshot};
use crate::models::signal::{
    BandCondition, ConditionSet, CrossSignal, OrderFlow, RsiCondition,
};

pub struct SignalClassifier<'a> {
    config: &'a EngineConfig,
}

impl<'a> SignalClassifier<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    pub fn classify(
        &self,
        snapshot: &IndicatorSnapshot,
        cross: Option<CrossSignal>,
        buy_orders: u64,
        sell_orders: u64,
    ) -> ConditionSet {
        ConditionSet {
            ema_cross: cross,
            rsi: snapshot.rsi_value().and_then(|rsi| self.analyze_rsi(rsi)),
            bollinger: snapshot
                .bollinger
                .as_ref()
                .and_then(|bands| self.analyze_bands(snapshot.price, bands)),
            order_flow: analyze_order_flow(buy_orders, sell_orders),
        }
    }

    fn analyze_rsi(&self, rsi: f64) -> Option<RsiCondition> {
        if rsi < self.config.rsi_oversold {
            Some(RsiCondition::Oversold)
        } else if rsi > self.config.rsi_overbought {
            Some(RsiCondition::Overbought)
        } else {
            None
        }
    }

    // Lower touch is checked first so a collapsed band resolves to it.
    fn analyze_bands(&self, price: f64, bands: &BollingerBandsIndicator) -> Option<BandCondition> {
        let tolerance = self.config.band_tolerance;
        if price <= bands.lower * (1.0 + tolerance) {
            Some(BandCondition::TouchLower)
        } else if price >= bands.upper * (1.0 - tolerance) {
            Some(BandCondition::TouchUpper)
        } else {
            None
        }
    }
}

/// Ties count as bearish.
pub fn analyze_order_flow(buy_orders: u64, sell_orders: u64) -> OrderFlow {
    if buy_orders > sell_orders {
        OrderFlow::Bullish
    } else {
        OrderFlow::Bearish
    }
}
