//! Stateful per-asset engine: window update, indicators, cross check,
//! classification and recommendation, one observation at a time.

use chrono::Utc;
use tracing::{debug, trace};

use crate::config::{ConfigError, EngineConfig};
use crate::indicators::{IndicatorEngine, PriceWindow};
use crate::models::observation::{ObservationError, ObservationRecord};
use crate::models::signal::{TickReport, TickResult};
use crate::signals::classifier::SignalClassifier;
use crate::signals::cross::CrossState;
use crate::signals::decision::RecommendationEngine;

/// Closes needed before every indicator is defined.
pub const MIN_PRIMING_SAMPLES: usize = 21;

/// Owns the state for exactly one asset. Run one engine per asset.
#[derive(Debug, Clone)]
pub struct SignalEngine {
    config: EngineConfig,
    window: PriceWindow,
    cross: CrossState,
}

impl SignalEngine {
    /// Build an engine; the config is validated up front so every tick
    /// either evaluates fully or leaves state untouched.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: EngineConfig) -> Self {
        let window = PriceWindow::new(config.window_capacity);
        Self {
            config,
            window,
            cross: CrossState::new(),
        }
    }

    /// Push a historical close without evaluating it. Cross state is left
    /// alone, so no cross can fire against primed history.
    pub fn seed(&mut self, record: &ObservationRecord) -> Result<(), ObservationError> {
        record.validate()?;
        self.window.push(record.price)?;
        trace!(price = record.price, samples = self.window.len(), "seeded close");
        Ok(())
    }

    /// Evaluate one observation. `None` means the data source had nothing
    /// this cycle and leaves all state untouched, as does an invalid record.
    pub fn process_tick(
        &mut self,
        record: Option<ObservationRecord>,
    ) -> Result<TickResult, ObservationError> {
        let Some(record) = record else {
            return Ok(TickResult::NoData);
        };
        record.validate()?;
        self.window.push(record.price)?;

        let Some(indicators) = IndicatorEngine::compute(&self.window, &self.config) else {
            return Ok(TickResult::NoData);
        };

        let cross = self.cross.detect(indicators.ema9(), indicators.ema21());
        let conditions = SignalClassifier::new(&self.config).classify(
            &indicators,
            cross,
            record.buy_orders,
            record.sell_orders,
        );
        self.cross.record(indicators.ema9(), indicators.ema21());

        let recommendation = RecommendationEngine::new(&self.config).decide(&conditions, record.price);
        let notes = conditions.describe(&indicators);

        debug!(
            symbol = %record.symbol,
            price = record.price,
            ema9 = indicators.ema9(),
            ema21 = indicators.ema21(),
            rsi = ?indicators.rsi_value(),
            samples = indicators.samples,
            action = recommendation.action(),
            "processed tick"
        );

        Ok(TickResult::Evaluated(Box::new(TickReport {
            observation: record,
            indicators,
            conditions,
            notes,
            recommendation,
            evaluated_at: Utc::now(),
        })))
    }

    pub fn window(&self) -> &PriceWindow {
        &self.window
    }

    pub fn cross_state(&self) -> &CrossState {
        &self.cross
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True once RSI and Bollinger Bands are both defined.
    pub fn is_primed(&self) -> bool {
        self.window.len() > self.config.rsi_period as usize
            && self.window.len() >= self.config.bollinger_period as usize
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::with_valid_config(EngineConfig::default())
    }
}
