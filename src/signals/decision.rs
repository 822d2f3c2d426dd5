//! Reduces a condition set to a single recommendation.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::models::signal::{
    BandCondition, ConditionSet, CrossSignal, Recommendation, RsiCondition, TriggerCondition,
};

/// Exit levels attached to a BUY.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopLossTakeProfit {
    pub take_profit: f64,
    pub stop_loss: f64,
}

impl StopLossTakeProfit {
    pub fn from_entry(entry: f64, take_profit_pct: f64, stop_loss_pct: f64) -> Self {
        Self {
            take_profit: entry * (1.0 + take_profit_pct),
            stop_loss: entry * (1.0 - stop_loss_pct),
        }
    }
}

pub struct RecommendationEngine<'a> {
    config: &'a EngineConfig,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// BUY is checked before SELL, so a tick with triggers on both sides
    /// always recommends BUY.
    pub fn decide(&self, conditions: &ConditionSet, price: f64) -> Recommendation {
        let buy_triggers = buy_triggers(conditions);
        if !buy_triggers.is_empty() {
            let exits = StopLossTakeProfit::from_entry(
                price,
                self.config.take_profit_pct,
                self.config.stop_loss_pct,
            );
            return Recommendation::Buy {
                entry_price: price,
                take_profit: exits.take_profit,
                stop_loss: exits.stop_loss,
                conditions_met: buy_triggers,
            };
        }

        let sell_triggers = sell_triggers(conditions);
        if !sell_triggers.is_empty() {
            return Recommendation::Sell {
                current_price: price,
                conditions_met: sell_triggers,
            };
        }

        Recommendation::NoSignal {
            conditions_met: conditions.present_categories(),
        }
    }
}

pub fn buy_triggers(conditions: &ConditionSet) -> Vec<TriggerCondition> {
    let mut triggers = Vec::new();
    if conditions.ema_cross == Some(CrossSignal::GoldenCross) {
        triggers.push(TriggerCondition::GoldenCross);
    }
    if conditions.rsi == Some(RsiCondition::Oversold) {
        triggers.push(TriggerCondition::RsiOversold);
    }
    if conditions.bollinger == Some(BandCondition::TouchLower) {
        triggers.push(TriggerCondition::LowerBandTouch);
    }
    triggers
}

pub fn sell_triggers(conditions: &ConditionSet) -> Vec<TriggerCondition> {
    let mut triggers = Vec::new();
    if conditions.ema_cross == Some(CrossSignal::DeathCross) {
        triggers.push(TriggerCondition::DeathCross);
    }
    if conditions.rsi == Some(RsiCondition::Overbought) {
        triggers.push(TriggerCondition::RsiOverbought);
    }
    if conditions.bollinger == Some(BandCondition::TouchUpper) {
        triggers.push(TriggerCondition::UpperBandTouch);
    }
    triggers
}
