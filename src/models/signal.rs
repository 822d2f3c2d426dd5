//! Condition labels, recommendations and the per-tick result.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::indicators::IndicatorSnapshot;
use crate::models::observation::ObservationRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrossSignal {
    GoldenCross,
    DeathCross,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RsiCondition {
    Oversold,
    Overbought,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BandCondition {
    TouchLower,
    TouchUpper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderFlow {
    Bullish,
    Bearish,
}

/// The four condition categories, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    EmaCross,
    Rsi,
    Bollinger,
    OrderFlow,
}

impl ConditionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionCategory::EmaCross => "ema_cross",
            ConditionCategory::Rsi => "rsi",
            ConditionCategory::Bollinger => "bollinger",
            ConditionCategory::OrderFlow => "order_flow",
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conditions that fired on one tick. `None` means the category did not
/// trigger; order flow always resolves to a side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSet {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ema_cross: Option<CrossSignal>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rsi: Option<RsiCondition>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bollinger: Option<BandCondition>,
    pub order_flow: OrderFlow,
}

impl ConditionSet {
    /// Categories present this tick, in evaluation order.
    pub fn present_categories(&self) -> Vec<ConditionCategory> {
        let mut categories = Vec::with_capacity(4);
        if self.ema_cross.is_some() {
            categories.push(ConditionCategory::EmaCross);
        }
        if self.rsi.is_some() {
            categories.push(ConditionCategory::Rsi);
        }
        if self.bollinger.is_some() {
            categories.push(ConditionCategory::Bollinger);
        }
        categories.push(ConditionCategory::OrderFlow);
        categories
    }

    /// One human-readable note per present condition.
    pub fn describe(&self, snapshot: &IndicatorSnapshot) -> Vec<String> {
        let mut notes = Vec::new();
        match self.ema_cross {
            Some(CrossSignal::GoldenCross) => notes.push(format!(
                "Golden cross: EMA {} crossed above EMA {}",
                snapshot.ema_fast.period, snapshot.ema_slow.period
            )),
            Some(CrossSignal::DeathCross) => notes.push(format!(
                "Death cross: EMA {} crossed below EMA {}",
                snapshot.ema_fast.period, snapshot.ema_slow.period
            )),
            None => {}
        }
        if let (Some(condition), Some(rsi)) = (self.rsi, snapshot.rsi_value()) {
            match condition {
                RsiCondition::Oversold => notes.push(format!("RSI oversold ({:.2})", rsi)),
                RsiCondition::Overbought => notes.push(format!("RSI overbought ({:.2})", rsi)),
            }
        }
        match self.bollinger {
            Some(BandCondition::TouchLower) => {
                notes.push("Price near lower Bollinger band".to_string())
            }
            Some(BandCondition::TouchUpper) => {
                notes.push("Price near upper Bollinger band".to_string())
            }
            None => {}
        }
        match self.order_flow {
            OrderFlow::Bullish => notes.push("Buy orders exceed sell orders".to_string()),
            OrderFlow::Bearish => notes.push("Sell orders match or exceed buy orders".to_string()),
        }
        notes
    }
}

/// Sub-conditions that can drive a BUY or SELL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCondition {
    GoldenCross,
    RsiOversold,
    LowerBandTouch,
    DeathCross,
    RsiOverbought,
    UpperBandTouch,
}

impl fmt::Display for TriggerCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TriggerCondition::GoldenCross => "Golden Cross",
            TriggerCondition::RsiOversold => "RSI Oversold",
            TriggerCondition::LowerBandTouch => "Lower BB Touch",
            TriggerCondition::DeathCross => "Death Cross",
            TriggerCondition::RsiOverbought => "RSI Overbought",
            TriggerCondition::UpperBandTouch => "Upper BB Touch",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Buy {
        entry_price: f64,
        take_profit: f64,
        stop_loss: f64,
        conditions_met: Vec<TriggerCondition>,
    },
    Sell {
        current_price: f64,
        conditions_met: Vec<TriggerCondition>,
    },
    NoSignal {
        conditions_met: Vec<ConditionCategory>,
    },
}

impl Recommendation {
    pub fn action(&self) -> &'static str {
        match self {
            Recommendation::Buy { .. } => "BUY",
            Recommendation::Sell { .. } => "SELL",
            Recommendation::NoSignal { .. } => "NO_SIGNAL",
        }
    }
}

/// Everything the engine derived from one observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub observation: ObservationRecord,
    pub indicators: IndicatorSnapshot,
    pub conditions: ConditionSet,
    pub notes: Vec<String>,
    pub recommendation: Recommendation,
    pub evaluated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TickResult {
    NoData,
    Evaluated(Box<TickReport>),
}

impl TickResult {
    pub fn report(&self) -> Option<&TickReport> {
        match self {
            TickResult::NoData => None,
            TickResult::Evaluated(report) => Some(report.as_ref()),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, TickResult::NoData)
    }
}
