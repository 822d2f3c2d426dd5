use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmaIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub period: u32,
    pub std_dev: f64,
}

/// Indicator values for one tick.
///
/// `rsi` and `bollinger` stay `None` until the window holds enough history;
/// they are never filled with placeholder numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub price: f64,
    pub ema_fast: EmaIndicator,
    pub ema_slow: EmaIndicator,
    pub rsi: Option<RsiIndicator>,
    pub bollinger: Option<BollingerBandsIndicator>,
    pub samples: usize,
}

impl IndicatorSnapshot {
    pub fn ema9(&self) -> f64 {
        self.ema_fast.value
    }

    pub fn ema21(&self) -> f64 {
        self.ema_slow.value
    }

    pub fn rsi_value(&self) -> Option<f64> {
        self.rsi.map(|r| r.value)
    }
}
