//! Normalized market observation fed to the signal engine once per poll.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an observation is refused before it can touch engine state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObservationError {
    #[error("price must be positive and finite, got {0}")]
    InvalidPrice(f64),
    #[error("{field} must be non-negative and finite, got {value}")]
    InvalidQuantity { field: &'static str, value: f64 },
    #[error("24h price change must be finite, got {0}")]
    InvalidChange(f64),
}

/// One tick of market data for a single traded pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub price: f64,
    pub volume_24h: f64,
    pub liquidity_usd: f64,
    pub price_change_24h_pct: f64,
    pub buy_orders: u64,
    pub sell_orders: u64,
    pub symbol: String,
    pub venue: String,
}

impl ObservationRecord {
    /// Build a record, rejecting values the indicator math cannot use.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        price: f64,
        volume_24h: f64,
        liquidity_usd: f64,
        price_change_24h_pct: f64,
        buy_orders: u64,
        sell_orders: u64,
        symbol: impl Into<String>,
        venue: impl Into<String>,
    ) -> Result<Self, ObservationError> {
        let record = Self {
            price,
            volume_24h,
            liquidity_usd,
            price_change_24h_pct,
            buy_orders,
            sell_orders,
            symbol: symbol.into(),
            venue: venue.into(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Re-check the invariants. Fields are public, so the engine calls this
    /// again on every record it receives.
    pub fn validate(&self) -> Result<(), ObservationError> {
        validate_price(self.price)?;
        validate_quantity("volume_24h", self.volume_24h)?;
        validate_quantity("liquidity_usd", self.liquidity_usd)?;
        if !self.price_change_24h_pct.is_finite() {
            return Err(ObservationError::InvalidChange(self.price_change_24h_pct));
        }
        Ok(())
    }
}

pub fn validate_price(price: f64) -> Result<(), ObservationError> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(ObservationError::InvalidPrice(price))
    }
}

fn validate_quantity(field: &'static str, value: f64) -> Result<(), ObservationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ObservationError::InvalidQuantity { field, value })
    }
}
