//! Runtime configuration loaded from the environment.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::indicators::DEFAULT_WINDOW_CAPACITY;

pub const DEFAULT_DEXSCREENER_URL: &str = "https://api.dexscreener.com/latest";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
    #[error("invalid poll schedule '{expression}': {reason}")]
    InvalidSchedule { expression: String, reason: String },
}

/// Current deployment environment ("production", "sandbox", ...).
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT")
        .unwrap_or_else(|_| "sandbox".to_string())
        .to_lowercase()
}

/// Indicator periods and decision thresholds for one engine instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub window_capacity: usize,
    pub ema_fast_period: u32,
    pub ema_slow_period: u32,
    pub rsi_period: u32,
    pub bollinger_period: u32,
    pub bollinger_width: f64,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    /// Fractional slack around the bands when testing for a touch.
    pub band_tolerance: f64,
    pub take_profit_pct: f64,
    pub stop_loss_pct: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            ema_fast_period: 9,
            ema_slow_period: 21,
            rsi_period: 14,
            bollinger_period: 20,
            bollinger_width: 2.0,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            band_tolerance: 0.01,
            take_profit_pct: 0.03,
            stop_loss_pct: 0.01,
        }
    }
}

impl EngineConfig {
    /// Reject periods and thresholds that would leave an indicator
    /// permanently undefined or a decision meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_capacity == 0 {
            return Err(invalid("window_capacity", self.window_capacity));
        }
        if self.ema_fast_period == 0 {
            return Err(invalid("ema_fast_period", self.ema_fast_period));
        }
        if self.ema_slow_period == 0 {
            return Err(invalid("ema_slow_period", self.ema_slow_period));
        }
        if self.rsi_period == 0 {
            return Err(invalid("rsi_period", self.rsi_period));
        }
        // sample std needs two points
        if self.bollinger_period < 2 {
            return Err(invalid("bollinger_period", self.bollinger_period));
        }
        if !self.bollinger_width.is_finite() || self.bollinger_width < 0.0 {
            return Err(invalid("bollinger_width", self.bollinger_width));
        }
        if !(0.0..=100.0).contains(&self.rsi_oversold) {
            return Err(invalid("rsi_oversold", self.rsi_oversold));
        }
        if !(0.0..=100.0).contains(&self.rsi_overbought) || self.rsi_overbought <= self.rsi_oversold
        {
            return Err(invalid("rsi_overbought", self.rsi_overbought));
        }
        if !(0.0..1.0).contains(&self.band_tolerance) {
            return Err(invalid("band_tolerance", self.band_tolerance));
        }
        if !self.take_profit_pct.is_finite() || self.take_profit_pct < 0.0 {
            return Err(invalid("take_profit_pct", self.take_profit_pct));
        }
        if !(0.0..1.0).contains(&self.stop_loss_pct) {
            return Err(invalid("stop_loss_pct", self.stop_loss_pct));
        }
        Ok(())
    }
}

fn invalid(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Settings for the screener binary and its collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenerConfig {
    pub token_address: Option<String>,
    pub api_base_url: String,
    pub chain_id: String,
    pub poll_interval_seconds: u64,
    pub priming_samples: usize,
    pub priming_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub fetch_retries: usize,
    pub fetch_retry_delay_ms: u64,
    pub engine: EngineConfig,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            token_address: None,
            api_base_url: DEFAULT_DEXSCREENER_URL.to_string(),
            chain_id: "solana".to_string(),
            poll_interval_seconds: 60,
            priming_samples: 21,
            priming_delay_ms: 1000,
            request_timeout_secs: 10,
            fetch_retries: 2,
            fetch_retry_delay_ms: 250,
            engine: EngineConfig::default(),
        }
    }
}

impl ScreenerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup; unset keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let token_address = lookup("TOKEN_ADDRESS")
            .map(|address| address.trim().to_string())
            .filter(|address| !address.is_empty());

        let poll_interval_seconds =
            parse_or(&lookup, "POLL_INTERVAL_SECONDS", defaults.poll_interval_seconds)?;
        if poll_interval_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "POLL_INTERVAL_SECONDS".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(Self {
            token_address,
            api_base_url: lookup("DEXSCREENER_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            chain_id: lookup("CHAIN_ID").unwrap_or(defaults.chain_id),
            poll_interval_seconds,
            priming_samples: parse_or(&lookup, "PRIMING_SAMPLES", defaults.priming_samples)?,
            priming_delay_ms: parse_or(&lookup, "PRIMING_DELAY_MS", defaults.priming_delay_ms)?,
            request_timeout_secs: parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
            fetch_retries: parse_or(&lookup, "FETCH_RETRIES", defaults.fetch_retries)?,
            fetch_retry_delay_ms: parse_or(
                &lookup,
                "FETCH_RETRY_DELAY_MS",
                defaults.fetch_retry_delay_ms,
            )?,
            engine: defaults.engine,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}
