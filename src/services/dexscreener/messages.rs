//! Wire types for `GET /dex/tokens/{address}`.

use serde::{Deserialize, Serialize};

use crate::models::observation::ObservationRecord;
use crate::services::error::ProviderError;

const UNKNOWN: &str = "UNKNOWN";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenPairsResponse {
    #[serde(default)]
    pub pairs: Option<Vec<PairData>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairData {
    pub chain_id: String,
    #[serde(default)]
    pub dex_id: Option<String>,
    #[serde(default)]
    pub price_usd: Option<String>,
    #[serde(default)]
    pub volume: Option<WindowedValue>,
    #[serde(default)]
    pub liquidity: Option<Liquidity>,
    #[serde(default)]
    pub price_change: Option<WindowedValue>,
    #[serde(default)]
    pub base_token: Option<BaseToken>,
    #[serde(default)]
    pub txns: Option<Transactions>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowedValue {
    #[serde(default)]
    pub h24: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Liquidity {
    #[serde(default)]
    pub usd: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseToken {
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transactions {
    #[serde(default)]
    pub h24: Option<TransactionCounts>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TransactionCounts {
    #[serde(default)]
    pub buys: u64,
    #[serde(default)]
    pub sells: u64,
}

impl PairData {
    pub fn volume_24h(&self) -> f64 {
        self.volume.as_ref().and_then(|v| v.h24).unwrap_or(0.0)
    }

    /// Normalize into a validated observation.
    pub fn into_observation(self) -> Result<ObservationRecord, ProviderError> {
        let raw_price = self
            .price_usd
            .as_deref()
            .ok_or_else(|| ProviderError::MalformedPair("missing priceUsd".to_string()))?;
        let price: f64 = raw_price.trim().parse().map_err(|_| {
            ProviderError::MalformedPair(format!("unparsable priceUsd '{}'", raw_price))
        })?;

        let counts = self.txns.as_ref().and_then(|t| t.h24).unwrap_or_default();

        let record = ObservationRecord::new(
            price,
            self.volume_24h(),
            self.liquidity.as_ref().and_then(|l| l.usd).unwrap_or(0.0),
            self.price_change.as_ref().and_then(|c| c.h24).unwrap_or(0.0),
            counts.buys,
            counts.sells,
            self.base_token
                .and_then(|t| t.symbol)
                .unwrap_or_else(|| UNKNOWN.to_string()),
            self.dex_id.unwrap_or_else(|| UNKNOWN.to_string()),
        )?;
        Ok(record)
    }
}

impl TokenPairsResponse {
    /// Highest 24h-volume pair on `chain_id`, if any. The first listed pair
    /// wins a tie.
    pub fn select_pair(self, chain_id: &str) -> Option<PairData> {
        self.pairs?
            .into_iter()
            .filter(|pair| pair.chain_id == chain_id)
            .reduce(|best, pair| {
                if pair.volume_24h() > best.volume_24h() {
                    pair
                } else {
                    best
                }
            })
    }
}
