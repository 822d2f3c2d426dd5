//! DexScreener market data provider implementation

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use tracing::{debug, warn};

use crate::config::ScreenerConfig;
use crate::models::observation::ObservationRecord;
use crate::services::error::ProviderError;
use crate::services::market_data::MarketDataProvider;

use super::messages::TokenPairsResponse;

pub struct DexScreenerProvider {
    client: reqwest::Client,
    base_url: String,
    chain_id: String,
    retries: usize,
    retry_delay: Duration,
}

impl DexScreenerProvider {
    pub fn new(config: &ScreenerConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: &ScreenerConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            chain_id: config.chain_id.clone(),
            retries: config.fetch_retries,
            retry_delay: Duration::from_millis(config.fetch_retry_delay_ms),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request_pairs(&self, token_address: &str) -> Result<TokenPairsResponse, ProviderError> {
        let url = format!("{}/dex/tokens/{}", self.base_url, token_address);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json::<TokenPairsResponse>().await?)
    }
}

#[async_trait]
impl MarketDataProvider for DexScreenerProvider {
    async fn fetch_observation(
        &self,
        token_address: &str,
    ) -> Result<Option<ObservationRecord>, ProviderError> {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.retry_delay)
            .with_max_times(self.retries);

        let response = (|| self.request_pairs(token_address))
            .retry(backoff)
            .when(ProviderError::is_transient)
            .notify(|err: &ProviderError, delay: Duration| {
                warn!(
                    token = %token_address,
                    error = %err,
                    delay_ms = delay.as_millis() as u64,
                    "DexScreener request failed, retrying"
                );
            })
            .await?;

        let Some(pair) = response.select_pair(&self.chain_id) else {
            debug!(
                token = %token_address,
                chain = %self.chain_id,
                "no pairs listed for token on chain"
            );
            return Ok(None);
        };

        let record = pair.into_observation()?;
        debug!(
            token = %token_address,
            symbol = %record.symbol,
            venue = %record.venue,
            price = record.price,
            "fetched observation"
        );
        Ok(Some(record))
    }
}
