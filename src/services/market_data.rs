//! Market data provider interface.

use async_trait::async_trait;

use crate::models::observation::ObservationRecord;
use crate::services::error::ProviderError;

#[async_trait]
pub trait MarketDataProvider {
    /// Fetch the latest observation for a token. `Ok(None)` means the source
    /// has no data for it this cycle.
    async fn fetch_observation(
        &self,
        token_address: &str,
    ) -> Result<Option<ObservationRecord>, ProviderError>;
}
