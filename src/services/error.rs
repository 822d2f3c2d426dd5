use thiserror::Error;

use crate::models::observation::ObservationError;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("malformed pair data: {0}")]
    MalformedPair(String),
    #[error("invalid observation: {0}")]
    InvalidObservation(#[from] ObservationError),
}

impl ProviderError {
    /// Failures worth retrying: timeouts, connection errors, 429 and 5xx.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Http(err) => err.is_timeout() || err.is_connect(),
            ProviderError::Status { status, .. } => *status == 429 || *status >= 500,
            ProviderError::MalformedPair(_) | ProviderError::InvalidObservation(_) => false,
        }
    }
}
