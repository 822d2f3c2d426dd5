//! DexScreener token-pairs API.

pub mod messages;
pub mod provider;

pub use messages::{PairData, TokenPairsResponse};
pub use provider::DexScreenerProvider;
