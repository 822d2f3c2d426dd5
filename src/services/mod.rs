//! External data sources feeding the engine.

pub mod dexscreener;
pub mod error;
pub mod market_data;

pub use dexscreener::DexScreenerProvider;
pub use error::ProviderError;
pub use market_data::MarketDataProvider;
