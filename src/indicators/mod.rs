//! Streaming technical indicators over a bounded price window.

pub mod snapshot;
pub mod window;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use snapshot::IndicatorEngine;
pub use window::{PriceWindow, DEFAULT_WINDOW_CAPACITY};
