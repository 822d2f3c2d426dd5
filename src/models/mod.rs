//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod observation;
pub mod signal;

pub use indicators::{BollingerBandsIndicator, EmaIndicator, IndicatorSnapshot, RsiIndicator};
pub use observation::{ObservationError, ObservationRecord};
pub use signal::{
    BandCondition, ConditionCategory, ConditionSet, CrossSignal, OrderFlow, Recommendation,
    RsiCondition, TickReport, TickResult, TriggerCondition,
};
