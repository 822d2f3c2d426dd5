//! Helpers shared by the indicator implementations.

pub mod math;
