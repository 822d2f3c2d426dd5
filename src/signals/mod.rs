//! Signal evaluation: cross detection, classification and decisions.

pub mod classifier;
pub mod cross;
pub mod decision;
pub mod engine;

pub use classifier::*;
pub use cross::*;
pub use decision::*;
pub use engine::*;
