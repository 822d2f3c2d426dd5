//! Core application primitives (runtime, scheduling, presentation)

pub mod report;
pub mod runtime;
pub mod scheduler;

pub use runtime::*;
pub use scheduler::*;
