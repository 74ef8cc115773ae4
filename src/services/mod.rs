//! Service layer: the pure functions behind both charts.
//!
//! Services read the immutable dataset and the current selector values and
//! produce fresh chart specifications. They hold no state and have no side
//! effects, so every invocation with the same inputs yields the same output.

pub mod outcomes;

pub mod payload;


pub use outcomes::aggregate_outcomes;
pub use payload::{filter_records, scatter_chart};
