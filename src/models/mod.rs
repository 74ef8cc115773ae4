//! Domain model for launch records and dashboard selection state.

pub mod launch;
pub mod selection;

pub use launch::*;
pub use selection::*;
