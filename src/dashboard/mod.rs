//! Update controller for the dashboard.
//!
//! The source dashboard wires framework callbacks to control changes. Here
//! the same contract is a pure reducer: each UI event is applied to the
//! current selection state and yields the next state plus the chart
//! replacement effects the rendering layer must perform.

pub mod controller;

#[cfg(test)]
mod controller_tests;

pub use controller::{apply, initial_effects, DashboardEvent, RenderEffect};
