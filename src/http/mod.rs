//! HTTP server module for the dashboard.
//!
//! This module exposes the dashboard as a small axum application: the
//! embedded single-page front-end, a view-model endpoint the page builds its
//! controls from, chart-spec endpoints, and the update endpoint driving the
//! reducer in [`crate::dashboard`]. The rendering layer (the page itself) is
//! an external collaborator with a "replace chart content" contract only.

pub mod dto;
pub mod error;
pub mod frontend;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
