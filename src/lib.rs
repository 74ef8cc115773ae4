//! # Launchboard
//!
//! Interactive dashboard backend for historical launch outcome data.
//!
//! This crate loads a fixed CSV of launch records once at startup, derives the
//! selector bounds and site list from it, and serves a single-page dashboard
//! with two charts: a success/failure pie chart per launch site and a
//! payload-vs-outcome scatter chart. Chart specifications are recomputed from
//! pure functions whenever a selector changes; the rendering layer only ever
//! replaces chart content, never patches it.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for chart specs and the view model
//! - [`models`]: Immutable dataset, launch records, and selection state
//! - [`parsing`]: CSV dataset loading (polars-based)
//! - [`services`]: Pure aggregation and filtering functions
//! - [`dashboard`]: Reducer-style update controller mapping selector events
//!   to chart replacement effects
//! - [`http`]: Axum-based HTTP server, handlers, and the embedded front-end
//!
//! The dataset is constructed explicitly at startup and injected into the
//! HTTP state; there is no process-global mutable data.

pub mod api;

pub mod models;

pub mod parsing;

pub mod services;

pub mod dashboard;

#[cfg(feature = "http-server")]
pub mod http;
