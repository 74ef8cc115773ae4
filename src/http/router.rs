//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/dashboard/update", post(handlers::post_update))
        .route("/charts/launch-outcomes", get(handlers::get_outcome_chart))
        .route("/charts/payload-outcomes", get(handlers::get_payload_chart));

    // Combine all routes
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, LaunchRecord, Outcome};
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let dataset = Dataset::new(vec![LaunchRecord {
            site: "CCAFS LC-40".to_string(),
            payload_mass_kg: 500.0,
            booster_category: "v1.0".to_string(),
            outcome: Outcome::Success,
        }])
        .unwrap();
        let state = AppState::new(Arc::new(dataset));
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
