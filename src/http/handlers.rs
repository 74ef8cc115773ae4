//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer or the update controller for the actual computation. Handlers are
//! synchronous pure calls over the shared read-only dataset; each request
//! runs to completion independently.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};

use super::dto::{
    HealthResponse, OutcomeChartQuery, PayloadChartQuery, UpdateRequest, UpdateResponse,
};
use super::error::AppError;
use super::frontend;
use super::state::AppState;
use crate::api::{DashboardView, PieChart, ScatterChart};
use crate::dashboard;
use crate::models::{PayloadRange, SiteSelection};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
///
/// The embedded single-page dashboard.
pub async fn index() -> Html<&'static str> {
    Html(frontend::INDEX_HTML)
}

/// GET /health
///
/// Health check endpoint to verify the service is running and data is loaded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset.len(),
    }))
}

/// GET /v1/dashboard
///
/// View model the front-end builds its controls from.
pub async fn get_dashboard(State(state): State<AppState>) -> HandlerResult<DashboardView> {
    Ok(Json(state.view.as_ref().clone()))
}

/// GET /v1/charts/launch-outcomes?site=
///
/// Pie chart specification for the selected site (or all sites).
pub async fn get_outcome_chart(
    State(state): State<AppState>,
    Query(query): Query<OutcomeChartQuery>,
) -> HandlerResult<PieChart> {
    let selection = resolve_site(&state, query.site.as_deref())?;
    Ok(Json(services::aggregate_outcomes(&state.dataset, &selection)))
}

/// GET /v1/charts/payload-outcomes?site=&min=&max=
///
/// Scatter chart specification for the selected site and payload range.
pub async fn get_payload_chart(
    State(state): State<AppState>,
    Query(query): Query<PayloadChartQuery>,
) -> HandlerResult<ScatterChart> {
    let selection = resolve_site(&state, query.site.as_deref())?;
    let range = validated_range(
        query.min.unwrap_or_else(|| state.dataset.min_payload()),
        query.max.unwrap_or_else(|| state.dataset.max_payload()),
    )?;
    Ok(Json(services::scatter_chart(&state.dataset, &selection, range)))
}

/// POST /v1/dashboard/update
///
/// Apply one control-change event to the client's selection state and return
/// the chart replacements to render. A failed update (unknown site) returns
/// 400 and leaves the client state untouched.
pub async fn post_update(
    State(state): State<AppState>,
    Json(request): Json<UpdateRequest>,
) -> HandlerResult<UpdateResponse> {
    if let dashboard::DashboardEvent::PayloadRangeChanged(range) = &request.event {
        validated_range(range.lo, range.hi)?;
    }
    let (next, effects) = dashboard::apply(&state.dataset, &request.state, request.event)?;
    Ok(Json(UpdateResponse {
        state: next,
        effects,
    }))
}

fn resolve_site(state: &AppState, site: Option<&str>) -> Result<SiteSelection, AppError> {
    let value = site.unwrap_or(SiteSelection::ALL_SENTINEL);
    Ok(state.dataset.resolve_site(value)?)
}

/// A payload range must be a real closed interval: finite bounds, lo <= hi.
fn validated_range(lo: f64, hi: f64) -> Result<PayloadRange, AppError> {
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Err(AppError::BadRequest(format!(
            "invalid payload range [{lo}, {hi}]"
        )));
    }
    Ok(PayloadRange::new(lo, hi))
}
