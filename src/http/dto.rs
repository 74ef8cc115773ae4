//! Data Transfer Objects for the HTTP API.
//!
//! Chart and view-model DTOs live in [`crate::api`] and are re-exported
//! here; this module adds the request/response envelope types specific to
//! the HTTP surface.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    DashboardView, PieChart, PieSlice, ScatterChart, ScatterPoint, SiteOption, SliderMark,
    SliderSpec,
};
pub use crate::dashboard::{DashboardEvent, RenderEffect};
pub use crate::models::SelectionState;

/// Query parameters for the pie chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutcomeChartQuery {
    /// Site selector value; defaults to the `ALL` sentinel.
    #[serde(default)]
    pub site: Option<String>,
}

/// Query parameters for the scatter chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PayloadChartQuery {
    /// Site selector value; defaults to the `ALL` sentinel.
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg; defaults to the dataset minimum.
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper payload bound in kg; defaults to the dataset maximum.
    #[serde(default)]
    pub max: Option<f64>,
}

/// Request body for the reducer-driven update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// The client's current selection state.
    pub state: SelectionState,
    /// The control change to apply.
    pub event: DashboardEvent,
}

/// Response of the update endpoint: the next selection state plus the chart
/// replacements to perform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub state: SelectionState,
    pub effects: Vec<RenderEffect>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
}
