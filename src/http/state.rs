//! Application state for the HTTP server.

use std::sync::Arc;

use crate::api::DashboardView;
use crate::models::Dataset;

/// Shared application state passed to all handlers.
///
/// The dataset is loaded once at startup and injected here; it is read-only
/// for the process lifetime, so sharing it across handlers needs no locking.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    /// View model built once from the dataset at startup.
    pub view: Arc<DashboardView>,
}

impl AppState {
    /// Create application state around a loaded dataset.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let view = Arc::new(DashboardView::new(&dataset));
        Self { dataset, view }
    }
}
