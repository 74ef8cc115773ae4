//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types for the HTTP API: chart
//! specifications produced by the service layer and the static view model
//! the front-end builds its controls from. All types derive
//! Serialize/Deserialize for JSON serialization.
//!
//! Chart specifications are opaque replacement values: each reactive update
//! produces a fresh one and the rendering layer swaps it in wholesale.

use serde::{Deserialize, Serialize};

use crate::models::Dataset;

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    /// Slice label. Site name in ALL mode, `"Success"`/`"Failed"` otherwise.
    pub label: String,
    /// Number of launches counted into this slice.
    pub value: u64,
}

/// Declarative pie chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// One point on the payload/outcome scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Payload mass in kg (x axis).
    pub payload_mass_kg: f64,
    /// Launch outcome, 1 = success, 0 = failure (y axis).
    pub outcome: u8,
    /// Booster version category (point color).
    pub booster_category: String,
}

/// Declarative scatter chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

/// One option of the site selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// A labeled tick on the payload slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub position: f64,
    pub label: String,
}

/// Payload range slider description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    /// Lower bound: the dataset's smallest payload mass.
    pub min: f64,
    /// Upper bound: the dataset's largest payload mass.
    pub max: f64,
    pub step: f64,
    /// Display ticks. Fixed at 0 and 10,000 regardless of the actual data
    /// bounds, matching the source dashboard.
    pub marks: Vec<SliderMark>,
    /// Initial handle positions: the dataset's payload bounds.
    pub value: [f64; 2],
}

/// Static description of the dashboard's controls, built once from the
/// loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub title: String,
    /// `ALL` first, then one option per discovered site.
    pub site_options: Vec<SiteOption>,
    pub payload_slider: SliderSpec,
}

impl DashboardView {
    pub const TITLE: &'static str = "SpaceX Launch Records Dashboard";

    pub fn new(dataset: &Dataset) -> Self {
        let mut site_options = vec![SiteOption {
            label: "All Sites".to_string(),
            value: crate::models::SiteSelection::ALL_SENTINEL.to_string(),
        }];
        site_options.extend(dataset.launch_sites().iter().map(|site| SiteOption {
            label: site.clone(),
            value: site.clone(),
        }));

        Self {
            title: Self::TITLE.to_string(),
            site_options,
            payload_slider: SliderSpec {
                min: dataset.min_payload(),
                max: dataset.max_payload(),
                step: 1_000.0,
                marks: vec![
                    SliderMark {
                        position: 0.0,
                        label: "0".to_string(),
                    },
                    SliderMark {
                        position: 10_000.0,
                        label: "10,000".to_string(),
                    },
                ],
                value: [dataset.min_payload(), dataset.max_payload()],
            },
        }
    }
}
