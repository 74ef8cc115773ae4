//! Reducer mapping selector events to chart replacement effects.

use serde::{Deserialize, Serialize};

use crate::api::{PieChart, ScatterChart};
use crate::models::{Dataset, PayloadRange, SelectionError, SelectionState, SiteSelection};
use crate::services;

/// A user interaction with one of the dashboard controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DashboardEvent {
    SiteSelected(SiteSelection),
    PayloadRangeChanged(PayloadRange),
}

/// An instruction to the rendering layer. Every effect is a full
/// replacement of a chart placeholder's content, never an incremental patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderEffect {
    ReplacePieChart(PieChart),
    ReplaceScatterChart(ScatterChart),
}

/// Apply one event to the current selection state.
///
/// A site change re-renders both charts; a payload range change re-renders
/// only the scatter chart. Both recomputations read only the dataset and the
/// next state, so the two effects are independent and may be rendered in
/// either order.
///
/// A site value outside the dataset's site set fails the whole update: the
/// state is left unchanged and no effect is produced, so neither chart shows
/// partial output.
pub fn apply(
    dataset: &Dataset,
    state: &SelectionState,
    event: DashboardEvent,
) -> Result<(SelectionState, Vec<RenderEffect>), SelectionError> {
    match event {
        DashboardEvent::SiteSelected(site) => {
            // Re-validate even pre-parsed selections; events may originate
            // from stale or hand-crafted clients.
            let site = dataset.resolve_site(&site.to_string())?;
            let next = SelectionState {
                site,
                payload_range: state.payload_range,
            };
            let effects = vec![
                RenderEffect::ReplacePieChart(services::aggregate_outcomes(dataset, &next.site)),
                RenderEffect::ReplaceScatterChart(services::scatter_chart(
                    dataset,
                    &next.site,
                    next.payload_range,
                )),
            ];
            Ok((next, effects))
        }
        DashboardEvent::PayloadRangeChanged(payload_range) => {
            let next = SelectionState {
                site: state.site.clone(),
                payload_range,
            };
            let effects = vec![RenderEffect::ReplaceScatterChart(services::scatter_chart(
                dataset,
                &next.site,
                next.payload_range,
            ))];
            Ok((next, effects))
        }
    }
}

/// Effects for the initial page render: both charts under the default
/// selection (`ALL`, full payload range).
pub fn initial_effects(dataset: &Dataset, state: &SelectionState) -> Vec<RenderEffect> {
    vec![
        RenderEffect::ReplacePieChart(services::aggregate_outcomes(dataset, &state.site)),
        RenderEffect::ReplaceScatterChart(services::scatter_chart(
            dataset,
            &state.site,
            state.payload_range,
        )),
    ]
}
