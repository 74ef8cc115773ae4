//! Payload filtering for the scatter chart.

use crate::api::{ScatterChart, ScatterPoint};
use crate::models::{Dataset, LaunchRecord, PayloadRange, SiteSelection};

/// Select the records matching both the site selection and the payload
/// range (inclusive at both ends), preserving the dataset's record order.
pub fn filter_records<'a>(
    dataset: &'a Dataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| selection.matches(&r.site) && range.contains(r.payload_mass_kg))
        .collect()
}

/// Compute the scatter chart specification for the current selection:
/// payload mass on x, outcome class on y, colored by booster category.
pub fn scatter_chart(
    dataset: &Dataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let title = match selection {
        SiteSelection::All => {
            "Correlation Between Payload and Launch Success for All Sites".to_string()
        }
        SiteSelection::Site(site) => {
            format!("Correlation Between Payload and Launch Success for {site}")
        }
    };

    let points = filter_records(dataset, selection, range)
        .into_iter()
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome.as_class(),
            booster_category: r.booster_category.clone(),
        })
        .collect();

    ScatterChart { title, points }
}
