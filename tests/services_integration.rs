//! End-to-end tests over the bundled dataset: load the CSV the server ships
//! with, then drive the aggregation, filtering, and update-controller layers
//! against it.

use std::path::Path;

use launchboard::api::DashboardView;
use launchboard::dashboard::{apply, initial_effects, DashboardEvent, RenderEffect};
use launchboard::models::{PayloadRange, SiteSelection};
use launchboard::parsing::load_dataset;
use launchboard::services::{aggregate_outcomes, filter_records};

const DATASET: &str = "data/spacex_launch_dash.csv";

#[test]
fn bundled_dataset_loads_with_expected_shape() {
    let dataset = load_dataset(Path::new(DATASET)).unwrap();

    assert_eq!(dataset.len(), 40);
    assert_eq!(
        dataset.launch_sites(),
        &[
            "CCAFS LC-40".to_string(),
            "VAFB SLC-4E".to_string(),
            "KSC LC-39A".to_string(),
            "CCAFS SLC-40".to_string(),
        ]
    );
    assert_eq!(dataset.min_payload(), 0.0);
    assert_eq!(dataset.max_payload(), 9600.0);
}

#[test]
fn per_site_counts_conserve_totals_on_real_data() {
    let dataset = load_dataset(Path::new(DATASET)).unwrap();

    for site in dataset.launch_sites() {
        let chart = aggregate_outcomes(&dataset, &SiteSelection::Site(site.clone()));
        let total: u64 = chart.slices.iter().map(|s| s.value).sum();
        let expected = dataset.records().iter().filter(|r| &r.site == site).count() as u64;
        assert_eq!(total, expected, "site {site}");
    }

    // ALL-mode success slices sum to the global success count.
    let all = aggregate_outcomes(&dataset, &SiteSelection::All);
    let sites = dataset.launch_sites().len();
    let success_total: u64 = all.slices[..sites].iter().map(|s| s.value).sum();
    let global: u64 = dataset
        .records()
        .iter()
        .filter(|r| r.outcome.is_success())
        .count() as u64;
    assert_eq!(success_total, global);
}

#[test]
fn full_range_filter_is_identity_on_real_data() {
    let dataset = load_dataset(Path::new(DATASET)).unwrap();
    let range = PayloadRange::new(dataset.min_payload(), dataset.max_payload());
    let filtered = filter_records(&dataset, &SiteSelection::All, range);
    assert_eq!(filtered.len(), dataset.len());
}

#[test]
fn controller_walkthrough_over_real_data() {
    let dataset = load_dataset(Path::new(DATASET)).unwrap();
    let state = dataset.default_selection();

    // Page load: both charts render under the defaults.
    let effects = initial_effects(&dataset, &state);
    assert_eq!(effects.len(), 2);

    // Select a site: both charts replaced.
    let (state, effects) = apply(
        &dataset,
        &state,
        DashboardEvent::SiteSelected(SiteSelection::Site("KSC LC-39A".to_string())),
    )
    .unwrap();
    assert_eq!(effects.len(), 2);
    let RenderEffect::ReplacePieChart(pie) = &effects[0] else {
        panic!("expected pie replacement");
    };
    assert_eq!(pie.title, "Success vs. Failed Launches for KSC LC-39A");

    // Narrow the payload range: only the scatter chart is replaced.
    let (_, effects) = apply(
        &dataset,
        &state,
        DashboardEvent::PayloadRangeChanged(PayloadRange::new(2000.0, 4000.0)),
    )
    .unwrap();
    assert_eq!(effects.len(), 1);
    let RenderEffect::ReplaceScatterChart(scatter) = &effects[0] else {
        panic!("expected scatter replacement");
    };
    for point in &scatter.points {
        assert!((2000.0..=4000.0).contains(&point.payload_mass_kg));
    }
}

#[test]
fn view_model_mirrors_dataset_bounds_but_keeps_fixed_ticks() {
    let dataset = load_dataset(Path::new(DATASET)).unwrap();
    let view = DashboardView::new(&dataset);

    assert_eq!(view.site_options.len(), dataset.launch_sites().len() + 1);
    assert_eq!(view.site_options[0].value, "ALL");
    assert_eq!(view.payload_slider.min, 0.0);
    assert_eq!(view.payload_slider.max, 9600.0);
    assert_eq!(view.payload_slider.value, [0.0, 9600.0]);
    // Display ticks stay at 0 and 10,000 regardless of the data bounds.
    assert_eq!(view.payload_slider.marks.len(), 2);
    assert_eq!(view.payload_slider.marks[0].label, "0");
    assert_eq!(view.payload_slider.marks[1].label, "10,000");
}
