#[cfg(test)]
mod tests {
    use crate::dashboard::controller::{apply, initial_effects, DashboardEvent, RenderEffect};
    use crate::models::{
        Dataset, LaunchRecord, Outcome, PayloadRange, SelectionError, SiteSelection,
    };

    fn record(site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: "FT".to_string(),
            outcome,
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            record("A", 500.0, Outcome::Success),
            record("A", 800.0, Outcome::Failure),
            record("B", 2000.0, Outcome::Success),
        ])
        .unwrap()
    }

    #[test]
    fn initial_render_replaces_both_charts_under_defaults() {
        let dataset = dataset();
        let state = dataset.default_selection();
        let effects = initial_effects(&dataset, &state);

        assert_eq!(effects.len(), 2);
        let RenderEffect::ReplacePieChart(pie) = &effects[0] else {
            panic!("expected pie chart first");
        };
        assert_eq!(pie.title, "Total Success Launches for All Sites");
        let RenderEffect::ReplaceScatterChart(scatter) = &effects[1] else {
            panic!("expected scatter chart second");
        };
        // Default range spans the data bounds, so every record plots.
        assert_eq!(scatter.points.len(), 3);
    }

    #[test]
    fn site_change_rerenders_both_charts() {
        let dataset = dataset();
        let state = dataset.default_selection();

        let (next, effects) = apply(
            &dataset,
            &state,
            DashboardEvent::SiteSelected(SiteSelection::Site("A".to_string())),
        )
        .unwrap();

        assert_eq!(next.site, SiteSelection::Site("A".to_string()));
        assert_eq!(next.payload_range, state.payload_range);
        assert_eq!(effects.len(), 2);
        let RenderEffect::ReplacePieChart(pie) = &effects[0] else {
            panic!("expected pie chart");
        };
        assert_eq!(pie.title, "Success vs. Failed Launches for A");
        let RenderEffect::ReplaceScatterChart(scatter) = &effects[1] else {
            panic!("expected scatter chart");
        };
        assert_eq!(scatter.points.len(), 2);
    }

    #[test]
    fn range_change_rerenders_only_the_scatter_chart() {
        let dataset = dataset();
        let state = dataset.default_selection();

        let (next, effects) = apply(
            &dataset,
            &state,
            DashboardEvent::PayloadRangeChanged(PayloadRange::new(0.0, 1000.0)),
        )
        .unwrap();

        assert_eq!(next.payload_range, PayloadRange::new(0.0, 1000.0));
        assert_eq!(next.site, SiteSelection::All);
        assert_eq!(effects.len(), 1);
        let RenderEffect::ReplaceScatterChart(scatter) = &effects[0] else {
            panic!("expected scatter chart only");
        };
        assert_eq!(scatter.points.len(), 2);
    }

    #[test]
    fn unknown_site_fails_update_without_touching_state() {
        let dataset = dataset();
        let state = dataset.default_selection();

        let err = apply(
            &dataset,
            &state,
            DashboardEvent::SiteSelected(SiteSelection::Site("Z".to_string())),
        )
        .unwrap_err();

        assert_eq!(
            err,
            SelectionError::UnknownSite {
                site: "Z".to_string()
            }
        );
        // Caller keeps the old state; a later valid event still works.
        let (next, _) = apply(
            &dataset,
            &state,
            DashboardEvent::SiteSelected(SiteSelection::All),
        )
        .unwrap();
        assert_eq!(next, state);
    }

    #[test]
    fn events_and_effects_use_the_wire_format_the_page_speaks() {
        let event = DashboardEvent::SiteSelected(SiteSelection::Site("A".to_string()));
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            serde_json::json!({ "SiteSelected": "A" })
        );

        // The ALL sentinel travels as the plain string "ALL".
        let event: DashboardEvent =
            serde_json::from_value(serde_json::json!({ "SiteSelected": "ALL" })).unwrap();
        assert_eq!(event, DashboardEvent::SiteSelected(SiteSelection::All));

        let event: DashboardEvent = serde_json::from_value(
            serde_json::json!({ "PayloadRangeChanged": { "lo": 0.0, "hi": 1000.0 } }),
        )
        .unwrap();
        assert_eq!(
            event,
            DashboardEvent::PayloadRangeChanged(PayloadRange::new(0.0, 1000.0))
        );

        // Effects are externally tagged; the page dispatches on the tag.
        let dataset = dataset();
        let effects = initial_effects(&dataset, &dataset.default_selection());
        let value = serde_json::to_value(&effects[0]).unwrap();
        assert!(value.get("ReplacePieChart").is_some());
        let value = serde_json::to_value(&effects[1]).unwrap();
        assert!(value.get("ReplaceScatterChart").is_some());
    }

    #[test]
    fn replaying_an_event_is_deterministic() {
        let dataset = dataset();
        let state = dataset.default_selection();
        let event = DashboardEvent::PayloadRangeChanged(PayloadRange::new(100.0, 900.0));

        let first = apply(&dataset, &state, event.clone()).unwrap();
        let second = apply(&dataset, &state, event).unwrap();
        assert_eq!(first, second);
    }
}
