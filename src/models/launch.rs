//! Launch records and the immutable dataset built from them.

use serde::{Deserialize, Serialize};

use super::selection::{PayloadRange, SelectionError, SelectionState, SiteSelection};

/// Binary outcome of a launch attempt.
///
/// The source data encodes this as the `class` column: 1 for success,
/// 0 for failure. Rows with any other value are rejected at load time,
/// so every record in a [`Dataset`] carries exactly one of these two.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Decode the numeric `class` value. Returns `None` for anything
    /// other than 0 or 1.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    /// Numeric encoding used on the scatter chart's y axis.
    pub fn as_class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// One row of the launch dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Launch site identifier, e.g. `CCAFS LC-40`.
    pub site: String,
    /// Payload mass in kilograms. Non-negative.
    pub payload_mass_kg: f64,
    /// Booster version category, e.g. `FT` or `v1.1`.
    pub booster_category: String,
    /// Launch outcome.
    pub outcome: Outcome,
}

/// The full launch dataset, immutable after construction.
///
/// Derived values (`min_payload`, `max_payload`, `launch_sites`) are computed
/// once in [`Dataset::new`]. Sites are kept in first-seen order so chart
/// slices stay stable across recomputations.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    launch_sites: Vec<String>,
}

impl Dataset {
    /// Build a dataset from parsed records, computing the derived bounds and
    /// site list. An empty record set is rejected since the payload bounds
    /// would be undefined.
    pub fn new(records: Vec<LaunchRecord>) -> Result<Self, EmptyDataset> {
        if records.is_empty() {
            return Err(EmptyDataset);
        }

        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;
        let mut launch_sites: Vec<String> = Vec::new();

        for record in &records {
            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);
            if !launch_sites.iter().any(|s| s == &record.site) {
                launch_sites.push(record.site.clone());
            }
        }

        Ok(Self {
            records,
            min_payload,
            max_payload,
            launch_sites,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest payload mass across all records, in kg.
    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    /// Largest payload mass across all records, in kg.
    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Distinct launch sites in first-seen order.
    pub fn launch_sites(&self) -> &[String] {
        &self.launch_sites
    }

    /// Resolve a raw selector value against this dataset's site set.
    ///
    /// `"ALL"` resolves to the sentinel; any other value must be a discovered
    /// site or the selection fails.
    pub fn resolve_site(&self, value: &str) -> Result<SiteSelection, SelectionError> {
        if value == SiteSelection::ALL_SENTINEL {
            return Ok(SiteSelection::All);
        }
        if self.launch_sites.iter().any(|s| s == value) {
            Ok(SiteSelection::Site(value.to_string()))
        } else {
            Err(SelectionError::UnknownSite {
                site: value.to_string(),
            })
        }
    }

    /// The selection state both charts render under at page load:
    /// no site filter, full payload range.
    pub fn default_selection(&self) -> SelectionState {
        SelectionState {
            site: SiteSelection::All,
            payload_range: PayloadRange::new(self.min_payload, self.max_payload),
        }
    }
}

/// A dataset must contain at least one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("dataset contains no launch records")]
pub struct EmptyDataset;

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: "FT".to_string(),
            outcome,
        }
    }

    #[test]
    fn outcome_from_class_accepts_only_binary_values() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::from_class(-1), None);
    }

    #[test]
    fn dataset_derives_bounds_and_sites_in_first_seen_order() {
        let dataset = Dataset::new(vec![
            record("B", 2000.0, Outcome::Success),
            record("A", 500.0, Outcome::Failure),
            record("B", 800.0, Outcome::Success),
        ])
        .unwrap();

        assert_eq!(dataset.min_payload(), 500.0);
        assert_eq!(dataset.max_payload(), 2000.0);
        assert_eq!(dataset.launch_sites(), &["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(Dataset::new(vec![]), Err(EmptyDataset)));
    }

    #[test]
    fn resolve_site_accepts_sentinel_and_known_sites() {
        let dataset = Dataset::new(vec![record("A", 500.0, Outcome::Success)]).unwrap();

        assert_eq!(dataset.resolve_site("ALL").unwrap(), SiteSelection::All);
        assert_eq!(
            dataset.resolve_site("A").unwrap(),
            SiteSelection::Site("A".to_string())
        );
        assert!(dataset.resolve_site("Z").is_err());
    }

    #[test]
    fn default_selection_spans_full_range() {
        let dataset = Dataset::new(vec![
            record("A", 500.0, Outcome::Success),
            record("A", 1500.0, Outcome::Failure),
        ])
        .unwrap();

        let state = dataset.default_selection();
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(500.0, 1500.0));
    }
}
