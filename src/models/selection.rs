//! Transient selector state owned by the UI layer.
//!
//! The aggregation and filter services receive these values as parameters and
//! never mutate them; the only writer is the update controller applying a
//! user event.

use serde::{Deserialize, Serialize};

/// Site selector value: either a concrete launch site or the `ALL` sentinel
/// meaning "no site filter applied".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    All,
    Site(String),
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == Self::ALL_SENTINEL {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        value.to_string()
    }
}

impl SiteSelection {
    /// The reserved selector value for "no site filter".
    pub const ALL_SENTINEL: &'static str = "ALL";

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    /// Whether a record at `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteSelection::All => f.write_str(Self::ALL_SENTINEL),
            SiteSelection::Site(site) => f.write_str(site),
        }
    }
}

/// Closed payload-mass interval `[lo, hi]`, inclusive at both ends.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.lo <= payload_mass_kg && payload_mass_kg <= self.hi
    }
}

/// Current values of both selectors. Created with defaults at startup and
/// replaced wholesale by the update controller; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

/// A selector value that cannot be resolved against the dataset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("unknown launch site `{site}`")]
    UnknownSite { site: String },
}
