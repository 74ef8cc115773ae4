//! Outcome aggregation for the pie chart.

use crate::api::{PieChart, PieSlice};
use crate::models::{Dataset, SiteSelection};

/// Count successes and failures among records at `site`.
fn count_site_outcomes(dataset: &Dataset, site: &str) -> (u64, u64) {
    let mut success = 0u64;
    let mut failure = 0u64;
    for record in dataset.records().iter().filter(|r| r.site == site) {
        if record.outcome.is_success() {
            success += 1;
        } else {
            failure += 1;
        }
    }
    (success, failure)
}

/// Compute the pie chart specification for the current site selection.
///
/// With the `ALL` sentinel each site contributes two slices labeled by site:
/// its success slice (all sites first) and its failure slice, in the
/// dataset's discovered site order. For a concrete site the chart has exactly
/// two slices, `"Success"` and `"Failed"`.
pub fn aggregate_outcomes(dataset: &Dataset, selection: &SiteSelection) -> PieChart {
    match selection {
        SiteSelection::All => {
            let counts: Vec<(&String, u64, u64)> = dataset
                .launch_sites()
                .iter()
                .map(|site| {
                    let (success, failure) = count_site_outcomes(dataset, site);
                    (site, success, failure)
                })
                .collect();

            let mut slices: Vec<PieSlice> = counts
                .iter()
                .map(|(site, success, _)| PieSlice {
                    label: (*site).clone(),
                    value: *success,
                })
                .collect();
            slices.extend(counts.iter().map(|(site, _, failure)| PieSlice {
                label: (*site).clone(),
                value: *failure,
            }));

            PieChart {
                title: "Total Success Launches for All Sites".to_string(),
                slices,
            }
        }
        SiteSelection::Site(site) => {
            let (success, failure) = count_site_outcomes(dataset, site);
            PieChart {
                title: format!("Success vs. Failed Launches for {site}"),
                slices: vec![
                    PieSlice {
                        label: "Success".to_string(),
                        value: success,
                    },
                    PieSlice {
                        label: "Failed".to_string(),
                        value: failure,
                    },
                ],
            }
        }
    }
}
