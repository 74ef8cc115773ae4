use std::path::{Path, PathBuf};

use polars::prelude::*;
use tracing::{info, warn};

use crate::models::{Dataset, EmptyDataset, LaunchRecord, Outcome};

/// Required CSV columns.
pub const SITE_COL: &str = "Launch Site";
pub const PAYLOAD_COL: &str = "Payload Mass (kg)";
pub const BOOSTER_COL: &str = "Booster Version Category";
pub const OUTCOME_COL: &str = "class";

/// Errors raised while loading the launch dataset. All of these are fatal
/// at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read dataset file `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("column `{column}` has an unexpected type: {source}")]
    ColumnType {
        column: &'static str,
        #[source]
        source: PolarsError,
    },
    #[error("failed to cast dataset columns: {0}")]
    Cast(#[source] PolarsError),
    #[error(transparent)]
    Empty(#[from] EmptyDataset),
}

/// Parse the launch CSV into a Polars DataFrame.
pub fn parse_launch_csv(csv_path: &Path) -> Result<DataFrame, LoadError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))
        .map_err(|e| LoadError::Read {
            path: csv_path.to_path_buf(),
            source: e,
        })?
        .finish()
        .map_err(|e| LoadError::Read {
            path: csv_path.to_path_buf(),
            source: e,
        })?;

    // Get existing column names
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    // Cast columns to expected types if they were inferred incorrectly
    let mut lazy_df = df.lazy();

    // Payload mass should be Float64 (may be inferred as i64 if no decimal point)
    if column_names.contains(&PAYLOAD_COL.to_string()) {
        lazy_df = lazy_df.with_column(
            when(col(PAYLOAD_COL).is_not_null())
                .then(col(PAYLOAD_COL).cast(DataType::Float64))
                .otherwise(lit(NULL).cast(DataType::Float64))
                .alias(PAYLOAD_COL),
        );
    }

    // Outcome class should be Int64
    if column_names.contains(&OUTCOME_COL.to_string()) {
        lazy_df = lazy_df.with_column(
            when(col(OUTCOME_COL).is_not_null())
                .then(col(OUTCOME_COL).cast(DataType::Int64))
                .otherwise(lit(NULL).cast(DataType::Int64))
                .alias(OUTCOME_COL),
        );
    }

    lazy_df.collect().map_err(LoadError::Cast)
}

/// Convert a parsed DataFrame into launch records.
///
/// Rows with a null cell in any required column, or an outcome value other
/// than 0 or 1, are dropped with a warning rather than failing the load.
pub fn dataframe_to_records(df: &DataFrame) -> Result<Vec<LaunchRecord>, LoadError> {
    let sites = df
        .column(SITE_COL)
        .map_err(|_| LoadError::MissingColumn(SITE_COL))?
        .str()
        .map_err(|e| LoadError::ColumnType {
            column: SITE_COL,
            source: e,
        })?;
    let payloads = df
        .column(PAYLOAD_COL)
        .map_err(|_| LoadError::MissingColumn(PAYLOAD_COL))?
        .f64()
        .map_err(|e| LoadError::ColumnType {
            column: PAYLOAD_COL,
            source: e,
        })?;
    let boosters = df
        .column(BOOSTER_COL)
        .map_err(|_| LoadError::MissingColumn(BOOSTER_COL))?
        .str()
        .map_err(|e| LoadError::ColumnType {
            column: BOOSTER_COL,
            source: e,
        })?;
    let classes = df
        .column(OUTCOME_COL)
        .map_err(|_| LoadError::MissingColumn(OUTCOME_COL))?
        .i64()
        .map_err(|e| LoadError::ColumnType {
            column: OUTCOME_COL,
            source: e,
        })?;

    let mut records = Vec::with_capacity(df.height());
    let mut dropped = 0usize;

    for i in 0..df.height() {
        let (site, payload, booster, class) = match (
            sites.get(i),
            payloads.get(i),
            boosters.get(i),
            classes.get(i),
        ) {
            (Some(site), Some(payload), Some(booster), Some(class)) => {
                (site, payload, booster, class)
            }
            _ => {
                warn!(row = i, "dropping launch record with missing fields");
                dropped += 1;
                continue;
            }
        };

        // Payload mass is non-negative by definition.
        if payload < 0.0 || !payload.is_finite() {
            warn!(row = i, payload, "dropping launch record with invalid payload mass");
            dropped += 1;
            continue;
        }

        let Some(outcome) = Outcome::from_class(class) else {
            warn!(row = i, class, "dropping launch record with non-binary outcome");
            dropped += 1;
            continue;
        };

        records.push(LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: booster.to_string(),
            outcome,
        });
    }

    if dropped > 0 {
        warn!(dropped, "dropped malformed launch records during load");
    }

    Ok(records)
}

/// Load the launch dataset from a CSV file. This is the single loader entry
/// point used by the server at startup.
pub fn load_dataset(csv_path: &Path) -> Result<Dataset, LoadError> {
    let df = parse_launch_csv(csv_path)?;
    let records = dataframe_to_records(&df)?;
    let dataset = Dataset::new(records)?;

    info!(
        records = dataset.len(),
        sites = dataset.launch_sites().len(),
        min_payload = dataset.min_payload(),
        max_payload = dataset.max_payload(),
        "launch dataset loaded"
    );

    Ok(dataset)
}
