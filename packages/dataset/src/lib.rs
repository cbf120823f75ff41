#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Static incident dataset loading.
//!
//! The dataset is a single JSON document holding the incident table and the
//! five reference tables. It is read once at startup, cleaned of rows whose
//! calendar fields are out of range, and then shared read-only.
//!
//! A small sample dataset is embedded at compile time via [`include_str!`]
//! for demos and tests.

use std::path::{Path, PathBuf};

use fire_map_incident_models::Dataset;
use thiserror::Error;

/// Sample dataset embedded at compile time.
const SAMPLE_JSON: &str = include_str!("../data/sample.json");

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("Failed to read dataset {}: {source}", path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The dataset was not valid JSON or did not match the schema.
    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses and cleans a dataset from JSON text.
///
/// # Errors
///
/// Returns [`DatasetError::Json`] if the text does not match the dataset
/// schema.
pub fn parse_dataset(json: &str) -> Result<Dataset, DatasetError> {
    let dataset: Dataset = serde_json::from_str(json)?;
    Ok(clean(dataset))
}

/// Loads a dataset from a JSON file on disk.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be read or parsed.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&text)?;
    log::info!(
        "Loaded {} incident buckets from {}",
        dataset.incidents.len(),
        path.display()
    );
    Ok(dataset)
}

/// Returns the embedded sample dataset.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed (the file is fixed at compile
/// time and covered by tests).
#[must_use]
pub fn sample_dataset() -> Dataset {
    parse_dataset(SAMPLE_JSON).unwrap_or_else(|e| panic!("Failed to parse sample.json: {e}"))
}

/// Drops rows whose month or hour fall outside the calendar.
fn clean(mut dataset: Dataset) -> Dataset {
    let before = dataset.incidents.len();
    dataset.incidents.retain(|r| (1..=12).contains(&r.month));
    let dropped = before - dataset.incidents.len();
    if dropped > 0 {
        log::warn!("Skipped {dropped} incident buckets with a month outside 1-12");
    }

    let before = dataset.hourly.len();
    dataset.hourly.retain(|r| r.hour < 24);
    let dropped = before - dataset.hourly.len();
    if dropped > 0 {
        log::warn!("Skipped {dropped} hourly rows with an hour outside 0-23");
    }

    dataset
}
