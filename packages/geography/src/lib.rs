#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! London borough reference geography.
//!
//! Provides the borough area lookup (embedded at compile time, overridable
//! from a TOML file), loading of the borough boundary `GeoJSON` collection,
//! and enrichment of boundary features with choropleth density values.

pub mod areas;
pub mod boundaries;
pub mod choropleth;

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading reference geography.
#[derive(Debug, Error)]
pub enum GeographyError {
    /// A reference file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The area lookup was not valid TOML.
    #[error("Invalid borough area TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The boundary file was not valid `GeoJSON`.
    #[error("Invalid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    /// The boundary file parsed, but is not a `FeatureCollection`.
    #[error("Expected a GeoJSON FeatureCollection, found {found}")]
    NotFeatureCollection {
        /// The `GeoJSON` object type that was found instead.
        found: &'static str,
    },
}
