#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! London borough geography types.
//!
//! These types describe boroughs as spatial grouping units: their land area,
//! the per-borough aggregates derived from incident counts, and the density
//! values that drive the choropleth map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Area substituted for a borough missing from the lookup.
///
/// This is a degenerate value that only prevents division by zero; it is not
/// a real borough area.
pub const FALLBACK_AREA_KM2: f64 = 1.0;

/// Borough name to land area in square kilometres.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoroughAreas(BTreeMap<String, f64>);

impl BoroughAreas {
    #[must_use]
    pub const fn new(areas: BTreeMap<String, f64>) -> Self {
        Self(areas)
    }

    /// Area of `borough` in km², or [`FALLBACK_AREA_KM2`] when the borough
    /// is unknown or its recorded area is not a positive number.
    #[must_use]
    pub fn area_km2(&self, borough: &str) -> f64 {
        self.0
            .get(borough)
            .copied()
            .filter(|area| area.is_finite() && *area > 0.0)
            .unwrap_or(FALLBACK_AREA_KM2)
    }

    /// Whether the lookup has an entry for `borough`.
    #[must_use]
    pub fn contains(&self, borough: &str) -> bool {
        self.0.contains_key(borough)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(borough, area_km2)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, area)| (name.as_str(), *area))
    }
}

impl FromIterator<(String, f64)> for BoroughAreas {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Summed incident count for one borough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoroughCount {
    /// Borough name.
    pub borough: String,
    /// Number of incidents.
    pub count: u64,
}

/// Summed incident count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    /// Zero-padded month key, e.g. `"2021-07"`.
    pub month: String,
    /// Number of incidents in this month.
    pub count: u64,
}

/// Choropleth values for one borough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoroughDensity {
    /// Borough name.
    pub borough: String,
    /// Total incidents under the current year and type filters.
    pub count: u64,
    /// Area used for normalization, in km².
    pub area_km2: f64,
    /// Incidents per km².
    pub density: f64,
    /// Square-root-compressed, max-normalized density in `[0, 1]`.
    pub intensity: f64,
}
