#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter state and derived view types for the incident dashboard.
//!
//! The filter state is the single piece of mutable state in the dashboard;
//! every chart consumes one of the derived views defined here, recomputed
//! from the static dataset whenever the filter changes.

use std::collections::BTreeMap;
use std::str::FromStr;

use fire_map_geography_models::{BoroughCount, MonthlyCount};
use fire_map_incident_models::{IncidentRecord, IncidentType};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// First year covered by the shipped dataset.
pub const FIRST_YEAR: u16 = 2018;
/// Last year covered by the shipped dataset.
pub const LAST_YEAR: u16 = 2025;

/// Inclusive year bounds.
///
/// `min > max` is a valid, if degenerate, state: it matches no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub min: u16,
    pub max: u16,
}

impl YearRange {
    /// The full span of the shipped dataset.
    pub const FULL: Self = Self::new(FIRST_YEAR, LAST_YEAR);

    #[must_use]
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// Whether `year` lies within the bounds, inclusive on both ends.
    #[must_use]
    pub const fn contains(self, year: u16) -> bool {
        self.min <= year && year <= self.max
    }

    /// Whether `min > max`, which makes the range empty.
    #[must_use]
    pub const fn is_inverted(self) -> bool {
        self.min > self.max
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Selected incident type, or the `"All"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TypeFilter {
    #[default]
    All,
    Only(IncidentType),
}

impl TypeFilter {
    /// Label of the sentinel that disables type filtering.
    pub const ALL_LABEL: &'static str = "All";

    /// Whether a record of type `incident_type` passes this filter.
    #[must_use]
    pub fn matches(self, incident_type: IncidentType) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == incident_type,
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_LABEL),
            Self::Only(incident_type) => write!(f, "{incident_type}"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = strum::ParseError;

    /// Parses the exact `"All"` label or an exact incident type label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LABEL {
            Ok(Self::All)
        } else {
            IncidentType::from_str(s).map(Self::Only)
        }
    }
}

impl From<TypeFilter> for String {
    fn from(filter: TypeFilter) -> Self {
        filter.to_string()
    }
}

impl TryFrom<String> for TypeFilter {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IncidentType> for TypeFilter {
    fn from(incident_type: IncidentType) -> Self {
        Self::Only(incident_type)
    }
}

/// The dashboard's complete filter state. Always fully defined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub year_range: YearRange,
    pub selected_type: TypeFilter,
    /// `None` means every borough.
    pub selected_borough: Option<String>,
}

impl std::fmt::Display for FilterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "years {}, type {}, borough {}",
            self.year_range,
            self.selected_type,
            self.selected_borough.as_deref().unwrap_or("All London")
        )
    }
}

/// The six views every filter change recomputes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViews {
    /// Records passing the year, type and borough predicates.
    pub filtered_data: Vec<IncidentRecord>,
    /// Borough to count under the year and type predicates only.
    pub borough_totals: BTreeMap<String, u64>,
    /// Type to count under the year and borough predicates only.
    pub type_breakdown: BTreeMap<IncidentType, u64>,
    /// Monthly counts, ascending by month key.
    pub monthly_trend: Vec<MonthlyCount>,
    /// Borough counts, descending, ties in first-encounter order.
    pub borough_ranking: Vec<BoroughCount>,
    pub total_incidents: u64,
}

/// Share of one incident type in the type breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeShare {
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    pub count: u64,
    /// Percentage of the breakdown total, rounded to one decimal.
    pub percent: f64,
}

/// Ranking entry as shown by the top-boroughs bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedBorough {
    pub borough: String,
    pub count: u64,
    /// Whether this is the currently selected borough.
    pub selected: bool,
}

/// 24-slot hourly series for one incident type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlySeries {
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    /// Counts for hours 0 through 23.
    pub counts: Vec<u64>,
}

/// Hour-of-day distribution across all incident types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyDistribution {
    /// `"00:00"` through `"23:00"`.
    pub labels: Vec<String>,
    pub series: Vec<HourlySeries>,
}

/// Yearly counts for one incident type, aligned with [`YearlyBreakdown::years`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySeries {
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    pub counts: Vec<u64>,
}

/// Stacked yearly breakdown by type within the selected year range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyBreakdown {
    /// Distinct years present, ascending.
    pub years: Vec<u16>,
    pub series: Vec<YearlySeries>,
}

/// Response-time band relative to the slowest and fastest boroughs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseTier {
    /// More than 60% of the way from fastest to slowest
    Slow,
    /// Between 30% and 60% of the way from fastest to slowest
    Medium,
    /// Within 30% of the fastest borough
    Fast,
}

/// One borough in the response-time ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeEntry {
    pub borough: String,
    pub avg_seconds: f64,
    /// Average in minutes, rounded to one decimal.
    pub minutes: f64,
    pub tier: ResponseTier,
    /// Whether this is the currently selected borough.
    pub selected: bool,
}

/// Fire count for one property category with its share of all fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirePropertyShare {
    pub property: String,
    pub count: u64,
    /// Percentage of the table total, rounded to one decimal.
    pub percent: f64,
}
