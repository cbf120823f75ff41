#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident type taxonomy and static dataset record types.
//!
//! This crate defines the three top-level callout classifications used by
//! the London Fire Brigade and the record shapes of every table in the
//! static dataset. All records are pre-aggregated tallies: one record is a
//! count bucket, not a physical incident.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Top-level callout classification.
///
/// Variants are declared in alphabetical order of their display names so
/// that ordered collections keyed by this type list them the same way the
/// breakdown charts do.
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
pub enum IncidentType {
    /// Automatic or good-intent alarm with no fire found
    #[serde(rename = "False Alarm")]
    #[strum(serialize = "False Alarm")]
    FalseAlarm,
    /// Actual fire
    #[serde(rename = "Fire")]
    #[strum(serialize = "Fire")]
    Fire,
    /// Non-fire emergency assistance (lock-outs, flooding, lift releases)
    #[serde(rename = "Special Service")]
    #[strum(serialize = "Special Service")]
    SpecialService,
}

impl IncidentType {
    /// Returns all variants of this enum, in display-name order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::FalseAlarm, Self::Fire, Self::SpecialService]
    }

    /// Series order used by the yearly stacked breakdown.
    #[must_use]
    pub const fn stacked_order() -> &'static [Self] {
        &[Self::Fire, Self::FalseAlarm, Self::SpecialService]
    }
}

/// One incident count bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    /// Calendar year (2018-2025 in the shipped dataset).
    pub year: u16,
    /// Calendar month, 1-12.
    pub month: u8,
    /// London borough name.
    pub borough: String,
    /// Callout classification.
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    /// Pre-aggregated tally for this bucket.
    pub count: u64,
}

/// Callouts per hour of day for one incident type, across all years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyCount {
    /// Hour of day, 0-23.
    pub hour: u8,
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    pub count: u64,
}

/// Average first-pump response time for a borough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTime {
    pub borough: String,
    /// Mean seconds from call to first pump arrival.
    pub avg_seconds: f64,
}

/// Yearly total for one incident type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyCount {
    pub year: u16,
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    pub count: u64,
}

/// Callout count for one special service sub-type (e.g. "Effecting entry").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialServiceCount {
    pub service: String,
    pub count: u64,
}

/// Fire count for one property category (e.g. "Dwelling", "Outdoor").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirePropertyCount {
    pub property: String,
    pub count: u64,
}

/// The complete static dataset, loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Incident counts by year, month, borough and type.
    pub incidents: Vec<IncidentRecord>,
    /// Hour-of-day distribution by type.
    #[serde(default)]
    pub hourly: Vec<HourlyCount>,
    /// Average response time per borough.
    #[serde(default)]
    pub response_times: Vec<ResponseTime>,
    /// Yearly totals by type.
    #[serde(default)]
    pub yearly: Vec<YearlyCount>,
    /// Special service sub-type counts, in presentation order.
    #[serde(default)]
    pub special_services: Vec<SpecialServiceCount>,
    /// Fire counts by property category, in presentation order.
    #[serde(default)]
    pub fire_properties: Vec<FirePropertyCount>,
}

impl Dataset {
    /// Returns the `(first, last)` years present in the incident table, or
    /// `None` when it is empty.
    #[must_use]
    pub fn year_bounds(&self) -> Option<(u16, u16)> {
        let first = self.incidents.iter().map(|r| r.year).min()?;
        let last = self.incidents.iter().map(|r| r.year).max()?;
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn incident_type_display_matches_dataset_labels() {
        assert_eq!(IncidentType::FalseAlarm.to_string(), "False Alarm");
        assert_eq!(IncidentType::Fire.as_ref(), "Fire");
        assert_eq!(
            IncidentType::from_str("Special Service").unwrap(),
            IncidentType::SpecialService
        );
        assert!(IncidentType::from_str("special service").is_err());
    }

    #[test]
    fn all_is_sorted_by_display_name() {
        let names: Vec<String> = IncidentType::all()
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn record_deserializes_type_field() {
        let record: IncidentRecord = serde_json::from_value(serde_json::json!({
            "year": 2020,
            "month": 3,
            "borough": "Camden",
            "type": "False Alarm",
            "count": 12
        }))
        .unwrap();
        assert_eq!(record.incident_type, IncidentType::FalseAlarm);
        assert_eq!(record.count, 12);
    }

    #[test]
    fn year_bounds_of_empty_dataset_is_none() {
        assert_eq!(Dataset::default().year_bounds(), None);
    }
}
