#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation engine for the incident dashboard.
//!
//! Every public function here is a pure function of the static
//! [`Dataset`](fire_map_incident_models::Dataset) and the current
//! [`FilterState`](fire_map_analytics_models::FilterState). None of them can
//! fail: an empty dataset, an empty filtered subset or an inverted year range
//! all produce empty views and zero sums.
//!
//! [`controller::InteractionController`] owns the filter state and applies
//! user transitions; [`dashboard::Dashboard`] ties the two together and
//! memoizes the derived views on the filter state.

pub mod controller;
pub mod dashboard;
pub mod density;
pub mod filter;
pub mod reference;
pub mod views;

#[cfg(test)]
pub(crate) mod fixtures {
    use fire_map_incident_models::{IncidentRecord, IncidentType};

    pub fn record(
        year: u16,
        month: u8,
        borough: &str,
        incident_type: IncidentType,
        count: u64,
    ) -> IncidentRecord {
        IncidentRecord {
            year,
            month,
            borough: borough.to_string(),
            incident_type,
            count,
        }
    }

    /// The three-record worked example: two Camden buckets in 2020 and one
    /// Brent bucket in 2021.
    pub fn camden_brent() -> Vec<IncidentRecord> {
        vec![
            record(2020, 1, "Camden", IncidentType::Fire, 10),
            record(2020, 1, "Camden", IncidentType::FalseAlarm, 5),
            record(2021, 1, "Brent", IncidentType::Fire, 7),
        ]
    }

    /// A larger spread across years, months, boroughs and types.
    pub fn mixed() -> Vec<IncidentRecord> {
        vec![
            record(2018, 12, "Westminster", IncidentType::FalseAlarm, 40),
            record(2019, 1, "Camden", IncidentType::Fire, 3),
            record(2019, 1, "Westminster", IncidentType::SpecialService, 12),
            record(2019, 2, "Hackney", IncidentType::Fire, 9),
            record(2020, 7, "Camden", IncidentType::SpecialService, 20),
            record(2020, 7, "Hackney", IncidentType::FalseAlarm, 11),
            record(2021, 3, "Bromley", IncidentType::Fire, 9),
            record(2022, 10, "Westminster", IncidentType::Fire, 6),
            record(2025, 12, "Camden", IncidentType::FalseAlarm, 2),
        ]
    }
}
