//! Filter predicates.
//!
//! Each view applies some subset of the three predicates. Keeping them as
//! separate functions makes the per-view omissions explicit at the call
//! site.

use fire_map_analytics_models::FilterState;
use fire_map_incident_models::IncidentRecord;

/// `min <= year <= max`.
#[must_use]
pub const fn in_years(filter: &FilterState, record: &IncidentRecord) -> bool {
    filter.year_range.contains(record.year)
}

/// Selected type is `"All"` or equals the record's type.
#[must_use]
pub fn in_type(filter: &FilterState, record: &IncidentRecord) -> bool {
    filter.selected_type.matches(record.incident_type)
}

/// No borough selected, or the selection equals the record's borough.
#[must_use]
pub fn in_borough(filter: &FilterState, record: &IncidentRecord) -> bool {
    filter
        .selected_borough
        .as_deref()
        .is_none_or(|borough| borough == record.borough)
}

/// All three predicates.
#[must_use]
pub fn matches(filter: &FilterState, record: &IncidentRecord) -> bool {
    in_years(filter, record) && in_type(filter, record) && in_borough(filter, record)
}

/// Records passing all three predicates, in dataset order.
#[must_use]
pub fn filtered_data<'a>(
    incidents: &'a [IncidentRecord],
    filter: &FilterState,
) -> Vec<&'a IncidentRecord> {
    incidents.iter().filter(|r| matches(filter, r)).collect()
}
