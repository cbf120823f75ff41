//! Secondary views: filter option lists and the reference-table charts.
//!
//! The reference tables (hourly, yearly, response time, special service,
//! fire property) are pre-aggregated and mostly ignore the filter state;
//! only the yearly breakdown honours the year range and only the response
//! time ranking reads the selected borough, to highlight it.

use std::collections::{BTreeMap, BTreeSet};

use fire_map_analytics_models::{
    FilterState, FirePropertyShare, HourlyDistribution, HourlySeries, RankedBorough, ResponseTier,
    ResponseTimeEntry, TypeFilter, TypeShare, YearRange, YearlyBreakdown, YearlySeries,
};
use fire_map_geography_models::BoroughCount;
use fire_map_incident_models::{
    FirePropertyCount, HourlyCount, IncidentRecord, IncidentType, ResponseTime, YearlyCount,
};

/// Number of boroughs shown by the top-boroughs chart.
pub const TOP_BOROUGHS: usize = 10;

/// Ratio above which a borough's response time counts as slow.
const SLOW_RATIO: f64 = 0.6;
/// Ratio above which a borough's response time counts as medium.
const MEDIUM_RATIO: f64 = 0.3;

const HOURS_PER_DAY: u8 = 24;

/// Distinct borough names in the incident table, sorted.
#[must_use]
pub fn boroughs(incidents: &[IncidentRecord]) -> Vec<String> {
    incidents
        .iter()
        .map(|r| r.borough.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// `All` followed by the distinct incident types present, in label order.
#[must_use]
pub fn incident_types(incidents: &[IncidentRecord]) -> Vec<TypeFilter> {
    let present: BTreeSet<IncidentType> = incidents.iter().map(|r| r.incident_type).collect();
    std::iter::once(TypeFilter::All)
        .chain(present.into_iter().map(TypeFilter::Only))
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Percentage of each of the three types in a type breakdown.
///
/// Types absent from the breakdown count zero; a zero total gives every type
/// a zero share.
#[must_use]
pub fn type_shares(breakdown: &BTreeMap<IncidentType, u64>) -> Vec<TypeShare> {
    let total: u64 = IncidentType::all()
        .iter()
        .map(|t| breakdown.get(t).copied().unwrap_or(0))
        .sum();

    IncidentType::all()
        .iter()
        .map(|&incident_type| {
            let count = breakdown.get(&incident_type).copied().unwrap_or(0);
            TypeShare {
                incident_type,
                count,
                percent: percent(count, total),
            }
        })
        .collect()
}

/// The first [`TOP_BOROUGHS`] ranking entries, flagging the selection.
#[must_use]
pub fn top_boroughs(
    ranking: &[BoroughCount],
    selected_borough: Option<&str>,
) -> Vec<RankedBorough> {
    ranking
        .iter()
        .take(TOP_BOROUGHS)
        .map(|entry| RankedBorough {
            borough: entry.borough.clone(),
            count: entry.count,
            selected: selected_borough == Some(entry.borough.as_str()),
        })
        .collect()
}

/// 24-hour series for each incident type. Missing hours count zero.
#[must_use]
pub fn hourly_distribution(hourly: &[HourlyCount]) -> HourlyDistribution {
    let labels = (0..HOURS_PER_DAY).map(|h| format!("{h:02}:00")).collect();

    let series = IncidentType::all()
        .iter()
        .map(|&incident_type| HourlySeries {
            incident_type,
            counts: (0..HOURS_PER_DAY)
                .map(|hour| {
                    hourly
                        .iter()
                        .find(|row| row.hour == hour && row.incident_type == incident_type)
                        .map_or(0, |row| row.count)
                })
                .collect(),
        })
        .collect();

    HourlyDistribution { labels, series }
}

/// Stacked yearly counts within `year_range`. Missing `(year, type)` rows
/// count zero.
#[must_use]
pub fn yearly_breakdown(yearly: &[YearlyCount], year_range: YearRange) -> YearlyBreakdown {
    let in_range: Vec<&YearlyCount> = yearly
        .iter()
        .filter(|row| year_range.contains(row.year))
        .collect();

    let years: Vec<u16> = in_range
        .iter()
        .map(|row| row.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let series = IncidentType::stacked_order()
        .iter()
        .map(|&incident_type| YearlySeries {
            incident_type,
            counts: years
                .iter()
                .map(|&year| {
                    in_range
                        .iter()
                        .find(|row| row.year == year && row.incident_type == incident_type)
                        .map_or(0, |row| row.count)
                })
                .collect(),
        })
        .collect();

    YearlyBreakdown { years, series }
}

/// Boroughs ranked slowest first, banded by where they sit between the
/// fastest and slowest averages.
#[must_use]
pub fn response_time_ranking(
    response_times: &[ResponseTime],
    selected_borough: Option<&str>,
) -> Vec<ResponseTimeEntry> {
    let mut sorted: Vec<&ResponseTime> = response_times.iter().collect();
    sorted.sort_by(|a, b| b.avg_seconds.total_cmp(&a.avg_seconds));

    let slowest = sorted.first().map_or(1.0, |r| r.avg_seconds);
    let fastest = sorted.last().map_or(1.0, |r| r.avg_seconds);
    let spread = slowest - fastest;

    sorted
        .into_iter()
        .map(|row| {
            let ratio = if spread > 0.0 {
                (row.avg_seconds - fastest) / spread
            } else {
                0.0
            };
            ResponseTimeEntry {
                borough: row.borough.clone(),
                avg_seconds: row.avg_seconds,
                minutes: (row.avg_seconds / 6.0).round() / 10.0,
                tier: tier(ratio),
                selected: selected_borough == Some(row.borough.as_str()),
            }
        })
        .collect()
}

fn tier(ratio: f64) -> ResponseTier {
    if ratio > SLOW_RATIO {
        ResponseTier::Slow
    } else if ratio > MEDIUM_RATIO {
        ResponseTier::Medium
    } else {
        ResponseTier::Fast
    }
}

/// Fire property counts in table order, each with its share of all fires.
#[must_use]
pub fn fire_property_shares(properties: &[FirePropertyCount]) -> Vec<FirePropertyShare> {
    let total: u64 = properties.iter().map(|p| p.count).sum();
    properties
        .iter()
        .map(|p| FirePropertyShare {
            property: p.property.clone(),
            count: p.count,
            percent: percent(p.count, total),
        })
        .collect()
}

/// Whether any filter differs from the reset state for `full_range`.
#[must_use]
pub fn has_filters(filter: &FilterState, full_range: YearRange) -> bool {
    filter.selected_borough.is_some()
        || filter.selected_type != TypeFilter::All
        || filter.year_range != full_range
}
