//! The six derived views.
//!
//! `borough_totals` omits the borough predicate so the map always shows the
//! whole city with the selection merely highlighted. `type_breakdown` omits
//! the type predicate so the breakdown chart always shows the full three-way
//! split. The remaining views apply all three predicates.

use std::collections::BTreeMap;

use fire_map_analytics_models::{DashboardViews, FilterState};
use fire_map_geography_models::{BoroughCount, MonthlyCount};
use fire_map_incident_models::{IncidentRecord, IncidentType};

use crate::filter;

/// Borough to summed count under the year and type predicates.
#[must_use]
pub fn borough_totals(
    incidents: &[IncidentRecord],
    filter: &FilterState,
) -> BTreeMap<String, u64> {
    let mut totals = BTreeMap::new();
    for record in incidents
        .iter()
        .filter(|r| filter::in_years(filter, r) && filter::in_type(filter, r))
    {
        *totals.entry(record.borough.clone()).or_insert(0) += record.count;
    }
    totals
}

/// Type to summed count under the year and borough predicates.
#[must_use]
pub fn type_breakdown(
    incidents: &[IncidentRecord],
    filter: &FilterState,
) -> BTreeMap<IncidentType, u64> {
    let mut breakdown = BTreeMap::new();
    for record in incidents
        .iter()
        .filter(|r| filter::in_years(filter, r) && filter::in_borough(filter, r))
    {
        *breakdown.entry(record.incident_type).or_insert(0) += record.count;
    }
    breakdown
}

/// `"YYYY-MM"` key of a record's month.
#[must_use]
pub fn month_key(year: u16, month: u8) -> String {
    format!("{year:04}-{month:02}")
}

/// Summed counts per month key, ascending.
///
/// Keys are zero-padded, so byte-wise order is chronological order.
#[must_use]
pub fn monthly_trend<'a>(
    filtered: impl IntoIterator<Item = &'a IncidentRecord>,
) -> Vec<MonthlyCount> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for record in filtered {
        let key = month_key(record.year, record.month);
        *counts.entry(key).or_insert(0) += record.count;
    }
    counts
        .into_iter()
        .map(|(month, count)| MonthlyCount { month, count })
        .collect()
}

/// Summed counts per borough, descending by count.
///
/// Boroughs with equal counts keep the order in which they were first
/// encountered.
#[must_use]
pub fn borough_ranking<'a>(
    filtered: impl IntoIterator<Item = &'a IncidentRecord>,
) -> Vec<BoroughCount> {
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();
    let mut ranking: Vec<BoroughCount> = Vec::new();

    for record in filtered {
        if let Some(&i) = index.get(record.borough.as_str()) {
            ranking[i].count += record.count;
        } else {
            index.insert(record.borough.as_str(), ranking.len());
            ranking.push(BoroughCount {
                borough: record.borough.clone(),
                count: record.count,
            });
        }
    }

    // `sort_by` is stable, which preserves encounter order between ties.
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking
}

/// Sum of `count` over the filtered records.
#[must_use]
pub fn total_incidents<'a>(filtered: impl IntoIterator<Item = &'a IncidentRecord>) -> u64 {
    filtered.into_iter().map(|r| r.count).sum()
}

/// Computes all six views for `filter`.
#[must_use]
pub fn compute(incidents: &[IncidentRecord], filter: &FilterState) -> DashboardViews {
    let filtered = filter::filtered_data(incidents, filter);

    DashboardViews {
        borough_totals: borough_totals(incidents, filter),
        type_breakdown: type_breakdown(incidents, filter),
        monthly_trend: monthly_trend(filtered.iter().copied()),
        borough_ranking: borough_ranking(filtered.iter().copied()),
        total_incidents: total_incidents(filtered.iter().copied()),
        filtered_data: filtered.into_iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use fire_map_analytics_models::{TypeFilter, YearRange};

    use super::*;
    use crate::fixtures::{self, record};

    fn year_type_total(incidents: &[IncidentRecord], filter: &FilterState) -> u64 {
        incidents
            .iter()
            .filter(|r| {
                filter.year_range.contains(r.year) && filter.selected_type.matches(r.incident_type)
            })
            .map(|r| r.count)
            .sum()
    }

    fn year_borough_total(incidents: &[IncidentRecord], filter: &FilterState) -> u64 {
        let borough = filter.selected_borough.as_deref();
        incidents
            .iter()
            .filter(|r| {
                filter.year_range.contains(r.year) && borough.is_none_or(|b| b == r.borough)
            })
            .map(|r| r.count)
            .sum()
    }

    #[test]
    fn worked_example() {
        let incidents = fixtures::camden_brent();
        let filter = FilterState {
            year_range: YearRange::new(2020, 2020),
            ..FilterState::default()
        };

        let views = compute(&incidents, &filter);

        assert_eq!(views.filtered_data.len(), 2);
        assert_eq!(views.total_incidents, 15);
        assert_eq!(
            views.borough_totals,
            [("Camden".to_string(), 15)].into_iter().collect()
        );
        assert_eq!(
            views.type_breakdown,
            [(IncidentType::Fire, 10), (IncidentType::FalseAlarm, 5)]
                .into_iter()
                .collect()
        );
        assert_eq!(
            views.monthly_trend,
            vec![MonthlyCount {
                month: "2020-01".to_string(),
                count: 15,
            }]
        );
    }

    #[test]
    fn borough_totals_ignore_selected_borough() {
        let incidents = fixtures::mixed();
        let base = FilterState {
            year_range: YearRange::new(2019, 2022),
            selected_type: TypeFilter::Only(IncidentType::Fire),
            selected_borough: None,
        };
        let unselected = borough_totals(&incidents, &base);

        for borough in ["Camden", "Westminster", "Nowhere"] {
            let selected = FilterState {
                selected_borough: Some(borough.to_string()),
                ..base.clone()
            };
            let totals = borough_totals(&incidents, &selected);
            assert_eq!(totals, unselected);
            assert_eq!(
                totals.values().sum::<u64>(),
                year_type_total(&incidents, &selected)
            );
        }
        assert!(unselected.len() > 1);
    }

    #[test]
    fn type_breakdown_ignores_selected_type() {
        let incidents = fixtures::mixed();
        let base = FilterState {
            year_range: YearRange::new(2018, 2020),
            selected_type: TypeFilter::All,
            selected_borough: Some("Westminster".to_string()),
        };
        let all_types = type_breakdown(&incidents, &base);

        for incident_type in IncidentType::all() {
            let selected = FilterState {
                selected_type: TypeFilter::Only(*incident_type),
                ..base.clone()
            };
            let breakdown = type_breakdown(&incidents, &selected);
            assert_eq!(breakdown, all_types);
            assert_eq!(
                breakdown.values().sum::<u64>(),
                year_borough_total(&incidents, &selected)
            );
        }
        assert_eq!(all_types.len(), 2);
    }

    #[test]
    fn total_matches_ranking_sum() {
        let incidents = fixtures::mixed();
        let filters = [
            FilterState::default(),
            FilterState {
                year_range: YearRange::new(2019, 2021),
                selected_type: TypeFilter::Only(IncidentType::Fire),
                selected_borough: None,
            },
            FilterState {
                selected_borough: Some("Camden".to_string()),
                ..FilterState::default()
            },
        ];

        for filter in &filters {
            let views = compute(&incidents, filter);
            let ranking_sum: u64 = views.borough_ranking.iter().map(|b| b.count).sum();
            let filtered_sum: u64 = views.filtered_data.iter().map(|r| r.count).sum();
            assert_eq!(views.total_incidents, ranking_sum);
            assert_eq!(views.total_incidents, filtered_sum);
        }
    }

    #[test]
    fn monthly_keys_strictly_increase() {
        let incidents = fixtures::mixed();
        let trend = monthly_trend(&incidents);

        assert_eq!(trend.first().map(|m| m.month.as_str()), Some("2018-12"));
        assert_eq!(trend.last().map(|m| m.month.as_str()), Some("2025-12"));
        for pair in trend.windows(2) {
            assert!(pair[0].month < pair[1].month, "{pair:?}");
        }
    }

    #[test]
    fn monthly_keys_are_zero_padded() {
        let incidents = vec![
            record(2020, 10, "Camden", IncidentType::Fire, 1),
            record(2020, 2, "Camden", IncidentType::Fire, 1),
            record(2020, 2, "Brent", IncidentType::Fire, 4),
        ];
        let trend = monthly_trend(&incidents);
        assert_eq!(
            trend,
            vec![
                MonthlyCount {
                    month: "2020-02".to_string(),
                    count: 5,
                },
                MonthlyCount {
                    month: "2020-10".to_string(),
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn ranking_is_descending_with_encounter_order_ties() {
        let incidents = vec![
            record(2020, 1, "Hackney", IncidentType::Fire, 4),
            record(2020, 1, "Bromley", IncidentType::Fire, 9),
            record(2020, 1, "Camden", IncidentType::Fire, 4),
            record(2020, 2, "Brent", IncidentType::Fire, 2),
            record(2020, 2, "Brent", IncidentType::FalseAlarm, 2),
            record(2020, 3, "Westminster", IncidentType::Fire, 9),
        ];

        let ranking = borough_ranking(&incidents);
        let order: Vec<&str> = ranking.iter().map(|b| b.borough.as_str()).collect();

        assert_eq!(
            order,
            vec!["Bromley", "Westminster", "Hackney", "Camden", "Brent"]
        );
        for pair in ranking.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn empty_inputs_yield_empty_views() {
        let views = compute(&[], &FilterState::default());
        assert_eq!(views, DashboardViews::default());

        let inverted = FilterState {
            year_range: YearRange::new(2025, 2018),
            ..FilterState::default()
        };
        let views = compute(&fixtures::mixed(), &inverted);
        assert!(views.filtered_data.is_empty());
        assert!(views.borough_totals.is_empty());
        assert!(views.type_breakdown.is_empty());
        assert!(views.monthly_trend.is_empty());
        assert!(views.borough_ranking.is_empty());
        assert_eq!(views.total_incidents, 0);
    }
}
