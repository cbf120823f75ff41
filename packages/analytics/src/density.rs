//! Density normalization for the choropleth map.
//!
//! `density = count / area_km2` and `intensity = sqrt(density) /
//! sqrt(max_density)`. The square root compresses the dynamic range so a
//! few very dense central boroughs do not wash out the rest of the map.

use std::collections::BTreeMap;

use fire_map_geography_models::{BoroughAreas, BoroughDensity};

/// Floor for the maximum density, so an all-zero map divides by one.
pub const MIN_MAX_DENSITY: f64 = 1.0;

/// Incidents per km² for `borough`, using the fallback area when the lookup
/// has no usable entry.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn density(borough: &str, count: u64, areas: &BoroughAreas) -> f64 {
    count as f64 / areas.area_km2(borough)
}

/// Densities for every borough present in `totals`, in name order.
#[must_use]
pub fn densities(totals: &BTreeMap<String, u64>, areas: &BoroughAreas) -> Vec<BoroughDensity> {
    let entries = totals
        .iter()
        .map(|(borough, count)| unnormalized(borough, *count, areas))
        .collect();
    normalized(entries)
}

/// Densities for the named boroughs (typically every boundary feature), in
/// the given order. Boroughs absent from `totals` count zero.
#[must_use]
pub fn densities_for<'a>(
    boroughs: impl IntoIterator<Item = &'a str>,
    totals: &BTreeMap<String, u64>,
    areas: &BoroughAreas,
) -> Vec<BoroughDensity> {
    let entries = boroughs
        .into_iter()
        .map(|borough| {
            let count = totals.get(borough).copied().unwrap_or(0);
            unnormalized(borough, count, areas)
        })
        .collect();
    normalized(entries)
}

fn unnormalized(borough: &str, count: u64, areas: &BoroughAreas) -> BoroughDensity {
    BoroughDensity {
        borough: borough.to_string(),
        count,
        area_km2: areas.area_km2(borough),
        density: density(borough, count, areas),
        intensity: 0.0,
    }
}

fn normalized(mut entries: Vec<BoroughDensity>) -> Vec<BoroughDensity> {
    let max_density = entries
        .iter()
        .map(|e| e.density)
        .fold(MIN_MAX_DENSITY, f64::max);
    let scale = max_density.sqrt();

    for entry in &mut entries {
        entry.intensity = entry.density.sqrt() / scale;
    }

    log::trace!(
        "Normalized {} borough densities against max {max_density:.1}/km²",
        entries.len()
    );

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn areas() -> BoroughAreas {
        [
            ("Camden".to_string(), 20.0),
            ("Bromley".to_string(), 150.0),
            ("Hackney".to_string(), 19.0),
        ]
        .into_iter()
        .collect()
    }

    fn totals(entries: &[(&str, u64)]) -> BTreeMap<String, u64> {
        entries
            .iter()
            .map(|(borough, count)| ((*borough).to_string(), *count))
            .collect()
    }

    #[test]
    fn missing_area_uses_unit_fallback() {
        assert!((density("X", 50, &areas()) - 50.0).abs() < f64::EPSILON);

        let rows = densities(&totals(&[("X", 50)]), &areas());
        assert_eq!(rows.len(), 1);
        assert!((rows[0].area_km2 - 1.0).abs() < f64::EPSILON);
        assert!((rows[0].density - 50.0).abs() < f64::EPSILON);
        assert!((rows[0].intensity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn intensity_is_sqrt_of_relative_density() {
        let rows = densities(&totals(&[("Camden", 2000), ("Bromley", 3750)]), &areas());
        let camden = rows.iter().find(|r| r.borough == "Camden").unwrap();
        let bromley = rows.iter().find(|r| r.borough == "Bromley").unwrap();

        assert!((camden.density - 100.0).abs() < 1e-9);
        assert!((bromley.density - 25.0).abs() < 1e-9);
        assert!((camden.intensity - 1.0).abs() < 1e-9);
        assert!((bromley.intensity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn all_zero_totals_do_not_divide_by_zero() {
        let rows = densities(&totals(&[("Camden", 0), ("Bromley", 0)]), &areas());
        for row in &rows {
            assert!(row.intensity.is_finite());
            assert!(row.intensity.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn max_density_is_floored_at_one() {
        // 10 / 20 km² = 0.5 per km², below the floor.
        let rows = densities(&totals(&[("Camden", 10)]), &areas());
        assert!((rows[0].intensity - 0.5_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn intensities_stay_in_unit_interval() {
        let rows = densities(
            &totals(&[("Camden", 5000), ("Bromley", 12), ("X", 900)]),
            &areas(),
        );
        for row in &rows {
            assert!((0.0..=1.0).contains(&row.intensity), "{row:?}");
        }
    }

    #[test]
    fn named_boroughs_without_totals_count_zero() {
        let rows = densities_for(
            ["Bromley", "Camden"],
            &totals(&[("Camden", 200)]),
            &areas(),
        );
        assert_eq!(rows[0].borough, "Bromley");
        assert_eq!(rows[0].count, 0);
        assert!(rows[0].intensity.abs() < f64::EPSILON);
        assert_eq!(rows[1].count, 200);
        assert!((rows[1].intensity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_totals_yield_no_rows() {
        assert!(densities(&BTreeMap::new(), &areas()).is_empty());
    }
}
