//! Choropleth enrichment of boundary features.
//!
//! Writes the per-borough density values onto each boundary feature so a
//! map renderer can colour features by `intensity` and show `count`, `area`
//! and `density` in its hover popup.

use std::collections::BTreeMap;

use fire_map_geography_models::BoroughDensity;
use geojson::FeatureCollection;

use crate::boundaries::NAME_PROPERTY;

/// Returns a copy of `collection` with choropleth properties set on every
/// named feature that has an entry in `densities`.
///
/// Properties written: `count`, `area`, `density` (rounded to a whole
/// number per km²), `intensity` and `selected`.
#[must_use]
pub fn enrich(
    collection: &FeatureCollection,
    densities: &[BoroughDensity],
    selected_borough: Option<&str>,
) -> FeatureCollection {
    let by_name: BTreeMap<&str, &BoroughDensity> =
        densities.iter().map(|d| (d.borough.as_str(), d)).collect();

    let mut enriched = collection.clone();

    for feature in &mut enriched.features {
        let Some(name) = feature
            .property(NAME_PROPERTY)
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
        else {
            continue;
        };

        let Some(density) = by_name.get(name.as_str()) else {
            log::debug!("No density computed for boundary {name}");
            continue;
        };

        feature.set_property("count", density.count);
        feature.set_property("area", density.area_km2);
        feature.set_property("density", rounded(density.density));
        feature.set_property("intensity", density.intensity);
        feature.set_property("selected", selected_borough == Some(name.as_str()));
    }

    enriched
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rounded(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}
