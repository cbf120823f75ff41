//! Borough boundary loading.
//!
//! Boundaries arrive as a single `GeoJSON` `FeatureCollection` with one
//! feature per borough, keyed by its `name` property.

use std::path::Path;

use geojson::{FeatureCollection, GeoJson};

use crate::GeographyError;

/// Property holding the borough name on each boundary feature.
pub const NAME_PROPERTY: &str = "name";

/// Parses a boundary collection from `GeoJSON` text.
///
/// # Errors
///
/// Returns [`GeographyError`] if the text is not `GeoJSON` or is not a
/// `FeatureCollection`.
pub fn parse_boundaries(geojson_str: &str) -> Result<FeatureCollection, GeographyError> {
    match geojson_str.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        GeoJson::Feature(_) => Err(GeographyError::NotFeatureCollection { found: "Feature" }),
        GeoJson::Geometry(_) => Err(GeographyError::NotFeatureCollection { found: "Geometry" }),
    }
}

/// Loads a boundary collection from a file on disk.
///
/// # Errors
///
/// Returns [`GeographyError`] if the file cannot be read or parsed.
pub fn load_boundaries(path: &Path) -> Result<FeatureCollection, GeographyError> {
    let text = std::fs::read_to_string(path).map_err(|source| GeographyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let collection = parse_boundaries(&text)?;
    log::info!(
        "Loaded {} borough boundaries from {}",
        collection.features.len(),
        path.display()
    );
    Ok(collection)
}

/// Returns the borough name of every feature, in feature order.
///
/// Features without a string `name` property are skipped.
#[must_use]
pub fn borough_names(collection: &FeatureCollection) -> Vec<String> {
    collection
        .features
        .iter()
        .filter_map(|feature| {
            let name = feature
                .property(NAME_PROPERTY)
                .and_then(serde_json::Value::as_str);
            if name.is_none() {
                log::warn!("Skipping boundary feature without a name property");
            }
            name.map(str::to_string)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BOROUGHS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "Camden" },
                "geometry": { "type": "Point", "coordinates": [-0.14, 51.55] }
            },
            {
                "type": "Feature",
                "properties": { "code": "E09000005" },
                "geometry": null
            },
            {
                "type": "Feature",
                "properties": { "name": "Brent" },
                "geometry": { "type": "Point", "coordinates": [-0.27, 51.56] }
            }
        ]
    }"#;

    #[test]
    fn names_follow_feature_order_and_skip_unnamed() {
        let collection = parse_boundaries(TWO_BOROUGHS).unwrap();
        assert_eq!(collection.features.len(), 3);
        assert_eq!(borough_names(&collection), vec!["Camden", "Brent"]);
    }

    #[test]
    fn rejects_single_geometry() {
        let err = parse_boundaries(r#"{"type": "Point", "coordinates": [0.0, 0.0]}"#).unwrap_err();
        assert!(matches!(
            err,
            GeographyError::NotFeatureCollection { found: "Geometry" }
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            parse_boundaries("not geojson"),
            Err(GeographyError::GeoJson(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_boundaries(Path::new("/nonexistent/boroughs.geojson")).unwrap_err();
        assert!(matches!(err, GeographyError::Io { .. }));
        assert_eq!(
            err.to_string().split(':').next(),
            Some("Failed to read /nonexistent/boroughs.geojson")
        );
    }
}
