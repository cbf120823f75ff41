//! Borough area lookup.
//!
//! The default lookup is baked into the binary at compile time via
//! [`include_str!`]; a replacement can be loaded from any TOML file with the
//! same `[areas]` table layout.

use std::collections::BTreeMap;
use std::path::Path;

use fire_map_geography_models::BoroughAreas;
use serde::Deserialize;

use crate::GeographyError;

/// Default lookup embedded at compile time.
const BOROUGH_AREAS_TOML: &str = include_str!("../data/borough_areas.toml");

#[derive(Debug, Deserialize)]
struct AreasFile {
    areas: BTreeMap<String, f64>,
}

/// Parses an area lookup from TOML text.
///
/// # Errors
///
/// Returns [`GeographyError::Toml`] if the text is not valid TOML or lacks
/// an `[areas]` table of numbers.
pub fn parse_areas_toml(toml_str: &str) -> Result<BoroughAreas, GeographyError> {
    let file: AreasFile = toml::from_str(toml_str)?;

    for (name, area) in &file.areas {
        if !(area.is_finite() && *area > 0.0) {
            log::warn!("Borough {name} has non-positive area {area}, using the fallback");
        }
    }

    Ok(BoroughAreas::new(file.areas))
}

/// Returns the embedded area lookup for the 33 London boroughs.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (the file is fixed at compile
/// time and covered by tests).
#[must_use]
pub fn default_areas() -> BoroughAreas {
    parse_areas_toml(BOROUGH_AREAS_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse borough_areas.toml: {e}"))
}

/// Loads an area lookup from a TOML file on disk.
///
/// # Errors
///
/// Returns [`GeographyError`] if the file cannot be read or parsed.
pub fn load_areas(path: &Path) -> Result<BoroughAreas, GeographyError> {
    let text = std::fs::read_to_string(path).map_err(|source| GeographyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let areas = parse_areas_toml(&text)?;
    log::info!(
        "Loaded {} borough areas from {}",
        areas.len(),
        path.display()
    );
    Ok(areas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_lookup_covers_all_boroughs() {
        let areas = default_areas();
        assert_eq!(areas.len(), 33);
        assert!(areas.contains("City of London"));
        assert!(areas.contains("Westminster"));
    }

    #[test]
    fn embedded_areas_are_positive() {
        for (name, area) in default_areas().iter() {
            assert!(area > 0.0, "{name} has area {area}");
        }
    }

    #[test]
    fn parses_custom_table() {
        let areas = parse_areas_toml("[areas]\n\"Camden\" = 21.8\n").unwrap();
        assert_eq!(areas.len(), 1);
        assert!((areas.area_km2("Camden") - 21.8).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_missing_table() {
        assert!(matches!(
            parse_areas_toml("camden = 21.8"),
            Err(GeographyError::Toml(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_areas(Path::new("/nonexistent/areas.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/areas.toml"));
    }
}
