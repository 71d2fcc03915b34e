//! Trails `GeoJSON` pass-through.
//!
//! The trail map layer is served exactly as stored: the file is parsed to
//! prove it holds a well-formed feature collection, then handed back for
//! re-serialization. Feature properties, bounding boxes, and foreign
//! members (the legacy `crs` entry) all survive the round trip.

use std::path::Path;

use geojson::{FeatureCollection, GeoJson};

use crate::DatasetError;

/// Reads `path` and parses it as a `GeoJSON` feature collection.
///
/// # Errors
///
/// Returns [`DatasetError::NotFound`] when the file is absent,
/// [`DatasetError::InvalidFeatureFormat`] when it holds anything other
/// than a well-formed feature collection, and [`DatasetError::Io`] for
/// other read failures.
pub fn read_feature_collection(path: &Path) -> Result<FeatureCollection, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::NotFound {
            path: path.display().to_string(),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    log::debug!("Read {} ({} bytes)", path.display(), raw.len());

    let geojson: GeoJson = raw
        .parse()
        .map_err(|e: geojson::Error| DatasetError::InvalidFeatureFormat {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(DatasetError::InvalidFeatureFormat {
            path: path.display().to_string(),
            reason: "top-level value is not a FeatureCollection".to_owned(),
        });
    };

    log::info!(
        "Loaded {} with {} features",
        path.display(),
        collection.features.len()
    );

    Ok(collection)
}
