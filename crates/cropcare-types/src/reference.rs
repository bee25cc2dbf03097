//! Static reference records: administrative regions and crop metadata.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sentinel used for every metadata field of a crop with no catalog entry.
pub const NOT_AVAILABLE: &str = "N/A";

/// An administrative state used as the unit for weather and soil defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Region {
    /// State name, e.g. `Punjab`.
    pub state: String,
    /// Representative city whose coordinates stand in for the state.
    pub city: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Agronomic metadata for a crop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CropMetadata {
    /// Growing season (`Kharif`, `Rabi`, ...).
    pub season: String,
    /// Typical time from sowing to harvest.
    pub duration: String,
    /// Qualitative water need.
    pub water_requirement: String,
    /// Preferred soil types.
    pub soil_type: String,
}

impl CropMetadata {
    /// Build a metadata record from string slices.
    pub fn new(season: &str, duration: &str, water_requirement: &str, soil_type: &str) -> Self {
        Self {
            season: season.to_owned(),
            duration: duration.to_owned(),
            water_requirement: water_requirement.to_owned(),
            soil_type: soil_type.to_owned(),
        }
    }

    /// Metadata for a crop the catalog does not know: every field is
    /// [`NOT_AVAILABLE`].
    pub fn unavailable() -> Self {
        Self::new(NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE)
    }
}
