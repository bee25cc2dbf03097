//! Model input features and the readings they are assembled from.
//!
//! A [`FeatureVector`] is always the ordered 7-tuple
//! `(N, P, K, temperature, humidity, ph, rainfall)`. No range validation is
//! applied: negative rainfall or a pH of 20 are passed to the classifier
//! unchanged.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 7;

/// Feature names in the exact order the classifier expects them.
///
/// These are also the required field names of the `/predict` request body.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["N", "P", "K", "temperature", "humidity", "ph", "rainfall"];

/// Soil and weather measurements for one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FeatureVector {
    /// Nitrogen content of the soil.
    #[serde(rename = "N")]
    pub n: f64,
    /// Phosphorus content of the soil.
    #[serde(rename = "P")]
    pub p: f64,
    /// Potassium content of the soil.
    #[serde(rename = "K")]
    pub k: f64,
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Soil pH.
    pub ph: f64,
    /// Rainfall in millimetres (monthly).
    pub rainfall: f64,
}

impl FeatureVector {
    /// Build a feature vector from values ordered as [`FEATURE_NAMES`].
    pub const fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        let [n, p, k, temperature, humidity, ph, rainfall] = values;
        Self {
            n,
            p,
            k,
            temperature,
            humidity,
            ph,
            rainfall,
        }
    }

    /// Assemble the model input for a region from its soil defaults and a
    /// weather reading.
    pub const fn from_conditions(soil: &SoilProfile, weather: &WeatherReading) -> Self {
        Self {
            n: soil.n,
            p: soil.p,
            k: soil.k,
            temperature: weather.temperature,
            humidity: weather.humidity,
            ph: soil.ph,
            rainfall: weather.rainfall,
        }
    }

    /// Values in classifier order.
    pub const fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.n,
            self.p,
            self.k,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }
}

/// Current weather conditions for a region.
///
/// Produced per request; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WeatherReading {
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Estimated monthly rainfall in millimetres.
    pub rainfall: f64,
}

/// Default soil nutrient profile for a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SoilProfile {
    /// Nitrogen content.
    #[serde(rename = "N")]
    pub n: f64,
    /// Phosphorus content.
    #[serde(rename = "P")]
    pub p: f64,
    /// Potassium content.
    #[serde(rename = "K")]
    pub k: f64,
    /// Soil pH.
    pub ph: f64,
}
