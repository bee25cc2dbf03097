//! JSON payloads returned by the HTTP API.
//!
//! Field names match what the browser frontend consumes, so renaming any of
//! them is a breaking change.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::features::WeatherReading;
use crate::recommendation::{RecommendationResult, RegionalRecommendation};
use crate::reference::CropMetadata;

/// `GET /health` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HealthResponse {
    /// Always `healthy` while the process is serving.
    pub status: String,
    /// Whether a classifier was loaded at startup.
    pub model_loaded: bool,
}

/// The submitted `/predict` values, echoed back as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct InputConditions {
    /// Submitted `N`.
    pub nitrogen: serde_json::Value,
    /// Submitted `P`.
    pub phosphorus: serde_json::Value,
    /// Submitted `K`.
    pub potassium: serde_json::Value,
    /// Submitted `temperature`.
    pub temperature: serde_json::Value,
    /// Submitted `humidity`.
    pub humidity: serde_json::Value,
    /// Submitted `ph`.
    pub ph: serde_json::Value,
    /// Submitted `rainfall`.
    pub rainfall: serde_json::Value,
}

/// `POST /predict` success body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PredictResponse {
    /// Always `true`; failures use [`ErrorResponse`].
    pub success: bool,
    /// Primary recommendation, confidence and ranked list.
    #[serde(flatten)]
    pub result: RecommendationResult,
    /// The request values the prediction was made from.
    pub input_conditions: InputConditions,
}

/// `GET /states` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StatesResponse {
    /// Known state names in table order.
    pub states: Vec<String>,
    /// Number of entries in `states`.
    pub count: usize,
}

/// `GET /regional-recommendation/{state}` success body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RegionalRecommendationResponse {
    /// Always `true`; failures use [`ErrorResponse`].
    pub success: bool,
    /// The regional recommendation.
    #[serde(flatten)]
    pub recommendation: RegionalRecommendation,
}

/// `GET /crop-info/{crop}` body, also used as the item type of
/// [`CropListResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CropDetailsResponse {
    /// Crop name.
    pub crop: String,
    /// Catalog metadata.
    pub details: CropMetadata,
}

/// `GET /crops` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CropListResponse {
    /// Every catalogued crop in label order.
    pub crops: Vec<CropDetailsResponse>,
    /// Number of entries in `crops`.
    pub count: usize,
}

/// `GET /weather/{state}` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RegionalWeatherResponse {
    /// State name.
    pub state: String,
    /// Representative city of the state.
    pub city: String,
    /// Current reading.
    pub weather: WeatherReading,
    /// Field advisory derived from the reading.
    pub advisory: String,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ErrorResponse {
    /// Human-readable failure description.
    pub error: String,
}
