//! REST API endpoint handlers for the CropCare service.
//!
//! All handlers read from the shared [`AppState`]. Errors are returned as
//! [`ApiError`] and rendered at the boundary.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/health` | Service status and model availability |
//! | `POST` | `/predict` | Recommend from supplied measurements |
//! | `GET` | `/states` | Supported state names |
//! | `GET` | `/regional-recommendation/{state}` | Recommend for a state |
//! | `GET` | `/crop-info/{crop}` | Crop metadata |
//! | `GET` | `/crops` | All catalogued crops |
//! | `GET` | `/weather/{state}` | Current weather and field advisory |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use cropcare_types::{
    CropDetailsResponse, CropListResponse, FEATURE_COUNT, FEATURE_NAMES, FeatureVector,
    HealthResponse, InputConditions, PredictResponse, RegionalRecommendationResponse,
    RegionalWeatherResponse, StatesResponse,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Report liveness and whether the classifier is loaded.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: String::from("healthy"),
        model_loaded: state.model_loaded(),
    })
}

// ---------------------------------------------------------------------------
// POST /predict
// ---------------------------------------------------------------------------

/// Recommend crops from a `{N, P, K, temperature, humidity, ph, rainfall}`
/// body.
///
/// Fields may be JSON numbers or numeric strings. The submitted values are
/// echoed back under descriptive keys in `input_conditions`.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.model_loaded() {
        return Err(ApiError::ModelUnavailable);
    }

    let Json(body) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    let Value::Object(fields) = body else {
        return Err(ApiError::InvalidBody(String::from(
            "Request body must be a JSON object",
        )));
    };

    let (features, raw) = parse_features(&fields)?;
    let result = state.engine.recommend(&features)?;
    debug!(primary = %result.primary_recommendation, "Prediction served");

    let [n, p, k, temperature, humidity, ph, rainfall] = raw;
    Ok(Json(PredictResponse {
        success: true,
        result,
        input_conditions: InputConditions {
            nitrogen: n,
            phosphorus: p,
            potassium: k,
            temperature,
            humidity,
            ph,
            rainfall,
        },
    }))
}

/// Extract the seven features in classifier order, reporting the first
/// missing or malformed field. Also returns the raw submitted values.
fn parse_features(
    fields: &Map<String, Value>,
) -> Result<(FeatureVector, [Value; FEATURE_COUNT]), ApiError> {
    let mut values = [0.0; FEATURE_COUNT];
    let mut raw: [Value; FEATURE_COUNT] = Default::default();

    for ((name, value), echo) in FEATURE_NAMES.into_iter().zip(&mut values).zip(&mut raw) {
        let submitted = fields.get(name).ok_or(ApiError::MissingField(name))?;
        *value = numeric(submitted).ok_or(ApiError::InvalidField(name))?;
        echo.clone_from(submitted);
    }

    Ok((FeatureVector::from_array(values), raw))
}

/// A finite number from a JSON number or numeric string.
fn numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

// ---------------------------------------------------------------------------
// GET /states
// ---------------------------------------------------------------------------

/// List every supported state.
pub async fn list_states(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let states = state.reference.regions.state_names();
    let count = states.len();
    Json(StatesResponse { states, count })
}

// ---------------------------------------------------------------------------
// GET /regional-recommendation/{state}
// ---------------------------------------------------------------------------

/// Recommend crops for a state from its estimated soil and current weather.
pub async fn regional_recommendation(
    State(state): State<Arc<AppState>>,
    Path(region): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let recommendation = state.advisor.recommend_for_region(&region).await?;
    Ok(Json(RegionalRecommendationResponse {
        success: true,
        recommendation,
    }))
}

// ---------------------------------------------------------------------------
// GET /crop-info/{crop}
// ---------------------------------------------------------------------------

/// Metadata for one crop. The lookup ignores case; the response echoes the
/// name as requested.
pub async fn crop_info(
    State(state): State<Arc<AppState>>,
    Path(crop): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let details = state
        .reference
        .crops
        .get(&crop)
        .cloned()
        .ok_or(ApiError::CropNotFound)?;
    Ok(Json(CropDetailsResponse { crop, details }))
}

// ---------------------------------------------------------------------------
// GET /crops
// ---------------------------------------------------------------------------

/// Every catalogued crop in label order.
pub async fn list_crops(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let crops: Vec<CropDetailsResponse> = state
        .reference
        .crops
        .iter()
        .map(|(label, details)| CropDetailsResponse {
            crop: label.to_owned(),
            details: details.clone(),
        })
        .collect();
    let count = crops.len();
    Json(CropListResponse { crops, count })
}

// ---------------------------------------------------------------------------
// GET /weather/{state}
// ---------------------------------------------------------------------------

/// Current weather for a state's representative city plus a field advisory.
pub async fn regional_weather(
    State(state): State<Arc<AppState>>,
    Path(region): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let (region, weather) = state.advisor.weather_for_region(&region).await?;
    Ok(Json(RegionalWeatherResponse {
        state: region.state,
        city: region.city,
        advisory: cropcare_weather::advisory(&weather).to_owned(),
        weather,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn numeric_accepts_numbers_and_numeric_strings() {
        assert_eq!(numeric(&json!(90)), Some(90.0));
        assert_eq!(numeric(&json!(" 6.5 ")), Some(6.5));
        assert_eq!(numeric(&json!(-3.0)), Some(-3.0));
        assert_eq!(numeric(&json!("abc")), None);
        assert_eq!(numeric(&json!("NaN")), None);
        assert_eq!(numeric(&json!("inf")), None);
        assert_eq!(numeric(&json!(null)), None);
        assert_eq!(numeric(&json!([1])), None);
    }

    #[test]
    fn first_missing_field_is_reported_in_feature_order() {
        let fields = object(json!({"temperature": 20, "humidity": 80}));
        let err = parse_features(&fields).unwrap_err();
        assert!(matches!(err, ApiError::MissingField("N")));
    }

    #[test]
    fn raw_values_are_preserved() {
        let fields = object(json!({
            "N": "90", "P": 42, "K": 43, "temperature": 20.8,
            "humidity": 82, "ph": 6.5, "rainfall": 202.9
        }));
        let (features, raw) = parse_features(&fields).unwrap();
        assert_eq!(features.n, 90.0);
        assert_eq!(raw[0], json!("90"));
        assert_eq!(raw[6], json!(202.9));
    }
}
