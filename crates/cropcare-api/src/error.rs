//! Error types for the CropCare API.
//!
//! [`ApiError`] is the request-boundary error taxonomy. It converts into an
//! Axum response with the matching status code and an
//! [`ErrorResponse`] body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cropcare_core::{EngineError, RegionalError};
use cropcare_types::ErrorResponse;
use tracing::error;

/// Errors that can occur while handling an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No classifier was loaded at startup.
    #[error("Model not loaded")]
    ModelUnavailable,

    /// A required input field is absent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// An input field is present but not a finite number.
    #[error("Invalid value for field: {0}")]
    InvalidField(&'static str),

    /// The request body is not a JSON object.
    #[error("{0}")]
    InvalidBody(String),

    /// The state is not in the region table.
    #[error("State not found")]
    StateNotFound,

    /// The crop is not in the catalog.
    #[error("Crop information not found")]
    CropNotFound,

    /// The weather provider failed or timed out.
    #[error("Weather data unavailable")]
    WeatherUnavailable,

    /// Any other failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_) | Self::InvalidField(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::StateNotFound | Self::CropNotFound => StatusCode::NOT_FOUND,
            Self::WeatherUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::ModelUnavailable | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::ModelUnavailable => Self::ModelUnavailable,
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<RegionalError> for ApiError {
    fn from(err: RegionalError) -> Self {
        match err {
            RegionalError::NotFound(_) => Self::StateNotFound,
            RegionalError::WeatherUnavailable(_) => Self::WeatherUnavailable,
            RegionalError::Engine(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal(msg) = &self {
            error!(error = %msg, "Request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use cropcare_core::ClassifierError;
    use cropcare_weather::WeatherError;

    use super::*;

    #[test]
    fn regional_errors_map_to_taxonomy() {
        let not_found: ApiError = RegionalError::NotFound("Atlantis".to_owned()).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "State not found");

        let weather: ApiError =
            RegionalError::WeatherUnavailable(WeatherError::Timeout { timeout_ms: 5_000 }).into();
        assert_eq!(weather.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(weather.to_string(), "Weather data unavailable");

        let model: ApiError = RegionalError::Engine(EngineError::ModelUnavailable).into();
        assert_eq!(model.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(model.to_string(), "Model not loaded");
    }

    #[test]
    fn classifier_faults_are_internal() {
        let err: ApiError = EngineError::Classifier(ClassifierError::ShapeMismatch {
            classes: 3,
            probabilities: 2,
        })
        .into();
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_messages_name_the_field() {
        assert_eq!(
            ApiError::MissingField("ph").to_string(),
            "Missing required field: ph"
        );
        assert_eq!(
            ApiError::InvalidField("N").to_string(),
            "Invalid value for field: N"
        );
        assert_eq!(ApiError::MissingField("K").status(), StatusCode::BAD_REQUEST);
    }
}
