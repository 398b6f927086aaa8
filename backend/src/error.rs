//! Error handling for the AgriPredict backend
//!
//! Every handler returns `AppResult`, so failures are converted into a JSON
//! error envelope at the boundary and nothing escapes unhandled.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Request validation errors
    #[error("Missing required parameters: {0}")]
    MissingParameters(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // External service errors
    #[error("Weather data unavailable")]
    WeatherUnavailable,

    #[error("Geocoding service error: {0}")]
    GeocodeUnavailable(String),

    // Prediction errors
    #[error("ML model not available")]
    ModelUnavailable,

    #[error("Prediction failed")]
    PredictionFailed,

    // Localization errors
    #[error("Missing translation key '{key}' for language '{language}'")]
    TranslationMissing { language: String, key: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::MissingParameters(params) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "MISSING_PARAMETERS".to_string(),
                    message: format!("Missing required parameters: {}", params),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                },
            ),
            AppError::WeatherUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "WEATHER_UNAVAILABLE".to_string(),
                    message: "Weather data unavailable".to_string(),
                },
            ),
            AppError::GeocodeUnavailable(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "GEOCODE_UNAVAILABLE".to_string(),
                    message: format!("Geocoding service error: {}", msg),
                },
            ),
            AppError::ModelUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "MODEL_UNAVAILABLE".to_string(),
                    message: "ML model not available".to_string(),
                },
            ),
            AppError::PredictionFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "PREDICTION_FAILED".to_string(),
                    message: "Prediction failed".to_string(),
                },
            ),
            AppError::TranslationMissing { language, key } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "TRANSLATION_MISSING".to_string(),
                    message: format!(
                        "Missing translation key '{}' for language '{}'",
                        key, language
                    ),
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
