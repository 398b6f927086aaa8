//! Crop suitability endpoint handler

use axum::{extract::State, Json};
use serde::Deserialize;
use validator::Validate;

use shared::{RawCoordinates, SuitabilityResult};

use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CropSuitabilityRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub crop: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub latitude: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub soil: SoilData,
    pub language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SoilData {
    pub ph: Option<f64>,
}

/// Calculate crop suitability for the given conditions.
///
/// A weather fetch failure does not fail the request: the scorer falls back
/// to its fixed default score.
pub async fn crop_suitability(
    State(state): State<AppState>,
    Json(input): Json<CropSuitabilityRequest>,
) -> AppResult<Json<SuitabilityResult>> {
    input
        .validate()
        .map_err(|_| AppError::MissingParameters("crop, latitude, longitude".to_string()))?;

    let language = input.language.as_deref().unwrap_or("en");
    let coords = RawCoordinates::new(input.latitude.clone(), input.longitude.clone());

    let snapshot = match state.weather.get_weather(&coords).await {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!("Suitability falling back to default score: {}", e);
            None
        }
    };

    let result = state.suitability.evaluate(
        &input.crop,
        snapshot.as_ref(),
        input.soil.ph,
        language,
        state.model.is_some(),
    );

    Ok(Json(result))
}
