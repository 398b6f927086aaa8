//! Location detection handler

use axum::{extract::State, Json};
use serde::Deserialize;
use validator::Validate;

use shared::LocationInfo;

use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct LocationRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub latitude: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub longitude: String,
}

/// Reverse-geocode coordinates into region info
pub async fn detect_location(
    State(state): State<AppState>,
    Json(input): Json<LocationRequest>,
) -> AppResult<Json<LocationInfo>> {
    input
        .validate()
        .map_err(|_| AppError::MissingParameters("latitude, longitude".to_string()))?;

    let place = state
        .geocode
        .reverse(&input.latitude, &input.longitude)
        .await?
        .ok_or_else(|| AppError::NotFound("Location".to_string()))?;

    Ok(Json(LocationInfo {
        region: place.region,
        district: place.district,
        latitude: input.latitude,
        longitude: input.longitude,
        address: place.address,
    }))
}
