//! Weather endpoint handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use shared::{RawCoordinates, WeatherSnapshot};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Query parameters carrying raw coordinate strings
#[derive(Debug, Deserialize)]
pub struct CoordinatesQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl CoordinatesQuery {
    /// Extract coordinates, rejecting missing or empty parameters.
    pub fn coordinates(&self) -> AppResult<RawCoordinates> {
        match (self.lat.as_deref(), self.lon.as_deref()) {
            (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => {
                Ok(RawCoordinates::new(lat, lon))
            }
            _ => Err(AppError::MissingParameters("lat, lon".to_string())),
        }
    }
}

/// Get current weather and forecast (cached per coordinate pair)
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> AppResult<Json<WeatherSnapshot>> {
    let coords = query.coordinates()?;
    let snapshot = state.weather.get_weather(&coords).await?;
    Ok(Json(snapshot))
}
