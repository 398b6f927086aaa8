//! Weather alert endpoint handlers

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared::{AlertRecord, RawCoordinates};

use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AlertsQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub lang: Option<String>,
}

#[derive(Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<AlertRecord>,
    pub timestamp: DateTime<Utc>,
}

/// Get weather and farming alerts for a location
pub async fn get_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertsQuery>,
) -> AppResult<Json<AlertsResponse>> {
    let coords = match (query.lat.as_deref(), query.lon.as_deref()) {
        (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => {
            RawCoordinates::new(lat, lon)
        }
        _ => return Err(AppError::MissingParameters("lat, lon".to_string())),
    };
    let language = query.lang.as_deref().unwrap_or("en");

    let snapshot = state.weather.get_weather(&coords).await?;
    let alerts = state.alerts.analyze(&snapshot, language, Utc::now())?;

    Ok(Json(AlertsResponse {
        alerts,
        timestamp: Utc::now(),
    }))
}
