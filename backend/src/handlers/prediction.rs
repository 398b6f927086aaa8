//! Yield prediction endpoint handler

use axum::{extract::State, Json};

use shared::PredictionResult;

use crate::error::{AppError, AppResult};
use crate::services::prediction::PredictYieldInput;
use crate::AppState;

/// Predict crop yield using the trained regression artifact
pub async fn predict_yield(
    State(state): State<AppState>,
    Json(input): Json<PredictYieldInput>,
) -> AppResult<Json<PredictionResult>> {
    let model = state.model.as_ref().ok_or(AppError::ModelUnavailable)?;
    let result = model.predict(&input)?;
    Ok(Json(result))
}
