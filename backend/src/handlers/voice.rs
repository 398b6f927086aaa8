//! Voice summary endpoint handler

use axum::{extract::State, Json};
use serde::Deserialize;

use shared::{ScreenContent, VoiceSummary};

use crate::error::AppResult;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VoiceSummaryRequest {
    pub language: Option<String>,
    pub screen_content: ScreenContent,
}

/// Compose a spoken summary of the current screen content
pub async fn voice_summary(
    State(state): State<AppState>,
    Json(input): Json<VoiceSummaryRequest>,
) -> AppResult<Json<VoiceSummary>> {
    let language = input.language.as_deref().unwrap_or("en");
    let summary = state.voice.compose(language, &input.screen_content);
    Ok(Json(summary))
}
