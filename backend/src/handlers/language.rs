//! Supported languages endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use shared::LanguageInfo;

use crate::AppState;

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
    pub total_count: usize,
}

/// List all supported languages
pub async fn list_languages(State(state): State<AppState>) -> Json<LanguagesResponse> {
    let languages = state.translations.languages().to_vec();
    let total_count = languages.len();
    Json(LanguagesResponse {
        languages,
        total_count,
    })
}
