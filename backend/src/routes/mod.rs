//! Route definitions for the AgriPredict backend

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/languages", get(handlers::list_languages))
        .route("/location", post(handlers::detect_location))
        .route("/weather", get(handlers::get_weather))
        .route("/alerts", get(handlers::get_alerts))
        .route("/crop-suitability", post(handlers::crop_suitability))
        .route("/predict-yield", post(handlers::predict_yield))
        .route("/voice-summary", post(handlers::voice_summary))
        .nest("/notifications", notification_routes())
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new().route("/subscribe", post(handlers::subscribe_notifications))
}
