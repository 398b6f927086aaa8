//! Notification subscription handler
//!
//! Subscriptions are acknowledged without persistence; delivery would go
//! through a push service in a full deployment.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct SubscribeResponse {
    pub status: String,
    pub message: String,
}

/// Subscribe to push notifications
pub async fn subscribe_notifications() -> Json<SubscribeResponse> {
    Json(SubscribeResponse {
        status: "subscribed".to_string(),
        message: "Successfully subscribed to notifications".to_string(),
    })
}
