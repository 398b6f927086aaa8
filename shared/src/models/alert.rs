//! Weather alert models

use serde::{Deserialize, Serialize};

/// Types of farming alerts derived from weather data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    HeatStress,
    Rain,
    Drought,
}

/// Alert severity levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

/// A single alert shown to the farmer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRecord {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    /// Localized alert message.
    pub message: String,
    /// Symbolic icon id for the frontend.
    pub icon: String,
    /// Symbolic color id for the frontend.
    pub color: String,
}
