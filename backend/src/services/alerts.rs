//! Weather alert analysis
//!
//! Pure rules over a weather snapshot, evaluated heat -> rain -> drought.
//! Missing provider fields default so that absent data never triggers an
//! alert: temperature 0, humidity 100.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use shared::{AlertRecord, AlertSeverity, AlertType, WeatherSnapshot};

use crate::error::AppResult;
use crate::services::translation::{render, TranslationTable};

const HEAT_STRESS_TEMP: f64 = 35.0;
const DROUGHT_HUMIDITY: f64 = 30.0;
const DROUGHT_TEMP: f64 = 30.0;
/// Forecast slots scanned for rain (8 three-hour slots, about 24h).
const RAIN_SCAN_SLOTS: usize = 8;
const RAIN_ALERT_HORIZON_HOURS: f64 = 2.0;

/// Alert analyzer over cached snapshots.
#[derive(Clone)]
pub struct AlertAnalyzer {
    translations: Arc<TranslationTable>,
}

impl AlertAnalyzer {
    pub fn new(translations: Arc<TranslationTable>) -> Self {
        Self { translations }
    }

    /// Derive the ordered alert list for a snapshot.
    ///
    /// A missing translation key for the requested language is an error, not
    /// a silently skipped alert.
    pub fn analyze(
        &self,
        snapshot: &WeatherSnapshot,
        language: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<AlertRecord>> {
        let mut alerts = Vec::new();

        let temp = snapshot.temperature().unwrap_or(0.0);
        let humidity = snapshot.humidity().unwrap_or(100.0);

        if temp > HEAT_STRESS_TEMP {
            alerts.push(AlertRecord {
                alert_type: AlertType::HeatStress,
                severity: AlertSeverity::High,
                message: self.translations.required(language, "heat_stress")?.to_string(),
                icon: "fas fa-sun".to_string(),
                color: "red".to_string(),
            });
        }

        if let Some(hours) = first_rain_within_horizon(snapshot, now) {
            alerts.push(AlertRecord {
                alert_type: AlertType::Rain,
                severity: AlertSeverity::Medium,
                message: render(
                    self.translations.required(language, "rain_expected")?,
                    &[("hours", &hours.to_string())],
                ),
                icon: "fas fa-cloud-rain".to_string(),
                color: "blue".to_string(),
            });
        }

        if humidity < DROUGHT_HUMIDITY && temp > DROUGHT_TEMP {
            alerts.push(AlertRecord {
                alert_type: AlertType::Drought,
                severity: AlertSeverity::High,
                message: self
                    .translations
                    .required(language, "drought_warning")?
                    .to_string(),
                icon: "fas fa-sun".to_string(),
                color: "orange".to_string(),
            });
        }

        Ok(alerts)
    }
}

/// Scan the near-term forecast slots for rain within the alert horizon.
///
/// Returns the truncated hour count of the first qualifying slot. At most
/// one rain alert is ever emitted: scanning stops at the first slot that
/// both carries rain data and falls inside the horizon.
fn first_rain_within_horizon(snapshot: &WeatherSnapshot, now: DateTime<Utc>) -> Option<i64> {
    for slot in snapshot.forecast.list.iter().take(RAIN_SCAN_SLOTS) {
        if slot.rain.is_some() {
            let hours = (slot.dt - now.timestamp()) as f64 / 3600.0;
            if hours <= RAIN_ALERT_HORIZON_HOURS {
                return Some(hours as i64);
            }
        }
    }
    None
}
