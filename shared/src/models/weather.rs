//! Weather data models
//!
//! Payloads mirror the OpenWeatherMap response shapes the platform consumes.
//! Every leaf field is optional: a malformed-but-200 provider response
//! deserializes to empty data instead of failing the request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cached weather capture: current conditions plus forecast, stamped with
/// the fetch instant. Immutable once stored; a refresh replaces the whole
/// entry rather than mutating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub forecast: ForecastBundle,
    pub timestamp: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Current temperature in celsius, if the provider reported one.
    pub fn temperature(&self) -> Option<f64> {
        self.current.main.as_ref().and_then(|m| m.temp)
    }

    /// Current relative humidity percentage, if reported.
    pub fn humidity(&self) -> Option<f64> {
        self.current.main.as_ref().and_then(|m| m.humidity)
    }

    /// Human-readable description of the current conditions.
    pub fn description(&self) -> Option<&str> {
        self.current
            .weather
            .first()
            .and_then(|w| w.description.as_deref())
    }
}

/// Current weather payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentConditions {
    pub main: Option<MainReadings>,
    pub weather: Vec<ConditionSummary>,
    pub wind: Option<WindReadings>,
    pub name: Option<String>,
}

/// Core sensor readings block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MainReadings {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

/// Condition summary (e.g. "Rain" / "light rain").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionSummary {
    pub main: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Wind readings block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindReadings {
    pub speed: Option<f64>,
}

/// Forecast payload: three-hourly slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastBundle {
    pub list: Vec<ForecastSlot>,
}

/// A single forecast time slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastSlot {
    /// Unix timestamp of the slot.
    pub dt: i64,
    pub main: Option<MainReadings>,
    pub weather: Vec<ConditionSummary>,
    /// Present only when the slot carries rain volume data.
    pub rain: Option<RainVolume>,
    /// Probability of precipitation, 0-1.
    pub pop: Option<f64>,
}

/// Rain volume over the slot window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RainVolume {
    #[serde(rename = "3h")]
    pub three_hour: Option<f64>,
}
