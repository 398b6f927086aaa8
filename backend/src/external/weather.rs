//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap for current conditions and forecasts.
//! Coordinates are passed through as the raw strings the caller supplied.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;

use shared::{CurrentConditions, ForecastBundle, WeatherSnapshot};

use crate::error::{AppError, AppResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Fetch current conditions plus forecast as a single snapshot.
    ///
    /// The two provider calls are treated as a unit: a transport or parse
    /// failure on either fails the whole fetch. Malformed-but-successful
    /// payloads propagate through as empty data.
    pub async fn fetch_snapshot(&self, lat: &str, lon: &str) -> AppResult<WeatherSnapshot> {
        let current = self.get_current(lat, lon).await?;
        let forecast = self.get_forecast(lat, lon).await?;

        Ok(WeatherSnapshot {
            current,
            forecast,
            timestamp: Utc::now(),
        })
    }

    /// Fetch current weather conditions by GPS coordinates
    pub async fn get_current(&self, lat: &str, lon: &str) -> AppResult<CurrentConditions> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, lat, lon, self.api_key
        );
        self.fetch_json(&url).await
    }

    /// Fetch the forecast by GPS coordinates
    pub async fn get_forecast(&self, lat: &str, lon: &str) -> AppResult<ForecastBundle> {
        let url = format!(
            "{}/forecast?lat={}&lon={}&appid={}&units=metric",
            self.base_url, lat, lon, self.api_key
        );
        self.fetch_json(&url).await
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!("Weather API request failed: {}", e);
            AppError::WeatherUnavailable
        })?;

        if !response.status().is_success() {
            tracing::warn!("Weather API returned status {}", response.status());
            return Err(AppError::WeatherUnavailable);
        }

        response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse weather response: {}", e);
            AppError::WeatherUnavailable
        })
    }
}
