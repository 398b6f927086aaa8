//! Configuration management for the AgriPredict backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// Reverse geocoding provider configuration
    pub geocode: GeocodeConfig,

    /// Yield model artifact configuration
    pub model: ModelConfig,

    /// Weather cache configuration
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key; empty means weather-dependent endpoints fail
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodeConfig {
    /// Reverse geocoding API endpoint
    pub api_endpoint: String,

    /// User-Agent sent to the geocoding provider
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Path to the trained yield model artifact
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// Freshness window for cached weather, in minutes
    pub ttl_minutes: i64,

    /// Upper bound on cached coordinate entries before eviction
    pub max_entries: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5002)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "weather.api_endpoint",
                "https://api.openweathermap.org/data/2.5",
            )?
            .set_default("weather.api_key", "")?
            .set_default("geocode.api_endpoint", "https://nominatim.openstreetmap.org")?
            .set_default("geocode.user_agent", "agripredict")?
            .set_default("model.path", "crop_yield_model.json")?
            .set_default("cache.ttl_minutes", 10)?
            .set_default("cache.max_entries", 1024)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5002,
            host: "0.0.0.0".to_string(),
        }
    }
}
