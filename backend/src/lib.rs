//! AgriPredict backend library
//!
//! Aggregates third-party weather data, derives rule-based alerts and a
//! crop-suitability score, and serves predictions from a pre-trained yield
//! regression artifact through JSON endpoints.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use external::GeocodeClient;
use services::{
    AlertAnalyzer, SuitabilityScorer, TranslationTable, VoiceComposer, WeatherService, YieldModel,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherService,
    pub geocode: GeocodeClient,
    pub alerts: AlertAnalyzer,
    pub suitability: SuitabilityScorer,
    pub voice: VoiceComposer,
    pub translations: Arc<TranslationTable>,
    /// Loaded once at startup; `None` degrades the prediction endpoint only.
    pub model: Option<Arc<YieldModel>>,
}

impl AppState {
    /// Wire up services from configuration and an optionally loaded model.
    pub fn new(config: Config, model: Option<YieldModel>) -> Self {
        let translations = Arc::new(TranslationTable::new());

        let weather = WeatherService::new(
            config.weather.api_key.clone(),
            config.weather.api_endpoint.clone(),
            config.cache.ttl_minutes,
            config.cache.max_entries,
        );
        let geocode = GeocodeClient::new(
            config.geocode.api_endpoint.clone(),
            config.geocode.user_agent.clone(),
        );

        Self {
            config: Arc::new(config),
            weather,
            geocode,
            alerts: AlertAnalyzer::new(translations.clone()),
            suitability: SuitabilityScorer::new(translations.clone()),
            voice: VoiceComposer::new(translations.clone()),
            translations,
            model: model.map(Arc::new),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgriPredict API v1.0"
}
