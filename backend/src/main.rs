//! AgriPredict Backend Server
//!
//! Aggregates weather data, rule-based farming alerts, crop suitability
//! scoring, and ML yield predictions behind a multi-language JSON API.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agripredict_backend::{config::Config, create_app, services::YieldModel, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agripredict_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting AgriPredict Server");
    tracing::info!("Environment: {}", config.environment);

    if config.weather.api_key.is_empty() {
        tracing::warn!("Weather API key not configured; weather endpoints will fail");
    }

    // Load the yield model artifact; prediction degrades without it
    let model = match YieldModel::load(&config.model.path) {
        Ok(model) => {
            tracing::info!("Yield model loaded from {}", config.model.path);
            Some(model)
        }
        Err(e) => {
            tracing::warn!("Yield model not loaded ({}); predictions disabled", e);
            None
        }
    };

    // Create application state and router
    let host: std::net::IpAddr = config.server.host.parse()?;
    let port = config.server.port;
    let state = AppState::new(config, model);
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::new(host, port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
