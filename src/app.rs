use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::openweather::{AirQualityProvider, OpenWeatherClient};
use crate::routes::create_routes;

/// Shared router state
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn AirQualityProvider>,
}

/// Initialize tracing and logging for the application
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "air_quality_svc=info,tower_http=debug,axum::rejection=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Create and configure the Axum application backed by OpenWeather
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    info!("Initializing OpenWeather client");
    let client = OpenWeatherClient::new(config)?;
    Ok(create_app_with_provider(Arc::new(client)))
}

/// Create the application around any air quality provider
pub fn create_app_with_provider(provider: Arc<dyn AirQualityProvider>) -> Router {
    info!("Initializing application router");

    Router::new()
        .merge(create_routes())
        .with_state(AppState { provider })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
