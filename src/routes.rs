use crate::app::AppState;
use crate::handlers::{air_quality_details_handler, air_quality_handler, health_check, root};
use axum::{Router, routing::get};

/// Creates and configures all application routes
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(health_check))
        .route("/air-quality", get(air_quality_handler))
        .route("/air-quality/details", get(air_quality_details_handler))
}
