use crate::app::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{AirQualityDetails, AirQualityQuery, AirQualityReport, StatusResponse};
use crate::report::{build_details, build_report};
use axum::extract::{Query, State, rejection::QueryRejection};
use axum::response::Json as ResponseJson;
use tracing::{debug, info};

/// Root handler, a liveness probe for hosting platforms
pub async fn root() -> AppResult<ResponseJson<StatusResponse>> {
    debug!("Root endpoint called");
    Ok(ResponseJson(StatusResponse::running()))
}

/// Health check handler
pub async fn health_check() -> AppResult<ResponseJson<StatusResponse>> {
    debug!("Health check endpoint called");
    Ok(ResponseJson(StatusResponse::ok()))
}

fn validated_city(query: Result<Query<AirQualityQuery>, QueryRejection>) -> AppResult<String> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    if !query.is_valid() {
        return Err(AppError::ValidationError(
            "City cannot be empty or only whitespace".to_string(),
        ));
    }
    Ok(query.city)
}

/// Air quality handler
/// Geocodes the requested city and returns its US AQI with health advice
pub async fn air_quality_handler(
    State(state): State<AppState>,
    query: Result<Query<AirQualityQuery>, QueryRejection>,
) -> AppResult<ResponseJson<AirQualityReport>> {
    let city = validated_city(query)?;
    info!("Air quality endpoint called for city: {}", city);

    let report = build_report(state.provider.as_ref(), &city).await?;

    info!("Returning air quality report for {}", report.city);
    Ok(ResponseJson(report))
}

/// Same lookup as [`air_quality_handler`], with coordinates and OpenWeather's 1–5 index
pub async fn air_quality_details_handler(
    State(state): State<AppState>,
    query: Result<Query<AirQualityQuery>, QueryRejection>,
) -> AppResult<ResponseJson<AirQualityDetails>> {
    let city = validated_city(query)?;
    info!("Air quality details endpoint called for city: {}", city);

    let details = build_details(state.provider.as_ref(), &city).await?;
    Ok(ResponseJson(details))
}
