use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

/// Custom error type for the application
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    ValidationError(String),
    NotFound(String),
    /// Geocoding or air pollution lookup failed (non-2xx, timeout, bad payload).
    UpstreamError(String),
    /// The PM2.5 reading falls outside the AQI breakpoint table.
    ComputationError(String),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamError(_) => StatusCode::BAD_GATEWAY,
            AppError::ComputationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error_type, message) = match self {
            AppError::BadRequest(msg) => ("BAD_REQUEST", msg),
            AppError::ValidationError(msg) => ("VALIDATION_ERROR", msg),
            AppError::NotFound(msg) => ("NOT_FOUND", msg),
            AppError::UpstreamError(msg) => {
                error!("Upstream error: {}", msg);
                ("UPSTREAM_ERROR", msg)
            }
            AppError::ComputationError(msg) => {
                warn!("Computation error: {}", msg);
                ("COMPUTATION_ERROR", msg)
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type for application handlers
pub type AppResult<T> = Result<T, AppError>;
