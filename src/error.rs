use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Rejections raised while validating run input, before anything reaches the coach.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RunError {
    #[error("user_id is required")]
    MissingUser,
    #[error("Distance must be greater than 0 km (got {0})")]
    InvalidDistance(f64),
    #[error("Duration must not be negative (got {0})")]
    InvalidDuration(f64),
    #[error("Pace must be greater than 0 s/km (got {0})")]
    InvalidPace(f64),
    #[error("Recovery score must be between 1 and 10 (got {0})")]
    InvalidRecoveryScore(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Run(#[from] RunError),
    #[error("Run not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Run(_) | AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        if status.is_server_error() {
            tracing::error!("{}", message);
        }

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
