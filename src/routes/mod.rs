use axum::extract::{rejection::PathRejection, Path};

use crate::error::AppError;

pub mod auth;
pub mod feedback;
pub mod health;
pub mod plan;
pub mod runs;

/// Unwraps a path extractor, reporting malformed segments as a JSON 400.
pub(crate) fn path_param<T>(param: Result<Path<T>, PathRejection>) -> Result<T, AppError> {
    param
        .map(|Path(value)| value)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}
