use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::auth::create_token;
use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/auth/token", post(issue_dev_token))
}

#[derive(Debug, Deserialize)]
struct TokenRequest {
    user_id: String,
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct TokenResponse {
    token: String,
    expires_in_seconds: u64,
}

async fn issue_dev_token(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    if !state.config().allow_dev_tokens {
        return Err(AppError::NotFound("Endpoint disabled".to_string()));
    }

    let user_id = req.user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::BadRequest("user_id is required".to_string()));
    }

    let config = state.config();
    let token = create_token(
        user_id,
        req.name.as_deref(),
        config.token_ttl_seconds,
        &config.jwt_secret,
    )?;

    Ok(Json(TokenResponse {
        token,
        expires_in_seconds: config.token_ttl_seconds,
    }))
}
