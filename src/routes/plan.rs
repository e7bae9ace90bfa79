use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::auth::authenticate;
use crate::coach::scheduler::{adjust_plan, current_week_plan};
use crate::error::AppError;
use crate::state::AppState;
use crate::types::feedback::Feedback;
use crate::types::plan::WeeklyPlan;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/plan", get(current_plan))
        .route("/api/plan/adjust", post(adjust))
}

#[derive(Deserialize)]
struct AdjustRequest {
    feedback: Feedback,
    plan: Option<WeeklyPlan>,
}

async fn current_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<WeeklyPlan>, AppError> {
    let claims = authenticate(&headers, &state.config().jwt_secret)?;
    Ok(Json(current_week_plan(state.store(), &claims.sub, state.now())))
}

async fn adjust(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AdjustRequest>, JsonRejection>,
) -> Result<Json<WeeklyPlan>, AppError> {
    let claims = authenticate(&headers, &state.config().jwt_secret)?;
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let now = state.now();
    let plan = match req.plan {
        Some(plan) if plan.user_id != claims.sub => {
            return Err(AppError::BadRequest(
                "Plan belongs to a different user".to_string(),
            ));
        }
        Some(plan) => plan,
        None => current_week_plan(state.store(), &claims.sub, now),
    };

    let adjusted = adjust_plan(&plan, &req.feedback, now);
    if adjusted.workouts == plan.workouts {
        tracing::info!(
            "No {} adjustment applicable for {}",
            req.feedback.kind.as_str(),
            claims.sub
        );
        return Ok(Json(adjusted));
    }

    tracing::info!(
        "Applied {} adjustment for {} ({} workouts, {:.1} km)",
        req.feedback.kind.as_str(),
        claims.sub,
        adjusted.total_workouts,
        adjusted.total_distance
    );
    state.store().save_plan(adjusted.clone());
    Ok(Json(adjusted))
}
