use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDateTime;
use serde_json::{json, Value};

use crate::clock::week_start;
use crate::coach::stats;
use crate::error::AppError;
use crate::state::AppState;
use crate::types::run::{NewRun, Run, RunPatch};

use super::path_param;

pub fn router() -> Router<AppState> {
    // `:id` is the user id for GET and the run id for PATCH/DELETE
    Router::new()
        .route("/api/runs", post(create_run))
        .route(
            "/api/runs/:id",
            get(list_runs).patch(update_run).delete(delete_run),
        )
        .route("/api/runs/:id/weekly/:year/:week", get(weekly_stats))
}

// a saved plan no longer mirrors the week once one of its runs changes
fn invalidate_plan(state: &AppState, user_id: &str, date: NaiveDateTime) {
    if state
        .store()
        .remove_plan(user_id, week_start(date))
        .is_some()
    {
        tracing::debug!("Dropped saved plan for {} after a run change", user_id);
    }
}

async fn list_runs(
    State(state): State<AppState>,
    user_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Run>>, AppError> {
    let user_id = path_param(user_id)?;
    Ok(Json(state.store().find_by_user(&user_id)))
}

async fn create_run(
    State(state): State<AppState>,
    payload: Result<Json<NewRun>, JsonRejection>,
) -> Result<(StatusCode, Json<Run>), AppError> {
    let Json(input) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let run = Run::create(input, state.now())?;
    let run = state.store().save(run);
    invalidate_plan(&state, &run.user_id, run.date);

    tracing::info!(
        "Logged {} run {} for {} ({:.2} km, week {}/{})",
        run.run_type.as_str(),
        run.id,
        run.user_id,
        run.distance,
        run.week_number,
        run.year_number
    );

    Ok((StatusCode::CREATED, Json(run)))
}

async fn update_run(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<RunPatch>, JsonRejection>,
) -> Result<Json<Run>, AppError> {
    let id = path_param(id)?;
    let existing = state
        .store()
        .get(&id)
        .ok_or_else(|| AppError::NotFound(id.clone()))?;
    let Json(patch) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let updated = state.store().save(existing.apply_patch(patch)?);
    invalidate_plan(&state, &existing.user_id, existing.date);
    invalidate_plan(&state, &updated.user_id, updated.date);
    tracing::info!("Updated run {}", updated.id);
    Ok(Json(updated))
}

async fn delete_run(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let id = path_param(id)?;
    let deleted = state
        .store()
        .delete(&id)
        .ok_or_else(|| AppError::NotFound(id.clone()))?;
    invalidate_plan(&state, &deleted.user_id, deleted.date);
    tracing::info!("Deleted run {}", id);
    Ok(Json(json!({ "message": "Run deleted" })))
}

async fn weekly_stats(
    State(state): State<AppState>,
    params: Result<Path<(String, i32, u32)>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let (user_id, year, week) = path_param(params)?;
    let runs = state.store().find_by_user_year_week(&user_id, year, week);
    if runs.is_empty() {
        return Ok(Json(json!({})));
    }
    let stats = stats::aggregate(&runs);
    serde_json::to_value(stats)
        .map(Json)
        .map_err(|e| AppError::Internal(format!("Failed to encode weekly stats: {}", e)))
}
