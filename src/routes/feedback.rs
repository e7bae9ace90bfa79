use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use chrono::Duration;
use serde::Serialize;

use crate::auth::authenticate;
use crate::coach::engine::generate_recommendation;
use crate::coach::pace::{analyze_pace_variability, PaceAnalysis};
use crate::coach::stats;
use crate::coach::templates::{coaching_message, CoachingContext, CoachingTopic};
use crate::error::AppError;
use crate::state::AppState;
use crate::types::feedback::Feedback;
use crate::types::stats::WeeklyStats;

use super::path_param;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/feedback", get(feedback))
        .route("/api/feedback/pace-analysis/:user_id", get(pace_analysis))
}

#[derive(Serialize)]
struct FeedbackResponse {
    feedback: Feedback,
    weekly_stats: WeeklyStats,
    coaching_message: String,
}

async fn feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<FeedbackResponse>, AppError> {
    let claims = authenticate(&headers, &state.config().jwt_secret)?;

    let now = state.now();
    let since = now - Duration::days(state.config().feedback_window_days);
    let runs = state.store().find_by_user_and_date_range(&claims.sub, since, now);
    let weekly_stats = stats::aggregate(&runs);

    let feedback = generate_recommendation(
        &weekly_stats,
        Some(&state.config().goals),
        &mut rand::thread_rng(),
    );
    let context = CoachingContext::for_feedback(claims.name.clone(), &feedback);
    let coaching_message = coaching_message(CoachingTopic::from(feedback.kind), &context);

    tracing::info!(
        "Feedback for {}: {} ({} runs in window)",
        claims.sub,
        feedback.kind.as_str(),
        weekly_stats.total_runs
    );

    Ok(Json(FeedbackResponse {
        feedback,
        weekly_stats,
        coaching_message,
    }))
}

async fn pace_analysis(
    State(state): State<AppState>,
    user_id: Result<Path<String>, PathRejection>,
) -> Result<Json<PaceAnalysis>, AppError> {
    let user_id = path_param(user_id)?;
    let mut runs = state.store().find_by_user(&user_id);
    runs.sort_by(|a, b| b.date.cmp(&a.date));
    runs.truncate(state.config().pace_analysis_window);

    Ok(Json(analyze_pace_variability(&runs)))
}
