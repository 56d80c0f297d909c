use crate::dtos::{AckResponse, LogEntryRequest, RatingRequest};
use crate::models::{ActionLog, RatingLog};
use crate::services::{record_log_written, LogKind};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::JsonBody;

/// `POST /log`: append one user action to `logs`.
pub async fn log_action(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LogEntryRequest>,
) -> Result<Json<AckResponse>, AppError> {
    let entry = ActionLog::from(req);
    state.db.insert_action_log(&entry).await?;

    tracing::info!(
        recipe_id = %entry.recipe_id,
        action = %entry.action,
        "Action logged"
    );
    record_log_written(LogKind::Action);

    Ok(Json(AckResponse::ok()))
}

/// `POST /rating`: append one rating to `logs`, the same collection used by
/// `/log`.
pub async fn log_rating(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RatingRequest>,
) -> Result<Json<AckResponse>, AppError> {
    let entry = RatingLog::from(req);
    state.db.insert_rating_log(&entry).await?;

    tracing::info!(
        recipe_id = %entry.recipe_id,
        rating = ?entry.rating,
        "Rating logged"
    );
    record_log_written(LogKind::Rating);

    Ok(Json(AckResponse::ok()))
}
