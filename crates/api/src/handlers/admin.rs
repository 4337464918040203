//! Destructive maintenance endpoints, gated by [`AdminSecret`].

use axum::extract::State;
use axum::Json;
use daywise_db::repositories::TaskRepo;

use crate::error::AppResult;
use crate::middleware::admin::AdminSecret;
use crate::response::StatusResponse;
use crate::state::AppState;

/// GET /db-reset
///
/// Remove every task and restart task ids at 1. Categories are untouched.
pub async fn reset_tasks(
    _admin: AdminSecret,
    State(state): State<AppState>,
) -> AppResult<Json<StatusResponse>> {
    TaskRepo::truncate(&state.pool).await?;

    tracing::warn!("Task table truncated via admin reset");

    Ok(Json(StatusResponse::SUCCESS))
}
