//! Handlers for scheduled tasks.
//!
//! Upsert, list (all or by time window) and delete. Payloads map one-to-one
//! onto rows of the `tasks` table.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use daywise_core::error::CoreError;
use daywise_core::task::{validate_explicit_id, validate_time_range, validate_title};
use daywise_core::types::DbId;
use daywise_db::models::task::{Task, UpsertTask};
use daywise_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::response::StatusResponse;
use crate::state::AppState;

/// POST /task
///
/// Insert a task, or overwrite every mutable field of the task whose id is
/// supplied. Returns the persisted row.
pub async fn upsert_task(
    State(state): State<AppState>,
    payload: Result<Json<UpsertTask>, JsonRejection>,
) -> AppResult<Json<Task>> {
    let Json(input) = payload?;

    validate_title(&input.title)?;
    if let Some(id) = input.id {
        validate_explicit_id("Task", id)?;
    }
    validate_time_range(input.start.as_ref(), input.end.as_ref())?;

    let task = TaskRepo::upsert(&state.pool, &input).await?;

    tracing::info!(
        task_id = task.id,
        category_id = ?task.category_id,
        created = input.id.is_none(),
        "Task saved",
    );

    Ok(Json(task))
}

/// GET /tasks
pub async fn list_tasks(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list_all(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /tasks/{start}/to/{end}
///
/// Tasks whose whole time box lies inside `[start, end]`, bounds inclusive.
/// The bounds are compared as `timestamptz` by the database.
pub async fn list_tasks_in_range(
    State(state): State<AppState>,
    bounds: Result<Path<(String, String)>, PathRejection>,
) -> AppResult<Json<Vec<Task>>> {
    let Path((start, end)) = bounds?;

    let tasks = TaskRepo::list_in_range(&state.pool, &start, &end).await?;

    tracing::debug!(%start, %end, count = tasks.len(), "Listed tasks in range");

    Ok(Json(tasks))
}

/// DELETE /task/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    task_id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<StatusResponse>> {
    let Path(task_id) = task_id?;

    let deleted = TaskRepo::delete(&state.pool, task_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }));
    }

    tracing::info!(task_id, "Task deleted");

    Ok(Json(StatusResponse::SUCCESS))
}
