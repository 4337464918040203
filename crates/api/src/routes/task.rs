use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Task routes.
///
/// ```text
/// POST   /task                       -> upsert_task
/// DELETE /task/{id}                  -> delete_task
/// GET    /tasks                      -> list_tasks
/// GET    /tasks/{start}/to/{end}     -> list_tasks_in_range
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/task", post(task::upsert_task))
        .route("/task/{id}", delete(task::delete_task))
        .route("/tasks", get(task::list_tasks))
        .route("/tasks/{start}/to/{end}", get(task::list_tasks_in_range))
}
