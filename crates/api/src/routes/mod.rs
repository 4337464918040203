pub mod admin;
pub mod category;
pub mod health;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /task                          upsert (POST)
/// /task/{id}                     delete (DELETE)
/// /tasks                         list (GET)
/// /tasks/{start}/to/{end}        list within an inclusive window (GET)
///
/// /categories                    list (GET), reconcile full set (POST)
///
/// /db-reset                      truncate tasks (GET, X-Admin-Secret)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(task::router())
        .merge(category::router())
        .merge(admin::router())
}
