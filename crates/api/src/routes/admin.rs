use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin routes. Each handler takes the `AdminSecret` extractor.
///
/// ```text
/// GET    /db-reset                   -> reset_tasks
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/db-reset", get(admin::reset_tasks))
}
