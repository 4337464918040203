use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Category routes.
///
/// ```text
/// GET    /categories                 -> list_categories
/// POST   /categories                 -> reconcile_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/categories",
        get(category::list_categories).post(category::reconcile_categories),
    )
}
