//! Handlers for categories.
//!
//! Categories are never edited one at a time: the client posts the complete
//! desired set and the server reconciles storage against it.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use daywise_core::category::{validate_color_hex, validate_name};
use daywise_core::error::CoreError;
use daywise_core::task::validate_explicit_id;
use daywise_db::models::category::{Category, ReconcileOutcome, UpsertCategory};
use daywise_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::response::StatusWith;
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /categories
///
/// Replace the stored category set with the posted array. Categories absent
/// from the array are deleted and tasks referencing them lose their
/// category. Every entry is validated before anything is written.
pub async fn reconcile_categories(
    State(state): State<AppState>,
    payload: Result<Json<Vec<UpsertCategory>>, JsonRejection>,
) -> AppResult<Json<StatusWith<ReconcileOutcome>>> {
    let Json(desired) = payload?;

    for (i, category) in desired.iter().enumerate() {
        validate_entry(category)
            .map_err(|e| CoreError::Validation(format!("categories[{i}]: {}", message(e))))?;
    }

    let outcome = CategoryRepo::reconcile(&state.pool, &desired).await?;

    tracing::info!(
        inserted = outcome.inserted.len(),
        upserted = outcome.upserted.len(),
        deleted = ?outcome.deleted,
        "Categories reconciled",
    );

    Ok(Json(StatusWith::success(outcome)))
}

fn validate_entry(category: &UpsertCategory) -> Result<(), CoreError> {
    if let Some(id) = category.id {
        validate_explicit_id("Category", id)?;
    }
    validate_name(&category.name)?;
    validate_color_hex(&category.color)
}

fn message(err: CoreError) -> String {
    match err {
        CoreError::Validation(msg) => msg,
        other => other.to_string(),
    }
}
