use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use daywise_core::error::CoreError;
use serde_json::json;

/// PostgreSQL: the input could not be parsed as a date/time.
const PG_INVALID_DATETIME_FORMAT: &str = "22007";
/// PostgreSQL: a date/time field was out of range.
const PG_DATETIME_FIELD_OVERFLOW: &str = "22008";
/// PostgreSQL: a SERIALIZABLE transaction lost a conflict.
const PG_SERIALIZATION_FAILURE: &str = "40001";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `daywise_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was missing, not JSON, or the wrong shape.
    #[error("Invalid JSON: {0}")]
    JsonBody(#[from] JsonRejection),

    /// A path segment could not be parsed (e.g. a non-integer id).
    #[error("Invalid path parameter: {0}")]
    PathParam(#[from] PathRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Extractor rejections ---
            AppError::JsonBody(rejection) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                format!("Invalid JSON: {}", rejection.body_text()),
            ),
            AppError::PathParam(rejection) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                format!("Invalid path parameter: {}", rejection.body_text()),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unparseable or out-of-range date/time input (22007, 22008) maps to 400.
/// - Serialization failures (40001) map to 409 so the client can resubmit.
/// - Everything else maps to 500 and carries the database error text.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some(PG_INVALID_DATETIME_FORMAT | PG_DATETIME_FIELD_OVERFLOW) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                format!("Invalid timestamp: {}", db_err.message()),
            ),
            Some(PG_SERIALIZATION_FAILURE) => {
                tracing::warn!(error = %db_err, "Serialization failure");
                (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    "Concurrent update detected, retry the request".to_string(),
                )
            }
            _ => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    format!("Database error: {db_err}"),
                )
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                format!("Database error: {other}"),
            )
        }
    }
}
