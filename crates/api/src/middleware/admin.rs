//! Shared-secret gate for destructive admin endpoints.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use daywise_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the admin secret.
pub const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

/// Extractor that only succeeds when `X-Admin-Secret` matches the configured
/// `RESET_SECRET`. Rejects with 401 Unauthorized otherwise, including when no
/// secret is configured at all.
///
/// ```ignore
/// async fn reset(_admin: AdminSecret, State(state): State<AppState>) -> AppResult<()> {
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct AdminSecret;

impl FromRequestParts<AppState> for AdminSecret {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.reset_secret.as_deref() else {
            tracing::warn!("Admin request refused: RESET_SECRET is not configured");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Admin operations are disabled".into(),
            )));
        };

        let provided = parts
            .headers
            .get(ADMIN_SECRET_HEADER)
            .and_then(|v| v.to_str().ok());

        match provided {
            Some(secret) if secrets_match(secret.as_bytes(), expected.as_bytes()) => {
                Ok(AdminSecret)
            }
            Some(_) => Err(AppError::Core(CoreError::Unauthorized(
                "Invalid admin secret".into(),
            ))),
            None => Err(AppError::Core(CoreError::Unauthorized(
                "Missing X-Admin-Secret header".into(),
            ))),
        }
    }
}

/// Compare without short-circuiting on the first differing byte.
fn secrets_match(provided: &[u8], expected: &[u8]) -> bool {
    provided.len() == expected.len()
        && provided
            .iter()
            .zip(expected)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
