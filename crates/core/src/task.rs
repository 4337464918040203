//! Validation rules for scheduled tasks.

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Reject empty or whitespace-only task titles.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Task title must not be empty".into()));
    }
    Ok(())
}

/// Largest id a caller may choose. Matches the original SERIAL range and
/// leaves the BIGSERIAL sequence room to keep issuing ids after being moved
/// past an explicit id.
pub const MAX_EXPLICIT_ID: DbId = i32::MAX as DbId;

/// A caller-supplied id must lie in `1..=MAX_EXPLICIT_ID`; `0` and negatives
/// never come out of a BIGSERIAL column.
pub fn validate_explicit_id(entity: &str, id: DbId) -> Result<(), CoreError> {
    if !(1..=MAX_EXPLICIT_ID).contains(&id) {
        return Err(CoreError::Validation(format!(
            "{entity} id must be between 1 and {MAX_EXPLICIT_ID}, got {id}"
        )));
    }
    Ok(())
}

/// When both ends of a time box are set, `end` must not precede `start`.
///
/// A task with either end missing is accepted as-is.
pub fn validate_time_range(
    start: Option<&Timestamp>,
    end: Option<&Timestamp>,
) -> Result<(), CoreError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(CoreError::Validation(format!(
                "Task end ({end}) must not be before start ({start})"
            )));
        }
    }
    Ok(())
}
