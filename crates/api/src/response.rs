//! Shared response bodies for API handlers.
//!
//! Collections and single records are returned bare (the web client expects
//! plain arrays and objects); these types cover the acknowledgement shapes.

use serde::Serialize;

/// `{ "status": "success" }` acknowledgement for operations with no payload.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub const SUCCESS: Self = Self { status: "success" };
}

/// Status acknowledgement carrying an operation result alongside it.
///
/// The payload's fields are flattened next to `status`.
#[derive(Debug, Serialize)]
pub struct StatusWith<T: Serialize> {
    pub status: &'static str,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> StatusWith<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}
