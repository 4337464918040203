//! Task model and DTOs.

use daywise_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;

/// A row from the `tasks` table.
///
/// `category_id` is exposed to the web client as `category`.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Task {
    #[ts(type = "number")]
    pub id: DbId,
    pub title: String,
    #[serde(rename = "category")]
    #[ts(type = "number | null")]
    pub category_id: Option<DbId>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

/// Payload for `POST /task`.
///
/// With `id` set the row is inserted or overwritten; without it a new id is
/// assigned by the database.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertTask {
    pub id: Option<DbId>,
    pub title: String,
    #[serde(rename = "category")]
    pub category_id: Option<DbId>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}
