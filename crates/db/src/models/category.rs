//! Category model and DTOs.

use daywise_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Category {
    #[ts(type = "number")]
    pub id: DbId,
    pub name: String,
    /// `#RRGGBB` hex color.
    pub color: String,
}

/// One element of the `POST /categories` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertCategory {
    pub id: Option<DbId>,
    pub name: String,
    pub color: String,
}

/// What a reconciliation did to the `categories` table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReconcileOutcome {
    /// Every category after the reconciliation committed.
    pub categories: Vec<Category>,
    /// Ids that were newly assigned by the database.
    pub inserted: Vec<DbId>,
    /// Caller-supplied ids that were inserted or overwritten.
    pub upserted: Vec<DbId>,
    /// Ids that existed before the call but were absent from the payload.
    pub deleted: Vec<DbId>,
}
