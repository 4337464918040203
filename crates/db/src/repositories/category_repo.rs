//! Repository for the `categories` table, including full-set reconciliation.

use std::collections::BTreeSet;

use daywise_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use super::advance_id_sequence;
use crate::models::category::{Category, ReconcileOutcome, UpsertCategory};

/// Column list for `categories` queries.
const CATEGORY_COLUMNS: &str = "id, name, color";

/// Sequence backing `categories.id`.
const CATEGORY_ID_SEQUENCE: &str = "categories_id_seq";

/// Provides listing and reconciliation for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List every category in storage order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Replace the stored category set with `desired`.
    ///
    /// Entries carrying an id are upserted (name and color overwritten on
    /// conflict), entries without one are inserted, and every category that
    /// existed beforehand but is not named by the result is deleted. Tasks
    /// pointing at a deleted category keep their row with `category_id`
    /// cleared by the foreign key.
    ///
    /// Id-carrying entries are written before new ones so a freshly assigned
    /// id can never be overwritten by a later entry of the same payload.
    ///
    /// Runs in a single SERIALIZABLE transaction: any error rolls the whole
    /// set back, and a concurrent conflicting writer fails with SQLSTATE
    /// 40001 instead of interleaving.
    pub async fn reconcile(
        pool: &PgPool,
        desired: &[UpsertCategory],
    ) -> Result<ReconcileOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await?;

        let existing = Self::existing_ids(&mut tx).await?;
        let mut kept = BTreeSet::new();
        let mut outcome = ReconcileOutcome::default();

        for (id, input) in desired
            .iter()
            .filter_map(|c| c.id.map(|id| (id, c)))
        {
            Self::upsert_with_id(&mut tx, id, input).await?;
            kept.insert(id);
            outcome.upserted.push(id);
        }

        for input in desired.iter().filter(|c| c.id.is_none()) {
            let created = Self::insert(&mut tx, input).await?;
            kept.insert(created.id);
            outcome.inserted.push(created.id);
        }

        outcome.deleted = existing.difference(&kept).copied().collect();
        if !outcome.deleted.is_empty() {
            sqlx::query("DELETE FROM categories WHERE id = ANY($1)")
                .bind(&outcome.deleted)
                .execute(&mut *tx)
                .await?;
        }

        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY id");
        outcome.categories = sqlx::query_as::<_, Category>(&query)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(outcome)
    }

    // -----------------------------------------------------------------------
    // Transaction-scoped helpers
    // -----------------------------------------------------------------------

    async fn existing_ids(
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<BTreeSet<DbId>, sqlx::Error> {
        let ids: Vec<DbId> = sqlx::query_scalar("SELECT id FROM categories")
            .fetch_all(&mut **tx)
            .await?;
        Ok(ids.into_iter().collect())
    }

    async fn upsert_with_id(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        input: &UpsertCategory,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (id, name, color) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO UPDATE \
             SET name = EXCLUDED.name, color = EXCLUDED.color \
             RETURNING {CATEGORY_COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_one(&mut **tx)
            .await?;
        advance_id_sequence(&mut **tx, CATEGORY_ID_SEQUENCE, id).await?;
        Ok(category)
    }

    async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        input: &UpsertCategory,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, color) \
             VALUES ($1, $2) \
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_one(&mut **tx)
            .await
    }
}
