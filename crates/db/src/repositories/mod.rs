//! Repository layer: one zero-sized struct per table with async methods that
//! take the pool (or an open transaction) explicitly.

pub mod category_repo;
pub mod task_repo;

pub use category_repo::CategoryRepo;
pub use task_repo::TaskRepo;

use daywise_core::types::DbId;
use sqlx::PgConnection;

/// Move a BIGSERIAL sequence past an explicitly inserted id.
///
/// Rows written with a caller-chosen id do not consume the sequence, so a
/// later plain insert could be handed the same id. The sequence only moves
/// forward: ids at or below its current value leave it untouched.
/// `pg_sequence_last_value` is NULL until the first `nextval` (and again
/// after `RESTART IDENTITY`), which is treated as zero.
pub(crate) async fn advance_id_sequence(
    conn: &mut PgConnection,
    sequence: &str,
    id: DbId,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "SELECT setval($1::regclass, $2) \
         WHERE $2 > COALESCE(pg_sequence_last_value($1::regclass), 0)",
    )
    .bind(sequence)
    .bind(id)
    .execute(conn)
    .await?;
    Ok(())
}
