//! Repository for the `tasks` table.

use daywise_core::types::DbId;
use sqlx::PgPool;

use super::advance_id_sequence;
use crate::models::task::{Task, UpsertTask};

/// Column list for `tasks` queries. `end` is a reserved word.
const TASK_COLUMNS: &str = r#"id, title, category_id, start, "end""#;

/// Sequence backing `tasks.id`.
const TASK_ID_SEQUENCE: &str = "tasks_id_seq";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a task, or overwrite it when `input.id` names an existing row.
    ///
    /// Without an id the database assigns one. With an id, a conflict on the
    /// primary key overwrites title, category, start and end; the id itself is
    /// never changed.
    pub async fn upsert(pool: &PgPool, input: &UpsertTask) -> Result<Task, sqlx::Error> {
        match input.id {
            Some(id) => {
                let query = format!(
                    r#"INSERT INTO tasks (id, title, category_id, start, "end")
                       VALUES ($1, $2, $3, $4, $5)
                       ON CONFLICT (id) DO UPDATE
                       SET title = EXCLUDED.title,
                           category_id = EXCLUDED.category_id,
                           start = EXCLUDED.start,
                           "end" = EXCLUDED."end"
                       RETURNING {TASK_COLUMNS}"#
                );

                let mut tx = pool.begin().await?;
                let task = sqlx::query_as::<_, Task>(&query)
                    .bind(id)
                    .bind(&input.title)
                    .bind(input.category_id)
                    .bind(input.start)
                    .bind(input.end)
                    .fetch_one(&mut *tx)
                    .await?;
                advance_id_sequence(&mut *tx, TASK_ID_SEQUENCE, task.id).await?;
                tx.commit().await?;

                Ok(task)
            }
            None => {
                let query = format!(
                    r#"INSERT INTO tasks (title, category_id, start, "end")
                       VALUES ($1, $2, $3, $4)
                       RETURNING {TASK_COLUMNS}"#
                );
                sqlx::query_as::<_, Task>(&query)
                    .bind(&input.title)
                    .bind(input.category_id)
                    .bind(input.start)
                    .bind(input.end)
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// List every task in storage order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {TASK_COLUMNS} FROM tasks");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// List tasks lying entirely inside `[start, end]`.
    ///
    /// Both bounds are inclusive and handed to PostgreSQL unparsed; the cast
    /// to `timestamptz` happens in SQL, so a malformed bound surfaces as a
    /// datetime-format database error. Tasks with a NULL start or end never
    /// match.
    pub async fn list_in_range(
        pool: &PgPool,
        start: &str,
        end: &str,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            r#"SELECT {TASK_COLUMNS} FROM tasks
               WHERE start >= $1::timestamptz AND "end" <= $2::timestamptz"#
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove every task and restart the id sequence at 1.
    pub async fn truncate(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query("TRUNCATE TABLE tasks RESTART IDENTITY")
            .execute(pool)
            .await?;
        Ok(())
    }
}
