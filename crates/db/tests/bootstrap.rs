use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    daywise_db::health_check(&pool).await.unwrap();

    for table in ["tasks", "categories"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The task -> category foreign key must clear the reference on delete.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_category_fk_is_set_null(pool: PgPool) {
    let rule: (String,) = sqlx::query_as(
        "SELECT rc.delete_rule::text \
         FROM information_schema.referential_constraints rc \
         JOIN information_schema.key_column_usage kcu \
           ON kcu.constraint_name = rc.constraint_name \
         WHERE kcu.table_name = 'tasks' AND kcu.column_name = 'category_id'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(rule.0, "SET NULL");
}

/// Colors are stored in a fixed-width column.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_color_is_char7(pool: PgPool) {
    let col: (String, Option<i32>) = sqlx::query_as(
        "SELECT data_type::text, character_maximum_length::int \
         FROM information_schema.columns \
         WHERE table_name = 'categories' AND column_name = 'color'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(col.0, "character");
    assert_eq!(col.1, Some(7));
}
