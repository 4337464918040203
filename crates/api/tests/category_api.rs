//! HTTP-level integration tests for category listing and reconciliation.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_raw};
use serde_json::json;
use sqlx::PgPool;

async fn reconcile(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/categories", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

async fn list_categories(pool: &PgPool) -> Vec<serde_json::Value> {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/categories").await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await.as_array().unwrap().clone()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_categories_starts_empty(pool: PgPool) {
    assert!(list_categories(&pool).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reconcile_response_shape(pool: PgPool) {
    let json = reconcile(
        &pool,
        json!([{"name": "Work", "color": "#ff8800"}, {"name": "Rest", "color": "#0088ff"}]),
    )
    .await;

    assert_eq!(json["status"], "success");
    assert_eq!(json["inserted"].as_array().unwrap().len(), 2);
    assert_eq!(json["upserted"], json!([]));
    assert_eq!(json["deleted"], json!([]));
    assert_eq!(json["categories"].as_array().unwrap().len(), 2);
    assert_eq!(json["categories"][0]["color"], "#ff8800");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reconcile_full_replace_semantics(pool: PgPool) {
    let seeded = reconcile(
        &pool,
        json!([
            {"name": "Stale", "color": "#111111"},
            {"name": "Doomed", "color": "#222222"}
        ]),
    )
    .await;
    let stale_id = seeded["inserted"][0].as_i64().unwrap();
    let doomed_id = seeded["inserted"][1].as_i64().unwrap();

    sqlx::query("INSERT INTO categories (id, name, color) VALUES (5, 'Old', '#333333')")
        .execute(&pool)
        .await
        .unwrap();

    // A task pointing at a category about to be removed.
    let app = common::build_test_app(pool.clone());
    let task = body_json(
        post_json(app, "/task", json!({"title": "Tagged", "category": doomed_id})).await,
    )
    .await;

    let json = reconcile(
        &pool,
        json!([
            {"name": "A", "color": "#aaaaaa"},
            {"id": 5, "name": "Renamed", "color": "#555555"}
        ]),
    )
    .await;

    assert_eq!(json["upserted"], json!([5]));
    let new_id = json["inserted"][0].as_i64().unwrap();
    assert!(new_id > 5, "fresh id must come after the explicit one");
    let mut deleted: Vec<i64> = json["deleted"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    deleted.sort_unstable();
    assert_eq!(deleted, vec![stale_id, doomed_id]);

    let categories = list_categories(&pool).await;
    assert_eq!(categories.len(), 2);
    let renamed = categories.iter().find(|c| c["id"] == 5).unwrap();
    assert_eq!(renamed["name"], "Renamed");
    assert_eq!(renamed["color"], "#555555");
    assert!(categories.iter().any(|c| c["id"] == new_id && c["name"] == "A"));

    let app = common::build_test_app(pool.clone());
    let tasks = body_json(get(app, "/tasks").await).await;
    assert_eq!(tasks[0]["id"], task["id"]);
    assert_eq!(tasks[0]["category"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_color_rejects_whole_set(pool: PgPool) {
    reconcile(&pool, json!([{"name": "Keep", "color": "#010101"}])).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/categories",
        json!([
            {"name": "Fine", "color": "#020202"},
            {"name": "Broken", "color": "red"}
        ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().starts_with("categories[1]:"));

    let categories = list_categories(&pool).await;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["name"], "Keep");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_name_returns_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/categories", json!([{"name": "", "color": "#000000"}])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_array_body_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/categories", r##"{"name": "Solo", "color": "#000000"}"##).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_explicit_id_at_ceiling_keeps_new_categories_working(pool: PgPool) {
    let max = i64::from(i32::MAX);
    reconcile(&pool, json!([{"id": max, "name": "Far", "color": "#000000"}])).await;

    let json = reconcile(
        &pool,
        json!([
            {"id": max, "name": "Far", "color": "#000000"},
            {"name": "Near", "color": "#ffffff"}
        ]),
    )
    .await;

    assert_eq!(json["inserted"], json!([max + 1]));
    assert_eq!(list_categories(&pool).await.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_explicit_id_above_ceiling_rejects_whole_set(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/categories",
        json!([
            {"name": "Fine", "color": "#020202"},
            {"id": i64::MAX, "name": "Too far", "color": "#030303"}
        ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().starts_with("categories[1]:"));

    assert!(list_categories(&pool).await.is_empty());
    let json = reconcile(&pool, json!([{"name": "Later", "color": "#040404"}])).await;
    assert_eq!(json["inserted"], json!([1]));
}
