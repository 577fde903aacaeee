//! HTTP-level integration tests for the `/api/v1/notes` resource.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, build_test_app, create_note, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: create -> update -> delete -> get lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_note_lifecycle(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/notes", json!({"name": "Buy milk"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().expect("id should be an integer");
    assert_eq!(created["name"], "Buy milk");
    assert_eq!(created["status"], "in_progress");
    assert!(created["description"].is_null());
    assert!(created["comment"].is_null());

    let response = put_json(
        app.clone(),
        &format!("/api/v1/notes/{id}"),
        json!({"status": "done"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Buy milk");
    assert_eq!(updated["status"], "done");

    let response = delete(app.clone(), &format!("/api/v1/notes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = get(app, &format!("/api/v1/notes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], format!("Note with id {id} not found"));
}

// ---------------------------------------------------------------------------
// Test: status filter and count
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_status_filter_and_count(pool: PgPool) {
    let app = build_test_app(pool);
    for status in ["done", "done", "in_progress"] {
        create_note(app.clone(), json!({"name": format!("{status} note"), "status": status})).await;
    }

    let response = get(app.clone(), "/api/v1/notes?status_filter=done").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let notes = json.as_array().expect("response should be an array");
    assert_eq!(notes.len(), 2);
    assert!(notes.iter().all(|n| n["status"] == "done"));

    let response = get(app, "/api/v1/notes/stats/count").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"total_notes": 3}));
}

// ---------------------------------------------------------------------------
// Test: listing pagination and ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_pagination(pool: PgPool) {
    let app = build_test_app(pool);
    let mut ids = Vec::new();
    for i in 0..5 {
        let note = create_note(app.clone(), json!({"name": format!("note {i}")})).await;
        ids.push(note["id"].as_i64().unwrap());
    }

    let response = get(app.clone(), "/api/v1/notes?skip=1&limit=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let page: Vec<i64> = body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_i64().unwrap())
        .collect();
    assert_eq!(page, &ids[1..3]);

    let response = get(app.clone(), "/api/v1/notes").await;
    let all = body_json(response).await;
    assert_eq!(all.as_array().unwrap().len(), 5);

    let response = get(app, "/api/v1/notes?skip=100").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_listing_is_empty_array(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app.clone(), "/api/v1/notes?status_filter=not_activate").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));

    let response = get(app, "/api/v1/notes/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// ---------------------------------------------------------------------------
// Test: create with every field
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_all_fields(pool: PgPool) {
    let app = build_test_app(pool);
    let created = create_note(
        app.clone(),
        json!({
            "name": "Write report",
            "description": "Quarterly numbers",
            "comment": "Ask finance",
            "status": "not_activate"
        }),
    )
    .await;

    let id = created["id"].as_i64().unwrap();
    let response = get(app, &format!("/api/v1/notes/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "id": id,
            "name": "Write report",
            "description": "Quarterly numbers",
            "comment": "Ask finance",
            "status": "not_activate"
        })
    );
}

// ---------------------------------------------------------------------------
// Test: partial update semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_leaves_omitted_fields_untouched(pool: PgPool) {
    let app = build_test_app(pool);
    let created = create_note(
        app.clone(),
        json!({"name": "Plan trip", "description": "Rome", "comment": "May"}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        app,
        &format!("/api/v1/notes/{id}"),
        json!({"comment": "June"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], created["name"]);
    assert_eq!(updated["description"], created["description"]);
    assert_eq!(updated["status"], created["status"]);
    assert_eq!(updated["comment"], "June");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_with_explicit_null_clears_description(pool: PgPool) {
    let app = build_test_app(pool);
    let created = create_note(
        app.clone(),
        json!({"name": "Plan trip", "description": "Rome", "comment": "May"}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        app,
        &format!("/api/v1/notes/{id}"),
        json!({"description": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert!(updated["description"].is_null());
    assert_eq!(updated["comment"], "May");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_update_returns_unchanged_note(pool: PgPool) {
    let app = build_test_app(pool);
    let created = create_note(app.clone(), json!({"name": "Unchanged"})).await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(app, &format!("/api/v1/notes/{id}"), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

// ---------------------------------------------------------------------------
// Test: not-found outcomes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_note_returns_404_for_every_verb(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app.clone(), "/api/v1/notes/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json(app.clone(), "/api/v1/notes/424242", json!({"name": "x"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json(app.clone(), "/api/v1/notes/424242", json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, "/api/v1/notes/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Note with id 424242 not found");
}
