//! Integration tests for the `notes_main` store.
//!
//! Exercises `NoteRepo` against a real database:
//! - Insert assigns ids and keeps insertion order
//! - Pagination and status filtering
//! - Partial update merge semantics
//! - CHECK constraint enforcement at the persistence boundary

use assert_matches::assert_matches;
use notes_core::notes::NoteStatus;
use notes_db::models::note::{NewNote, UpdateNote};
use notes_db::repositories::NoteRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_note(name: &str, status: NoteStatus) -> NewNote {
    NewNote {
        name: name.to_string(),
        description: None,
        comment: None,
        status,
    }
}

async fn seed(pool: &PgPool, statuses: &[NoteStatus]) -> Vec<i64> {
    let mut ids = Vec::with_capacity(statuses.len());
    for (i, status) in statuses.iter().enumerate() {
        let note = NoteRepo::insert(pool, &new_note(&format!("note {i}"), *status))
            .await
            .unwrap();
        ids.push(note.id);
    }
    ids
}

// ---------------------------------------------------------------------------
// Insert / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn insert_assigns_unique_increasing_ids(pool: PgPool) {
    let ids = seed(&pool, &[NoteStatus::Done, NoteStatus::Done, NoteStatus::InProgress]).await;
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids must increase: {ids:?}");
}

#[sqlx::test(migrations = "./migrations")]
async fn insert_then_find_returns_same_row(pool: PgPool) {
    let input = NewNote {
        name: "Buy milk".into(),
        description: Some("2 litres".into()),
        comment: Some("before 6pm".into()),
        status: NoteStatus::NotActivate,
    };
    let created = NoteRepo::insert(&pool, &input).await.unwrap();
    let found = NoteRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test(migrations = "./migrations")]
async fn find_missing_id_returns_none(pool: PgPool) {
    let found = NoteRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Constraint enforcement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn check_constraint_rejects_unknown_status(pool: PgPool) {
    let result = sqlx::query("INSERT INTO notes_main (name, status) VALUES ('x', 'archived')")
        .execute(&pool)
        .await;

    assert_matches!(result, Err(sqlx::Error::Database(ref db_err)) => {
        assert_eq!(db_err.code().as_deref(), Some("23514"));
        assert_eq!(db_err.constraint(), Some("check_status_values"));
    });
}

#[sqlx::test(migrations = "./migrations")]
async fn check_constraint_rejects_unknown_status_on_update(pool: PgPool) {
    let ids = seed(&pool, &[NoteStatus::Done]).await;
    let result = sqlx::query("UPDATE notes_main SET status = 'archived' WHERE id = $1")
        .bind(ids[0])
        .execute(&pool)
        .await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = "./migrations")]
async fn column_default_status_is_in_progress(pool: PgPool) {
    let (status,): (String,) =
        sqlx::query_as("INSERT INTO notes_main (name) VALUES ('x') RETURNING status")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(status, "in_progress");
}

#[sqlx::test(migrations = "./migrations")]
async fn name_longer_than_255_rejected_by_column(pool: PgPool) {
    let result = NoteRepo::insert(&pool, &new_note(&"n".repeat(256), NoteStatus::Done)).await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_is_ordered_by_id_and_paginated(pool: PgPool) {
    let ids = seed(&pool, &[NoteStatus::InProgress; 5]).await;

    let page = NoteRepo::list(&pool, 1, 2).await.unwrap();
    let page_ids: Vec<i64> = page.iter().map(|n| n.id).collect();
    assert_eq!(page_ids, &ids[1..3]);

    let past_end = NoteRepo::list(&pool, 10, 5).await.unwrap();
    assert!(past_end.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_by_status_filters_rows(pool: PgPool) {
    seed(
        &pool,
        &[NoteStatus::Done, NoteStatus::InProgress, NoteStatus::Done],
    )
    .await;

    let done = NoteRepo::list_by_status(&pool, NoteStatus::Done, 0, 100).await.unwrap();
    assert_eq!(done.len(), 2);
    assert!(done.iter().all(|n| n.status == NoteStatus::Done));

    let inactive = NoteRepo::list_by_status(&pool, NoteStatus::NotActivate, 0, 100)
        .await
        .unwrap();
    assert!(inactive.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn count_is_unfiltered(pool: PgPool) {
    assert_eq!(NoteRepo::count(&pool).await.unwrap(), 0);
    seed(
        &pool,
        &[NoteStatus::Done, NoteStatus::NotActivate, NoteStatus::InProgress],
    )
    .await;
    assert_eq!(NoteRepo::count(&pool).await.unwrap(), 3);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn update_merges_only_supplied_fields(pool: PgPool) {
    let created = NoteRepo::insert(
        &pool,
        &NewNote {
            name: "Buy milk".into(),
            description: Some("2 litres".into()),
            comment: Some("skimmed".into()),
            status: NoteStatus::InProgress,
        },
    )
    .await
    .unwrap();

    let patch = UpdateNote {
        status: Some(NoteStatus::Done),
        comment: Some(None),
        ..Default::default()
    };
    let updated = NoteRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("note should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Buy milk");
    assert_eq!(updated.description.as_deref(), Some("2 litres"));
    assert_eq!(updated.comment, None);
    assert_eq!(updated.status, NoteStatus::Done);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_id_returns_none(pool: PgPool) {
    let patch = UpdateNote {
        name: Some("renamed".into()),
        ..Default::default()
    };
    let result = NoteRepo::update(&pool, 42, &patch).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_reports_whether_a_row_was_removed(pool: PgPool) {
    let ids = seed(&pool, &[NoteStatus::Done]).await;

    assert!(NoteRepo::delete(&pool, ids[0]).await.unwrap());
    assert!(!NoteRepo::delete(&pool, ids[0]).await.unwrap());
    assert!(NoteRepo::find_by_id(&pool, ids[0]).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn ids_are_not_reused_after_delete(pool: PgPool) {
    let ids = seed(&pool, &[NoteStatus::Done]).await;
    NoteRepo::delete(&pool, ids[0]).await.unwrap();

    let next = NoteRepo::insert(&pool, &new_note("next", NoteStatus::Done)).await.unwrap();
    assert!(next.id > ids[0]);
}
