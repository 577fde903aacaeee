//! Repository for the `notes_main` table.

use notes_core::notes::NoteStatus;
use notes_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{NewNote, Note, UpdateNote};

/// Column list for notes_main queries.
const COLUMNS: &str = "id, name, description, comment, status";

/// Provides CRUD operations for notes.
///
/// Listings are ordered by `id` ascending (insertion order). Pagination
/// bounds are enforced by callers; this layer only requires `offset >= 0`
/// and `limit >= 1`.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a note, returning the created row with its assigned id.
    ///
    /// A status outside the CHECK constraint fails with a database error
    /// (SQLSTATE `23514`).
    pub async fn insert(pool: &PgPool, input: &NewNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes_main (name, description, comment, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.comment)
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes_main WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List notes in insertion order.
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes_main
             ORDER BY id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List notes with the given status in insertion order.
    pub async fn list_by_status(
        pool: &PgPool,
        status: NoteStatus,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes_main
             WHERE status = $1
             ORDER BY id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(status.as_str())
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Partially update a note, returning the merged row.
    ///
    /// `name` and `status` use `COALESCE` so only provided values change.
    /// `description` and `comment` carry a presence flag so that an explicit
    /// `null` clears the column while an absent key keeps it.
    /// Returns `None` when no row has the given id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let description_provided = input.description.is_some();
        let description_value = input.description.as_ref().and_then(|v| v.as_deref());
        let comment_provided = input.comment.is_some();
        let comment_value = input.comment.as_ref().and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE notes_main SET \
                 name        = COALESCE($2, name), \
                 description = CASE WHEN $3 THEN $4 ELSE description END, \
                 comment     = CASE WHEN $5 THEN $6 ELSE comment END, \
                 status      = COALESCE($7, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(description_provided)
            .bind(description_value)
            .bind(comment_provided)
            .bind(comment_value)
            .bind(input.status.map(NoteStatus::as_str))
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a note by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes_main WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of notes, unfiltered.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes_main")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
