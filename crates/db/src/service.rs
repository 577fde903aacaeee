//! Note service: the gateway between request handlers and [`NoteRepo`].
//!
//! Handlers never touch the repository directly. The service owns the
//! create-time default status and the existence check that precedes every
//! update and delete, so "not found" is decided before any mutation runs.

use notes_core::notes::NoteStatus;
use notes_core::types::DbId;

use crate::models::note::{CreateNote, NewNote, Note, UpdateNote};
use crate::repositories::NoteRepo;
use crate::DbPool;

/// Business-logic entry point for notes. Cheap to clone.
#[derive(Clone)]
pub struct NoteService {
    pool: DbPool,
}

impl NoteService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a note, applying the default status when none was supplied.
    ///
    /// The returned row is read back from the `INSERT ... RETURNING`, so the
    /// assigned id and stored status are always concrete.
    pub async fn create_note(&self, input: CreateNote) -> Result<Note, sqlx::Error> {
        let new_note = NewNote {
            name: input.name,
            description: input.description,
            comment: input.comment,
            status: input.status.unwrap_or_default(),
        };
        let note = NoteRepo::insert(&self.pool, &new_note).await?;
        tracing::debug!(note_id = note.id, status = %note.status, "Note inserted");
        Ok(note)
    }

    pub async fn get_note(&self, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        NoteRepo::find_by_id(&self.pool, id).await
    }

    pub async fn get_notes(&self, skip: i64, limit: i64) -> Result<Vec<Note>, sqlx::Error> {
        NoteRepo::list(&self.pool, skip, limit).await
    }

    pub async fn get_notes_by_status(
        &self,
        status: NoteStatus,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Note>, sqlx::Error> {
        NoteRepo::list_by_status(&self.pool, status, skip, limit).await
    }

    /// Merge the supplied fields into an existing note.
    ///
    /// Returns `None` if the id is unknown. An empty patch returns the note
    /// unchanged without issuing an UPDATE.
    pub async fn update_note(
        &self,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let Some(existing) = NoteRepo::find_by_id(&self.pool, id).await? else {
            return Ok(None);
        };
        if input.is_empty() {
            return Ok(Some(existing));
        }
        // A concurrent delete between the lookup and the UPDATE surfaces as None.
        NoteRepo::update(&self.pool, id, input).await
    }

    /// Delete a note. `false` means there was nothing to delete.
    pub async fn delete_note(&self, id: DbId) -> Result<bool, sqlx::Error> {
        if NoteRepo::find_by_id(&self.pool, id).await?.is_none() {
            return Ok(false);
        }
        NoteRepo::delete(&self.pool, id).await
    }

    pub async fn get_notes_count(&self) -> Result<i64, sqlx::Error> {
        NoteRepo::count(&self.pool).await
    }
}
