//! Handlers for the `/notes` resource.
//!
//! Bodies and query strings arrive through the validating extractors, so the
//! service is only reached with schema-valid input.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use notes_core::error::CoreError;
use notes_core::notes::NOTE_ENTITY;
use notes_core::types::DbId;
use notes_db::models::note::{CreateNote, UpdateNote};

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::query::ListNotesParams;
use crate::state::AppState;

/// Response body for `GET /notes/stats/count`.
#[derive(Debug, Serialize)]
pub struct NotesCountResponse {
    pub total_notes: i64,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: NOTE_ENTITY,
        id,
    })
}

/// POST /notes
///
/// Create a note. `status` defaults to `in_progress`.
pub async fn create_note(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateNote>,
) -> AppResult<impl IntoResponse> {
    let note = state
        .notes
        .create_note(input)
        .await
        .map_err(|e| AppError::database_with_context("Error when creating a note", e))?;

    tracing::info!(note_id = note.id, status = %note.status, "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes?skip=&limit=&status_filter=
///
/// List notes in insertion order, optionally filtered by status.
pub async fn list_notes(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ListNotesParams>,
) -> AppResult<impl IntoResponse> {
    let notes = match params.status_filter {
        Some(status) => {
            state
                .notes
                .get_notes_by_status(status, params.skip, params.limit)
                .await?
        }
        None => state.notes.get_notes(params.skip, params.limit).await?,
    };

    Ok(Json(notes))
}

/// GET /notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let note = state
        .notes
        .get_note(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(note))
}

/// PUT /notes/{id}
///
/// Partial update: only keys present in the body change.
pub async fn update_note(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateNote>,
) -> AppResult<impl IntoResponse> {
    let note = state
        .notes
        .update_note(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(note_id = id, status = %note.status, "Note updated");

    Ok(Json(note))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.notes.delete_note(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(note_id = id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /notes/stats/count
pub async fn get_notes_count(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let total_notes = state.notes.get_notes_count().await?;
    Ok(Json(NotesCountResponse { total_notes }))
}
