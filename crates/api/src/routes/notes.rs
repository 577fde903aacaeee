//! Route definitions for the note resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes, mounted under `/api/v1`.
///
/// ```text
/// GET    /notes                -> list_notes
/// POST   /notes                -> create_note
/// GET    /notes/stats/count    -> get_notes_count
/// GET    /notes/{id}           -> get_note
/// PUT    /notes/{id}           -> update_note
/// DELETE /notes/{id}           -> delete_note
/// ```
///
/// The collection route also answers with a trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route("/notes/", get(notes::list_notes).post(notes::create_note))
        .route("/notes/stats/count", get(notes::get_notes_count))
        .route(
            "/notes/{id}",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
}
