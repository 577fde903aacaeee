pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notes                                           list, create
/// /notes/{id}                                      get, update, delete
/// /notes/stats/count                               total number of notes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Note resource: CRUD, status filter, count.
        .merge(notes::router())
}
