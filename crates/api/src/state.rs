use notes_db::service::NoteService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool and the service are both `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks).
    pub pool: notes_db::DbPool,
    /// Note business logic; the only path from handlers to the notes table.
    pub notes: NoteService,
}

impl AppState {
    pub fn new(pool: notes_db::DbPool) -> Self {
        Self {
            notes: NoteService::new(pool.clone()),
            pool,
        }
    }
}
