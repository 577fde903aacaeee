//! Query parameter types for API handlers.

use notes_core::notes::{NoteStatus, DEFAULT_LIMIT, DEFAULT_SKIP, MAX_LIMIT, MIN_LIMIT};
use serde::Deserialize;
use validator::Validate;

/// Pagination and filter parameters for `GET /notes`
/// (`?skip=&limit=&status_filter=`).
///
/// Out-of-range values are rejected, never clamped.
#[derive(Debug, Deserialize, Validate)]
pub struct ListNotesParams {
    /// Number of records to skip (default 0, must be >= 0).
    #[serde(default = "default_skip")]
    #[validate(range(min = 0, message = "skip must be greater than or equal to 0"))]
    pub skip: i64,
    /// Maximum number of records (default 100, must be within 1..=1000).
    #[serde(default = "default_limit")]
    #[validate(range(
        min = MIN_LIMIT,
        max = MAX_LIMIT,
        message = "limit must be between 1 and 1000"
    ))]
    pub limit: i64,
    /// Restrict the listing to one status.
    pub status_filter: Option<NoteStatus>,
}

fn default_skip() -> i64 {
    DEFAULT_SKIP
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}
