//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding service in `notes_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod notes;
