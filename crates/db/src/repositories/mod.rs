//! Repositories: one zero-sized struct per table, each method a single SQL
//! statement against a borrowed pool.

mod note_repo;

pub use note_repo::NoteRepo;
