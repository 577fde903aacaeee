//! Domain types shared by the notes store, the resource API and the tool
//! adapter. Nothing in this crate performs I/O.

pub mod error;
pub mod notes;
pub mod patch;
pub mod types;
