//! Note model: the `notes_main` row and its create/update DTOs.

use notes_core::notes::{validate_name_field, NoteStatus};
use notes_core::patch::deserialize_present;
use notes_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `notes_main` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub comment: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: NoteStatus,
}

/// Request body for creating a note.
///
/// `status` may be omitted (the service applies [`NoteStatus::default`]) but
/// an explicit `null` is rejected.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateNote {
    #[validate(custom(function = "validate_name_field"))]
    pub name: String,
    pub description: Option<String>,
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub status: Option<NoteStatus>,
}

/// A fully resolved insert: every non-nullable column has a concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub name: String,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub status: NoteStatus,
}

/// Request body for a partial update.
///
/// Only keys present in the payload are applied. `description` and `comment`
/// accept `null` to clear the column; `name` and `status` reject `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNote {
    #[serde(default, deserialize_with = "deserialize_present")]
    #[validate(custom(function = "validate_name_field"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub comment: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub status: Option<NoteStatus>,
}

impl UpdateNote {
    /// True when the payload carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.comment.is_none()
            && self.status.is_none()
    }
}
