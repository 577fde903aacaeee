//! Note status domain, field limits and pagination bounds.
//!
//! The status set is closed: the API schema rejects unknown literals and the
//! `notes_main` table repeats the same set in a CHECK constraint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity label used in not-found errors and log fields.
pub const NOTE_ENTITY: &str = "Note";

/// Maximum length of a note name in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Default `skip` for note listings.
pub const DEFAULT_SKIP: i64 = 0;

/// Default `limit` for note listings.
pub const DEFAULT_LIMIT: i64 = 100;

/// Smallest accepted `limit`.
pub const MIN_LIMIT: i64 = 1;

/// Largest accepted `limit`.
pub const MAX_LIMIT: i64 = 1000;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const STATUS_DONE: &str = "done";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_NOT_ACTIVATE: &str = "not_activate";

/// All valid status literals, in declaration order.
pub const VALID_STATUSES: &[&str] = &[STATUS_DONE, STATUS_IN_PROGRESS, STATUS_NOT_ACTIVATE];

/// Lifecycle status of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteStatus {
    Done,
    #[default]
    InProgress,
    NotActivate,
}

impl NoteStatus {
    pub const ALL: [NoteStatus; 3] = [
        NoteStatus::Done,
        NoteStatus::InProgress,
        NoteStatus::NotActivate,
    ];

    /// The literal stored in the database and sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            NoteStatus::Done => STATUS_DONE,
            NoteStatus::InProgress => STATUS_IN_PROGRESS,
            NoteStatus::NotActivate => STATUS_NOT_ACTIVATE,
        }
    }
}

impl fmt::Display for NoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_DONE => Ok(NoteStatus::Done),
            STATUS_IN_PROGRESS => Ok(NoteStatus::InProgress),
            STATUS_NOT_ACTIVATE => Ok(NoteStatus::NotActivate),
            other => Err(CoreError::Validation(format!(
                "Invalid status '{other}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

/// Row decoding goes through this impl (`#[sqlx(try_from = "String")]`).
impl TryFrom<String> for NoteStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a note name: non-empty and at most [`MAX_NAME_LENGTH`] characters.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Note name must not be empty".to_string());
    }
    let len = name.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(format!(
            "Note name exceeds maximum length of {MAX_NAME_LENGTH} characters (got {len})"
        ));
    }
    Ok(())
}

/// Adapter for `#[validate(custom(function = ...))]` attributes.
pub fn validate_name_field(name: &str) -> Result<(), validator::ValidationError> {
    validate_name(name).map_err(|msg| {
        let mut err = validator::ValidationError::new("name");
        err.message = Some(msg.into());
        err
    })
}

/// Flatten `validator` errors into a single human-readable sentence.
pub fn describe_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: invalid value ({})", e.code),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
