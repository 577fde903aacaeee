//! Presence tracking for partial-update payloads.
//!
//! Serde collapses "key absent" and "key is null" into `None` for a plain
//! `Option<T>`. Update DTOs need to tell them apart, so fields are declared as
//!
//! ```ignore
//! #[serde(default, deserialize_with = "deserialize_present")]
//! pub description: Option<Option<String>>,
//! ```
//!
//! which yields `None` when the key is absent, `Some(None)` for an explicit
//! `null` and `Some(Some(v))` for a value. Used on a non-nullable `Option<T>`
//! field instead, an explicit `null` becomes a deserialization error.

use serde::{Deserialize, Deserializer};

/// Deserialize a field that is known to be present in the input.
///
/// Only invoked by serde when the key exists; `#[serde(default)]` covers the
/// absent case.
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
