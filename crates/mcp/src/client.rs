//! HTTP client for the notes REST API as seen by the tool layer.
//!
//! Every method performs at most one HTTP call and always resolves to a
//! `String`: the raw response body when the API answers with the expected
//! status code, otherwise a sentence describing what went wrong. Nothing
//! here returns an error to the caller.

use std::time::Duration;

use notes_core::types::DbId;
use reqwest::{RequestBuilder, StatusCode};
use serde_json::{Map, Value};

/// Returned by [`NotesClient::update_note`] when no field would be sent.
pub const NO_ARGUMENTS_PROVIDED: &str = "no arguments provided";

/// Failure of a single API call, rendered into the tool result text.
#[derive(Debug, thiserror::Error)]
enum CallError {
    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a status other than the expected one.
    #[error("status code {status}, response: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

/// Optional note fields accepted by the create and update tools.
///
/// Unset and empty values are left out of the request body entirely.
#[derive(Debug, Clone, Default)]
pub struct NoteFields {
    pub description: Option<String>,
    pub comment: Option<String>,
    pub status: Option<String>,
}

impl NoteFields {
    /// JSON object holding only the fields that carry a value.
    pub fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();
        for (key, value) in [
            ("description", self.description),
            ("comment", self.comment),
            ("status", self.status),
        ] {
            insert_if_set(&mut body, key, value);
        }
        body
    }
}

fn insert_if_set(body: &mut Map<String, Value>, key: &str, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        body.insert(key.to_string(), Value::String(value));
    }
}

/// Client for the `/notes` collection of a notes API instance.
#[derive(Debug, Clone)]
pub struct NotesClient {
    client: reqwest::Client,
    base_url: String,
}

impl NotesClient {
    /// Create a client whose calls give up after `timeout`.
    ///
    /// * `base_url` - Collection URL, e.g. `http://api:5252/api/v1/notes`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /stats/count`, expecting 200.
    pub async fn get_notes_count(&self) -> String {
        let request = self.client.get(format!("{}/stats/count", self.base_url));
        self.call("getting notes count", request, StatusCode::OK).await
    }

    /// `GET /?skip=&limit=[&status_filter=]`, expecting 200.
    ///
    /// `status_filter` is only sent when set and non-empty.
    pub async fn get_notes(&self, skip: i64, limit: i64, status_filter: Option<&str>) -> String {
        let mut query = vec![("skip", skip.to_string()), ("limit", limit.to_string())];
        if let Some(status) = status_filter.filter(|s| !s.is_empty()) {
            query.push(("status_filter", status.to_string()));
        }

        let request = self.client.get(&self.base_url).query(&query);
        self.call("getting notes", request, StatusCode::OK).await
    }

    /// `GET /{id}`, expecting 200.
    pub async fn get_note(&self, id: DbId) -> String {
        let request = self.client.get(self.note_url(id));
        self.call("getting note by id", request, StatusCode::OK).await
    }

    /// `POST /`, expecting 201. `name` is always sent.
    pub async fn create_note(&self, name: &str, fields: NoteFields) -> String {
        let mut body = fields.into_body();
        body.insert("name".to_string(), Value::String(name.to_string()));

        let request = self.client.post(&self.base_url).json(&body);
        self.call("creating note", request, StatusCode::CREATED).await
    }

    /// `DELETE /{id}`, expecting 204. Success yields the (empty) body.
    pub async fn delete_note(&self, id: DbId) -> String {
        let request = self.client.delete(self.note_url(id));
        self.call("deleting note", request, StatusCode::NO_CONTENT).await
    }

    /// `PUT /{id}`, expecting 200.
    ///
    /// Returns [`NO_ARGUMENTS_PROVIDED`] without contacting the API when
    /// neither `name` nor any of `fields` carries a value.
    pub async fn update_note(&self, id: DbId, name: Option<String>, fields: NoteFields) -> String {
        let mut body = fields.into_body();
        insert_if_set(&mut body, "name", name);

        if body.is_empty() {
            tracing::warn!(note_id = id, "Update tool called without any field");
            return NO_ARGUMENTS_PROVIDED.to_string();
        }

        let request = self.client.put(self.note_url(id)).json(&body);
        self.call("updating note", request, StatusCode::OK).await
    }

    // ---- private helpers ----

    fn note_url(&self, id: DbId) -> String {
        format!("{}/{id}", self.base_url)
    }

    /// Send `request` and fold the outcome into the tool result text.
    async fn call(&self, action: &str, request: RequestBuilder, expected: StatusCode) -> String {
        match Self::send(request, expected).await {
            Ok(body) => {
                tracing::info!(action, response = %body, "Notes API call succeeded");
                body
            }
            Err(e) => {
                tracing::error!(action, error = %e, "Notes API call failed");
                format!("Error while {action}: {e}")
            }
        }
    }

    async fn send(request: RequestBuilder, expected: StatusCode) -> Result<String, CallError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != expected {
            return Err(CallError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
