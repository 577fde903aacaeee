use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use notes_core::error::CoreError;
use serde_json::json;

/// PostgreSQL SQLSTATE for a CHECK constraint violation.
const PG_CHECK_VIOLATION: &str = "23514";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "error": <message>, "code": <CODE> }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `notes_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database error reported under an operation-specific prefix.
    #[error("{context}: {source}")]
    DatabaseContext {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// An internal error whose message is returned to the caller as-is.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for a 422 validation failure.
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Core(CoreError::Validation(msg.into()))
    }

    /// Wrap a database error so its message reads `{context}: {cause}`.
    pub fn database_with_context(context: &'static str, source: sqlx::Error) -> Self {
        AppError::DatabaseContext { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    msg.clone(),
                ),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::DatabaseContext { context, source } => {
                let (status, code, message) = classify_sqlx_error(source);
                (status, code, format!("{context}: {message}"))
            }

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - CHECK constraint violations (SQLSTATE `23514`) map to 500
///   `CONSTRAINT_VIOLATION`.
/// - Everything else maps to 500 `DATABASE_ERROR`.
///
/// Missing rows never reach this point: lookups return `Option` and the
/// handlers turn `None` into a 404. Messages carry the underlying failure text.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(PG_CHECK_VIOLATION) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            tracing::error!(error = %db_err, constraint, "Constraint violation");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONSTRAINT_VIOLATION",
                format!("Constraint violation ({constraint}): {db_err}"),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                format!("Database error: {other}"),
            )
        }
    }
}
