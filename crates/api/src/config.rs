use notes_db::DEFAULT_MAX_CONNECTIONS;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5252`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections (default: `20`).
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5252`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:8501`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5252".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:8501".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .map(|v| v.parse().expect("DB_MAX_CONNECTIONS must be a valid u32"))
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
        }
    }
}

// ---------------------------------------------------------------------------
// Database connection parameters
// ---------------------------------------------------------------------------

/// Variables that must all be present when `DATABASE_URL` is not set.
pub const REQUIRED_DB_VARS: [&str; 4] =
    ["DB_USER", "DB_PASSWORD", "DB_NAME", "POSTGRES_SERVICE_NAME"];

/// Default PostgreSQL port when `DB_PORT` is unset.
const DEFAULT_DB_PORT: &str = "5432";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required database configuration: {}", .0.join(", "))]
    MissingDatabaseVars(Vec<&'static str>),
}

/// Resolve the database URL from the process environment.
pub fn database_url_from_env() -> Result<String, ConfigError> {
    resolve_database_url(|key| std::env::var(key).ok())
}

/// Resolve the database URL through `lookup`.
///
/// `DATABASE_URL` wins when set. Otherwise the URL is composed from
/// [`REQUIRED_DB_VARS`] plus optional `DB_PORT`; any missing or empty
/// required variable is an error, never replaced by a default.
pub fn resolve_database_url<F>(lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty("DATABASE_URL") {
        return Ok(url);
    }

    let missing: Vec<&'static str> = REQUIRED_DB_VARS
        .iter()
        .copied()
        .filter(|key| non_empty(*key).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::MissingDatabaseVars(missing));
    }

    // All four were just checked, so the lookups below succeed.
    let get = |key: &str| non_empty(key).unwrap_or_default();
    let port = non_empty("DB_PORT").unwrap_or_else(|| DEFAULT_DB_PORT.to_string());

    Ok(format!(
        "postgres://{}:{}@{}:{}/{}",
        get("DB_USER"),
        get("DB_PASSWORD"),
        get("POSTGRES_SERVICE_NAME"),
        port,
        get("DB_NAME"),
    ))
}
