/// Default port of the notes REST API.
pub const DEFAULT_API_PORT: u16 = 5252;

/// Tool server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct McpConfig {
    /// Base URL of the notes collection, e.g. `http://api:5252/api/v1/notes`.
    pub api_url: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Path the MCP endpoint is mounted on (default: `/mcp`), normalized to a
    /// single leading slash and no trailing slash. `/` mounts at the root.
    pub path: String,
    /// Timeout for each outbound API call in seconds (default: `30`).
    pub tool_http_timeout_secs: u64,
}

impl McpConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default                                        |
    /// |---------------------------|------------------------------------------------|
    /// | `NOTES_API_URL`           | `http://{API_SERVICE_NAME}:5252/api/v1/notes`  |
    /// | `API_SERVICE_NAME`        | `localhost`                                    |
    /// | `MCP_HOST`                | `0.0.0.0`                                      |
    /// | `MCP_PORT`                | `8000`                                         |
    /// | `MCP_PATH`                | `/mcp`                                         |
    /// | `TOOL_HTTP_TIMEOUT_SECS`  | `30`                                           |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration through `lookup`.
    ///
    /// Panics on unparsable numeric values; misconfiguration should fail
    /// at startup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = var("NOTES_API_URL").unwrap_or_else(|| {
            let service = var("API_SERVICE_NAME").unwrap_or_else(|| "localhost".into());
            format!("http://{service}:{DEFAULT_API_PORT}/api/v1/notes")
        });

        let port: u16 = var("MCP_PORT")
            .unwrap_or_else(|| "8000".into())
            .parse()
            .expect("MCP_PORT must be a valid u16");

        let tool_http_timeout_secs: u64 = var("TOOL_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("TOOL_HTTP_TIMEOUT_SECS must be a valid u64");

        let path = var("MCP_PATH").unwrap_or_else(|| "/mcp".into());
        let path = format!("/{}", path.trim().trim_matches('/'));

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            host: var("MCP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            path,
            tool_http_timeout_secs,
        }
    }
}
