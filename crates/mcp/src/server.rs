//! MCP server exposing the six note tools.
//!
//! Each tool forwards to one [`NotesClient`] call and wraps the resulting
//! string, success or failure, in a successful tool result.

use std::sync::Arc;

use notes_core::notes::DEFAULT_SKIP;
use notes_core::types::DbId;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
    transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
    },
    ErrorData as McpErrorData, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::client::{NoteFields, NotesClient};

/// Page size used by `get_notes` when the caller does not pick one.
pub const DEFAULT_TOOL_LIMIT: i64 = 10;

fn default_tool_limit() -> i64 {
    DEFAULT_TOOL_LIMIT
}

fn default_tool_skip() -> i64 {
    DEFAULT_SKIP
}

// ============================================================================
// Parameter types
// ============================================================================

/// Parameters for the get_notes tool
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetNotesParams {
    /// Number of notes to skip (0 or more)
    #[serde(default = "default_tool_skip")]
    pub skip: i64,
    /// Number of notes to return (1 to 1000)
    #[serde(default = "default_tool_limit")]
    pub limit: i64,
    /// Status to filter by: done, in_progress or not_activate.
    /// Leave empty to get notes of every status
    #[serde(default)]
    pub status_filter: Option<String>,
}

/// Parameters for tools addressing a single note
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NoteIdParams {
    /// ID of the note. IDs are listed in the output of get_notes
    pub note_id: DbId,
}

/// Parameters for the create_note tool
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateNoteParams {
    /// Name of the note
    pub name: String,
    /// Description of the note
    #[serde(default)]
    pub description: Option<String>,
    /// Comment on the note
    #[serde(default)]
    pub comment: Option<String>,
    /// Status of the note: done, in_progress or not_activate (defaults to in_progress)
    #[serde(default)]
    pub status: Option<String>,
}

/// Parameters for the update_note tool
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateNoteParams {
    /// ID of the note to update. IDs are listed in the output of get_notes
    pub note_id: DbId,
    /// New name of the note
    #[serde(default)]
    pub name: Option<String>,
    /// New description of the note
    #[serde(default)]
    pub description: Option<String>,
    /// New comment on the note
    #[serde(default)]
    pub comment: Option<String>,
    /// New status of the note: done, in_progress or not_activate
    #[serde(default)]
    pub status: Option<String>,
}

// ============================================================================
// Server
// ============================================================================

/// MCP server backed by a notes REST API.
#[derive(Clone)]
pub struct NotesToolServer {
    client: Arc<NotesClient>,
    /// Tool router for MCP tool handling.
    pub tool_router: ToolRouter<Self>,
}

fn text_result(text: String) -> Result<CallToolResult, McpErrorData> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl NotesToolServer {
    pub fn new(client: NotesClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get the total number of notes stored on the server.\n\n\
        Use it to tell the user how many notes they have, or to choose pagination \
        parameters before calling get_notes.\n\n\
        Returns JSON: {\"total_notes\": <number>}."
    )]
    async fn get_notes_count(&self) -> Result<CallToolResult, McpErrorData> {
        text_result(self.client.get_notes_count().await)
    }

    #[tool(
        description = "Get notes page by page, oldest first.\n\n\
        Rules:\n\
        - Check get_notes_count first and pick suitable skip/limit values.\n\
        - Make sure every note is fetched, using several calls if one page is not enough.\n\
        - Only one status can be filtered per call; call once per status, or leave the \
        filter empty to get all statuses in one call.\n\n\
        Each note has: id, name, description, comment, status. \
        description and comment may be null."
    )]
    async fn get_notes(
        &self,
        Parameters(params): Parameters<GetNotesParams>,
    ) -> Result<CallToolResult, McpErrorData> {
        let result = self
            .client
            .get_notes(params.skip, params.limit, params.status_filter.as_deref())
            .await;
        text_result(result)
    }

    #[tool(
        description = "Get a single note by its id.\n\n\
        Use it when the user asks for a specific note, or to refresh the details of a \
        note whose id you remember.\n\n\
        The note has: id, name, description, comment, status. \
        description and comment may be null."
    )]
    async fn get_note(
        &self,
        Parameters(params): Parameters<NoteIdParams>,
    ) -> Result<CallToolResult, McpErrorData> {
        text_result(self.client.get_note(params.note_id).await)
    }

    #[tool(
        description = "Create a note.\n\n\
        - Only create notes when the user asks for it.\n\
        - Keep the description and the comment apart; if it is unclear which text \
        belongs where, ask the user.\n\n\
        Returns the created note: id, name, description, comment, status."
    )]
    async fn create_note(
        &self,
        Parameters(params): Parameters<CreateNoteParams>,
    ) -> Result<CallToolResult, McpErrorData> {
        let fields = NoteFields {
            description: params.description,
            comment: params.comment,
            status: params.status,
        };
        text_result(self.client.create_note(&params.name, fields).await)
    }

    #[tool(
        description = "Delete a note by its id.\n\n\
        ALWAYS confirm with the user that this is the right note before deleting it.\n\n\
        Returns an empty string on success."
    )]
    async fn delete_note(
        &self,
        Parameters(params): Parameters<NoteIdParams>,
    ) -> Result<CallToolResult, McpErrorData> {
        text_result(self.client.delete_note(params.note_id).await)
    }

    #[tool(
        description = "Update a note by its id.\n\n\
        Every field is optional: pass ONLY the fields the user asked to change. \
        Calling it with no field returns \"no arguments provided\".\n\n\
        Returns the updated note: id, name, description, comment, status."
    )]
    async fn update_note(
        &self,
        Parameters(params): Parameters<UpdateNoteParams>,
    ) -> Result<CallToolResult, McpErrorData> {
        let fields = NoteFields {
            description: params.description,
            comment: params.comment,
            status: params.status,
        };
        let result = self
            .client
            .update_note(params.note_id, params.name, fields)
            .await;
        text_result(result)
    }
}

#[tool_handler]
impl ServerHandler for NotesToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Tools for managing the user's notes (tasks). \
                 Each note has a name, an optional description and comment, and a status \
                 of done, in_progress or not_activate."
                    .to_string(),
            ),
        }
    }
}

/// Mount the streamable HTTP transport for `server` at `path`.
///
/// A `path` of `/` serves the transport as the router fallback, since axum
/// cannot nest at the root. Open sessions are closed once `ct` is cancelled.
pub fn mcp_router(server: NotesToolServer, path: &str, ct: &CancellationToken) -> axum::Router {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig {
            cancellation_token: ct.child_token(),
            ..Default::default()
        },
    );

    let router = axum::Router::new();
    if path == "/" {
        router.fallback_service(service)
    } else {
        router.nest_service(path, service)
    }
}
