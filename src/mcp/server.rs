//! MCP server implementation
//!
//! Exposes the notes store over rmcp: `add_note` and `read_notes` as tools,
//! the latest note as the `notes://latest` resource and the summary prompt
//! as `notes_summary_prompt`.

use crate::store::{NotesStore, StoreError};
use rmcp::{
    model::*, schemars, service::RequestContext, tool, Error as McpError, RoleServer,
    ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// URI of the latest-note resource
pub const LATEST_NOTE_URI: &str = "notes://latest";

/// Name of the summarization prompt
pub const SUMMARY_PROMPT_NAME: &str = "notes_summary_prompt";

/// MCP server over a notes store
#[derive(Clone)]
pub struct NotesMcpServer {
    store: Arc<NotesStore>,
    server_name: String,
    /// Held for the duration of each append; requests may run on several tasks
    append_lock: Arc<Mutex<()>>,
}

/// Request parameters for add_note tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddNoteParams {
    /// Note text; should be a single line
    pub message: String,
}

fn store_error(e: StoreError) -> McpError {
    tracing::error!("Note log operation failed: {}", e);
    McpError::internal_error(e.to_string(), None)
}

#[tool(tool_box)]
impl NotesMcpServer {
    pub fn new(store: NotesStore, server_name: impl Into<String>) -> Self {
        Self {
            store: Arc::new(store),
            server_name: server_name.into(),
            append_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Append a new note to the notes file
    #[tool(description = "Append a new note as one line to the notes file")]
    pub fn add_note(
        &self,
        #[tool(aggr)] params: AddNoteParams,
    ) -> Result<CallToolResult, McpError> {
        let _guard = self
            .append_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let confirmation = self.store.append_note(&params.message).map_err(store_error)?;

        Ok(CallToolResult::success(vec![Content::text(confirmation)]))
    }

    /// Read all notes
    #[tool(description = "Read every note in the notes file")]
    pub fn read_notes(&self) -> Result<CallToolResult, McpError> {
        let notes = self.store.read_all().map_err(store_error)?;

        Ok(CallToolResult::success(vec![Content::text(notes)]))
    }
}

impl NotesMcpServer {
    /// Store behind this server
    pub fn store(&self) -> &NotesStore {
        &self.store
    }

    fn latest_note_resource() -> Resource {
        let mut raw = RawResource::new(LATEST_NOTE_URI, "latest_note".to_string());
        raw.description = Some("The most recently added note".to_string());
        raw.mime_type = Some("text/plain".to_string());
        raw.no_annotation()
    }

    fn summary_prompt() -> Prompt {
        Prompt::new(
            SUMMARY_PROMPT_NAME,
            Some("Ask the model to summarize every note"),
            None,
        )
    }

    /// Read a resource by URI
    pub fn read_resource_by_uri(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        match uri {
            LATEST_NOTE_URI => {
                let latest = self.store.read_latest().map_err(store_error)?;
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(latest, uri)],
                })
            }
            _ => Err(McpError::resource_not_found(
                "resource_not_found",
                Some(json!({ "uri": uri })),
            )),
        }
    }

    /// Render a prompt by name
    pub fn get_prompt_by_name(&self, name: &str) -> Result<GetPromptResult, McpError> {
        match name {
            SUMMARY_PROMPT_NAME => {
                let prompt = self.store.build_summary_prompt().map_err(store_error)?;
                Ok(GetPromptResult {
                    description: None,
                    messages: vec![PromptMessage {
                        role: PromptMessageRole::User,
                        content: PromptMessageContent::text(prompt),
                    }],
                })
            }
            _ => Err(McpError::invalid_params(
                "prompt not found",
                Some(json!({ "name": name })),
            )),
        }
    }
}

#[tool(tool_box)]
impl ServerHandler for NotesMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.server_name.clone(),
                version: crate::VERSION.to_string(),
            },
            instructions: Some(
                "Note-taking server: add notes, read them back, fetch the latest note \
                 from notes://latest, or get a prompt that summarizes them"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: PaginatedRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: vec![Self::latest_note_resource()],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read_resource_by_uri(&uri)
    }

    async fn list_prompts(
        &self,
        _request: PaginatedRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: vec![Self::summary_prompt()],
            next_cursor: None,
        })
    }

    async fn get_prompt(
        &self,
        GetPromptRequestParam { name, .. }: GetPromptRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.get_prompt_by_name(&name)
    }
}
