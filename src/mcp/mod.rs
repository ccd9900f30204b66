//! MCP server module
//!
//! This module wires the notes store into an rmcp server.

mod server;

pub use server::{AddNoteParams, NotesMcpServer, LATEST_NOTE_URI, SUMMARY_PROMPT_NAME};
