//! ainotes: File-backed notes over MCP
//!
//! This library keeps a flat, append-only note log and exposes it to AI
//! assistants through an MCP server.
//!
//! # Features
//!
//! - One note per line in a plain UTF-8 text file
//! - Read every note, or only the latest one
//! - Summarization prompt built from the whole log
//! - MCP server with tools, a resource and a prompt
//!
//! # Modules
//!
//! - `config`: Layered configuration and path resolution
//! - `store`: The note log
//! - `mcp`: MCP server implementation

pub mod config;
pub mod mcp;
pub mod store;

// Re-export commonly used types
pub use config::AppConfig;
pub use mcp::NotesMcpServer;
pub use store::{NotesStore, StoreError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
