//! Notes store module
//!
//! This module provides the file-backed note log and its error type.

mod error;
mod notes_store;

pub use error::{Result, StoreError};
pub use notes_store::{
    NotesStore, APPEND_CONFIRMATION, EMPTY_LATEST_SENTINEL, EMPTY_NOTES_SENTINEL,
    EMPTY_PROMPT_SENTINEL, SUMMARY_PROMPT_PREFIX,
};
