//! Notes store implementation
//!
//! Provides a single append-only text log where each line is one note.
//! Notes are not escaped: a message containing a line terminator reads
//! back as several notes. `\n`, `\r\n` and a lone `\r` all count as line
//! terminators and read back as `\n`.

use super::error::{Result, StoreError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Returned by `append_note` once the note is written
pub const APPEND_CONFIRMATION: &str = "notes saved";

/// Returned by `read_all` when the log has no content
pub const EMPTY_NOTES_SENTINEL: &str = "no content yet";

/// Returned by `read_latest` when the log has no lines
// Clients match on this exact text, typo included.
pub const EMPTY_LATEST_SENTINEL: &str = "no otes yet";

/// Returned by `build_summary_prompt` when the log has no content
pub const EMPTY_PROMPT_SENTINEL: &str = "there is no content yet";

/// Prefix of the summarization prompt; the log content follows verbatim
pub const SUMMARY_PROMPT_PREFIX: &str = "Summarize the current note ";

/// File-backed note log
#[derive(Debug, Clone)]
pub struct NotesStore {
    /// Path of the backing file
    path: PathBuf,
}

impl NotesStore {
    /// Create a store for the given path without touching the file system
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store and make sure its backing file exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        store.ensure_initialized()?;
        Ok(store)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file (and its parent directories) if it is missing
    ///
    /// Idempotent: an existing file is never opened for writing.
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(_) => {
                tracing::info!("Created note log at {}", self.path.display());
                Ok(())
            }
            // Someone else created it between the check and the open
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }

    /// Append a note as the new last line of the log
    pub fn append_note(&self, message: &str) -> Result<String> {
        self.ensure_initialized()?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;
        file.write_all(format!("{}\n", message).as_bytes())
            .map_err(|e| StoreError::io(&self.path, e))?;

        tracing::debug!("Appended {} bytes to {}", message.len() + 1, self.path.display());
        Ok(APPEND_CONFIRMATION.to_string())
    }

    /// Read the whole log, trimmed, or the empty-log sentinel
    pub fn read_all(&self) -> Result<String> {
        let content = self.read_log()?;
        let trimmed = content.trim();

        if trimmed.is_empty() {
            Ok(EMPTY_NOTES_SENTINEL.to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }

    /// Read the last line of the log, trimmed, or the empty-log sentinel
    ///
    /// A log ending in a blank line yields an empty string rather than the
    /// sentinel.
    pub fn read_latest(&self) -> Result<String> {
        let content = self.read_log()?;

        match content.split_inclusive('\n').last() {
            Some(line) => Ok(line.trim().to_string()),
            None => Ok(EMPTY_LATEST_SENTINEL.to_string()),
        }
    }

    /// Build the summarization prompt over the whole log
    pub fn build_summary_prompt(&self) -> Result<String> {
        let content = self.read_log()?;
        let trimmed = content.trim();

        if trimmed.is_empty() {
            Ok(EMPTY_PROMPT_SENTINEL.to_string())
        } else {
            Ok(format!("{}{}", SUMMARY_PROMPT_PREFIX, trimmed))
        }
    }

    fn read_log(&self) -> Result<String> {
        self.ensure_initialized()?;
        let content =
            fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        Ok(normalize_line_endings(content))
    }
}

/// Translate `\r\n` and lone `\r` to `\n`
fn normalize_line_endings(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}
