//! Notes store error type

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the notes store
///
/// The store has no validation rules, so the only failure is the file system
/// refusing a create, read or write on the note log.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O failure on the note log
    #[error("I/O error on note log {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Kind of the underlying I/O error
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            StoreError::Io { source, .. } => source.kind(),
        }
    }
}

/// Result alias for notes store operations
pub type Result<T> = std::result::Result<T, StoreError>;
