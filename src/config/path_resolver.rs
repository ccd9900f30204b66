//! Path resolution module for ainotes
//!
//! Provides utilities for resolving file paths with support for:
//! - Absolute paths (returned as-is)
//! - Tilde (~) expansion to home directory
//! - Relative paths (resolved from current directory)
//! - XDG config directory lookup
//! - The install directory, which holds the default note log

use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// File name of the note log when no path is configured
pub const DEFAULT_NOTES_FILE_NAME: &str = "notes.txt";

/// Expand tilde (~) in path to home directory
pub fn expand_home(path: &str) -> Result<PathBuf> {
    if let Some(stripped) = path.strip_prefix('~') {
        if !stripped.is_empty() && !stripped.starts_with('/') {
            // ~username format not supported, return as-is
            return Ok(PathBuf::from(path));
        }
        let home = std::env::var("HOME")
            .map_err(|_| anyhow!("HOME environment variable not set"))?;
        Ok(PathBuf::from(format!("{}{}", home, stripped)))
    } else {
        Ok(PathBuf::from(path))
    }
}

/// Resolve a path to an absolute path
///
/// Resolution order:
/// 1. Expand ~ to home directory
/// 2. If absolute, return as-is
/// 3. If relative, resolve from current directory
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = expand_home(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        let current_dir = std::env::current_dir()
            .map_err(|e| anyhow!("Failed to get current directory: {}", e))?;
        Ok(current_dir.join(expanded))
    }
}

/// Get the XDG config directory for ainotes
///
/// Returns: $XDG_CONFIG_HOME/ainotes or ~/.config/ainotes
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("ainotes")
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config").join("ainotes")
    } else {
        PathBuf::from(".config").join("ainotes")
    }
}

/// Get the default config file path
pub fn get_default_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the directory of the current executable
pub fn get_exe_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()
        .map_err(|e| anyhow!("Failed to get executable path: {}", e))?;
    exe_path
        .parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| anyhow!("Executable has no parent directory"))
}

/// Default note log location: `notes.txt` next to the installed executable
pub fn default_notes_path() -> Result<PathBuf> {
    Ok(get_exe_dir()?.join(DEFAULT_NOTES_FILE_NAME))
}
