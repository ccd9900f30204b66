//! Init command implementation
//!
//! Writes the config file (unless one exists and `force` is off) and creates
//! the note log at the configured path.

use super::app_config::AppConfig;
use crate::store::NotesStore;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// What `run_init` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    /// Whether the config file was (re)written
    pub config_written: bool,
    /// Absolute path of the note log
    pub notes_path: PathBuf,
}

/// Initialize the config file and the note log
pub fn run_init(config_path: &Path, config: &AppConfig, force: bool) -> Result<InitOutcome> {
    if let Some(config_dir) = config_path.parent() {
        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            std::fs::create_dir_all(config_dir).with_context(|| {
                format!("Failed to create config directory {}", config_dir.display())
            })?;
            tracing::info!("Created config directory {}", config_dir.display());
        }
    }

    let config_written = if config_path.exists() && !force {
        tracing::debug!("Keeping existing config {}", config_path.display());
        false
    } else {
        std::fs::write(config_path, config.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", config_path.display()))?;
        true
    };

    let notes_path = config.resolve_notes_path()?;
    NotesStore::open(&notes_path)
        .with_context(|| format!("Failed to open notes file {}", notes_path.display()))?;

    Ok(InitOutcome {
        config_written,
        notes_path,
    })
}
