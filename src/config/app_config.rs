//! Application configuration module for ainotes
//!
//! Provides TOML-based configuration with environment variable override support.
//! Priority: CLI args > Environment variables > Config file > Defaults

use super::path_resolver;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path of the note log (default: notes.txt in the install directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes_file_path: Option<String>,

    /// Name the MCP server reports to clients
    #[serde(default = "default_server_name")]
    server_name: String,
}

fn default_server_name() -> String {
    "AI Notes".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notes_file_path: None,
            server_name: default_server_name(),
        }
    }
}

impl AppConfig {
    /// Create config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file: {}", e))?;
        Ok(config)
    }

    /// Create config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("AINOTES_NOTES_FILE") {
            config.notes_file_path = Some(path);
        }

        if let Ok(name) = std::env::var("AINOTES_SERVER_NAME") {
            config.server_name = name;
        }

        config
    }

    /// Load the layered config: file (explicit path, or the default location
    /// if it exists), then environment variables on top
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let file_config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = path_resolver::get_default_config_path();
                if default_path.exists() {
                    tracing::debug!("Loading config from {}", default_path.display());
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        Ok(file_config.merge_with(&Self::from_env()))
    }

    /// Merge with another config (other takes priority for non-default values)
    pub fn merge_with(&self, other: &Self) -> Self {
        Self {
            notes_file_path: other
                .notes_file_path
                .clone()
                .or_else(|| self.notes_file_path.clone()),
            server_name: if other.server_name != default_server_name() {
                other.server_name.clone()
            } else {
                self.server_name.clone()
            },
        }
    }

    /// Override notes_file_path
    pub fn with_notes_file_path(mut self, path: &str) -> Self {
        self.notes_file_path = Some(path.to_string());
        self
    }

    /// Override server_name
    pub fn with_server_name(mut self, name: &str) -> Self {
        self.server_name = name.to_string();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server_name.trim().is_empty() {
            return Err(anyhow!("server_name must not be empty"));
        }

        if let Some(path) = &self.notes_file_path {
            if path.trim().is_empty() {
                return Err(anyhow!("notes_file_path must not be blank"));
            }
        }

        Ok(())
    }

    /// Resolve the note log path to an absolute path
    pub fn resolve_notes_path(&self) -> Result<PathBuf> {
        match &self.notes_file_path {
            Some(path) => path_resolver::resolve_path(path),
            None => path_resolver::default_notes_path(),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| anyhow!("Failed to serialize config: {}", e))
    }

    // Getters
    pub fn notes_file_path(&self) -> Option<&str> {
        self.notes_file_path.as_deref()
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }
}
