//! Configuration module for ainotes
//!
//! This module defines the layered application configuration, path helpers
//! and the init command.

pub mod app_config;
pub mod init;
pub mod path_resolver;

pub use app_config::AppConfig;
pub use init::{run_init, InitOutcome};
