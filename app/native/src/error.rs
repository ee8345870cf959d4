//! Error types for Deskpaper.
//!
//! This module provides the application level error returned by CLI commands.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::wallpaper::WallpaperError;

/// Errors that can occur during application execution.
///
/// Serializes as `{"kind": ..., "message": ...}` so commands running with
/// `--json` can report failures in a structured way.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum DeskpaperError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Wallpaper operation failed.
    #[error("Wallpaper error: {0}")]
    WallpaperError(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<WallpaperError> for DeskpaperError {
    fn from(err: WallpaperError) -> Self { Self::WallpaperError(err.to_string()) }
}

impl From<ConfigError> for DeskpaperError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<std::io::Error> for DeskpaperError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for DeskpaperError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<String> for DeskpaperError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for DeskpaperError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}
