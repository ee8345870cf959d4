//! Configuration module for Deskpaper.
//!
//! This module provides configuration types and loading functionality for the
//! defaults the CLI applies when a flag is omitted.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod template;
pub mod types;

use std::path::PathBuf;
use std::sync::OnceLock;

pub use types::{
    ConfigError, DeskpaperConfig, config_paths, load_config as load_config_default,
    load_config_from_path,
};

/// Global configuration instance, loaded once at startup.
static CONFIG: OnceLock<DeskpaperConfig> = OnceLock::new();

/// Path to the currently loaded configuration file.
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Custom config path override (set via CLI --config flag).
static CUSTOM_CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Sets a custom configuration file path to use instead of the default search paths.
///
/// This must be called before `get_config()` to take effect.
///
/// # Returns
///
/// `true` if the path was set successfully, `false` if a path was already set.
pub fn set_custom_config_path(path: PathBuf) -> bool { CUSTOM_CONFIG_PATH.set(path).is_ok() }

/// Loads the configuration from disk.
///
/// Returns the loaded configuration, or the default configuration if no file
/// exists or loading fails.
fn load_or_default() -> DeskpaperConfig {
    let result = CUSTOM_CONFIG_PATH
        .get()
        .map_or_else(load_config_default, |path| load_config_from_path(path));

    match result {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            let _ = CONFIG_PATH.set(path);
            config
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file found, using defaults");
            DeskpaperConfig::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            DeskpaperConfig::default()
        }
    }
}

/// Returns the global configuration instance, initializing it if necessary.
///
/// Calling it multiple times returns the same instance.
pub fn get_config() -> &'static DeskpaperConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the path of the configuration file in use, loading it if necessary.
///
/// `None` when no file was found or the file failed to load.
pub fn get_config_path() -> Option<&'static PathBuf> {
    let _ = get_config();
    CONFIG_PATH.get()
}

/// Returns the path given with `--config`, if any.
pub fn custom_config_path() -> Option<&'static PathBuf> { CUSTOM_CONFIG_PATH.get() }
