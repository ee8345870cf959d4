//! Configuration types for Deskpaper.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::{Rgba, parse_color};
use crate::wallpaper::{DEFAULT_REFRESH_DELAY, Scale};

/// Defaults applied by the CLI when a flag is not given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DeskpaperConfig {
    /// Default scale mode used by `deskpaper set`.
    /// One of: "auto", "fill", "fit", "stretch", "center".
    /// Default: "auto"
    pub scale: Scale,

    /// Default screen target: "all", "main", or a 1-based screen index.
    /// Default: "all"
    pub screen: String,

    /// Default fill color used by `deskpaper set`.
    /// Supports hex (#RRGGBB, #RRGGBBAA), rgb()/rgba() and basic color names.
    pub fill_color: Option<String>,

    /// Delay in milliseconds between resetting a screen and setting an image
    /// with the same path as the current one.
    /// Default: 400
    pub refresh_delay_ms: u64,
}

impl Default for DeskpaperConfig {
    #[allow(clippy::cast_possible_truncation)]
    fn default() -> Self {
        Self {
            scale: Scale::Auto,
            screen: "all".to_string(),
            fill_color: None,
            refresh_delay_ms: DEFAULT_REFRESH_DELAY.as_millis() as u64,
        }
    }
}

impl DeskpaperConfig {
    /// Parses the configured fill color.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the color cannot be parsed.
    pub fn fill_color(&self) -> Result<Option<Rgba>, ConfigError> {
        self.fill_color
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(parse_color)
            .transpose()
            .map_err(|err| ConfigError::Invalid(format!("fillColor: {err}")))
    }

    /// Returns the refresh delay as a `Duration`.
    #[must_use]
    pub const fn refresh_delay(&self) -> Duration { Duration::from_millis(self.refresh_delay_ms) }
}

/// Errors that can occur when loading the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    NotFound,
    /// The configuration file exists but could not be read.
    IoError(std::io::Error),
    /// The configuration file contains invalid JSON.
    ParseError(serde_json::Error),
    /// A configuration value is not valid.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(
                f,
                "No configuration file found. Expected at ~/.config/deskpaper/config.jsonc, \
                ~/Library/Application Support/deskpaper/config.jsonc, or ~/.deskpaper.jsonc"
            ),
            Self::IoError(err) => write!(f, "Failed to read configuration file: {err}"),
            Self::ParseError(err) => write!(f, "Failed to parse configuration file: {err}"),
            Self::Invalid(msg) => write!(f, "Invalid configuration value: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::ParseError(err) => Some(err),
            Self::NotFound | Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err) }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self { Self::ParseError(err) }
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Configuration file names in the home directory.
const HOME_CONFIG_FILE_NAMES: &[&str] = &[".deskpaper.jsonc", ".deskpaper.json"];

/// Application directory name under the configuration roots.
const APP_DIR: &str = "deskpaper";

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json` variants):
/// 1. `$XDG_CONFIG_HOME/deskpaper/` if the variable is set
/// 2. `~/.config/deskpaper/`
/// 3. `~/Library/Application Support/deskpaper/` (macOS native)
/// 4. `~/.deskpaper.jsonc` or `~/.deskpaper.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(xdg_config) = std::env::var_os("XDG_CONFIG_HOME").filter(|dir| !dir.is_empty()) {
        push_config_files(&mut paths, &PathBuf::from(xdg_config).join(APP_DIR));
    }

    if let Some(home) = dirs::home_dir() {
        push_config_files(&mut paths, &home.join(".config").join(APP_DIR));
    }

    if let Some(config_dir) = dirs::config_dir() {
        push_config_files(&mut paths, &config_dir.join(APP_DIR));
    }

    if let Some(home) = dirs::home_dir() {
        for filename in HOME_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Appends the config file candidates of `dir`, skipping paths already listed.
fn push_config_files(paths: &mut Vec<PathBuf>, dir: &Path) {
    for filename in CONFIG_FILE_NAMES {
        let path = dir.join(filename);
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::IoError` if it cannot be read, and
/// `ConfigError::ParseError` if it contains invalid JSON.
pub fn load_config_from_path(path: &Path) -> Result<(DeskpaperConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    // Strip comments from JSONC before parsing
    let reader = json_comments::StripComments::new(file);
    let config: DeskpaperConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of
/// the expected locations, or the error of the first file that exists but
/// cannot be read or parsed.
pub fn load_config() -> Result<(DeskpaperConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), |path| load_config_from_path(&path))
}
