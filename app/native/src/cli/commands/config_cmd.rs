//! Config CLI commands.
//!
//! Commands for managing the Deskpaper configuration file.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use colored::Colorize;

use crate::config::{self, config_paths};
use crate::config::template::{create_config_file, generate_config_template};
use crate::error::DeskpaperError;
use crate::platform::path;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Initialize a new configuration file with all options documented.
    ///
    /// Creates a configuration file at the preferred location with every
    /// option commented out and set to its default value.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  deskpaper config init                           # Create config at default location
  deskpaper config init --force                   # Overwrite existing config
  deskpaper config init --path ~/deskpaper.jsonc  # Create at custom path
  deskpaper config init --stdout                  # Print template to stdout"#
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        /// If not specified, uses the first search path (see `deskpaper config path`).
        #[arg(long, short, value_name = "PATH")]
        path: Option<String>,

        /// Print the configuration template to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Show the configuration file search paths.
    ///
    /// Lists the paths in priority order and marks the file in use, including
    /// one given with `--config`.
    Path,
}

/// State of one configuration search path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathStatus {
    /// The file the configuration was loaded from.
    Active,
    /// Exists but is not the file in use.
    Inactive,
    Missing,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands) -> Result<(), DeskpaperError> {
    match cmd {
        ConfigCommands::Init { stdout: true, .. } => {
            println!("{}", generate_config_template());
            Ok(())
        }
        ConfigCommands::Init { force, path: custom, .. } => {
            let target = custom.as_deref().map_or_else(default_config_path, path::expand);
            let written = write_config(&target, *force)?;

            println!("Configuration file created at: {}", written.display());
            println!("\nAll options are commented out by default.");
            println!("Edit the file and uncomment the options you want to configure.");
            Ok(())
        }
        ConfigCommands::Path => {
            let loaded = config::get_config_path().map(PathBuf::as_path);
            let custom = config::custom_config_path().map(PathBuf::as_path);
            show_config_paths(&config_paths(), custom, loaded);
            Ok(())
        }
    }
}

/// Preferred location for a new configuration file.
fn default_config_path() -> PathBuf {
    config_paths().into_iter().next().unwrap_or_else(|| PathBuf::from("config.jsonc"))
}

/// Writes the template to `path`, refusing to replace a file unless `force` is set.
fn write_config(path: &Path, force: bool) -> Result<PathBuf, DeskpaperError> {
    if path.exists() && !force {
        return Err(DeskpaperError::ConfigError(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            path.display()
        )));
    }

    create_config_file(path).map_err(|e| {
        DeskpaperError::ConfigError(format!(
            "Failed to create config file {}: {e}",
            path.display()
        ))
    })?;

    tracing::debug!(path = %path.display(), "wrote configuration template");
    Ok(path.to_path_buf())
}

fn path_status(path: &Path, loaded: Option<&Path>) -> PathStatus {
    if loaded == Some(path) {
        PathStatus::Active
    } else if path.exists() {
        PathStatus::Inactive
    } else {
        PathStatus::Missing
    }
}

fn status_marker(status: PathStatus) -> String {
    match status {
        PathStatus::Active => " (active)".green().to_string(),
        PathStatus::Inactive => " (exists)".yellow().to_string(),
        PathStatus::Missing => " (missing)".red().to_string(),
    }
}

fn show_config_paths(paths: &[PathBuf], custom: Option<&Path>, loaded: Option<&Path>) {
    if let Some(custom) = custom {
        let marker = status_marker(path_status(custom, loaded));
        println!("Configuration file from --config:\n");
        println!("  {}{marker}\n", custom.display());
    }

    println!("Configuration file search paths (in priority order):\n");

    let mut any_exists = false;
    for (i, path) in paths.iter().enumerate() {
        let status = path_status(path, loaded);
        any_exists |= status != PathStatus::Missing;
        let marker = if status == PathStatus::Missing { String::new() } else { status_marker(status) };
        println!("  {}. {}{marker}", i + 1, path.display());
    }

    if loaded.is_none() {
        println!("\nNo configuration file loaded, using defaults.");
        if custom.is_none() && !any_exists {
            println!("Run 'deskpaper config init' to create one.");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_config_path_is_first_search_path() {
        if let Some(first) = config_paths().into_iter().next() {
            assert_eq!(default_config_path(), first);
        }
    }

    #[test]
    fn test_write_config_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deskpaper").join("config.jsonc");

        let written = write_config(&path, false).unwrap();

        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), generate_config_template());
    }

    #[test]
    fn test_write_config_refuses_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.jsonc");
        fs::write(&path, "{}").unwrap();

        let err = write_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_config_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.jsonc");
        fs::write(&path, "{}").unwrap();

        write_config(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), generate_config_template());
    }

    #[test]
    fn test_path_status_marks_loaded_file_active() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.jsonc");
        let first = temp_dir.path().join("first.jsonc");
        let second = temp_dir.path().join("second.json");
        fs::write(&first, "{}").unwrap();
        fs::write(&second, "{}").unwrap();

        let loaded = Some(first.as_path());
        assert_eq!(path_status(&missing, loaded), PathStatus::Missing);
        assert_eq!(path_status(&first, loaded), PathStatus::Active);
        assert_eq!(path_status(&second, loaded), PathStatus::Inactive);
    }

    #[test]
    fn test_path_status_with_custom_config_marks_search_paths_inactive() {
        let temp_dir = TempDir::new().unwrap();
        let search = temp_dir.path().join("config.jsonc");
        let custom = temp_dir.path().join("custom.jsonc");
        fs::write(&search, "{}").unwrap();
        fs::write(&custom, "{}").unwrap();

        let loaded = Some(custom.as_path());
        assert_eq!(path_status(&search, loaded), PathStatus::Inactive);
        assert_eq!(path_status(&custom, loaded), PathStatus::Active);
    }

    #[test]
    fn test_path_status_nothing_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("broken.jsonc");
        fs::write(&existing, "{ not json").unwrap();

        assert_eq!(path_status(&existing, None), PathStatus::Inactive);
        assert_eq!(path_status(&temp_dir.path().join("a"), None), PathStatus::Missing);
    }
}
