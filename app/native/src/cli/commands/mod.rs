//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! domain-specific submodules:
//!
//! - `config_cmd` - Configuration file commands
//! - `types` - Shared types used across commands
//! - `wallpaper` - Wallpaper and display commands

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::error::DeskpaperError;
use crate::{config, schema};

pub mod config_cmd;
pub mod types;
pub mod wallpaper;

pub use config_cmd::ConfigCommands;
pub use wallpaper::{GetArgs, ScreensArgs, SetArgs, SolidColorArgs};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Deskpaper - read and set the desktop wallpaper of each display.
#[derive(Parser, Debug)]
#[command(name = "deskpaper")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Increase log output on stderr (-v info, -vv debug).
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Print the current wallpaper of each screen.
    ///
    /// Prints one path per line, or a JSON array with --json.
    /// Screens that report no wallpaper are skipped.
    #[command(after_long_help = r#"Examples:
  deskpaper get                 # Wallpaper of every screen
  deskpaper get --screen main   # Wallpaper of the main screen
  deskpaper get --screen 2      # Wallpaper of the second screen
  deskpaper get --json          # JSON array of paths"#)]
    Get(GetArgs),

    /// Set an image as the desktop wallpaper.
    ///
    /// Setting the path that is already the wallpaper reloads the file, so
    /// an image that changed on disk is picked up.
    #[command(after_long_help = r##"Examples:
  deskpaper set ~/Pictures/sunset.jpg                       # All screens
  deskpaper set ~/Pictures/sunset.jpg --screen main         # Main screen only
  deskpaper set ~/Pictures/sunset.jpg --screen 2            # Second screen
  deskpaper set ~/Pictures/logo.png --scale center --fill-color "#1e1e2e""##)]
    Set(SetArgs),

    /// Fill the desktop with a solid color.
    #[command(
        name = "solid-color",
        after_long_help = r##"Examples:
  deskpaper solid-color "#1e1e2e"                 # Hex color on all screens
  deskpaper solid-color "rgb(30, 30, 46)" -s 1    # First screen only
  deskpaper solid-color black --screen main       # Named color"##
    )]
    SolidColor(SolidColorArgs),

    /// List connected screens.
    ///
    /// Shows the 1-based index accepted by --screen, the display name,
    /// whether it is the main screen and its current wallpaper.
    Screens(ScreensArgs),

    /// Configuration file management commands.
    ///
    /// Initialize and locate the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output Deskpaper configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// Deskpaper configuration file. Can be redirected to a file for use with
    /// editors that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    /// Can be used with eval or redirected to a file.
    ///
    /// Usage:
    ///   eval "$(deskpaper completions --shell zsh)"
    ///   deskpaper completions --shell bash > ~/.local/share/bash-completion/completions/deskpaper
    ///   deskpaper completions --shell fish > ~/.config/fish/completions/deskpaper.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> { self.config.as_ref().map(PathBuf::from) }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), DeskpaperError> {
        if let Some(path) = self.config_path() {
            if !path.exists() {
                return Err(DeskpaperError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            config::set_custom_config_path(path);
        }

        match &self.command {
            Commands::Get(args) => wallpaper::execute_get(args),
            Commands::Set(args) => wallpaper::execute_set(args),
            Commands::SolidColor(args) => wallpaper::execute_solid_color(args),
            Commands::Screens(args) => wallpaper::execute_screens(args),
            Commands::Config(cmd) => config_cmd::execute(cmd),

            Commands::Schema => {
                let schema_output = schema::print_schema();
                println!("{schema_output}");
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "deskpaper", &mut io::stdout());
    }
}

#[cfg(test)]
mod tests {
    use super::types::{ScreenIndex, ScreenTarget};
    use super::*;
    use crate::color::Rgba;
    use crate::wallpaper::Scale;

    // ========================================================================
    // CLI parsing tests
    // ========================================================================

    #[test]
    fn test_cli_definition_is_valid() { Cli::command().debug_assert(); }

    #[test]
    fn test_cli_parses_schema() {
        let cli = Cli::try_parse_from(["deskpaper", "schema"]).unwrap();
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn test_cli_parses_completions_zsh() {
        let cli = Cli::try_parse_from(["deskpaper", "completions", "--shell", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions { shell } => assert_eq!(shell, Shell::Zsh),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_parses_get_defaults() {
        let cli = Cli::try_parse_from(["deskpaper", "get"]).unwrap();
        match cli.command {
            Commands::Get(args) => {
                assert!(args.screen.is_none());
                assert!(!args.json);
            }
            _ => panic!("Expected Get command"),
        }
    }

    #[test]
    fn test_cli_parses_get_screen_json() {
        let cli = Cli::try_parse_from(["deskpaper", "get", "--screen", "main", "-j"]).unwrap();
        match cli.command {
            Commands::Get(args) => {
                assert_eq!(args.screen, Some(ScreenTarget::Main));
                assert!(args.json);
            }
            _ => panic!("Expected Get command"),
        }
    }

    #[test]
    fn test_cli_parses_set_path_only() {
        let cli = Cli::try_parse_from(["deskpaper", "set", "/tmp/a.png"]).unwrap();
        match cli.command {
            Commands::Set(args) => {
                assert_eq!(args.path, "/tmp/a.png");
                assert!(args.screen.is_none());
                assert!(args.scale.is_none());
                assert!(args.fill_color.is_none());
            }
            _ => panic!("Expected Set command"),
        }
    }

    #[test]
    fn test_cli_parses_set_all_options() {
        let cli = Cli::try_parse_from([
            "deskpaper",
            "set",
            "~/a.png",
            "--screen",
            "2",
            "--scale",
            "center",
            "--fill-color",
            "#ff0000",
        ])
        .unwrap();
        match cli.command {
            Commands::Set(args) => {
                assert_eq!(args.screen, Some(ScreenTarget::Index(ScreenIndex::new(2))));
                assert_eq!(args.scale, Some(Scale::Center));
                assert_eq!(args.fill_color, Some(Rgba::from_rgb8(255, 0, 0)));
            }
            _ => panic!("Expected Set command"),
        }
    }

    #[test]
    fn test_cli_set_requires_path() {
        assert!(Cli::try_parse_from(["deskpaper", "set"]).is_err());
    }

    #[test]
    fn test_cli_set_rejects_unknown_scale() {
        assert!(Cli::try_parse_from(["deskpaper", "set", "a.png", "--scale", "tile"]).is_err());
    }

    #[test]
    fn test_cli_set_rejects_screen_zero() {
        assert!(Cli::try_parse_from(["deskpaper", "set", "a.png", "--screen", "0"]).is_err());
    }

    #[test]
    fn test_cli_parses_solid_color() {
        let cli = Cli::try_parse_from(["deskpaper", "solid-color", "black", "-s", "1"]).unwrap();
        match cli.command {
            Commands::SolidColor(args) => {
                assert_eq!(args.color, Rgba::from_rgb8(0, 0, 0));
                assert_eq!(args.screen, Some(ScreenTarget::Index(ScreenIndex::new(1))));
            }
            _ => panic!("Expected SolidColor command"),
        }
    }

    #[test]
    fn test_cli_solid_color_rejects_invalid_color() {
        assert!(Cli::try_parse_from(["deskpaper", "solid-color", "#12"]).is_err());
    }

    #[test]
    fn test_cli_parses_screens_json() {
        let cli = Cli::try_parse_from(["deskpaper", "screens", "--json"]).unwrap();
        match cli.command {
            Commands::Screens(args) => assert!(args.json),
            _ => panic!("Expected Screens command"),
        }
    }

    #[test]
    fn test_cli_parses_config_init() {
        let cli = Cli::try_parse_from(["deskpaper", "config", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Config(ConfigCommands::Init { force, path, stdout }) => {
                assert!(force);
                assert!(path.is_none());
                assert!(!stdout);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_cli_parses_config_path() {
        let cli = Cli::try_parse_from(["deskpaper", "config", "path"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Path)));
    }

    #[test]
    fn test_cli_global_flags() {
        let cli =
            Cli::try_parse_from(["deskpaper", "get", "--config", "/tmp/c.jsonc", "-vv"]).unwrap();
        assert_eq!(cli.config_path(), Some(PathBuf::from("/tmp/c.jsonc")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_verbose_defaults_to_zero() {
        let cli = Cli::try_parse_from(["deskpaper", "screens"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.config_path().is_none());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["deskpaper"]).is_err());
    }
}
