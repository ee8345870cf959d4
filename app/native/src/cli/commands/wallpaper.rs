//! Wallpaper CLI commands.
//!
//! Reading and setting the desktop wallpaper, and listing displays.

use std::io::IsTerminal;

use clap::Args;
use colored::Colorize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};
use url::Url;

use super::types::ScreenTarget;
use crate::cli::output;
use crate::color::Rgba;
use crate::config::{self, DeskpaperConfig};
use crate::error::DeskpaperError;
use crate::platform::path;
use crate::wallpaper::{Scale, ScreenInfo, SystemBackend, Wallpaper, WallpaperError};

/// Arguments for `deskpaper get`.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Screen(s) to read.
    /// Values: all, main, <index> (1-based).
    #[arg(long, short)]
    pub screen: Option<ScreenTarget>,

    /// Output a JSON array instead of one path per line.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// Arguments for `deskpaper set`.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// The path to the image to use as wallpaper.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Screen(s) to set the wallpaper on.
    /// Values: all, main, <index> (1-based).
    #[arg(long, short)]
    pub screen: Option<ScreenTarget>,

    /// How the image is fitted to the screen.
    #[arg(long, value_enum)]
    pub scale: Option<Scale>,

    /// Color drawn around an image that does not cover the screen.
    #[arg(long, value_name = "COLOR")]
    pub fill_color: Option<Rgba>,
}

/// Arguments for `deskpaper solid-color`.
#[derive(Args, Debug)]
pub struct SolidColorArgs {
    /// The color to fill the screen with.
    #[arg(value_name = "COLOR")]
    pub color: Rgba,

    /// Screen(s) to set the color on.
    /// Values: all, main, <index> (1-based).
    #[arg(long, short)]
    pub screen: Option<ScreenTarget>,
}

/// Arguments for `deskpaper screens`.
#[derive(Args, Debug)]
pub struct ScreensArgs {
    /// Output in JSON format instead of table format.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// Execute `deskpaper get`.
pub fn execute_get(args: &GetArgs) -> Result<(), DeskpaperError> {
    let config = config::get_config();
    let target = resolve_screen(args.screen.as_ref(), config)?;
    let wallpaper = system_wallpaper(config)?;

    let paths: Vec<String> = wallpaper.get(&target.to_screen()).iter().map(display_url).collect();

    if args.json {
        print_json(&serde_json::json!(paths));
    } else {
        for path in &paths {
            println!("{path}");
        }
    }

    Ok(())
}

/// Execute `deskpaper set`.
pub fn execute_set(args: &SetArgs) -> Result<(), DeskpaperError> {
    let config = config::get_config();
    let target = resolve_screen(args.screen.as_ref(), config)?;
    let scale = resolve_scale(args.scale, config);
    let fill_color = resolve_fill_color(args.fill_color, config)?;

    let expanded = path::expand_and_resolve(&args.path, &std::env::current_dir()?);
    if !expanded.is_file() {
        return Err(DeskpaperError::InvalidArguments(format!(
            "Image not found: {}",
            expanded.display()
        )));
    }

    let wallpaper = system_wallpaper(config)?;
    wallpaper.set_path(&expanded, &target.to_screen(), scale, fill_color)?;

    Ok(())
}

/// Execute `deskpaper solid-color`.
pub fn execute_solid_color(args: &SolidColorArgs) -> Result<(), DeskpaperError> {
    let config = config::get_config();
    let target = resolve_screen(args.screen.as_ref(), config)?;
    let wallpaper = system_wallpaper(config)?;

    wallpaper.set_solid_color(args.color, &target.to_screen())?;

    Ok(())
}

/// Execute `deskpaper screens`.
pub fn execute_screens(args: &ScreensArgs) -> Result<(), DeskpaperError> {
    #[derive(Tabled)]
    struct ScreenRow {
        #[tabled(rename = "#")]
        screen: usize,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Main")]
        main: String,
        #[tabled(rename = "Wallpaper")]
        wallpaper: String,
    }

    let wallpaper = system_wallpaper(config::get_config())?;
    let screens = wallpaper.screens();

    if args.json {
        print_json(&screens_json(&screens));
        return Ok(());
    }

    if screens.is_empty() {
        println!("{}", "No screens detected.".dimmed());
        return Ok(());
    }

    let rows: Vec<ScreenRow> = screens
        .iter()
        .map(|s| ScreenRow {
            screen: s.index + 1,
            name: s.name.clone(),
            main: output::format_bool(s.is_main),
            wallpaper: s
                .wallpaper
                .as_ref()
                .map_or_else(|| "-".to_string(), |url| output::truncate(&display_url(url), 60)),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()))
        .with(Modify::new(Columns::new(2..3)).with(Alignment::center()))
        .to_string();

    let count = screens.len();
    println!("{}", format!("Screens ({count})").bold());
    println!("{table}");

    Ok(())
}

/// Builds the wallpaper façade for this platform with the configured delay.
fn system_wallpaper(
    config: &DeskpaperConfig,
) -> Result<Wallpaper<SystemBackend>, DeskpaperError> {
    if !Wallpaper::<SystemBackend>::is_supported() {
        return Err(WallpaperError::Unsupported.into());
    }

    Ok(Wallpaper::system().with_refresh_delay(config.refresh_delay()))
}

/// Picks the `--screen` flag, falling back to the configured default.
fn resolve_screen(
    flag: Option<&ScreenTarget>,
    config: &DeskpaperConfig,
) -> Result<ScreenTarget, DeskpaperError> {
    match flag {
        Some(target) => Ok(target.clone()),
        None => config.screen.parse().map_err(DeskpaperError::ConfigError),
    }
}

/// Picks the `--scale` flag, falling back to the configured default.
fn resolve_scale(flag: Option<Scale>, config: &DeskpaperConfig) -> Scale {
    flag.unwrap_or(config.scale)
}

/// Picks the `--fill-color` flag, falling back to the configured default.
fn resolve_fill_color(
    flag: Option<Rgba>,
    config: &DeskpaperConfig,
) -> Result<Option<Rgba>, DeskpaperError> {
    match flag {
        Some(color) => Ok(Some(color)),
        None => Ok(config.fill_color()?),
    }
}

/// Renders a wallpaper URL as a filesystem path when it points to a file.
fn display_url(url: &Url) -> String {
    url.to_file_path().map_or_else(|()| url.to_string(), |p| p.display().to_string())
}

/// Screen rows for `screens --json`, numbered from 1 like `--screen`.
fn screens_json(screens: &[ScreenInfo]) -> serde_json::Value {
    screens
        .iter()
        .map(|s| {
            serde_json::json!({
                "screen": s.index + 1,
                "name": s.name,
                "isMain": s.is_main,
                "wallpaper": s.wallpaper.as_ref().map(display_url),
            })
        })
        .collect()
}

/// Prints JSON, highlighted only when stdout is a terminal.
fn print_json(value: &serde_json::Value) {
    if std::io::stdout().is_terminal() {
        output::print_highlighted_json(value);
    } else {
        println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
    }
}
