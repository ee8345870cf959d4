//! Shared types for CLI commands.

use std::str::FromStr;

use crate::wallpaper::Screen;

/// A 1-based screen index for targeting specific displays.
///
/// Users count screens from 1; the wallpaper API counts from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ScreenIndex(usize);

impl ScreenIndex {
    /// Creates a new `ScreenIndex` from a 1-based index.
    #[must_use]
    pub const fn new(index: usize) -> Self { Self(index) }

    /// Returns the 0-based index for internal use with arrays/APIs.
    #[must_use]
    pub const fn as_zero_based(self) -> usize { self.0.saturating_sub(1) }
}

impl std::fmt::Display for ScreenIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

/// Screen target for wallpaper commands.
///
/// Specifies which screen(s) should be read or receive the wallpaper.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenTarget {
    /// Apply to all screens.
    #[default]
    All,
    /// Apply to the main screen only.
    Main,
    /// Apply to a specific screen by 1-based index.
    Index(ScreenIndex),
}

impl ScreenTarget {
    /// Converts the target into a wallpaper screen selector.
    #[must_use]
    pub fn to_screen<H>(&self) -> Screen<H> {
        match self {
            Self::All => Screen::All,
            Self::Main => Screen::Main,
            Self::Index(idx) => Screen::Index(idx.as_zero_based()),
        }
    }
}

impl FromStr for ScreenTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "main" => Ok(Self::Main),
            _ => match s.parse::<usize>() {
                Ok(0) => Err(format!("Invalid screen value '{s}'. Screen indices start at 1.")),
                Ok(idx) => Ok(Self::Index(ScreenIndex::new(idx))),
                Err(_) => Err(format!(
                    "Invalid screen value '{s}'. Expected 'all', 'main', or a positive integer."
                )),
            },
        }
    }
}

impl std::fmt::Display for ScreenTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Main => write!(f, "main"),
            Self::Index(idx) => write!(f, "{idx}"),
        }
    }
}
