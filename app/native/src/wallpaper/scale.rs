//! Scale modes for fitting an image to a display.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::backend::DesktopImageOptions;
use crate::color::Rgba;

/// Image scaling policy understood by the platform (`NSImageScaling`).
///
/// The discriminants are the raw values the platform expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u64)]
pub enum ImageScaling {
    /// Shrink proportionally if needed, never enlarge.
    ProportionallyDown = 0,
    /// Scale each axis to fill the display, ignoring aspect ratio.
    AxesIndependently = 1,
    /// Draw the image at its native size.
    None = 2,
    /// Scale proportionally in either direction.
    ProportionallyUpOrDown = 3,
}

impl ImageScaling {
    /// Returns the raw platform value.
    #[must_use]
    pub const fn raw(self) -> u64 { self as u64 }
}

/// How a wallpaper image is fitted to a display.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Let the system decide.
    #[default]
    Auto,
    /// Scale proportionally to cover the whole display, clipping the overflow.
    Fill,
    /// Scale proportionally to fit inside the display without clipping.
    Fit,
    /// Stretch both axes to the display size.
    Stretch,
    /// Draw at native size in the middle of the display.
    Center,
}

impl Scale {
    /// Every scale mode, in declaration order.
    pub const ALL: [Self; 5] = [Self::Auto, Self::Fill, Self::Fit, Self::Stretch, Self::Center];

    /// Returns the lowercase name of the scale mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Fill => "fill",
            Self::Fit => "fit",
            Self::Stretch => "stretch",
            Self::Center => "center",
        }
    }

    /// Returns the image scaling and clipping pair for this mode.
    ///
    /// `Auto` sets neither and leaves the choice to the system.
    #[must_use]
    pub const fn scaling(self) -> Option<(ImageScaling, bool)> {
        match self {
            Self::Auto => None,
            Self::Fill => Some((ImageScaling::ProportionallyUpOrDown, true)),
            Self::Fit => Some((ImageScaling::ProportionallyUpOrDown, false)),
            Self::Stretch => Some((ImageScaling::AxesIndependently, true)),
            Self::Center => Some((ImageScaling::None, false)),
        }
    }

    /// Builds the desktop image options for this mode and an optional fill color.
    #[must_use]
    pub const fn options(self, fill_color: Option<Rgba>) -> DesktopImageOptions {
        let (image_scaling, allow_clipping) = match self.scaling() {
            Some((scaling, clipping)) => (Some(scaling), Some(clipping)),
            None => (None, None),
        };

        DesktopImageOptions {
            image_scaling,
            allow_clipping,
            fill_color,
        }
    }
}

impl FromStr for Scale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|scale| scale.as_str() == lower).ok_or_else(|| {
            format!(
                "Invalid scale value '{s}'. Expected one of: auto, fill, fit, stretch, center."
            )
        })
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}
