//! The seam between the wallpaper façade and the operating system.

use url::Url;

use super::WallpaperError;
use super::scale::ImageScaling;
use crate::color::Rgba;

/// Options passed along when setting a desktop image.
///
/// Unset fields are left out of the request so the system applies its own default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DesktopImageOptions {
    /// How the image is scaled to the display.
    pub image_scaling: Option<ImageScaling>,
    /// Whether the image may be clipped to cover the display.
    pub allow_clipping: Option<bool>,
    /// Color drawn behind the image where it does not cover the display.
    pub fill_color: Option<Rgba>,
}

/// Display management calls a wallpaper backend has to provide.
///
/// Implementations pass OS results through unchanged; they do no validation
/// and no retries of their own.
pub trait DisplayBackend {
    /// Handle identifying one display.
    type Screen: Clone + PartialEq;

    /// Returns every display, in the order the OS reports them.
    fn screens(&self) -> Vec<Self::Screen>;

    /// Returns the main display, if the OS reports one.
    fn main_screen(&self) -> Option<Self::Screen>;

    /// Returns the current wallpaper URL of a display.
    fn desktop_image_url(&self, screen: &Self::Screen) -> Option<Url>;

    /// Sets the wallpaper of a display.
    ///
    /// # Errors
    ///
    /// Returns whatever error the OS reports.
    fn set_desktop_image_url(
        &self,
        screen: &Self::Screen,
        image: &Url,
        options: &DesktopImageOptions,
    ) -> Result<(), WallpaperError>;

    /// Points a display at the empty file URL without options.
    ///
    /// # Errors
    ///
    /// Returns whatever error the OS reports.
    fn reset_desktop_image(&self, screen: &Self::Screen) -> Result<(), WallpaperError>;

    /// Returns the human readable name of a display.
    fn localized_name(&self, screen: &Self::Screen) -> String;
}
