//! Desktop wallpaper façade.
//!
//! [`Wallpaper`] reads and sets the wallpaper of each display by delegating to a
//! [`DisplayBackend`]. On macOS the backend is [`macos::MacDisplayBackend`],
//! which talks to `NSScreen` and `NSWorkspace`.
//!
//! The façade owns no state besides the backend and the refresh delay used by
//! the same-path workaround: when an image is set at a path a display already
//! shows, macOS keeps the cached picture even if the file content changed. The
//! display is first pointed at the empty file URL, then the new image is set
//! after a short pause.

mod backend;
#[cfg(target_os = "macos")]
pub mod macos;
mod scale;
mod screen;

use std::path::Path;
use std::thread;
use std::time::Duration;

pub use backend::{DesktopImageOptions, DisplayBackend};
pub use scale::{ImageScaling, Scale};
pub use screen::Screen;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::color::Rgba;
use crate::platform::path::same_file_url;

/// The system image used as a transparent canvas for solid color wallpapers.
pub const TRANSPARENT_IMAGE: &str = "/System/Library/PreferencePanes/DesktopScreenEffectsPref.prefPane/Contents/Resources/DesktopPictures.prefPane/Contents/Resources/Transparent.tiff";

/// Pause after resetting a display before the new image takes effect.
///
/// 300 ms works, 200 ms does not.
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(400);

/// Errors that can occur when reading or setting the wallpaper.
#[derive(Debug, Error)]
pub enum WallpaperError {
    /// The operating system rejected the request.
    #[error("Failed to set wallpaper: {0}")]
    Platform(String),
    /// The image path cannot be expressed as a file URL.
    #[error("Invalid image path: {0}")]
    InvalidImagePath(String),
    /// Wallpaper management is not available on this platform.
    #[error("Wallpaper management is only supported on macOS")]
    Unsupported,
}

/// Snapshot of one display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenInfo {
    /// 0-based position in the OS order.
    pub index: usize,
    /// Human readable display name.
    pub name: String,
    /// Whether this is the main display.
    pub is_main: bool,
    /// Current wallpaper, if the display reports one.
    pub wallpaper: Option<Url>,
}

/// Reads and sets desktop wallpapers through a display backend.
#[derive(Debug)]
pub struct Wallpaper<B> {
    backend: B,
    refresh_delay: Duration,
}

/// Backend used by [`Wallpaper::system`] on the current platform.
#[cfg(target_os = "macos")]
pub type SystemBackend = macos::MacDisplayBackend;

/// Backend used by [`Wallpaper::system`] on the current platform.
#[cfg(not(target_os = "macos"))]
pub type SystemBackend = UnsupportedBackend;

impl Wallpaper<SystemBackend> {
    /// Creates a façade over the native display APIs of this platform.
    #[must_use]
    pub const fn system() -> Self { Self::new(SystemBackend {}) }

    /// Returns `true` if the native backend can manage wallpapers.
    #[must_use]
    pub const fn is_supported() -> bool { cfg!(target_os = "macos") }
}

/// Backend for platforms without wallpaper support.
///
/// Reports no displays and rejects every change.
#[cfg(not(target_os = "macos"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedBackend {}

#[cfg(not(target_os = "macos"))]
impl DisplayBackend for UnsupportedBackend {
    type Screen = usize;

    fn screens(&self) -> Vec<usize> { Vec::new() }

    fn main_screen(&self) -> Option<usize> { None }

    fn desktop_image_url(&self, _screen: &usize) -> Option<Url> { None }

    fn set_desktop_image_url(
        &self,
        _screen: &usize,
        _image: &Url,
        _options: &DesktopImageOptions,
    ) -> Result<(), WallpaperError> {
        Err(WallpaperError::Unsupported)
    }

    fn reset_desktop_image(&self, _screen: &usize) -> Result<(), WallpaperError> {
        Err(WallpaperError::Unsupported)
    }

    fn localized_name(&self, _screen: &usize) -> String { String::new() }
}

impl<B: DisplayBackend> Wallpaper<B> {
    /// Creates a façade over the given backend with the default refresh delay.
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            refresh_delay: DEFAULT_REFRESH_DELAY,
        }
    }

    /// Overrides the pause used by the same-path refresh workaround.
    #[must_use]
    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    /// Returns the backend.
    #[must_use]
    pub const fn backend(&self) -> &B { &self.backend }

    /// Returns the current wallpaper of each selected display.
    ///
    /// Displays without a wallpaper URL are skipped.
    #[must_use]
    pub fn get(&self, screen: &Screen<B::Screen>) -> Vec<Url> {
        screen
            .resolve(&self.backend)
            .iter()
            .filter_map(|handle| self.backend.desktop_image_url(handle))
            .collect()
    }

    /// Sets an image as wallpaper on each selected display.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the operating system. Displays
    /// after the failing one are left untouched.
    pub fn set(
        &self,
        image: &Url,
        screen: &Screen<B::Screen>,
        scale: Scale,
        fill_color: Option<Rgba>,
    ) -> Result<(), WallpaperError> {
        let options = scale.options(fill_color);
        let screens = screen.resolve(&self.backend);

        self.force_refresh_if_needed(image, &screens)?;

        for handle in &screens {
            self.backend.set_desktop_image_url(handle, image, &options)?;
        }

        tracing::info!(
            image = %image,
            screens = screens.len(),
            scale = %scale,
            "wallpaper set"
        );

        Ok(())
    }

    /// Sets an image file as wallpaper on each selected display.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be turned into a file URL or the
    /// operating system rejects the request.
    pub fn set_path(
        &self,
        path: &Path,
        screen: &Screen<B::Screen>,
        scale: Scale,
        fill_color: Option<Rgba>,
    ) -> Result<(), WallpaperError> {
        let image = crate::platform::path::file_url(path)?;
        self.set(&image, screen, scale, fill_color)
    }

    /// Sets a solid color as wallpaper on each selected display.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the operating system.
    pub fn set_solid_color(
        &self,
        color: Rgba,
        screen: &Screen<B::Screen>,
    ) -> Result<(), WallpaperError> {
        let image = Url::from_file_path(TRANSPARENT_IMAGE)
            .map_err(|()| WallpaperError::InvalidImagePath(TRANSPARENT_IMAGE.to_string()))?;

        self.set(&image, screen, Scale::Fit, Some(color))
    }

    /// Returns the names of all displays.
    #[must_use]
    pub fn screen_names(&self) -> Vec<String> {
        self.backend
            .screens()
            .iter()
            .map(|handle| self.backend.localized_name(handle))
            .collect()
    }

    /// Returns a snapshot of every display.
    #[must_use]
    pub fn screens(&self) -> Vec<ScreenInfo> {
        let main = self.backend.main_screen();

        self.backend
            .screens()
            .iter()
            .enumerate()
            .map(|(index, handle)| ScreenInfo {
                index,
                name: self.backend.localized_name(handle),
                is_main: main.as_ref() == Some(handle),
                wallpaper: self.backend.desktop_image_url(handle),
            })
            .collect()
    }

    /// Resets displays already showing `image` so the new content is picked up.
    fn force_refresh_if_needed(
        &self,
        image: &Url,
        screens: &[B::Screen],
    ) -> Result<(), WallpaperError> {
        let mut should_sleep = false;

        for handle in screens {
            let current = self.backend.desktop_image_url(handle);
            if current.is_some_and(|current| same_file_url(&current, image)) {
                tracing::debug!(image = %image, "resetting display showing the same image");
                self.backend.reset_desktop_image(handle)?;
                should_sleep = true;
            }
        }

        if should_sleep && !self.refresh_delay.is_zero() {
            thread::sleep(self.refresh_delay);
        }

        Ok(())
    }
}
