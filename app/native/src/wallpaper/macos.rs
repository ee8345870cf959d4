//! macOS display backend.
//!
//! Uses `NSScreen` to enumerate displays and `NSWorkspace` to read and set the
//! desktop image of each one. `AppKit` screen APIs are expected to be called
//! from the main thread.

use std::path::PathBuf;

use objc::runtime::{BOOL, NO, Object, YES};
use objc::{class, msg_send, sel, sel_impl};
use url::Url;

use super::WallpaperError;
use super::backend::{DesktopImageOptions, DisplayBackend};
use crate::platform::objc::{nserror_description, nsstring, nsstring_to_string};

#[link(name = "AppKit", kind = "framework")]
unsafe extern "C" {
    static NSWorkspaceDesktopImageScalingKey: *mut Object;
    static NSWorkspaceDesktopImageAllowClippingKey: *mut Object;
    static NSWorkspaceDesktopImageFillColorKey: *mut Object;
}

/// A retained `NSScreen`.
///
/// The screen object is kept alive for as long as the handle exists.
#[derive(Debug)]
pub struct NsScreen(*mut Object);

impl NsScreen {
    /// Wraps and retains a screen pointer.
    ///
    /// # Safety
    ///
    /// `screen` must be null or a valid `NSScreen` pointer.
    unsafe fn retain(screen: *mut Object) -> Option<Self> {
        if screen.is_null() {
            return None;
        }

        let _: *mut Object = unsafe { msg_send![screen, retain] };
        Some(Self(screen))
    }

    /// Returns the underlying `NSScreen` pointer.
    #[must_use]
    pub const fn as_ptr(&self) -> *mut Object { self.0 }
}

impl Clone for NsScreen {
    fn clone(&self) -> Self {
        let _: *mut Object = unsafe { msg_send![self.0, retain] };
        Self(self.0)
    }
}

impl Drop for NsScreen {
    fn drop(&mut self) {
        let () = unsafe { msg_send![self.0, release] };
    }
}

impl PartialEq for NsScreen {
    fn eq(&self, other: &Self) -> bool {
        if self.0 == other.0 {
            return true;
        }

        let equal: BOOL = unsafe { msg_send![self.0, isEqual: other.0] };
        equal != NO
    }
}

/// Display backend backed by `NSScreen` and `NSWorkspace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacDisplayBackend;

impl MacDisplayBackend {
    /// Returns `[NSWorkspace sharedWorkspace]`.
    fn workspace() -> Result<*mut Object, WallpaperError> {
        let workspace: *mut Object = unsafe { msg_send![class!(NSWorkspace), sharedWorkspace] };
        if workspace.is_null() {
            return Err(WallpaperError::Platform("Failed to get shared workspace".to_string()));
        }
        Ok(workspace)
    }

    /// Builds the `NSDictionary` of desktop image options.
    ///
    /// # Safety
    ///
    /// Calls into `AppKit`; the returned dictionary is autoreleased.
    #[allow(clippy::cast_possible_truncation)]
    unsafe fn options_dictionary(options: &DesktopImageOptions) -> *mut Object {
        unsafe {
            let dictionary: *mut Object = msg_send![class!(NSMutableDictionary), dictionary];

            if let Some(scaling) = options.image_scaling {
                let raw = scaling.raw() as usize;
                let value: *mut Object =
                    msg_send![class!(NSNumber), numberWithUnsignedInteger: raw];
                let () = msg_send![dictionary, setObject: value forKey: NSWorkspaceDesktopImageScalingKey];
            }

            if let Some(clipping) = options.allow_clipping {
                let flag: BOOL = if clipping { YES } else { NO };
                let value: *mut Object = msg_send![class!(NSNumber), numberWithBool: flag];
                let () = msg_send![dictionary, setObject: value forKey: NSWorkspaceDesktopImageAllowClippingKey];
            }

            if let Some(color) = options.fill_color {
                let value: *mut Object = msg_send![
                    class!(NSColor),
                    colorWithSRGBRed: color.r
                    green: color.g
                    blue: color.b
                    alpha: color.a
                ];
                if !value.is_null() {
                    let () = msg_send![dictionary, setObject: value forKey: NSWorkspaceDesktopImageFillColorKey];
                }
            }

            dictionary
        }
    }

    /// Builds an `NSURL` for `image`.
    ///
    /// File URLs go through `fileURLWithPath:` so the result is encoded the
    /// same way `AppKit` reports desktop images.
    ///
    /// # Safety
    ///
    /// Calls into `AppKit`; the returned URL is autoreleased and may be null.
    unsafe fn nsurl(image: &Url) -> *mut Object {
        unsafe {
            match image.to_file_path() {
                Ok(path) => {
                    let path = path.display().to_string();
                    msg_send![class!(NSURL), fileURLWithPath: nsstring(&path)]
                }
                Err(()) => msg_send![class!(NSURL), URLWithString: nsstring(image.as_str())],
            }
        }
    }

    /// Converts an `NSURL` back to a [`Url`].
    ///
    /// # Safety
    ///
    /// `url` must be null or a valid `NSURL` pointer.
    unsafe fn url_from_nsurl(url: *mut Object) -> Option<Url> {
        if url.is_null() {
            return None;
        }

        unsafe {
            let is_file: BOOL = msg_send![url, isFileURL];
            if is_file != NO {
                let path: *mut Object = msg_send![url, path];
                let path = nsstring_to_string(path);
                return Url::from_file_path(&path).map_or_else(
                    |()| {
                        tracing::debug!(path = %path, "desktop image path is not absolute");
                        None
                    },
                    Some,
                );
            }

            let absolute: *mut Object = msg_send![url, absoluteString];
            let absolute = nsstring_to_string(absolute);
            match Url::parse(&absolute) {
                Ok(url) => Some(url),
                Err(err) => {
                    tracing::debug!(url = %absolute, error = %err, "unparseable desktop image URL");
                    None
                }
            }
        }
    }

    /// Calls `setDesktopImageURL:forScreen:options:error:`.
    ///
    /// # Safety
    ///
    /// `url` and `options` must be valid `NSURL` and `NSDictionary` pointers.
    unsafe fn apply(
        screen: &NsScreen,
        url: *mut Object,
        options: *mut Object,
    ) -> Result<(), WallpaperError> {
        let workspace = Self::workspace()?;
        let mut error: *mut Object = std::ptr::null_mut();
        let error_ptr: *mut *mut Object = &raw mut error;

        let success: BOOL = unsafe {
            msg_send![
                workspace,
                setDesktopImageURL: url
                forScreen: screen.as_ptr()
                options: options
                error: error_ptr
            ]
        };

        if success == NO {
            let message = unsafe { nserror_description(error) };
            return Err(WallpaperError::Platform(message));
        }

        Ok(())
    }
}

impl DisplayBackend for MacDisplayBackend {
    type Screen = NsScreen;

    fn screens(&self) -> Vec<NsScreen> {
        unsafe {
            let screens: *mut Object = msg_send![class!(NSScreen), screens];
            if screens.is_null() {
                tracing::warn!("failed to get screens array");
                return Vec::new();
            }

            let count: usize = msg_send![screens, count];
            (0..count)
                .filter_map(|index| {
                    let screen: *mut Object = msg_send![screens, objectAtIndex: index];
                    NsScreen::retain(screen)
                })
                .collect()
        }
    }

    fn main_screen(&self) -> Option<NsScreen> {
        unsafe {
            let screen: *mut Object = msg_send![class!(NSScreen), mainScreen];
            NsScreen::retain(screen)
        }
    }

    fn desktop_image_url(&self, screen: &NsScreen) -> Option<Url> {
        let workspace = Self::workspace().ok()?;

        unsafe {
            let url: *mut Object = msg_send![workspace, desktopImageURLForScreen: screen.as_ptr()];
            Self::url_from_nsurl(url)
        }
    }

    fn set_desktop_image_url(
        &self,
        screen: &NsScreen,
        image: &Url,
        options: &DesktopImageOptions,
    ) -> Result<(), WallpaperError> {
        tracing::debug!(image = %image, ?options, "setting desktop image");

        unsafe {
            let url = Self::nsurl(image);
            if url.is_null() {
                return Err(WallpaperError::InvalidImagePath(image.to_string()));
            }

            Self::apply(screen, url, Self::options_dictionary(options))
        }
    }

    fn reset_desktop_image(&self, screen: &NsScreen) -> Result<(), WallpaperError> {
        let path = reset_path();
        tracing::debug!(path = %path, "resetting desktop image");

        unsafe {
            let url: *mut Object = msg_send![class!(NSURL), fileURLWithPath: nsstring(&path)];
            if url.is_null() {
                return Err(WallpaperError::InvalidImagePath(path));
            }

            let options: *mut Object = msg_send![class!(NSDictionary), dictionary];
            Self::apply(screen, url, options)
        }
    }

    fn localized_name(&self, screen: &NsScreen) -> String {
        unsafe {
            let name: *mut Object = msg_send![screen.as_ptr(), localizedName];
            nsstring_to_string(name)
        }
    }
}

/// Path an empty file URL resolves to: the working directory.
fn reset_path() -> String {
    let path = std::env::current_dir().unwrap_or_else(|err| {
        tracing::debug!(error = %err, "no working directory, resetting to /");
        PathBuf::from("/")
    });
    path.display().to_string()
}
