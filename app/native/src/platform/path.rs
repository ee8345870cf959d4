//! Path utilities for turning user supplied paths into file URLs.
//!
//! Supports tilde (`~`) expansion and resolution of relative paths.

use std::path::{Path, PathBuf};

use url::Url;

use crate::wallpaper::WallpaperError;

/// Expands shell-like paths (tilde) to absolute paths.
///
/// The path can be:
/// - Absolute (starts with `/`): returned as-is
/// - Home-relative (starts with `~`): expanded to the user's home directory
/// - Relative: returned as-is (use `expand_and_resolve` for base directory resolution)
///
/// # Examples
///
/// ```ignore
/// use deskpaper_lib::platform::path::expand;
///
/// let pictures = expand("~/Pictures/sky.jpg");
/// assert!(!pictures.to_string_lossy().starts_with("~"));
/// ```
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.as_ref())
}

/// Expands shell-like paths and resolves relative paths against a base directory.
///
/// Tilde paths are expanded and never joined with `base_dir`.
#[must_use]
pub fn expand_and_resolve(path: &str, base_dir: &Path) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    let expanded = expand(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base_dir.join(expanded)
    }
}

/// Converts a path to a `file://` URL.
///
/// Relative paths are resolved against the current working directory. The
/// file is not required to exist.
///
/// # Errors
///
/// Returns `WallpaperError::InvalidImagePath` if the path is empty, the current
/// directory cannot be determined, or the path cannot be represented as a URL.
pub fn file_url(path: &Path) -> Result<Url, WallpaperError> {
    if path.as_os_str().is_empty() {
        return Err(WallpaperError::InvalidImagePath("empty path".to_string()));
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| WallpaperError::InvalidImagePath(format!("{}: {e}", path.display())))?
            .join(path)
    };

    Url::from_file_path(&absolute)
        .map_err(|()| WallpaperError::InvalidImagePath(absolute.display().to_string()))
}

/// Returns `true` if two URLs name the same image.
///
/// File URLs are compared by their decoded path, so `[`, `]`, `|` and `^`
/// match whether or not they are percent-encoded. Other URLs must be equal.
#[must_use]
pub fn same_file_url(a: &Url, b: &Url) -> bool {
    match (a.to_file_path(), b.to_file_path()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
