//! Integration tests against the real macOS desktop.
//!
//! These tests change the wallpaper of every connected screen and restore the
//! previous wallpapers when they finish.
//!
//! This test file is gated behind the `integration-tests` feature to prevent
//! it from running during normal `cargo test` invocations.
//!
//! ## Running Integration Tests
//!
//! ```bash
//! cargo test -p deskpaper --features integration-tests --test wallpaper_integration -- --test-threads 1
//! ```

#![cfg(all(target_os = "macos", feature = "integration-tests"))]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use deskpaper_lib::color::Rgba;
use deskpaper_lib::wallpaper::{Scale, Screen, TRANSPARENT_IMAGE, Wallpaper};
use tempfile::TempDir;
use url::Url;

/// The desktop is global state; tests take turns.
static DESKTOP: Mutex<()> = Mutex::new(());

/// 1x1 opaque black PNG.
const PIXEL_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53,
    0xde, 0x00, 0x00, 0x00, 0x0c, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x60, 0x60, 0x60, 0x00,
    0x00, 0x00, 0x04, 0x00, 0x01, 0xf6, 0x17, 0x38, 0x55, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e,
    0x44, 0xae, 0x42, 0x60, 0x82,
];

// ============================================================================
// Helpers
// ============================================================================

/// Holds the desktop lock and puts the original wallpapers back on drop.
struct Desktop {
    wallpaper: Wallpaper<deskpaper_lib::wallpaper::SystemBackend>,
    original: Vec<Option<Url>>,
    _lock: MutexGuard<'static, ()>,
}

impl Desktop {
    fn new() -> Self {
        let lock = DESKTOP.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let wallpaper = Wallpaper::system();
        let original = wallpaper.screens().into_iter().map(|s| s.wallpaper).collect();

        Self { wallpaper, original, _lock: lock }
    }
}

impl Drop for Desktop {
    fn drop(&mut self) {
        for (index, url) in self.original.iter().enumerate() {
            if let Some(url) = url {
                let _ = self.wallpaper.set(url, &Screen::Index(index), Scale::Auto, None);
            }
        }
    }
}

/// Writes a small PNG and returns its canonical path.
fn write_image(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, PIXEL_PNG).unwrap();
    fs::canonicalize(&path).unwrap()
}

fn file_url(path: &Path) -> Url { Url::from_file_path(path).unwrap() }

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_screens_reports_exactly_one_main_screen() {
    let desktop = Desktop::new();
    let screens = desktop.wallpaper.screens();

    assert!(!screens.is_empty(), "no screens detected");
    assert_eq!(screens.iter().filter(|s| s.is_main).count(), 1);
    assert_eq!(desktop.wallpaper.screen_names().len(), screens.len());
}

#[test]
fn test_set_then_get_returns_same_url() {
    let desktop = Desktop::new();
    let dir = TempDir::new().unwrap();
    let image = write_image(&dir, "deskpaper-set.png");

    desktop.wallpaper.set_path(&image, &Screen::Main, Scale::Fill, None).unwrap();

    assert_eq!(desktop.wallpaper.get(&Screen::Main), vec![file_url(&image)]);
}

#[test]
fn test_set_all_screens() {
    let desktop = Desktop::new();
    let dir = TempDir::new().unwrap();
    let image = write_image(&dir, "deskpaper-all.png");

    desktop
        .wallpaper
        .set_path(&image, &Screen::All, Scale::Center, Some(Rgba::from_rgb8(30, 30, 46)))
        .unwrap();

    let urls = desktop.wallpaper.get(&Screen::All);
    assert_eq!(urls.len(), desktop.wallpaper.screens().len());
    assert!(urls.iter().all(|url| *url == file_url(&image)));
}

#[test]
fn test_setting_same_path_again_succeeds() {
    let desktop = Desktop::new();
    let dir = TempDir::new().unwrap();
    let image = write_image(&dir, "deskpaper-same.png");

    desktop.wallpaper.set_path(&image, &Screen::Main, Scale::Fit, None).unwrap();
    fs::write(&image, PIXEL_PNG).unwrap();
    desktop.wallpaper.set_path(&image, &Screen::Main, Scale::Fit, None).unwrap();

    assert_eq!(desktop.wallpaper.get(&Screen::Main), vec![file_url(&image)]);
}

#[test]
fn test_solid_color_uses_transparent_image() {
    if !Path::new(TRANSPARENT_IMAGE).exists() {
        eprintln!("skipping: {TRANSPARENT_IMAGE} is not available on this system");
        return;
    }

    let desktop = Desktop::new();
    desktop.wallpaper.set_solid_color(Rgba::from_rgb8(255, 0, 0), &Screen::Main).unwrap();

    assert_eq!(
        desktop.wallpaper.get(&Screen::Main),
        vec![file_url(Path::new(TRANSPARENT_IMAGE))]
    );
}

#[test]
fn test_out_of_range_index_is_a_no_op() {
    let desktop = Desktop::new();
    let dir = TempDir::new().unwrap();
    let image = write_image(&dir, "deskpaper-none.png");
    let before = desktop.wallpaper.get(&Screen::All);

    desktop.wallpaper.set_path(&image, &Screen::Index(usize::MAX), Scale::Auto, None).unwrap();

    assert!(desktop.wallpaper.get(&Screen::Index(usize::MAX)).is_empty());
    assert_eq!(desktop.wallpaper.get(&Screen::All), before);
}
