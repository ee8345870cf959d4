//! Deskpaper - read and set the macOS desktop wallpaper per display.
//!
//! The library wraps `NSWorkspace` behind [`wallpaper::Wallpaper`], a small
//! façade that targets all screens, the main screen, or screens by index, and
//! supports scale modes, fill colors and solid-color wallpapers. The `cli`
//! module exposes the same operations as the `deskpaper` binary.
//!
//! ```no_run
//! use deskpaper_lib::color::Rgba;
//! use deskpaper_lib::wallpaper::{Scale, Screen, Wallpaper};
//!
//! let wallpaper = Wallpaper::system();
//! for url in wallpaper.get(&Screen::All) {
//!     println!("{url}");
//! }
//!
//! let image = std::path::Path::new("/Library/Desktop Pictures/Solid Colors/Stone.png");
//! wallpaper.set_path(image, &Screen::Main, Scale::Fill, None)?;
//! wallpaper.set_solid_color(Rgba::from_rgb8(30, 30, 46), &Screen::Index(1))?;
//! # Ok::<(), deskpaper_lib::wallpaper::WallpaperError>(())
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod schema;
pub mod wallpaper;
