//! Platform helpers.
//!
//! - [`path`] - Path expansion and file URL conversion
//! - [`objc`] - Objective-C helper utilities (macOS only)

#[cfg(target_os = "macos")]
pub mod objc;
pub mod path;

#[cfg(target_os = "macos")]
pub use self::objc::{nserror_description, nsstring, nsstring_to_string};
pub use path::{expand, file_url, same_file_url};
