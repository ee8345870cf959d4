//! Objective-C helper utilities for macOS integration.
//!
//! Provides `NSString` conversions and error description extraction.

use std::ffi::c_void;

use objc::runtime::Object;
use objc::{class, msg_send, sel, sel_impl};

/// `NSUTF8StringEncoding`.
const UTF8_ENCODING: usize = 4;

/// Creates an `NSString` from a Rust string slice.
///
/// # Safety
///
/// This function is unsafe because it calls Objective-C methods via FFI.
/// The caller must ensure that the Objective-C runtime is properly initialized.
///
/// # Returns
///
/// A pointer to an `NSString` object. The returned object is autoreleased.
#[must_use]
pub unsafe fn nsstring(s: &str) -> *mut Object {
    let bytes = s.as_ptr().cast::<c_void>();
    let len = s.len();

    unsafe {
        msg_send![
            class!(NSString),
            stringWithBytes: bytes
            length: len
            encoding: UTF8_ENCODING
        ]
    }
}

/// Converts an `NSString` to a Rust `String`.
///
/// # Safety
///
/// The caller must ensure that `nsstring` is either null or a valid `NSString` pointer.
///
/// # Returns
///
/// An empty string if the input is null or conversion fails.
#[must_use]
pub unsafe fn nsstring_to_string(nsstring: *mut Object) -> String {
    if nsstring.is_null() {
        return String::new();
    }

    let c_str: *const i8 = unsafe { msg_send![nsstring, UTF8String] };
    if c_str.is_null() {
        return String::new();
    }

    // SAFETY: c_str is verified non-null above, and UTF8String returns a valid C string
    unsafe { std::ffi::CStr::from_ptr(c_str) }.to_string_lossy().into_owned()
}

/// Returns the localized description of an `NSError`.
///
/// # Safety
///
/// The caller must ensure that `error` is either null or a valid `NSError` pointer.
#[must_use]
pub unsafe fn nserror_description(error: *mut Object) -> String {
    if error.is_null() {
        return "Unknown error".to_string();
    }

    let description: *mut Object = unsafe { msg_send![error, localizedDescription] };
    let message = unsafe { nsstring_to_string(description) };

    if message.is_empty() { "Unknown error".to_string() } else { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nsstring_roundtrip() {
        unsafe {
            let original = "/Library/Desktop Pictures/Sky.heic";
            let ns = nsstring(original);
            assert_eq!(nsstring_to_string(ns), original);
        }
    }

    #[test]
    fn test_nsstring_to_string_null() {
        unsafe {
            assert!(nsstring_to_string(std::ptr::null_mut()).is_empty());
        }
    }

    #[test]
    fn test_nsstring_unicode() {
        unsafe {
            let original = "Écran intégré 🖥";
            let ns = nsstring(original);
            assert_eq!(nsstring_to_string(ns), original);
        }
    }

    #[test]
    fn test_nserror_description_null() {
        unsafe {
            assert_eq!(nserror_description(std::ptr::null_mut()), "Unknown error");
        }
    }
}
