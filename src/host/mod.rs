//! Host runtime conventions.
//!
//! The BASIC-dialect host this binding serves has two representation
//! quirks the native ABI does not share: booleans are all-bits-set when
//! true, and strings are NUL-terminated byte buffers addressed by
//! pointer. Every boundary crossing converts through this module, never
//! inline at a call site, so the conversions stay symmetric everywhere.

pub mod color;
pub mod mem;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::BindingError;

/// Host boolean: 8-bit, `-1` (all bits set) for true, `0` for false.
pub type HostBool = i8;

/// The host's true sentinel. All bits set, not the value 1.
pub const TRUE: HostBool = -1;

/// The host's false sentinel. All bits clear.
pub const FALSE: HostBool = 0;

/// Convert a native boolean to the host convention.
#[inline]
pub const fn to_host_bool(value: bool) -> HostBool {
    if value {
        TRUE
    } else {
        FALSE
    }
}

/// Convert a host boolean back to a native one.
///
/// Any non-zero value counts as true, mirroring the host's own
/// truthiness rule; the companion of [`to_host_bool`].
#[inline]
pub const fn from_host_bool(value: HostBool) -> bool {
    value != 0
}

/// Build a NUL-terminated C string for a text-carrying forwarding call.
pub fn to_c_string(text: &str) -> Result<CString, BindingError> {
    CString::new(text).map_err(|_| BindingError::InvalidString(text.to_string()))
}

/// Borrow a NUL-terminated string returned by the native library.
///
/// Returns `None` for null pointers and non-UTF-8 content.
///
/// # Safety
///
/// `ptr` must be null or point at a NUL-terminated string that stays
/// alive for `'a`.
pub unsafe fn from_c_string<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_true_is_all_ones_not_one() {
        assert_eq!(TRUE as u8, 0xFF);
        assert_ne!(TRUE, 1);
        assert_eq!(FALSE, 0);
    }

    #[test]
    fn boolean_conversion_round_trips() {
        assert!(from_host_bool(to_host_bool(true)));
        assert!(!from_host_bool(to_host_bool(false)));
        assert_eq!(to_host_bool(from_host_bool(TRUE)), TRUE);
        assert_eq!(to_host_bool(from_host_bool(FALSE)), FALSE);
    }

    #[test]
    fn any_nonzero_host_value_is_true() {
        assert!(from_host_bool(1));
        assert!(from_host_bool(-128));
    }

    #[test]
    fn c_string_round_trip() {
        let owned = to_c_string("raylib").unwrap();
        let text = unsafe { from_c_string(owned.as_ptr()) };
        assert_eq!(text, Some("raylib"));

        assert!(matches!(
            to_c_string("nul\0inside"),
            Err(BindingError::InvalidString(_))
        ));
        assert_eq!(unsafe { from_c_string(std::ptr::null()) }, None);
    }
}
