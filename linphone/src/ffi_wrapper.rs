//! Conversions of values crossing the C boundary.

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::ptr::NonNull;
use std::time::Duration;

use linphone_sys::{LinphoneStatus, LinphoneStatusSuccess, bool_t};

use crate::error::Result;

/// A C string allocated by the engine and handed over to the caller.
///
/// The buffer is freed with `bctbx_free` when dropped.
#[derive(Debug)]
pub struct NativeString(NonNull<c_char>);

impl NativeString {
    /// Takes ownership of `ptr`. Returns `None` if it is null.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a NUL-terminated string allocated by the engine's allocator, not owned by anything else.
    pub unsafe fn from_raw(ptr: *mut c_char) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    /// Borrows the string without copying it.
    pub fn as_c_str(&self) -> &CStr {
        unsafe { CStr::from_ptr(self.0.as_ptr()) }
    }
}

impl Drop for NativeString {
    fn drop(&mut self) {
        unsafe { linphone_sys::bctbx_free(self.0.as_ptr().cast()) }
    }
}

impl std::fmt::Display for NativeString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_c_str().to_string_lossy())
    }
}

/// Copies a string the engine handed over, then frees it.
///
/// # Safety
///
/// See [`NativeString::from_raw`].
pub unsafe fn take_string(ptr: *mut c_char) -> Option<String> {
    unsafe { NativeString::from_raw(ptr) }.map(|string| string.to_string())
}

/// Copies a string the engine keeps owning.
///
/// # Safety
///
/// `ptr` must be null or a NUL-terminated string valid for the duration of the call.
pub unsafe fn copy_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

/// Converts a string argument for the engine.
///
/// # Errors
///
/// Returns [`Error::InteriorNul`](crate::Error::InteriorNul) if `string` contains a NUL byte.
pub fn to_cstring(string: &str) -> Result<CString> {
    Ok(CString::new(string)?)
}

/// Converts an engine boolean; any non-zero value is `true`.
pub fn from_bool_t(value: bool_t) -> bool {
    value != linphone_sys::FALSE
}

/// Converts to an engine boolean.
pub fn to_bool_t(value: bool) -> bool_t {
    if value {
        linphone_sys::TRUE
    } else {
        linphone_sys::FALSE
    }
}

/// Checks the status of an engine command. A failure is logged, not raised.
pub fn command_succeeded(operation: &'static str, status: LinphoneStatus) -> bool {
    if status == LinphoneStatusSuccess {
        return true;
    }
    tracing::debug!(operation, status, "engine command failed");
    false
}

/// A duration in whole seconds as reported by the engine. Negative values become zero.
pub fn duration_from_secs(seconds: c_int) -> Duration {
    Duration::from_secs(u64::try_from(seconds).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tracing_test::traced_test;

    #[test]
    fn test_copy_string() {
        assert_eq!(unsafe { copy_string(std::ptr::null()) }, None);
        assert_eq!(
            unsafe { copy_string(c"sip:bob@example.org".as_ptr()) }.as_deref(),
            Some("sip:bob@example.org")
        );
    }

    #[test]
    fn test_take_null_string() {
        assert_eq!(unsafe { take_string(std::ptr::null_mut()) }, None);
    }

    #[test]
    fn test_to_cstring_rejects_nul() {
        assert_eq!(
            to_cstring("sip:bob\0@example.org"),
            Err(Error::InteriorNul { position: 7 })
        );
        assert!(to_cstring("sip:bob@example.org").is_ok());
    }

    #[test]
    fn test_bool_t() {
        assert!(from_bool_t(to_bool_t(true)));
        assert!(!from_bool_t(to_bool_t(false)));
        assert!(from_bool_t(2));
    }

    #[test]
    fn test_duration_from_secs() {
        assert_eq!(duration_from_secs(42), Duration::from_secs(42));
        assert_eq!(duration_from_secs(-1), Duration::ZERO);
    }

    #[test]
    #[traced_test]
    fn test_command_failure_is_logged() {
        assert!(command_succeeded("linphone_call_pause", 0));
        assert!(!command_succeeded("linphone_call_pause", -1));
        assert!(logs_contain("engine command failed"));
        assert!(logs_contain("linphone_call_pause"));
    }
}
