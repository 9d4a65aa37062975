//! Call history.

use std::fmt;
use std::rc::Rc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::Sealed;
use crate::address::Address;
use crate::call::CallDirection;
use crate::error::Result;
use crate::ffi_wrapper::{copy_string, duration_from_secs};
use crate::handle::handle_kind;
use crate::identity::{Resource, Wrapped};
use crate::native_enum::{NativeEnum, native_enum};

handle_kind! {
    /// Marker for `LinphoneCallLog` handles.
    pub CallLogKind {
        raw: linphone_sys::LinphoneCallLog,
        name: "call log",
        retain: linphone_sys::linphone_call_log_ref,
        release: linphone_sys::linphone_call_log_unref,
        cache: call_logs,
    }
}

native_enum! {
    /// How a call ended, as recorded in its history entry.
    pub enum CallStatus: linphone_sys::LinphoneCallStatus {
        /// The call was answered.
        Success = linphone_sys::LinphoneCallSuccess,
        /// The call was hung up by the caller before being answered.
        Aborted = linphone_sys::LinphoneCallAborted,
        /// The incoming call was never answered.
        Missed = linphone_sys::LinphoneCallMissed,
        /// The incoming call was declined.
        Declined = linphone_sys::LinphoneCallDeclined,
        /// The call was aborted before its early media started.
        EarlyAborted = linphone_sys::LinphoneCallEarlyAborted,
        /// The call was answered on another device.
        AcceptedElsewhere = linphone_sys::LinphoneCallAcceptedElsewhere,
        /// The call was declined on another device.
        DeclinedElsewhere = linphone_sys::LinphoneCallDeclinedElsewhere,
    }
}

/// A call history entry.
///
/// The engine keeps the entry up to date while the call runs; it outlives the call.
#[derive(Clone)]
pub struct CallLog(Rc<Wrapped<CallLogKind>>);

impl Sealed for CallLog {}

impl Resource for CallLog {
    type Kind = CallLogKind;

    fn from_wrapped(wrapped: Rc<Wrapped<CallLogKind>>) -> Self {
        Self(wrapped)
    }

    fn wrapped(&self) -> &Rc<Wrapped<CallLogKind>> {
        &self.0
    }
}

impl CallLog {
    fn raw(&self) -> *mut linphone_sys::LinphoneCallLog {
        self.as_ptr()
    }

    /// Returns the raw handle. The reference stays owned by the wrapper.
    pub fn as_ptr(&self) -> *mut linphone_sys::LinphoneCallLog {
        Resource::as_ptr(self)
    }

    /// Checks if `self` and `other` are the same wrapper.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Resource::ptr_eq(self, other)
    }

    /// Whether the call was placed or received.
    pub fn direction(&self) -> Result<CallDirection> {
        let raw = unsafe { linphone_sys::linphone_call_log_get_dir(self.raw()) };
        Ok(CallDirection::try_from_raw(raw)?)
    }

    /// How the call ended, or [`CallStatus::Aborted`] while it has not been answered.
    pub fn status(&self) -> Result<CallStatus> {
        let raw = unsafe { linphone_sys::linphone_call_log_get_status(self.raw()) };
        Ok(CallStatus::try_from_raw(raw)?)
    }

    /// Duration of the conversation, zero if the call was never answered.
    pub fn duration(&self) -> Duration {
        duration_from_secs(unsafe { linphone_sys::linphone_call_log_get_duration(self.raw()) })
    }

    /// Average quality rating of the call; negative if unavailable.
    pub fn quality(&self) -> f32 {
        unsafe { linphone_sys::linphone_call_log_get_quality(self.raw()) }
    }

    /// The SIP `Call-ID` of the call.
    pub fn call_id(&self) -> Option<String> {
        unsafe { copy_string(linphone_sys::linphone_call_log_get_call_id(self.raw())) }
    }

    /// The caller.
    pub fn from_address(&self) -> Option<Address> {
        unsafe {
            self.context()
                .resolve(linphone_sys::linphone_call_log_get_from_address(self.raw()))
        }
    }

    /// The callee.
    pub fn to_address(&self) -> Option<Address> {
        unsafe {
            self.context()
                .resolve(linphone_sys::linphone_call_log_get_to_address(self.raw()))
        }
    }

    /// The party at the other end: the callee of an outgoing call, the caller of an incoming one.
    pub fn remote_address(&self) -> Option<Address> {
        unsafe {
            self.context()
                .resolve(linphone_sys::linphone_call_log_get_remote_address(
                    self.raw(),
                ))
        }
    }

    /// When the call was placed or received.
    pub fn start_date(&self) -> SystemTime {
        let seconds = unsafe { linphone_sys::linphone_call_log_get_start_date(self.raw()) };
        UNIX_EPOCH + Duration::from_secs(u64::try_from(seconds).unwrap_or(0))
    }
}

impl PartialEq for CallLog {
    fn eq(&self, other: &Self) -> bool {
        self.0.handle() == other.0.handle()
    }
}

impl Eq for CallLog {}

impl fmt::Debug for CallLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallLog")
            .field("ptr", &self.as_ptr())
            .field("call_id", &self.call_id())
            .finish()
    }
}
