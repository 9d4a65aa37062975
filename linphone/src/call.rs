//! A call, incoming or outgoing.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::Sealed;
use crate::address::Address;
use crate::call_log::CallLog;
use crate::core::Core;
use crate::error::Result;
use crate::ffi_wrapper::{
    command_succeeded, copy_string, duration_from_secs, from_bool_t, take_string, to_bool_t,
    to_cstring,
};
use crate::handle::handle_kind;
use crate::identity::{Resource, Wrapped};
use crate::native_enum::{NativeEnum, native_enum};

handle_kind! {
    /// Marker for `LinphoneCall` handles.
    pub CallKind {
        raw: linphone_sys::LinphoneCall,
        name: "call",
        retain: linphone_sys::linphone_call_ref,
        release: linphone_sys::linphone_call_unref,
        cache: calls,
    }
}

native_enum! {
    /// State of a call, as reported by the engine.
    ///
    /// ```text
    /// Idle -> IncomingReceived | OutgoingInit
    ///      -> OutgoingProgress / OutgoingRinging / OutgoingEarlyMedia / IncomingEarlyMedia
    ///      -> Connected -> StreamsRunning (-> Pausing -> Paused -> Resuming -> StreamsRunning)
    ///      -> End | Error -> Released
    /// ```
    ///
    /// `Refered`, `UpdatedByRemote`, `Updating`, `EarlyUpdatedByRemote` and `EarlyUpdating` are side transitions for transfers and renegotiation.
    pub enum CallState: linphone_sys::LinphoneCallState, describe = linphone_sys::linphone_call_state_to_string {
        /// Initial state.
        Idle = linphone_sys::LinphoneCallIdle,
        /// An INVITE was received.
        IncomingReceived = linphone_sys::LinphoneCallIncomingReceived,
        /// An outgoing call is being set up.
        OutgoingInit = linphone_sys::LinphoneCallOutgoingInit,
        /// The INVITE was sent and a provisional response is awaited.
        OutgoingProgress = linphone_sys::LinphoneCallOutgoingProgress,
        /// The remote party is ringing.
        OutgoingRinging = linphone_sys::LinphoneCallOutgoingRinging,
        /// Early media is received on an outgoing call.
        OutgoingEarlyMedia = linphone_sys::LinphoneCallOutgoingEarlyMedia,
        /// The call was answered.
        Connected = linphone_sys::LinphoneCallConnected,
        /// Media streams are established.
        StreamsRunning = linphone_sys::LinphoneCallStreamsRunning,
        /// A pause was requested locally.
        Pausing = linphone_sys::LinphoneCallPausing,
        /// The call is on hold.
        Paused = linphone_sys::LinphoneCallPaused,
        /// A resume was requested locally.
        Resuming = linphone_sys::LinphoneCallResuming,
        /// The remote party asked to transfer the call.
        Refered = linphone_sys::LinphoneCallRefered,
        /// The call failed.
        Error = linphone_sys::LinphoneCallError,
        /// The call ended normally.
        End = linphone_sys::LinphoneCallEnd,
        /// The remote party put the call on hold.
        PausedByRemote = linphone_sys::LinphoneCallPausedByRemote,
        /// The remote party renegotiated the session.
        UpdatedByRemote = linphone_sys::LinphoneCallUpdatedByRemote,
        /// Early media is sent on an incoming call.
        IncomingEarlyMedia = linphone_sys::LinphoneCallIncomingEarlyMedia,
        /// A renegotiation was requested locally.
        Updating = linphone_sys::LinphoneCallUpdating,
        /// The engine no longer holds a reference to the call.
        Released = linphone_sys::LinphoneCallReleased,
        /// The remote party renegotiated the session before the call was answered.
        EarlyUpdatedByRemote = linphone_sys::LinphoneCallEarlyUpdatedByRemote,
        /// A renegotiation was requested locally before the call was answered.
        EarlyUpdating = linphone_sys::LinphoneCallEarlyUpdating,
    }
}

impl CallState {
    /// Checks if no further transition can happen.
    pub fn is_terminal(self) -> bool {
        self == Self::Released
    }

    /// Checks if the call is over, released or not.
    pub fn has_ended(self) -> bool {
        matches!(self, Self::End | Self::Error | Self::Released)
    }

    /// Checks if the call has not been answered yet.
    pub fn is_early(self) -> bool {
        matches!(
            self,
            Self::IncomingReceived
                | Self::OutgoingInit
                | Self::OutgoingProgress
                | Self::OutgoingRinging
                | Self::OutgoingEarlyMedia
                | Self::IncomingEarlyMedia
                | Self::EarlyUpdatedByRemote
                | Self::EarlyUpdating
        )
    }

    /// Checks if the call is on hold, on either side.
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused | Self::PausedByRemote)
    }
}

impl fmt::Display for CallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

native_enum! {
    /// Direction of a call.
    pub enum CallDirection: linphone_sys::LinphoneCallDir {
        Outgoing = linphone_sys::LinphoneCallOutgoing,
        Incoming = linphone_sys::LinphoneCallIncoming,
    }
}

native_enum! {
    /// Reason a call ended or was declined.
    pub enum Reason: linphone_sys::LinphoneReason, describe = linphone_sys::linphone_reason_to_string {
        None = linphone_sys::LinphoneReasonNone,
        NoResponse = linphone_sys::LinphoneReasonNoResponse,
        Forbidden = linphone_sys::LinphoneReasonForbidden,
        Declined = linphone_sys::LinphoneReasonDeclined,
        NotFound = linphone_sys::LinphoneReasonNotFound,
        NotAnswered = linphone_sys::LinphoneReasonNotAnswered,
        Busy = linphone_sys::LinphoneReasonBusy,
        UnsupportedContent = linphone_sys::LinphoneReasonUnsupportedContent,
        IoError = linphone_sys::LinphoneReasonIOError,
        DoNotDisturb = linphone_sys::LinphoneReasonDoNotDisturb,
        Unauthorized = linphone_sys::LinphoneReasonUnauthorized,
        NotAcceptable = linphone_sys::LinphoneReasonNotAcceptable,
        NoMatch = linphone_sys::LinphoneReasonNoMatch,
        MovedPermanently = linphone_sys::LinphoneReasonMovedPermanently,
        Gone = linphone_sys::LinphoneReasonGone,
        TemporarilyUnavailable = linphone_sys::LinphoneReasonTemporarilyUnavailable,
        AddressIncomplete = linphone_sys::LinphoneReasonAddressIncomplete,
        NotImplemented = linphone_sys::LinphoneReasonNotImplemented,
        BadGateway = linphone_sys::LinphoneReasonBadGateway,
        ServerTimeout = linphone_sys::LinphoneReasonServerTimeout,
        Unknown = linphone_sys::LinphoneReasonUnknown,
    }
}

/// A call.
///
/// Cloning is cheap and yields the same wrapper: while any clone is alive, every accessor returning this call returns a clone of it.
/// Nothing is cached on the Rust side; every read asks the engine.
///
/// Commands return `true` if the engine accepted the request. The outcome itself (the call actually being answered, paused, ...) shows up later in [`Call::state`], as the core iterates.
#[derive(Clone)]
pub struct Call(Rc<Wrapped<CallKind>>);

impl Sealed for Call {}

impl Resource for Call {
    type Kind = CallKind;

    fn from_wrapped(wrapped: Rc<Wrapped<CallKind>>) -> Self {
        Self(wrapped)
    }

    fn wrapped(&self) -> &Rc<Wrapped<CallKind>> {
        &self.0
    }
}

impl Call {
    fn raw(&self) -> *mut linphone_sys::LinphoneCall {
        self.as_ptr()
    }

    /// Returns the raw FFI pointer to the underlying call.
    ///
    /// This is intended for internal use and advanced scenarios.
    pub fn as_ptr(&self) -> *mut linphone_sys::LinphoneCall {
        Resource::as_ptr(self)
    }

    /// Checks if `self` and `other` are the same wrapper.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Resource::ptr_eq(self, other)
    }

    /// The core the call belongs to, or `None` once the core is gone.
    pub fn core(&self) -> Option<Core> {
        unsafe {
            self.context()
                .resolve(linphone_sys::linphone_call_get_core(self.raw()))
        }
    }

    /// Address of the remote party.
    pub fn remote_address(&self) -> Option<Address> {
        unsafe {
            self.context().resolve(
                linphone_sys::linphone_call_get_remote_address(self.raw())
                    as *mut linphone_sys::LinphoneAddress,
            )
        }
    }

    /// The address the call was sent to.
    pub fn to_address(&self) -> Option<Address> {
        unsafe {
            self.context().resolve(
                linphone_sys::linphone_call_get_to_address(self.raw())
                    as *mut linphone_sys::LinphoneAddress,
            )
        }
    }

    /// The history entry of this call.
    pub fn call_log(&self) -> Option<CallLog> {
        unsafe {
            self.context()
                .resolve(linphone_sys::linphone_call_get_call_log(self.raw()))
        }
    }

    /// The call this one replaces, when it was created by an INVITE carrying a `Replaces` header.
    pub fn replaced_call(&self) -> Option<Call> {
        unsafe {
            self.context()
                .resolve(linphone_sys::linphone_call_get_replaced_call(self.raw()))
        }
    }

    /// The call that asked for this one to be placed, when it results from a transfer.
    pub fn transferer_call(&self) -> Option<Call> {
        unsafe {
            self.context()
                .resolve(linphone_sys::linphone_call_get_transferer_call(self.raw()))
        }
    }

    /// The call this one is being transferred to, during an attended transfer.
    pub fn transfer_target_call(&self) -> Option<Call> {
        unsafe {
            self.context()
                .resolve(linphone_sys::linphone_call_get_transfer_target_call(
                    self.raw(),
                ))
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownCode`](crate::Error::UnknownCode) if the engine reports a state these bindings do not know.
    pub fn state(&self) -> Result<CallState> {
        let raw = unsafe { linphone_sys::linphone_call_get_state(self.raw()) };
        Ok(CallState::try_from_raw(raw)?)
    }

    /// Whether the call was placed or received.
    pub fn direction(&self) -> Result<CallDirection> {
        let raw = unsafe { linphone_sys::linphone_call_get_dir(self.raw()) };
        Ok(CallDirection::try_from_raw(raw)?)
    }

    /// Reason the call ended, [`Reason::None`] while it is running.
    pub fn reason(&self) -> Result<Reason> {
        let raw = unsafe { linphone_sys::linphone_call_get_reason(self.raw()) };
        Ok(Reason::try_from_raw(raw)?)
    }

    /// Progress of the transfer requested on this call, [`CallState::Idle`] if none was.
    pub fn transfer_state(&self) -> Result<CallState> {
        let raw = unsafe { linphone_sys::linphone_call_get_transfer_state(self.raw()) };
        Ok(CallState::try_from_raw(raw)?)
    }

    /// Time elapsed since the call was answered.
    pub fn duration(&self) -> Duration {
        duration_from_secs(unsafe { linphone_sys::linphone_call_get_duration(self.raw()) })
    }

    /// Current quality rating, from 0 (worst) to 5 (best); negative if unavailable.
    pub fn current_quality(&self) -> f32 {
        unsafe { linphone_sys::linphone_call_get_current_quality(self.raw()) }
    }

    /// Quality rating averaged over the whole call; negative if unavailable.
    pub fn average_quality(&self) -> f32 {
        unsafe { linphone_sys::linphone_call_get_average_quality(self.raw()) }
    }

    /// The remote address, rendered with its display name.
    pub fn remote_address_as_string(&self) -> Option<String> {
        unsafe {
            take_string(linphone_sys::linphone_call_get_remote_address_as_string(
                self.raw(),
            ))
        }
    }

    /// The `User-Agent` advertised by the remote party.
    pub fn remote_user_agent(&self) -> Option<String> {
        unsafe { copy_string(linphone_sys::linphone_call_get_remote_user_agent(self.raw())) }
    }

    /// The URI the call is being transferred to.
    pub fn refer_to(&self) -> Option<String> {
        unsafe { copy_string(linphone_sys::linphone_call_get_refer_to(self.raw())) }
    }

    /// The short authentication string of an encrypted call.
    pub fn authentication_token(&self) -> Option<String> {
        unsafe {
            copy_string(linphone_sys::linphone_call_get_authentication_token(
                self.raw(),
            ))
        }
    }

    /// Checks if the microphone is muted for this call.
    pub fn microphone_muted(&self) -> bool {
        from_bool_t(unsafe { linphone_sys::linphone_call_get_microphone_muted(self.raw()) })
    }

    /// Mutes or unmutes the microphone for this call only.
    pub fn set_microphone_muted(&self, muted: bool) {
        unsafe { linphone_sys::linphone_call_set_microphone_muted(self.raw(), to_bool_t(muted)) }
    }

    /// Playback gain, between 0 and 1.
    pub fn speaker_volume_gain(&self) -> f32 {
        unsafe { linphone_sys::linphone_call_get_speaker_volume_gain(self.raw()) }
    }

    /// Sets the playback gain. The engine may clamp the value; read it back to get the effective gain.
    pub fn set_speaker_volume_gain(&self, gain: f32) {
        unsafe { linphone_sys::linphone_call_set_speaker_volume_gain(self.raw(), gain) }
    }

    /// Capture gain, between 0 and 1.
    pub fn microphone_volume_gain(&self) -> f32 {
        unsafe { linphone_sys::linphone_call_get_microphone_volume_gain(self.raw()) }
    }

    /// Sets the microphone gain, in decibels.
    pub fn set_microphone_volume_gain(&self, gain: f32) {
        unsafe { linphone_sys::linphone_call_set_microphone_volume_gain(self.raw(), gain) }
    }

    /// Checks if the camera stream is sent.
    pub fn camera_enabled(&self) -> bool {
        from_bool_t(unsafe { linphone_sys::linphone_call_camera_enabled(self.raw()) })
    }

    /// Starts or stops sending the camera stream.
    pub fn enable_camera(&self, enabled: bool) {
        unsafe { linphone_sys::linphone_call_enable_camera(self.raw(), to_bool_t(enabled)) }
    }

    /// Answers an incoming call.
    pub fn accept(&self) -> bool {
        command_succeeded("linphone_call_accept", unsafe {
            linphone_sys::linphone_call_accept(self.raw())
        })
    }

    /// Rejects an incoming call with `reason`.
    pub fn decline(&self, reason: Reason) -> bool {
        command_succeeded("linphone_call_decline", unsafe {
            linphone_sys::linphone_call_decline(self.raw(), reason.to_raw())
        })
    }

    /// Hangs up, whatever the state of the call.
    pub fn terminate(&self) -> bool {
        command_succeeded("linphone_call_terminate", unsafe {
            linphone_sys::linphone_call_terminate(self.raw())
        })
    }

    /// Puts the call on hold. Returns `false` if the engine refuses.
    pub fn pause(&self) -> bool {
        command_succeeded("linphone_call_pause", unsafe {
            linphone_sys::linphone_call_pause(self.raw())
        })
    }

    /// Takes the call off hold. Returns `false` if the engine refuses.
    pub fn resume(&self) -> bool {
        command_succeeded("linphone_call_resume", unsafe {
            linphone_sys::linphone_call_resume(self.raw())
        })
    }

    /// Redirects an incoming call to `uri` instead of answering it.
    pub fn redirect(&self, uri: &str) -> bool {
        let Some(uri) = command_argument("linphone_call_redirect", uri) else {
            return false;
        };
        command_succeeded("linphone_call_redirect", unsafe {
            linphone_sys::linphone_call_redirect(self.raw(), uri.as_ptr())
        })
    }

    /// Blind transfer: asks the remote party to call `refer_to`.
    pub fn transfer(&self, refer_to: &str) -> bool {
        let Some(refer_to) = command_argument("linphone_call_transfer", refer_to) else {
            return false;
        };
        command_succeeded("linphone_call_transfer", unsafe {
            linphone_sys::linphone_call_transfer(self.raw(), refer_to.as_ptr())
        })
    }

    /// Attended transfer: asks the remote party of this call to join the remote party of `destination`.
    pub fn transfer_to_another(&self, destination: &Call) -> bool {
        command_succeeded("linphone_call_transfer_to_another", unsafe {
            linphone_sys::linphone_call_transfer_to_another(self.raw(), destination.raw())
        })
    }

    /// Sends one DTMF symbol. Symbols outside ASCII are refused without reaching the engine.
    pub fn send_dtmf(&self, dtmf: char) -> bool {
        if !dtmf.is_ascii() {
            tracing::debug!(%dtmf, "refusing non-ASCII DTMF symbol");
            return false;
        }
        command_succeeded("linphone_call_send_dtmf", unsafe {
            linphone_sys::linphone_call_send_dtmf(self.raw(), dtmf as u8 as std::os::raw::c_char)
        })
    }

    /// Sends a sequence of DTMF symbols.
    pub fn send_dtmfs(&self, dtmfs: &str) -> bool {
        let Some(dtmfs) = command_argument("linphone_call_send_dtmfs", dtmfs) else {
            return false;
        };
        command_succeeded("linphone_call_send_dtmfs", unsafe {
            linphone_sys::linphone_call_send_dtmfs(self.raw(), dtmfs.as_ptr())
        })
    }
}

/// Encodes a command argument; an interior NUL fails the command before it reaches the engine.
fn command_argument(operation: &'static str, argument: &str) -> Option<std::ffi::CString> {
    match to_cstring(argument) {
        Ok(argument) => Some(argument),
        Err(error) => {
            tracing::debug!(operation, %error, "engine command not issued");
            None
        }
    }
}

impl PartialEq for Call {
    fn eq(&self, other: &Self) -> bool {
        self.0.handle() == other.0.handle()
    }
}

impl Eq for Call {}

impl fmt::Debug for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Decoded without `state()` so that formatting never logs.
        let raw = unsafe { linphone_sys::linphone_call_get_state(self.raw()) };
        let mut debug = f.debug_struct("Call");
        debug.field("ptr", &self.as_ptr());
        match CallState::ALL.iter().find(|state| state.to_raw() == raw) {
            Some(state) => debug.field("state", state),
            None => debug.field("state_code", &raw),
        };
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_helpers() {
        assert!(CallState::Released.is_terminal());
        assert!(!CallState::End.is_terminal());
        assert!(CallState::End.has_ended());
        assert!(CallState::Error.has_ended());
        assert!(!CallState::Paused.has_ended());
        assert!(CallState::OutgoingRinging.is_early());
        assert!(!CallState::StreamsRunning.is_early());
        assert!(CallState::PausedByRemote.is_paused());
        assert!(!CallState::Pausing.is_paused());
    }

    #[test]
    fn test_native_numbering() {
        assert_eq!(CallState::Refered.to_raw(), 11);
        assert_eq!(CallState::PausedByRemote.to_raw(), 14);
        assert_eq!(CallState::Released.to_raw(), 18);
        assert_eq!(CallDirection::try_from(1), Ok(CallDirection::Incoming));
        assert_eq!(Reason::Unknown.to_raw(), 20);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(CallState::StreamsRunning.to_string(), "StreamsRunning");
    }

    #[cfg(not(feature = "native"))]
    #[test]
    #[tracing_test::traced_test]
    fn test_debug_does_not_log_unknown_state() {
        let core = crate::Core::try_new(&crate::CoreSettings::default()).unwrap();
        let call = core.invite("sip:bob@example.org").unwrap();

        assert!(format!("{call:?}").contains("state: OutgoingInit"));

        unsafe { linphone_sys::sim::set_call_state(call.as_ptr(), 99) };
        assert!(format!("{call:?}").contains("state_code: 99"));
        assert!(!logs_contain("unknown native enumeration code"));
    }

}
