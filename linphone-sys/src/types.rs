use std::os::raw::{c_int, c_uchar};
#[cfg(not(windows))]
use std::os::raw::c_long;

macro_rules! opaque {
    ($($(#[$meta:meta])* $name:ident => $alias:ident;)*) => {
        $(
            $(#[$meta])*
            #[repr(C)]
            pub struct $name {
                _unused: [u8; 0],
            }

            pub type $alias = $name;
        )*
    };
}

opaque! {
    /// Process-wide factory from which cores are created.
    _LinphoneFactory => LinphoneFactory;
    /// Main object of the engine; owns calls, proxies and configuration.
    _LinphoneCore => LinphoneCore;
    /// A call, incoming or outgoing.
    _LinphoneCall => LinphoneCall;
    /// A parsed SIP address.
    _LinphoneAddress => LinphoneAddress;
    /// A call history entry.
    _LinphoneCallLog => LinphoneCallLog;
}

pub type bool_t = c_uchar;
pub const TRUE: bool_t = 1;
pub const FALSE: bool_t = 0;

/// Seconds since the Unix epoch, as the platform C library defines it.
#[cfg(not(windows))]
pub type time_t = c_long;
#[cfg(windows)]
pub type time_t = i64;

/// Return type of engine commands: `0` on success, `-1` on failure.
pub type LinphoneStatus = c_int;
pub const LinphoneStatusSuccess: LinphoneStatus = 0;
pub const LinphoneStatusFailure: LinphoneStatus = -1;

pub type LinphoneCallState = c_int;
pub const LinphoneCallIdle: LinphoneCallState = 0;
pub const LinphoneCallIncomingReceived: LinphoneCallState = 1;
pub const LinphoneCallOutgoingInit: LinphoneCallState = 2;
pub const LinphoneCallOutgoingProgress: LinphoneCallState = 3;
pub const LinphoneCallOutgoingRinging: LinphoneCallState = 4;
pub const LinphoneCallOutgoingEarlyMedia: LinphoneCallState = 5;
pub const LinphoneCallConnected: LinphoneCallState = 6;
pub const LinphoneCallStreamsRunning: LinphoneCallState = 7;
pub const LinphoneCallPausing: LinphoneCallState = 8;
pub const LinphoneCallPaused: LinphoneCallState = 9;
pub const LinphoneCallResuming: LinphoneCallState = 10;
pub const LinphoneCallRefered: LinphoneCallState = 11;
pub const LinphoneCallError: LinphoneCallState = 12;
pub const LinphoneCallEnd: LinphoneCallState = 13;
pub const LinphoneCallPausedByRemote: LinphoneCallState = 14;
pub const LinphoneCallUpdatedByRemote: LinphoneCallState = 15;
pub const LinphoneCallIncomingEarlyMedia: LinphoneCallState = 16;
pub const LinphoneCallUpdating: LinphoneCallState = 17;
pub const LinphoneCallReleased: LinphoneCallState = 18;
pub const LinphoneCallEarlyUpdatedByRemote: LinphoneCallState = 19;
pub const LinphoneCallEarlyUpdating: LinphoneCallState = 20;

pub type LinphoneCallDir = c_int;
pub const LinphoneCallOutgoing: LinphoneCallDir = 0;
pub const LinphoneCallIncoming: LinphoneCallDir = 1;

pub type LinphoneCallStatus = c_int;
pub const LinphoneCallSuccess: LinphoneCallStatus = 0;
pub const LinphoneCallAborted: LinphoneCallStatus = 1;
pub const LinphoneCallMissed: LinphoneCallStatus = 2;
pub const LinphoneCallDeclined: LinphoneCallStatus = 3;
pub const LinphoneCallEarlyAborted: LinphoneCallStatus = 4;
pub const LinphoneCallAcceptedElsewhere: LinphoneCallStatus = 5;
pub const LinphoneCallDeclinedElsewhere: LinphoneCallStatus = 6;

pub type LinphoneReason = c_int;
pub const LinphoneReasonNone: LinphoneReason = 0;
pub const LinphoneReasonNoResponse: LinphoneReason = 1;
pub const LinphoneReasonForbidden: LinphoneReason = 2;
pub const LinphoneReasonDeclined: LinphoneReason = 3;
pub const LinphoneReasonNotFound: LinphoneReason = 4;
pub const LinphoneReasonNotAnswered: LinphoneReason = 5;
pub const LinphoneReasonBusy: LinphoneReason = 6;
pub const LinphoneReasonUnsupportedContent: LinphoneReason = 7;
pub const LinphoneReasonIOError: LinphoneReason = 8;
pub const LinphoneReasonDoNotDisturb: LinphoneReason = 9;
pub const LinphoneReasonUnauthorized: LinphoneReason = 10;
pub const LinphoneReasonNotAcceptable: LinphoneReason = 11;
pub const LinphoneReasonNoMatch: LinphoneReason = 12;
pub const LinphoneReasonMovedPermanently: LinphoneReason = 13;
pub const LinphoneReasonGone: LinphoneReason = 14;
pub const LinphoneReasonTemporarilyUnavailable: LinphoneReason = 15;
pub const LinphoneReasonAddressIncomplete: LinphoneReason = 16;
pub const LinphoneReasonNotImplemented: LinphoneReason = 17;
pub const LinphoneReasonBadGateway: LinphoneReason = 18;
pub const LinphoneReasonServerTimeout: LinphoneReason = 19;
pub const LinphoneReasonUnknown: LinphoneReason = 20;

pub type LinphoneTransportType = c_int;
pub const LinphoneTransportUdp: LinphoneTransportType = 0;
pub const LinphoneTransportTcp: LinphoneTransportType = 1;
pub const LinphoneTransportTls: LinphoneTransportType = 2;
pub const LinphoneTransportDtls: LinphoneTransportType = 3;
