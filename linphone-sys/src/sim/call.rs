use std::ffi::CString;
use std::os::raw::c_int;

use super::address::Address;
use super::call_log::CallLog;
use super::engine::Core;
use super::object::{self, Header, Object};
use crate::types::*;

const DTMF_SYMBOLS: &str = "0123456789*#ABCD";

#[repr(C)]
#[derive(Debug)]
pub(crate) struct Call {
    header: Header,
    /// Back-pointer to the owning core, not reference-counted; cleared when the core goes away.
    pub(crate) core: *mut Core,
    pub(crate) state: LinphoneCallState,
    pub(crate) dir: LinphoneCallDir,
    pub(crate) reason: LinphoneReason,
    pub(crate) remote: *mut Address,
    pub(crate) to: *mut Address,
    pub(crate) log: *mut CallLog,
    pub(crate) duration: c_int,
    pub(crate) current_quality: f32,
    pub(crate) average_quality: f32,
    pub(crate) remote_user_agent: Option<CString>,
    pub(crate) authentication_token: Option<CString>,
    pub(crate) refer_to: Option<CString>,
    pub(crate) replaced: *mut Call,
    pub(crate) transferer: *mut Call,
    pub(crate) transfer_target: *mut Call,
    pub(crate) transfer_state: LinphoneCallState,
    pub(crate) microphone_muted: bool,
    pub(crate) speaker_gain: f32,
    pub(crate) microphone_gain: f32,
    pub(crate) camera_enabled: bool,
    pub(crate) dtmfs_sent: String,
    /// Status returned by the next command instead of executing it.
    pub(crate) forced_status: Option<LinphoneStatus>,
}

unsafe impl Object for Call {}

impl Call {
    /// Takes over one reference to each of `remote`, `to` and `log`.
    pub(crate) fn new(
        core: *mut Core,
        dir: LinphoneCallDir,
        remote: *mut Address,
        to: *mut Address,
        log: *mut CallLog,
    ) -> Self {
        let state = if dir == LinphoneCallOutgoing {
            LinphoneCallOutgoingInit
        } else {
            LinphoneCallIncomingReceived
        };

        Self {
            header: Header::new(),
            core,
            state,
            dir,
            reason: LinphoneReasonNone,
            remote,
            to,
            log,
            duration: 0,
            current_quality: -1.0,
            average_quality: -1.0,
            remote_user_agent: None,
            authentication_token: None,
            refer_to: None,
            replaced: std::ptr::null_mut(),
            transferer: std::ptr::null_mut(),
            transfer_target: std::ptr::null_mut(),
            transfer_state: LinphoneCallIdle,
            microphone_muted: false,
            speaker_gain: 1.0,
            microphone_gain: 1.0,
            camera_enabled: false,
            dtmfs_sent: String::new(),
            forced_status: None,
        }
    }

    pub(crate) fn is_pending_incoming(&self) -> bool {
        matches!(
            self.state,
            LinphoneCallIncomingReceived | LinphoneCallIncomingEarlyMedia
        )
    }

    pub(crate) fn is_pending_outgoing(&self) -> bool {
        matches!(
            self.state,
            LinphoneCallOutgoingInit
                | LinphoneCallOutgoingProgress
                | LinphoneCallOutgoingRinging
                | LinphoneCallOutgoingEarlyMedia
        )
    }

    pub(crate) fn has_ended(&self) -> bool {
        matches!(
            self.state,
            LinphoneCallEnd | LinphoneCallError | LinphoneCallReleased
        )
    }

    pub(crate) fn is_established(&self) -> bool {
        matches!(
            self.state,
            LinphoneCallStreamsRunning | LinphoneCallPaused | LinphoneCallPausedByRemote
        )
    }

    fn log(&mut self) -> Option<&mut CallLog> {
        unsafe { self.log.as_mut() }
    }

    pub(crate) fn set_log_status(&mut self, status: LinphoneCallStatus) {
        if let Some(log) = self.log() {
            log.status = status;
        }
    }

    /// Consumes a forced status, if one was queued.
    fn forced(&mut self) -> Option<LinphoneStatus> {
        self.forced_status.take()
    }

    pub(crate) fn connect(&mut self) {
        self.state = LinphoneCallConnected;
        self.set_log_status(LinphoneCallSuccess);
    }

    pub(crate) fn end(&mut self, reason: LinphoneReason) {
        self.state = LinphoneCallEnd;
        self.reason = reason;
        let duration = self.duration;
        let quality = self.average_quality;
        if let Some(log) = self.log() {
            log.duration = duration;
            log.quality = quality;
        }
    }

    pub(crate) fn accept(&mut self) -> LinphoneStatus {
        if let Some(status) = self.forced() {
            return status;
        }
        if !self.is_pending_incoming() {
            return LinphoneStatusFailure;
        }
        self.connect();
        LinphoneStatusSuccess
    }

    pub(crate) fn decline(&mut self, reason: LinphoneReason) -> LinphoneStatus {
        if let Some(status) = self.forced() {
            return status;
        }
        if !self.is_pending_incoming() {
            return LinphoneStatusFailure;
        }
        self.set_log_status(LinphoneCallDeclined);
        self.end(reason);
        LinphoneStatusSuccess
    }

    pub(crate) fn terminate(&mut self) -> LinphoneStatus {
        if let Some(status) = self.forced() {
            return status;
        }
        if self.has_ended() {
            return LinphoneStatusFailure;
        }
        if self.is_pending_incoming() {
            self.set_log_status(LinphoneCallDeclined);
            self.end(LinphoneReasonDeclined);
        } else {
            if self.is_pending_outgoing() {
                self.set_log_status(LinphoneCallAborted);
            }
            self.end(LinphoneReasonNone);
        }
        LinphoneStatusSuccess
    }

    pub(crate) fn pause(&mut self) -> LinphoneStatus {
        if let Some(status) = self.forced() {
            return status;
        }
        if self.state != LinphoneCallStreamsRunning {
            return LinphoneStatusFailure;
        }
        self.state = LinphoneCallPausing;
        LinphoneStatusSuccess
    }

    pub(crate) fn resume(&mut self) -> LinphoneStatus {
        if let Some(status) = self.forced() {
            return status;
        }
        if self.state != LinphoneCallPaused {
            return LinphoneStatusFailure;
        }
        self.state = LinphoneCallResuming;
        LinphoneStatusSuccess
    }

    pub(crate) fn redirect(&mut self, uri: &str) -> LinphoneStatus {
        if let Some(status) = self.forced() {
            return status;
        }
        if !self.is_pending_incoming() || Address::parse(uri).is_none() {
            return LinphoneStatusFailure;
        }
        self.set_log_status(LinphoneCallDeclined);
        self.end(LinphoneReasonMovedPermanently);
        LinphoneStatusSuccess
    }

    pub(crate) fn transfer(&mut self, refer_to: &str) -> LinphoneStatus {
        if let Some(status) = self.forced() {
            return status;
        }
        if !self.is_established() || Address::parse(refer_to).is_none() {
            return LinphoneStatusFailure;
        }
        self.refer_to = CString::new(refer_to).ok();
        self.transfer_state = LinphoneCallOutgoingInit;
        LinphoneStatusSuccess
    }

    /// Attended transfer: `dest` keeps a reference on success.
    pub(crate) unsafe fn transfer_to_another(&mut self, dest: *mut Call) -> LinphoneStatus {
        if let Some(status) = self.forced() {
            return status;
        }
        let Some(target) = dest.as_ref() else {
            return LinphoneStatusFailure;
        };
        if std::ptr::eq(self, target) || !self.is_established() || !target.is_established() {
            return LinphoneStatusFailure;
        }
        let refer_to = target.remote.as_ref().map(Address::uri_only);
        object::release(self.transfer_target);
        self.transfer_target = object::retain(dest);
        self.refer_to = refer_to.and_then(|uri| CString::new(uri).ok());
        self.transfer_state = LinphoneCallOutgoingInit;
        LinphoneStatusSuccess
    }

    pub(crate) fn send_dtmfs(&mut self, dtmfs: &str) -> LinphoneStatus {
        if let Some(status) = self.forced() {
            return status;
        }
        if self.state != LinphoneCallStreamsRunning
            || dtmfs.is_empty()
            || !dtmfs.chars().all(|symbol| DTMF_SYMBOLS.contains(symbol))
        {
            return LinphoneStatusFailure;
        }
        self.dtmfs_sent.push_str(dtmfs);
        LinphoneStatusSuccess
    }

    /// Advances the call by one engine step; returns `true` once the call reached `Released`.
    pub(crate) fn step(&mut self, auto_answer: bool) -> bool {
        self.step_transfer();

        match self.state {
            LinphoneCallOutgoingInit => self.state = LinphoneCallOutgoingProgress,
            LinphoneCallOutgoingProgress => self.state = LinphoneCallOutgoingRinging,
            LinphoneCallOutgoingRinging if auto_answer => self.connect(),
            LinphoneCallConnected | LinphoneCallResuming | LinphoneCallUpdating
            | LinphoneCallUpdatedByRemote => {
                self.state = LinphoneCallStreamsRunning;
                if self.current_quality < 0.0 {
                    self.current_quality = 4.5;
                    self.average_quality = 4.5;
                }
            }
            LinphoneCallPausing => self.state = LinphoneCallPaused,
            LinphoneCallEarlyUpdating => self.state = LinphoneCallOutgoingEarlyMedia,
            LinphoneCallEarlyUpdatedByRemote => self.state = LinphoneCallIncomingEarlyMedia,
            LinphoneCallEnd | LinphoneCallError => {
                self.state = LinphoneCallReleased;
                return true;
            }
            _ => {}
        }

        false
    }

    fn step_transfer(&mut self) {
        match self.transfer_state {
            LinphoneCallOutgoingInit => self.transfer_state = LinphoneCallOutgoingProgress,
            LinphoneCallOutgoingProgress => {
                self.transfer_state = LinphoneCallConnected;
                if self.is_established() {
                    self.end(LinphoneReasonNone);
                }
            }
            _ => {}
        }
    }
}

impl Drop for Call {
    fn drop(&mut self) {
        unsafe {
            object::release(self.remote);
            object::release(self.to);
            object::release(self.log);
            object::release(self.replaced);
            object::release(self.transferer);
            object::release(self.transfer_target);
        }
    }
}
