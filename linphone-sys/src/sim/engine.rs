use std::ffi::CString;
use std::os::raw::c_int;

use super::address::Address;
use super::call::Call;
use super::call_log::CallLog;
use super::object::{self, Header, Object};
use crate::types::*;

const DEFAULT_IDENTITY: &str = "sip:linphone@localhost";

#[repr(C)]
#[derive(Debug)]
pub(crate) struct Core {
    header: Header,
    pub(crate) started: bool,
    pub(crate) mic_enabled: bool,
    pub(crate) auto_answer: bool,
    pub(crate) user_agent: CString,
    pub(crate) identity: CString,
    /// Calls known to the core; the core holds one reference to each until it is released.
    pub(crate) calls: Vec<*mut Call>,
    /// Call history, most recent last; the core holds one reference to each entry.
    pub(crate) logs: Vec<*mut CallLog>,
    pub(crate) missed_calls: c_int,
    next_call_id: u64,
}

unsafe impl Object for Core {}

impl Core {
    pub(crate) fn new() -> Self {
        Self {
            header: Header::new(),
            started: false,
            mic_enabled: true,
            auto_answer: true,
            user_agent: CString::new(format!("Linphone/{}", crate::BINDINGS_VERSION))
                .unwrap_or_default(),
            identity: CString::new(DEFAULT_IDENTITY).unwrap_or_default(),
            calls: Vec::new(),
            logs: Vec::new(),
            missed_calls: 0,
            next_call_id: 1,
        }
    }

    fn local_address(&self) -> *mut Address {
        Address::parse(&self.identity.to_string_lossy())
            .map(object::allocate)
            .unwrap_or(std::ptr::null_mut())
    }

    fn next_call_id(&mut self, remote: &Address) -> CString {
        let id = self.next_call_id;
        self.next_call_id += 1;
        CString::new(format!("sim-{id}@{}", remote.domain.to_string_lossy())).unwrap_or_default()
    }

    /// Creates a call and registers it with the core. `remote` is taken over.
    pub(crate) unsafe fn create_call(&mut self, dir: LinphoneCallDir, remote: *mut Address) -> *mut Call {
        let call_id = self.next_call_id(&*remote);
        let local = self.local_address();

        let (from, to) = if dir == LinphoneCallOutgoing {
            (local, object::allocate((*remote).duplicate()))
        } else {
            (object::allocate((*remote).duplicate()), local)
        };

        let log = object::allocate(CallLog::new(dir, call_id, from, to));
        self.logs.push(object::retain(log));

        let to = object::retain((*log).to);
        let call = object::allocate(Call::new(self, dir, remote, to, log));
        self.calls.push(call);
        call
    }

    pub(crate) unsafe fn invite(&mut self, remote: Address) -> *mut Call {
        if !self.started {
            return std::ptr::null_mut();
        }
        self.create_call(LinphoneCallOutgoing, object::allocate(remote))
    }

    pub(crate) fn current_call(&self) -> *mut Call {
        self.calls
            .iter()
            .copied()
            .find(|&call| unsafe {
                matches!(
                    (*call).state,
                    LinphoneCallOutgoingInit
                        | LinphoneCallOutgoingProgress
                        | LinphoneCallOutgoingRinging
                        | LinphoneCallOutgoingEarlyMedia
                        | LinphoneCallConnected
                        | LinphoneCallStreamsRunning
                        | LinphoneCallPausing
                        | LinphoneCallResuming
                        | LinphoneCallUpdating
                        | LinphoneCallUpdatedByRemote
                        | LinphoneCallEarlyUpdating
                        | LinphoneCallEarlyUpdatedByRemote
                )
            })
            .unwrap_or(std::ptr::null_mut())
    }

    pub(crate) fn find_call(&self, uri: &str) -> *mut Call {
        let Some(wanted) = Address::parse(uri) else {
            return std::ptr::null_mut();
        };
        self.calls
            .iter()
            .copied()
            .find(|&call| unsafe {
                (*call)
                    .remote
                    .as_ref()
                    .is_some_and(|remote| remote.weak_equal(&wanted))
            })
            .unwrap_or(std::ptr::null_mut())
    }

    pub(crate) fn last_outgoing_log(&self) -> *mut CallLog {
        self.logs
            .iter()
            .rev()
            .copied()
            .find(|&log| unsafe { (*log).dir == LinphoneCallOutgoing })
            .unwrap_or(std::ptr::null_mut())
    }

    pub(crate) unsafe fn terminate_all(&mut self) -> LinphoneStatus {
        for &call in &self.calls {
            if !(*call).has_ended() {
                (*call).terminate();
            }
        }
        LinphoneStatusSuccess
    }

    pub(crate) unsafe fn iterate(&mut self) {
        let auto_answer = self.auto_answer;
        let mut released = Vec::new();

        self.calls.retain(|&call| {
            let done = (*call).step(auto_answer);
            if done {
                released.push(call);
            }
            !done
        });

        // The core's reference is dropped only after the list no longer points at the call.
        // A released call no longer knows its core, which may go away before it.
        for call in released {
            (*call).core = std::ptr::null_mut();
            object::release(call);
        }
    }
}

impl Drop for Core {
    fn drop(&mut self) {
        unsafe {
            for call in self.calls.drain(..) {
                (*call).core = std::ptr::null_mut();
                if !(*call).has_ended() {
                    (*call).end(LinphoneReasonNone);
                }
                (*call).state = LinphoneCallReleased;
                object::release(call);
            }
            for log in self.logs.drain(..) {
                object::release(log);
            }
        }
    }
}
