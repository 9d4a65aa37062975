use std::ffi::CString;
use std::os::raw::c_int;

use super::address::Address;
use super::call::Call;
use super::engine::Core;
use super::object;
use crate::types::*;

unsafe fn core<'a>(ptr: *mut LinphoneCore) -> &'a mut Core {
    &mut *(ptr as *mut Core)
}

unsafe fn call<'a>(ptr: *mut LinphoneCall) -> &'a mut Call {
    &mut *(ptr as *mut Call)
}

/// Simulates an incoming INVITE from `from`.
///
/// Returns the new call, owned by the core, or null if `from` does not parse.
///
/// # Safety
///
/// `core` must be a live core.
pub unsafe fn receive_call(core: *mut LinphoneCore, from: &str) -> *mut LinphoneCall {
    match Address::parse(from) {
        Some(remote) => {
            self::core(core)
                .create_call(LinphoneCallIncoming, object::allocate(remote))
                .cast()
        }
        None => std::ptr::null_mut(),
    }
}

/// Simulates an incoming INVITE carrying a `Replaces` header targeting `replaced`.
///
/// # Safety
///
/// `core` and `replaced` must be live objects of this engine.
pub unsafe fn receive_replacing_call(
    core: *mut LinphoneCore,
    from: &str,
    replaced: *mut LinphoneCall,
) -> *mut LinphoneCall {
    let incoming = receive_call(core, from);
    if !incoming.is_null() {
        self::call(incoming).replaced = object::retain(replaced.cast::<Call>());
    }
    incoming
}

/// Simulates a REFER received on `call`: the call moves to `Refered` and the core places a new outgoing call to `target`, whose transferer is `call`.
///
/// Returns the new call, or null if `target` does not parse or the call no longer belongs to a started core.
///
/// # Safety
///
/// `call` must be a live call.
pub unsafe fn receive_refer(call: *mut LinphoneCall, target: &str) -> *mut LinphoneCall {
    let transferer = self::call(call);
    let Some(core) = transferer.core.as_mut() else {
        return std::ptr::null_mut();
    };
    let Some(remote) = Address::parse(target) else {
        return std::ptr::null_mut();
    };

    let new_call = core.invite(remote);
    if new_call.is_null() {
        return new_call.cast();
    }

    transferer.state = LinphoneCallRefered;
    transferer.refer_to = CString::new(target).ok();
    (*new_call).transferer = object::retain(call.cast::<Call>());
    new_call.cast()
}

/// Simulates the remote party hanging up. A call that was never answered is recorded as missed.
///
/// # Safety
///
/// `call` must be a live call.
pub unsafe fn remote_hangup(call: *mut LinphoneCall) {
    let call = self::call(call);
    if call.has_ended() {
        return;
    }
    if call.is_pending_incoming() {
        call.set_log_status(LinphoneCallMissed);
        if let Some(core) = call.core.as_mut() {
            core.missed_calls += 1;
        }
    }
    call.end(LinphoneReasonNone);
}

/// Simulates the remote party putting the call on hold.
///
/// # Safety
///
/// `call` must be a live call.
pub unsafe fn remote_pause(call: *mut LinphoneCall) {
    let call = self::call(call);
    if call.state == LinphoneCallStreamsRunning {
        call.state = LinphoneCallPausedByRemote;
    }
}

/// Overwrites the raw state code, bypassing the state machine. Any integer is accepted.
///
/// # Safety
///
/// `call` must be a live call.
pub unsafe fn set_call_state(call: *mut LinphoneCall, state: LinphoneCallState) {
    self::call(call).state = state;
}

/// Overwrites the raw direction code. Any integer is accepted.
///
/// # Safety
///
/// `call` must be a live call.
pub unsafe fn set_call_dir(call: *mut LinphoneCall, dir: LinphoneCallDir) {
    self::call(call).dir = dir;
}

/// Overwrites the raw reason code. Any integer is accepted.
///
/// # Safety
///
/// `call` must be a live call.
pub unsafe fn set_call_reason(call: *mut LinphoneCall, reason: LinphoneReason) {
    self::call(call).reason = reason;
}

/// Overwrites the raw transport code of an address. Any integer is accepted.
///
/// # Safety
///
/// `address` must be a live address.
pub unsafe fn set_address_transport(address: *mut LinphoneAddress, transport: LinphoneTransportType) {
    (*address.cast::<Address>()).transport = transport;
}

/// Makes the next command issued on `call` return `status` without taking effect.
///
/// # Safety
///
/// `call` must be a live call.
pub unsafe fn fail_next_command(call: *mut LinphoneCall, status: LinphoneStatus) {
    self::call(call).forced_status = Some(status);
}

/// # Safety
///
/// `call` must be a live call.
pub unsafe fn set_remote_user_agent(call: *mut LinphoneCall, user_agent: &str) {
    self::call(call).remote_user_agent = CString::new(user_agent).ok();
}

/// # Safety
///
/// `call` must be a live call.
pub unsafe fn set_authentication_token(call: *mut LinphoneCall, token: &str) {
    self::call(call).authentication_token = CString::new(token).ok();
}

/// # Safety
///
/// `call` must be a live call.
pub unsafe fn advance_duration(call: *mut LinphoneCall, seconds: c_int) {
    self::call(call).duration += seconds;
}

/// # Safety
///
/// `call` must be a live call.
pub unsafe fn set_quality(call: *mut LinphoneCall, current: f32, average: f32) {
    let call = self::call(call);
    call.current_quality = current;
    call.average_quality = average;
}

/// DTMF symbols successfully sent on `call`, in order.
///
/// # Safety
///
/// `call` must be a live call.
pub unsafe fn sent_dtmfs(call: *mut LinphoneCall) -> String {
    self::call(call).dtmfs_sent.clone()
}

/// Whether remote parties answer outgoing calls once they ring. Enabled by default.
///
/// # Safety
///
/// `core` must be a live core.
pub unsafe fn set_auto_answer(core: *mut LinphoneCore, auto_answer: bool) {
    self::core(core).auto_answer = auto_answer;
}
