//! The engine's C ABI, implemented in-process.

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int, c_void};

use super::address::{transport_name, Address};
use super::call::Call;
use super::call_log::CallLog;
use super::engine::Core;
use super::object::{self, header_mut};
use crate::types::*;

static VERSION: &str = concat!(env!("LINPHONE_BINDINGS_VERSION"), "\0");

/// The factory is a process-wide singleton without state of its own.
static FACTORY: u8 = 0;

unsafe fn core<'a>(ptr: *const LinphoneCore) -> &'a mut Core {
    &mut *(ptr as *mut Core)
}

unsafe fn call<'a>(ptr: *const LinphoneCall) -> &'a mut Call {
    &mut *(ptr as *mut Call)
}

unsafe fn address<'a>(ptr: *const LinphoneAddress) -> &'a mut Address {
    &mut *(ptr as *mut Address)
}

unsafe fn call_log<'a>(ptr: *const LinphoneCallLog) -> &'a mut CallLog {
    &mut *(ptr as *mut CallLog)
}

unsafe fn str_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        None
    } else {
        CStr::from_ptr(ptr).to_str().ok()
    }
}

fn borrowed(value: Option<&CString>) -> *const c_char {
    value.map_or(std::ptr::null(), |value| value.as_ptr())
}

/// Hands a string over to the caller, who frees it with [`bctbx_free`].
fn owned(value: String) -> *mut c_char {
    CString::new(value).map_or(std::ptr::null_mut(), CString::into_raw)
}

fn to_bool_t(value: bool) -> bool_t {
    if value {
        TRUE
    } else {
        FALSE
    }
}

fn status(success: bool) -> LinphoneStatus {
    if success {
        LinphoneStatusSuccess
    } else {
        LinphoneStatusFailure
    }
}

pub unsafe extern "C" fn bctbx_free(ptr: *mut c_void) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr as *mut c_char));
    }
}

pub unsafe extern "C" fn linphone_factory_get() -> *mut LinphoneFactory {
    std::ptr::addr_of!(FACTORY) as *mut LinphoneFactory
}

pub unsafe extern "C" fn linphone_factory_create_core_3(
    factory: *const LinphoneFactory,
    config_path: *const c_char,
    factory_config_path: *const c_char,
    _system_context: *mut c_void,
) -> *mut LinphoneCore {
    if factory.is_null() {
        return std::ptr::null_mut();
    }
    // Configuration files are not read; a path that is not valid UTF-8 is still rejected like the engine does.
    for path in [config_path, factory_config_path] {
        if !path.is_null() && str_arg(path).is_none() {
            return std::ptr::null_mut();
        }
    }
    object::allocate(Core::new()).cast()
}

pub unsafe extern "C" fn linphone_core_ref(core: *mut LinphoneCore) -> *mut LinphoneCore {
    object::retain(core.cast::<Core>()).cast()
}

pub unsafe extern "C" fn linphone_core_unref(core: *mut LinphoneCore) {
    object::release(core.cast::<Core>())
}

pub unsafe extern "C" fn linphone_core_get_user_data(core: *const LinphoneCore) -> *mut c_void {
    header_mut(core as *mut LinphoneCore).user_data
}

pub unsafe extern "C" fn linphone_core_set_user_data(core: *mut LinphoneCore, user_data: *mut c_void) {
    header_mut(core).user_data = user_data;
}

pub unsafe extern "C" fn linphone_core_start(core: *mut LinphoneCore) -> LinphoneStatus {
    let core = self::core(core);
    if core.started {
        return LinphoneStatusFailure;
    }
    core.started = true;
    LinphoneStatusSuccess
}

pub unsafe extern "C" fn linphone_core_stop(core: *mut LinphoneCore) {
    let core = self::core(core);
    core.terminate_all();
    core.started = false;
}

pub unsafe extern "C" fn linphone_core_iterate(core: *mut LinphoneCore) {
    self::core(core).iterate()
}

pub unsafe extern "C" fn linphone_core_get_version() -> *const c_char {
    VERSION.as_ptr().cast()
}

pub unsafe extern "C" fn linphone_core_invite(core: *mut LinphoneCore, url: *const c_char) -> *mut LinphoneCall {
    match str_arg(url).and_then(Address::parse) {
        Some(remote) => self::core(core).invite(remote).cast(),
        None => std::ptr::null_mut(),
    }
}

pub unsafe extern "C" fn linphone_core_invite_address(
    core: *mut LinphoneCore,
    addr: *const LinphoneAddress,
) -> *mut LinphoneCall {
    if addr.is_null() {
        return std::ptr::null_mut();
    }
    self::core(core).invite(address(addr).duplicate()).cast()
}

pub unsafe extern "C" fn linphone_core_create_address(
    _core: *mut LinphoneCore,
    address: *const c_char,
) -> *mut LinphoneAddress {
    match str_arg(address).and_then(Address::parse) {
        Some(address) => object::allocate(address).cast(),
        None => std::ptr::null_mut(),
    }
}

pub unsafe extern "C" fn linphone_core_get_current_call(core: *const LinphoneCore) -> *mut LinphoneCall {
    self::core(core).current_call().cast()
}

pub unsafe extern "C" fn linphone_core_get_calls_nb(core: *const LinphoneCore) -> c_int {
    self::core(core).calls.len() as c_int
}

pub unsafe extern "C" fn linphone_core_find_call_from_uri(
    core: *const LinphoneCore,
    uri: *const c_char,
) -> *mut LinphoneCall {
    match str_arg(uri) {
        Some(uri) => self::core(core).find_call(uri).cast(),
        None => std::ptr::null_mut(),
    }
}

pub unsafe extern "C" fn linphone_core_terminate_all_calls(core: *mut LinphoneCore) -> LinphoneStatus {
    self::core(core).terminate_all()
}

pub unsafe extern "C" fn linphone_core_mic_enabled(core: *const LinphoneCore) -> bool_t {
    to_bool_t(self::core(core).mic_enabled)
}

pub unsafe extern "C" fn linphone_core_enable_mic(core: *mut LinphoneCore, enable: bool_t) {
    self::core(core).mic_enabled = enable != FALSE;
}

pub unsafe extern "C" fn linphone_core_get_user_agent(core: *const LinphoneCore) -> *const c_char {
    self::core(core).user_agent.as_ptr()
}

pub unsafe extern "C" fn linphone_core_set_user_agent(
    core: *mut LinphoneCore,
    ua_name: *const c_char,
    version: *const c_char,
) {
    let name = str_arg(ua_name).unwrap_or("Linphone");
    let user_agent = match str_arg(version) {
        Some(version) => format!("{name}/{version}"),
        None => name.to_string(),
    };
    if let Ok(user_agent) = CString::new(user_agent) {
        self::core(core).user_agent = user_agent;
    }
}

pub unsafe extern "C" fn linphone_core_get_identity(core: *const LinphoneCore) -> *const c_char {
    self::core(core).identity.as_ptr()
}

pub unsafe extern "C" fn linphone_core_set_primary_contact(
    core: *mut LinphoneCore,
    contact: *const c_char,
) -> LinphoneStatus {
    let Some(contact) = str_arg(contact).and_then(Address::parse) else {
        return LinphoneStatusFailure;
    };
    match CString::new(contact.render()) {
        Ok(identity) => {
            self::core(core).identity = identity;
            LinphoneStatusSuccess
        }
        Err(_) => LinphoneStatusFailure,
    }
}

pub unsafe extern "C" fn linphone_core_get_last_outgoing_call_log(
    core: *mut LinphoneCore,
) -> *mut LinphoneCallLog {
    self::core(core).last_outgoing_log().cast()
}

pub unsafe extern "C" fn linphone_core_get_missed_calls_count(core: *const LinphoneCore) -> c_int {
    self::core(core).missed_calls
}

pub unsafe extern "C" fn linphone_core_reset_missed_calls_count(core: *mut LinphoneCore) {
    self::core(core).missed_calls = 0;
}

pub unsafe extern "C" fn linphone_call_ref(call: *mut LinphoneCall) -> *mut LinphoneCall {
    object::retain(call.cast::<Call>()).cast()
}

pub unsafe extern "C" fn linphone_call_unref(call: *mut LinphoneCall) {
    object::release(call.cast::<Call>())
}

pub unsafe extern "C" fn linphone_call_get_user_data(call: *const LinphoneCall) -> *mut c_void {
    header_mut(call as *mut LinphoneCall).user_data
}

pub unsafe extern "C" fn linphone_call_set_user_data(call: *mut LinphoneCall, user_data: *mut c_void) {
    header_mut(call).user_data = user_data;
}

pub unsafe extern "C" fn linphone_call_get_core(call: *const LinphoneCall) -> *mut LinphoneCore {
    self::call(call).core.cast()
}

pub unsafe extern "C" fn linphone_call_get_remote_address(call: *const LinphoneCall) -> *const LinphoneAddress {
    self::call(call).remote.cast()
}

pub unsafe extern "C" fn linphone_call_get_to_address(call: *const LinphoneCall) -> *const LinphoneAddress {
    self::call(call).to.cast()
}

pub unsafe extern "C" fn linphone_call_get_call_log(call: *const LinphoneCall) -> *mut LinphoneCallLog {
    self::call(call).log.cast()
}

pub unsafe extern "C" fn linphone_call_get_state(call: *const LinphoneCall) -> LinphoneCallState {
    self::call(call).state
}

pub unsafe extern "C" fn linphone_call_get_dir(call: *const LinphoneCall) -> LinphoneCallDir {
    self::call(call).dir
}

pub unsafe extern "C" fn linphone_call_get_reason(call: *const LinphoneCall) -> LinphoneReason {
    self::call(call).reason
}

pub unsafe extern "C" fn linphone_call_get_duration(call: *const LinphoneCall) -> c_int {
    self::call(call).duration
}

pub unsafe extern "C" fn linphone_call_get_remote_address_as_string(call: *const LinphoneCall) -> *mut c_char {
    match self::call(call).remote.as_ref() {
        Some(remote) => owned(remote.render()),
        None => std::ptr::null_mut(),
    }
}

pub unsafe extern "C" fn linphone_call_get_remote_user_agent(call: *mut LinphoneCall) -> *const c_char {
    borrowed(self::call(call).remote_user_agent.as_ref())
}

pub unsafe extern "C" fn linphone_call_get_refer_to(call: *const LinphoneCall) -> *const c_char {
    borrowed(self::call(call).refer_to.as_ref())
}

pub unsafe extern "C" fn linphone_call_get_current_quality(call: *const LinphoneCall) -> f32 {
    self::call(call).current_quality
}

pub unsafe extern "C" fn linphone_call_get_average_quality(call: *const LinphoneCall) -> f32 {
    self::call(call).average_quality
}

pub unsafe extern "C" fn linphone_call_get_replaced_call(call: *mut LinphoneCall) -> *mut LinphoneCall {
    self::call(call).replaced.cast()
}

pub unsafe extern "C" fn linphone_call_get_transferer_call(call: *const LinphoneCall) -> *mut LinphoneCall {
    self::call(call).transferer.cast()
}

pub unsafe extern "C" fn linphone_call_get_transfer_target_call(call: *const LinphoneCall) -> *mut LinphoneCall {
    self::call(call).transfer_target.cast()
}

pub unsafe extern "C" fn linphone_call_get_transfer_state(call: *mut LinphoneCall) -> LinphoneCallState {
    self::call(call).transfer_state
}

pub unsafe extern "C" fn linphone_call_get_authentication_token(call: *mut LinphoneCall) -> *const c_char {
    borrowed(self::call(call).authentication_token.as_ref())
}

pub unsafe extern "C" fn linphone_call_get_microphone_muted(call: *const LinphoneCall) -> bool_t {
    to_bool_t(self::call(call).microphone_muted)
}

pub unsafe extern "C" fn linphone_call_set_microphone_muted(call: *mut LinphoneCall, muted: bool_t) {
    self::call(call).microphone_muted = muted != FALSE;
}

pub unsafe extern "C" fn linphone_call_get_speaker_volume_gain(call: *const LinphoneCall) -> f32 {
    self::call(call).speaker_gain
}

pub unsafe extern "C" fn linphone_call_set_speaker_volume_gain(call: *mut LinphoneCall, volume: f32) {
    // The engine clamps gains to [0, 1].
    self::call(call).speaker_gain = volume.clamp(0.0, 1.0);
}

pub unsafe extern "C" fn linphone_call_get_microphone_volume_gain(call: *const LinphoneCall) -> f32 {
    self::call(call).microphone_gain
}

pub unsafe extern "C" fn linphone_call_set_microphone_volume_gain(call: *mut LinphoneCall, volume: f32) {
    self::call(call).microphone_gain = volume.clamp(0.0, 1.0);
}

pub unsafe extern "C" fn linphone_call_camera_enabled(call: *const LinphoneCall) -> bool_t {
    to_bool_t(self::call(call).camera_enabled)
}

pub unsafe extern "C" fn linphone_call_enable_camera(call: *mut LinphoneCall, enabled: bool_t) {
    self::call(call).camera_enabled = enabled != FALSE;
}

pub unsafe extern "C" fn linphone_call_accept(call: *mut LinphoneCall) -> LinphoneStatus {
    self::call(call).accept()
}

pub unsafe extern "C" fn linphone_call_decline(call: *mut LinphoneCall, reason: LinphoneReason) -> LinphoneStatus {
    self::call(call).decline(reason)
}

pub unsafe extern "C" fn linphone_call_terminate(call: *mut LinphoneCall) -> LinphoneStatus {
    self::call(call).terminate()
}

pub unsafe extern "C" fn linphone_call_pause(call: *mut LinphoneCall) -> LinphoneStatus {
    self::call(call).pause()
}

pub unsafe extern "C" fn linphone_call_resume(call: *mut LinphoneCall) -> LinphoneStatus {
    self::call(call).resume()
}

pub unsafe extern "C" fn linphone_call_redirect(
    call: *mut LinphoneCall,
    redirect_uri: *const c_char,
) -> LinphoneStatus {
    match str_arg(redirect_uri) {
        Some(uri) => self::call(call).redirect(uri),
        None => LinphoneStatusFailure,
    }
}

pub unsafe extern "C" fn linphone_call_transfer(call: *mut LinphoneCall, refer_to: *const c_char) -> LinphoneStatus {
    match str_arg(refer_to) {
        Some(uri) => self::call(call).transfer(uri),
        None => LinphoneStatusFailure,
    }
}

pub unsafe extern "C" fn linphone_call_transfer_to_another(
    call: *mut LinphoneCall,
    dest: *mut LinphoneCall,
) -> LinphoneStatus {
    self::call(call).transfer_to_another(dest.cast())
}

pub unsafe extern "C" fn linphone_call_send_dtmf(call: *mut LinphoneCall, dtmf: c_char) -> LinphoneStatus {
    let symbol = char::from(dtmf as u8);
    self::call(call).send_dtmfs(symbol.encode_utf8(&mut [0; 4]))
}

pub unsafe extern "C" fn linphone_call_send_dtmfs(call: *mut LinphoneCall, dtmfs: *const c_char) -> LinphoneStatus {
    match str_arg(dtmfs) {
        Some(dtmfs) => self::call(call).send_dtmfs(dtmfs),
        None => LinphoneStatusFailure,
    }
}

pub unsafe extern "C" fn linphone_call_state_to_string(state: LinphoneCallState) -> *const c_char {
    let name: &CStr = match state {
        LinphoneCallIdle => c"LinphoneCallIdle",
        LinphoneCallIncomingReceived => c"LinphoneCallIncomingReceived",
        LinphoneCallOutgoingInit => c"LinphoneCallOutgoingInit",
        LinphoneCallOutgoingProgress => c"LinphoneCallOutgoingProgress",
        LinphoneCallOutgoingRinging => c"LinphoneCallOutgoingRinging",
        LinphoneCallOutgoingEarlyMedia => c"LinphoneCallOutgoingEarlyMedia",
        LinphoneCallConnected => c"LinphoneCallConnected",
        LinphoneCallStreamsRunning => c"LinphoneCallStreamsRunning",
        LinphoneCallPausing => c"LinphoneCallPausing",
        LinphoneCallPaused => c"LinphoneCallPaused",
        LinphoneCallResuming => c"LinphoneCallResuming",
        LinphoneCallRefered => c"LinphoneCallRefered",
        LinphoneCallError => c"LinphoneCallError",
        LinphoneCallEnd => c"LinphoneCallEnd",
        LinphoneCallPausedByRemote => c"LinphoneCallPausedByRemote",
        LinphoneCallUpdatedByRemote => c"LinphoneCallUpdatedByRemote",
        LinphoneCallIncomingEarlyMedia => c"LinphoneCallIncomingEarlyMedia",
        LinphoneCallUpdating => c"LinphoneCallUpdating",
        LinphoneCallReleased => c"LinphoneCallReleased",
        LinphoneCallEarlyUpdatedByRemote => c"LinphoneCallEarlyUpdatedByRemote",
        LinphoneCallEarlyUpdating => c"LinphoneCallEarlyUpdating",
        _ => c"undefined state",
    };
    name.as_ptr()
}

pub unsafe extern "C" fn linphone_address_ref(addr: *mut LinphoneAddress) -> *mut LinphoneAddress {
    object::retain(addr.cast::<Address>()).cast()
}

pub unsafe extern "C" fn linphone_address_unref(addr: *mut LinphoneAddress) {
    object::release(addr.cast::<Address>())
}

pub unsafe extern "C" fn linphone_address_get_user_data(addr: *const LinphoneAddress) -> *mut c_void {
    header_mut(addr as *mut LinphoneAddress).user_data
}

pub unsafe extern "C" fn linphone_address_set_user_data(addr: *mut LinphoneAddress, user_data: *mut c_void) {
    header_mut(addr).user_data = user_data;
}

pub unsafe extern "C" fn linphone_address_get_display_name(addr: *const LinphoneAddress) -> *const c_char {
    borrowed(address(addr).display_name.as_ref())
}

pub unsafe extern "C" fn linphone_address_get_username(addr: *const LinphoneAddress) -> *const c_char {
    borrowed(address(addr).username.as_ref())
}

pub unsafe extern "C" fn linphone_address_get_domain(addr: *const LinphoneAddress) -> *const c_char {
    address(addr).domain.as_ptr()
}

pub unsafe extern "C" fn linphone_address_get_scheme(addr: *const LinphoneAddress) -> *const c_char {
    address(addr).scheme.as_ptr()
}

pub unsafe extern "C" fn linphone_address_get_port(addr: *const LinphoneAddress) -> c_int {
    address(addr).port
}

pub unsafe extern "C" fn linphone_address_get_transport(addr: *const LinphoneAddress) -> LinphoneTransportType {
    address(addr).transport
}

pub unsafe extern "C" fn linphone_address_is_sip(addr: *const LinphoneAddress) -> bool_t {
    let scheme = address(addr).scheme.as_bytes();
    to_bool_t(scheme == b"sip" || scheme == b"sips")
}

pub unsafe extern "C" fn linphone_address_as_string(addr: *const LinphoneAddress) -> *mut c_char {
    owned(address(addr).render())
}

pub unsafe extern "C" fn linphone_address_as_string_uri_only(addr: *const LinphoneAddress) -> *mut c_char {
    owned(address(addr).uri_only())
}

pub unsafe extern "C" fn linphone_address_set_display_name(
    addr: *mut LinphoneAddress,
    display_name: *const c_char,
) -> LinphoneStatus {
    let address = address(addr);
    if display_name.is_null() {
        address.display_name = None;
        return LinphoneStatusSuccess;
    }
    address.display_name = Some(CStr::from_ptr(display_name).to_owned());
    LinphoneStatusSuccess
}

pub unsafe extern "C" fn linphone_address_set_username(
    addr: *mut LinphoneAddress,
    username: *const c_char,
) -> LinphoneStatus {
    let address = address(addr);
    match str_arg(username) {
        None => address.username = None,
        Some(username) if username.contains(['@', ':', ';', ' ']) => return LinphoneStatusFailure,
        Some(username) => address.username = CString::new(username).ok(),
    }
    LinphoneStatusSuccess
}

pub unsafe extern "C" fn linphone_address_set_domain(
    addr: *mut LinphoneAddress,
    domain: *const c_char,
) -> LinphoneStatus {
    match str_arg(domain) {
        Some(domain) if !domain.is_empty() && !domain.contains(['@', ';', ' ']) => {
            match CString::new(domain) {
                Ok(domain) => {
                    address(addr).domain = domain;
                    LinphoneStatusSuccess
                }
                Err(_) => LinphoneStatusFailure,
            }
        }
        _ => LinphoneStatusFailure,
    }
}

pub unsafe extern "C" fn linphone_address_set_port(addr: *mut LinphoneAddress, port: c_int) -> LinphoneStatus {
    let valid = (0..=c_int::from(u16::MAX)).contains(&port);
    if valid {
        address(addr).port = port;
    }
    status(valid)
}

pub unsafe extern "C" fn linphone_address_set_transport(
    addr: *mut LinphoneAddress,
    transport: LinphoneTransportType,
) -> LinphoneStatus {
    let valid = (LinphoneTransportUdp..=LinphoneTransportDtls).contains(&transport);
    if valid {
        address(addr).transport = transport;
    }
    status(valid)
}

pub unsafe extern "C" fn linphone_address_clone(addr: *const LinphoneAddress) -> *mut LinphoneAddress {
    object::allocate(address(addr).duplicate()).cast()
}

pub unsafe extern "C" fn linphone_address_equal(a1: *const LinphoneAddress, a2: *const LinphoneAddress) -> bool_t {
    to_bool_t(address(a1).equal(address(a2)))
}

pub unsafe extern "C" fn linphone_address_weak_equal(
    a1: *const LinphoneAddress,
    a2: *const LinphoneAddress,
) -> bool_t {
    to_bool_t(address(a1).weak_equal(address(a2)))
}

pub unsafe extern "C" fn linphone_transport_to_string(transport: LinphoneTransportType) -> *const c_char {
    let name: &CStr = match transport_name(transport) {
        "udp" => c"udp",
        "tcp" => c"tcp",
        "tls" => c"tls",
        "dtls" => c"dtls",
        _ => return std::ptr::null(),
    };
    name.as_ptr()
}

pub unsafe extern "C" fn linphone_call_log_ref(call_log: *mut LinphoneCallLog) -> *mut LinphoneCallLog {
    object::retain(call_log.cast::<CallLog>()).cast()
}

pub unsafe extern "C" fn linphone_call_log_unref(call_log: *mut LinphoneCallLog) {
    object::release(call_log.cast::<CallLog>())
}

pub unsafe extern "C" fn linphone_call_log_get_user_data(call_log: *const LinphoneCallLog) -> *mut c_void {
    header_mut(call_log as *mut LinphoneCallLog).user_data
}

pub unsafe extern "C" fn linphone_call_log_set_user_data(call_log: *mut LinphoneCallLog, user_data: *mut c_void) {
    header_mut(call_log).user_data = user_data;
}

pub unsafe extern "C" fn linphone_call_log_get_dir(call_log: *const LinphoneCallLog) -> LinphoneCallDir {
    self::call_log(call_log).dir
}

pub unsafe extern "C" fn linphone_call_log_get_status(call_log: *const LinphoneCallLog) -> LinphoneCallStatus {
    self::call_log(call_log).status
}

pub unsafe extern "C" fn linphone_call_log_get_duration(call_log: *const LinphoneCallLog) -> c_int {
    self::call_log(call_log).duration
}

pub unsafe extern "C" fn linphone_call_log_get_quality(call_log: *const LinphoneCallLog) -> f32 {
    self::call_log(call_log).quality
}

pub unsafe extern "C" fn linphone_call_log_get_call_id(call_log: *const LinphoneCallLog) -> *const c_char {
    self::call_log(call_log).call_id.as_ptr()
}

pub unsafe extern "C" fn linphone_call_log_get_from_address(call_log: *const LinphoneCallLog) -> *mut LinphoneAddress {
    self::call_log(call_log).from.cast()
}

pub unsafe extern "C" fn linphone_call_log_get_to_address(call_log: *const LinphoneCallLog) -> *mut LinphoneAddress {
    self::call_log(call_log).to.cast()
}

pub unsafe extern "C" fn linphone_call_log_get_remote_address(
    call_log: *const LinphoneCallLog,
) -> *mut LinphoneAddress {
    self::call_log(call_log).remote().cast()
}

pub unsafe extern "C" fn linphone_call_log_get_start_date(call_log: *const LinphoneCallLog) -> time_t {
    self::call_log(call_log).start_date
}

pub unsafe extern "C" fn linphone_reason_to_string(reason: LinphoneReason) -> *const c_char {
    let name: &CStr = match reason {
        LinphoneReasonNone => c"None",
        LinphoneReasonNoResponse => c"No response",
        LinphoneReasonForbidden => c"Forbidden",
        LinphoneReasonDeclined => c"Call declined",
        LinphoneReasonNotFound => c"User not found",
        LinphoneReasonNotAnswered => c"Not answered",
        LinphoneReasonBusy => c"Busy",
        LinphoneReasonUnsupportedContent => c"Unsupported content",
        LinphoneReasonIOError => c"IO error",
        LinphoneReasonDoNotDisturb => c"Do not disturb",
        LinphoneReasonUnauthorized => c"Unauthorized",
        LinphoneReasonNotAcceptable => c"Not acceptable here",
        LinphoneReasonNoMatch => c"No match",
        LinphoneReasonMovedPermanently => c"Moved permanently",
        LinphoneReasonGone => c"Gone",
        LinphoneReasonTemporarilyUnavailable => c"Temporarily unavailable",
        LinphoneReasonAddressIncomplete => c"Address incomplete",
        LinphoneReasonNotImplemented => c"Not implemented",
        LinphoneReasonBadGateway => c"Bad gateway",
        LinphoneReasonServerTimeout => c"Server timeout",
        LinphoneReasonUnknown => c"Unknown error",
        _ => return std::ptr::null(),
    };
    name.as_ptr()
}
