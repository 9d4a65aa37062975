use std::os::raw::{c_char, c_int, c_void};

use crate::types::*;

extern "C" {
    pub fn bctbx_free(ptr: *mut c_void);

    pub fn linphone_factory_get() -> *mut LinphoneFactory;
    pub fn linphone_factory_create_core_3(
        factory: *const LinphoneFactory,
        config_path: *const c_char,
        factory_config_path: *const c_char,
        system_context: *mut c_void,
    ) -> *mut LinphoneCore;

    pub fn linphone_core_ref(core: *mut LinphoneCore) -> *mut LinphoneCore;
    pub fn linphone_core_unref(core: *mut LinphoneCore);
    pub fn linphone_core_get_user_data(core: *const LinphoneCore) -> *mut c_void;
    pub fn linphone_core_set_user_data(core: *mut LinphoneCore, user_data: *mut c_void);
    pub fn linphone_core_start(core: *mut LinphoneCore) -> LinphoneStatus;
    pub fn linphone_core_stop(core: *mut LinphoneCore);
    pub fn linphone_core_iterate(core: *mut LinphoneCore);
    pub fn linphone_core_get_version() -> *const c_char;
    pub fn linphone_core_invite(core: *mut LinphoneCore, url: *const c_char) -> *mut LinphoneCall;
    pub fn linphone_core_invite_address(
        core: *mut LinphoneCore,
        addr: *const LinphoneAddress,
    ) -> *mut LinphoneCall;
    pub fn linphone_core_create_address(
        core: *mut LinphoneCore,
        address: *const c_char,
    ) -> *mut LinphoneAddress;
    pub fn linphone_core_get_current_call(core: *const LinphoneCore) -> *mut LinphoneCall;
    pub fn linphone_core_get_calls_nb(core: *const LinphoneCore) -> c_int;
    pub fn linphone_core_find_call_from_uri(
        core: *const LinphoneCore,
        uri: *const c_char,
    ) -> *mut LinphoneCall;
    pub fn linphone_core_terminate_all_calls(core: *mut LinphoneCore) -> LinphoneStatus;
    pub fn linphone_core_mic_enabled(core: *const LinphoneCore) -> bool_t;
    pub fn linphone_core_enable_mic(core: *mut LinphoneCore, enable: bool_t);
    pub fn linphone_core_get_user_agent(core: *const LinphoneCore) -> *const c_char;
    pub fn linphone_core_set_user_agent(
        core: *mut LinphoneCore,
        ua_name: *const c_char,
        version: *const c_char,
    );
    pub fn linphone_core_get_identity(core: *const LinphoneCore) -> *const c_char;
    pub fn linphone_core_set_primary_contact(
        core: *mut LinphoneCore,
        contact: *const c_char,
    ) -> LinphoneStatus;
    pub fn linphone_core_get_last_outgoing_call_log(core: *mut LinphoneCore) -> *mut LinphoneCallLog;
    pub fn linphone_core_get_missed_calls_count(core: *const LinphoneCore) -> c_int;
    pub fn linphone_core_reset_missed_calls_count(core: *mut LinphoneCore);

    pub fn linphone_call_ref(call: *mut LinphoneCall) -> *mut LinphoneCall;
    pub fn linphone_call_unref(call: *mut LinphoneCall);
    pub fn linphone_call_get_user_data(call: *const LinphoneCall) -> *mut c_void;
    pub fn linphone_call_set_user_data(call: *mut LinphoneCall, user_data: *mut c_void);
    pub fn linphone_call_get_core(call: *const LinphoneCall) -> *mut LinphoneCore;
    pub fn linphone_call_get_remote_address(call: *const LinphoneCall) -> *const LinphoneAddress;
    pub fn linphone_call_get_to_address(call: *const LinphoneCall) -> *const LinphoneAddress;
    pub fn linphone_call_get_call_log(call: *const LinphoneCall) -> *mut LinphoneCallLog;
    pub fn linphone_call_get_state(call: *const LinphoneCall) -> LinphoneCallState;
    pub fn linphone_call_get_dir(call: *const LinphoneCall) -> LinphoneCallDir;
    pub fn linphone_call_get_reason(call: *const LinphoneCall) -> LinphoneReason;
    pub fn linphone_call_get_duration(call: *const LinphoneCall) -> c_int;
    pub fn linphone_call_get_remote_address_as_string(call: *const LinphoneCall) -> *mut c_char;
    pub fn linphone_call_get_remote_user_agent(call: *mut LinphoneCall) -> *const c_char;
    pub fn linphone_call_get_refer_to(call: *const LinphoneCall) -> *const c_char;
    pub fn linphone_call_get_current_quality(call: *const LinphoneCall) -> f32;
    pub fn linphone_call_get_average_quality(call: *const LinphoneCall) -> f32;
    pub fn linphone_call_get_replaced_call(call: *mut LinphoneCall) -> *mut LinphoneCall;
    pub fn linphone_call_get_transferer_call(call: *const LinphoneCall) -> *mut LinphoneCall;
    pub fn linphone_call_get_transfer_target_call(call: *const LinphoneCall) -> *mut LinphoneCall;
    pub fn linphone_call_get_transfer_state(call: *mut LinphoneCall) -> LinphoneCallState;
    pub fn linphone_call_get_authentication_token(call: *mut LinphoneCall) -> *const c_char;
    pub fn linphone_call_get_microphone_muted(call: *const LinphoneCall) -> bool_t;
    pub fn linphone_call_set_microphone_muted(call: *mut LinphoneCall, muted: bool_t);
    pub fn linphone_call_get_speaker_volume_gain(call: *const LinphoneCall) -> f32;
    pub fn linphone_call_set_speaker_volume_gain(call: *mut LinphoneCall, volume: f32);
    pub fn linphone_call_get_microphone_volume_gain(call: *const LinphoneCall) -> f32;
    pub fn linphone_call_set_microphone_volume_gain(call: *mut LinphoneCall, volume: f32);
    pub fn linphone_call_camera_enabled(call: *const LinphoneCall) -> bool_t;
    pub fn linphone_call_enable_camera(call: *mut LinphoneCall, enabled: bool_t);
    pub fn linphone_call_accept(call: *mut LinphoneCall) -> LinphoneStatus;
    pub fn linphone_call_decline(call: *mut LinphoneCall, reason: LinphoneReason) -> LinphoneStatus;
    pub fn linphone_call_terminate(call: *mut LinphoneCall) -> LinphoneStatus;
    pub fn linphone_call_pause(call: *mut LinphoneCall) -> LinphoneStatus;
    pub fn linphone_call_resume(call: *mut LinphoneCall) -> LinphoneStatus;
    pub fn linphone_call_redirect(
        call: *mut LinphoneCall,
        redirect_uri: *const c_char,
    ) -> LinphoneStatus;
    pub fn linphone_call_transfer(call: *mut LinphoneCall, refer_to: *const c_char) -> LinphoneStatus;
    pub fn linphone_call_transfer_to_another(
        call: *mut LinphoneCall,
        dest: *mut LinphoneCall,
    ) -> LinphoneStatus;
    pub fn linphone_call_send_dtmf(call: *mut LinphoneCall, dtmf: c_char) -> LinphoneStatus;
    pub fn linphone_call_send_dtmfs(call: *mut LinphoneCall, dtmfs: *const c_char) -> LinphoneStatus;
    pub fn linphone_call_state_to_string(state: LinphoneCallState) -> *const c_char;

    pub fn linphone_address_ref(addr: *mut LinphoneAddress) -> *mut LinphoneAddress;
    pub fn linphone_address_unref(addr: *mut LinphoneAddress);
    pub fn linphone_address_get_user_data(addr: *const LinphoneAddress) -> *mut c_void;
    pub fn linphone_address_set_user_data(addr: *mut LinphoneAddress, user_data: *mut c_void);
    pub fn linphone_address_get_display_name(addr: *const LinphoneAddress) -> *const c_char;
    pub fn linphone_address_get_username(addr: *const LinphoneAddress) -> *const c_char;
    pub fn linphone_address_get_domain(addr: *const LinphoneAddress) -> *const c_char;
    pub fn linphone_address_get_scheme(addr: *const LinphoneAddress) -> *const c_char;
    pub fn linphone_address_get_port(addr: *const LinphoneAddress) -> c_int;
    pub fn linphone_address_get_transport(addr: *const LinphoneAddress) -> LinphoneTransportType;
    pub fn linphone_address_is_sip(addr: *const LinphoneAddress) -> bool_t;
    pub fn linphone_address_as_string(addr: *const LinphoneAddress) -> *mut c_char;
    pub fn linphone_address_as_string_uri_only(addr: *const LinphoneAddress) -> *mut c_char;
    pub fn linphone_address_set_display_name(
        addr: *mut LinphoneAddress,
        display_name: *const c_char,
    ) -> LinphoneStatus;
    pub fn linphone_address_set_username(
        addr: *mut LinphoneAddress,
        username: *const c_char,
    ) -> LinphoneStatus;
    pub fn linphone_address_set_domain(
        addr: *mut LinphoneAddress,
        domain: *const c_char,
    ) -> LinphoneStatus;
    pub fn linphone_address_set_port(addr: *mut LinphoneAddress, port: c_int) -> LinphoneStatus;
    pub fn linphone_address_set_transport(
        addr: *mut LinphoneAddress,
        transport: LinphoneTransportType,
    ) -> LinphoneStatus;
    pub fn linphone_address_clone(addr: *const LinphoneAddress) -> *mut LinphoneAddress;
    pub fn linphone_address_equal(a1: *const LinphoneAddress, a2: *const LinphoneAddress) -> bool_t;
    pub fn linphone_address_weak_equal(
        a1: *const LinphoneAddress,
        a2: *const LinphoneAddress,
    ) -> bool_t;
    pub fn linphone_transport_to_string(transport: LinphoneTransportType) -> *const c_char;

    pub fn linphone_call_log_ref(call_log: *mut LinphoneCallLog) -> *mut LinphoneCallLog;
    pub fn linphone_call_log_unref(call_log: *mut LinphoneCallLog);
    pub fn linphone_call_log_get_user_data(call_log: *const LinphoneCallLog) -> *mut c_void;
    pub fn linphone_call_log_set_user_data(call_log: *mut LinphoneCallLog, user_data: *mut c_void);
    pub fn linphone_call_log_get_dir(call_log: *const LinphoneCallLog) -> LinphoneCallDir;
    pub fn linphone_call_log_get_status(call_log: *const LinphoneCallLog) -> LinphoneCallStatus;
    pub fn linphone_call_log_get_duration(call_log: *const LinphoneCallLog) -> c_int;
    pub fn linphone_call_log_get_quality(call_log: *const LinphoneCallLog) -> f32;
    pub fn linphone_call_log_get_call_id(call_log: *const LinphoneCallLog) -> *const c_char;
    pub fn linphone_call_log_get_from_address(call_log: *const LinphoneCallLog) -> *mut LinphoneAddress;
    pub fn linphone_call_log_get_to_address(call_log: *const LinphoneCallLog) -> *mut LinphoneAddress;
    pub fn linphone_call_log_get_remote_address(
        call_log: *const LinphoneCallLog,
    ) -> *mut LinphoneAddress;
    pub fn linphone_call_log_get_start_date(call_log: *const LinphoneCallLog) -> time_t;
    pub fn linphone_reason_to_string(reason: LinphoneReason) -> *const c_char;
}
