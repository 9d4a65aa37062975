#![cfg(not(feature = "native"))]

use std::time::Duration;

use linphone::*;
use linphone_sys::sim;

mod common;

#[test]
fn test_outgoing_state_progression() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();

    let mut states = vec![call.state().unwrap()];
    for _ in 0..4 {
        core.iterate();
        states.push(call.state().unwrap());
    }

    assert_eq!(
        states,
        [
            CallState::OutgoingInit,
            CallState::OutgoingProgress,
            CallState::OutgoingRinging,
            CallState::Connected,
            CallState::StreamsRunning,
        ]
    );
    assert_eq!(call.direction(), Ok(CallDirection::Outgoing));
}

#[test]
fn test_state_read_reflects_engine_transition() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();
    core.iterate();
    assert_eq!(call.state(), Ok(CallState::OutgoingProgress));

    unsafe { sim::set_call_state(call.as_ptr(), linphone_sys::LinphoneCallConnected) };

    assert_eq!(call.state(), Ok(CallState::Connected));
}

#[test]
fn test_unknown_state_code_is_an_error() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();

    unsafe { sim::set_call_state(call.as_ptr(), 99) };

    let error = call.state().unwrap_err();
    assert!(error.is_unknown_code());
    assert_eq!(
        error,
        Error::UnknownCode(UnknownCode {
            kind: "CallState",
            code: 99
        })
    );
    assert_eq!(error.to_string(), "unknown CallState code 99");
}

#[test]
fn test_unknown_reason_and_direction() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();

    unsafe {
        sim::set_call_reason(call.as_ptr(), 42);
        sim::set_call_dir(call.as_ptr(), 2);
    }

    assert!(call.reason().unwrap_err().is_unknown_code());
    assert!(call.direction().unwrap_err().is_unknown_code());
}

#[test]
fn test_failed_command_returns_false() {
    let core = common::started_core();
    let call = common::established_call(&core, "sip:bob@example.org");

    unsafe { sim::fail_next_command(call.as_ptr(), linphone_sys::LinphoneStatusFailure) };

    assert!(!call.pause());
    assert_eq!(call.state(), Ok(CallState::StreamsRunning));
    assert!(call.pause());
}

#[test]
fn test_command_refused_in_wrong_state() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();

    assert!(!call.accept());
    assert!(!call.pause());
    assert!(!call.resume());
    assert!(!call.transfer("sip:carol@example.org"));
}

#[test]
fn test_pause_and_resume() {
    let core = common::started_core();
    let call = common::established_call(&core, "sip:bob@example.org");

    assert!(call.pause());
    assert_eq!(call.state(), Ok(CallState::Pausing));
    common::iterate_until(&core, &call, CallState::Paused);
    assert!(call.state().unwrap().is_paused());
    assert!(core.current_call().is_none());

    assert!(call.resume());
    common::iterate_until(&core, &call, CallState::StreamsRunning);
    assert!(core.current_call().unwrap().ptr_eq(&call));
}

#[test]
fn test_remote_pause() {
    let core = common::started_core();
    let call = common::established_call(&core, "sip:bob@example.org");

    unsafe { sim::remote_pause(call.as_ptr()) };

    assert_eq!(call.state(), Ok(CallState::PausedByRemote));
    assert!(call.state().unwrap().is_paused());
}

#[test]
fn test_terminate() {
    let core = common::started_core();
    let call = common::established_call(&core, "sip:bob@example.org");

    assert!(call.terminate());
    assert_eq!(call.state(), Ok(CallState::End));
    assert_eq!(call.reason(), Ok(Reason::None));
    assert!(!call.terminate());

    common::iterate_until(&core, &call, CallState::Released);
    assert!(call.state().unwrap().is_terminal());
}

#[test]
fn test_accept_incoming_call() {
    let core = common::started_core();
    let call = common::incoming_call(&core, "\"Carol\" <sip:carol@example.org>");

    assert_eq!(call.state(), Ok(CallState::IncomingReceived));
    assert_eq!(call.direction(), Ok(CallDirection::Incoming));
    assert!(call.state().unwrap().is_early());
    assert!(core.current_call().is_none());

    assert!(call.accept());
    assert_eq!(call.state(), Ok(CallState::Connected));
    common::iterate_until(&core, &call, CallState::StreamsRunning);
    assert!(!call.decline(Reason::Busy));
}

#[test]
fn test_decline_incoming_call() {
    let core = common::started_core();
    let call = common::incoming_call(&core, "sip:carol@example.org");

    assert!(call.decline(Reason::Busy));
    assert_eq!(call.state(), Ok(CallState::End));
    assert_eq!(call.reason(), Ok(Reason::Busy));
    assert_eq!(call.call_log().unwrap().status(), Ok(CallStatus::Declined));
}

#[test]
fn test_redirect_incoming_call() {
    let core = common::started_core();
    let call = common::incoming_call(&core, "sip:carol@example.org");

    assert!(!call.redirect("not a uri"));
    assert!(!call.redirect("sip:dave\0@example.org"));
    assert!(call.redirect("sip:voicemail@example.org"));
    assert_eq!(call.reason(), Ok(Reason::MovedPermanently));
}

#[test]
fn test_remote_address() {
    let core = common::started_core();
    let call = common::incoming_call(&core, "\"Carol\" <sip:carol@example.org:5070>");

    assert_eq!(
        call.remote_address_as_string().as_deref(),
        Some("\"Carol\" <sip:carol@example.org:5070>")
    );
    let remote = call.remote_address().unwrap();
    assert_eq!(remote.display_name().as_deref(), Some("Carol"));
    assert_eq!(remote.port(), 5070);
}

#[test]
fn test_borrowed_strings() {
    let core = common::started_core();
    let call = common::established_call(&core, "sip:bob@example.org");
    assert_eq!(call.remote_user_agent(), None);
    assert_eq!(call.authentication_token(), None);

    unsafe {
        sim::set_remote_user_agent(call.as_ptr(), "Linphone Desktop/5.2.0");
        sim::set_authentication_token(call.as_ptr(), "4kx9");
    }

    assert_eq!(
        call.remote_user_agent().as_deref(),
        Some("Linphone Desktop/5.2.0")
    );
    assert_eq!(call.authentication_token().as_deref(), Some("4kx9"));
}

#[test]
fn test_duration_and_quality() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();
    assert_eq!(call.duration(), Duration::ZERO);
    assert!(call.current_quality() < 0.0);

    common::iterate_until(&core, &call, CallState::StreamsRunning);
    unsafe {
        sim::advance_duration(call.as_ptr(), 12);
        sim::set_quality(call.as_ptr(), 3.5, 4.0);
    }

    assert_eq!(call.duration(), Duration::from_secs(12));
    assert_eq!(call.current_quality(), 3.5);
    assert_eq!(call.average_quality(), 4.0);
}

#[test]
fn test_mutable_properties_read_engine_state() {
    let core = common::started_core();
    let call = common::established_call(&core, "sip:bob@example.org");

    assert!(!call.microphone_muted());
    call.set_microphone_muted(true);
    assert!(call.microphone_muted());

    call.set_speaker_volume_gain(0.25);
    assert_eq!(call.speaker_volume_gain(), 0.25);

    // The engine clamps gains; the read reflects its value, not the one written.
    call.set_microphone_volume_gain(3.0);
    assert_eq!(call.microphone_volume_gain(), 1.0);

    call.enable_camera(true);
    assert!(call.camera_enabled());
    call.enable_camera(false);
    assert!(!call.camera_enabled());
}

#[test]
fn test_dtmf() {
    let core = common::started_core();
    let call = common::established_call(&core, "sip:bob@example.org");

    assert!(call.send_dtmf('5'));
    assert!(call.send_dtmfs("12#"));
    assert!(!call.send_dtmf('é'));
    assert!(!call.send_dtmf('x'));
    assert!(!call.send_dtmfs("1\02"));

    assert_eq!(unsafe { sim::sent_dtmfs(call.as_ptr()) }, "512#");
}

#[test]
fn test_blind_transfer() {
    let core = common::started_core();
    let call = common::established_call(&core, "sip:bob@example.org");

    assert!(call.transfer("sip:carol@example.org"));
    assert_eq!(call.refer_to().as_deref(), Some("sip:carol@example.org"));
    assert_eq!(call.transfer_state(), Ok(CallState::OutgoingInit));

    core.iterate();
    assert_eq!(call.transfer_state(), Ok(CallState::OutgoingProgress));
    core.iterate();
    assert_eq!(call.transfer_state(), Ok(CallState::Connected));
    assert!(call.state().unwrap().has_ended());
}

#[test]
fn test_attended_transfer() {
    let core = common::started_core();
    let bob = common::established_call(&core, "sip:bob@example.org");
    let carol = common::established_call(&core, "sip:carol@example.org");

    assert!(!bob.transfer_to_another(&bob));
    assert!(bob.transfer_to_another(&carol));

    assert!(bob.transfer_target_call().unwrap().ptr_eq(&carol));
    assert_eq!(bob.refer_to().as_deref(), Some("sip:carol@example.org"));
}

#[test]
fn test_received_transfer() {
    let core = common::started_core();
    let call = common::established_call(&core, "sip:bob@example.org");

    let transferred: Call = unsafe {
        let raw = sim::receive_refer(call.as_ptr(), "sip:carol@example.org");
        core.context().resolve(raw).unwrap()
    };

    assert_eq!(call.state(), Ok(CallState::Refered));
    assert!(transferred.transferer_call().unwrap().ptr_eq(&call));
    assert_eq!(
        transferred.remote_address().unwrap().username().as_deref(),
        Some("carol")
    );
}

#[test]
fn test_replacing_call() {
    let core = common::started_core();
    let call = common::established_call(&core, "sip:bob@example.org");

    let replacing: Call = unsafe {
        let raw = sim::receive_replacing_call(core.as_ptr(), "sip:bob@example.org", call.as_ptr());
        core.context().resolve(raw).unwrap()
    };

    assert!(replacing.replaced_call().unwrap().ptr_eq(&call));
}

#[test]
fn test_terminate_all_calls() {
    let core = common::started_core();
    let bob = common::established_call(&core, "sip:bob@example.org");
    let carol = core.invite("sip:carol@example.org").unwrap();

    assert!(core.terminate_all_calls());
    assert_eq!(bob.state(), Ok(CallState::End));
    assert_eq!(carol.state(), Ok(CallState::End));

    core.iterate();
    assert_eq!(core.calls_nb(), 0);
}

#[test]
fn test_state_descriptions() {
    assert_eq!(
        CallState::OutgoingRinging.description().as_deref(),
        Some("LinphoneCallOutgoingRinging")
    );
    assert_eq!(Reason::Busy.description().as_deref(), Some("Busy"));
}
