#![allow(dead_code)]

use linphone::*;

/// Upper bound on engine steps for any transition exercised by the tests.
const MAX_ITERATIONS: usize = 16;

pub fn started_core() -> Core {
    Core::try_new(&CoreSettings::default()).expect("failed to create core")
}

// Iterate the core until `call` reaches `state`.
pub fn iterate_until(core: &Core, call: &Call, state: CallState) {
    for _ in 0..MAX_ITERATIONS {
        if call.state() == Ok(state) {
            return;
        }
        core.iterate();
    }
    panic!("call stuck in {:?}, expected {state}", call.state());
}

// Place a call to `uri` and wait until media flows.
pub fn established_call(core: &Core, uri: &str) -> Call {
    let call = core.invite(uri).expect("failed to invite");
    iterate_until(core, &call, CallState::StreamsRunning);
    call
}

// Simulate an incoming call from `from` and wrap it.
pub fn incoming_call(core: &Core, from: &str) -> Call {
    unsafe {
        let raw = linphone_sys::sim::receive_call(core.as_ptr(), from);
        core.context().resolve(raw).expect("failed to receive call")
    }
}
