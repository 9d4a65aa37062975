#![cfg(not(feature = "native"))]

use linphone::*;
use linphone_sys::sim;

mod common;

#[test]
fn test_one_retain_per_wrapper() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();
    let ptr = call.as_ptr();

    // One reference held by the core, one by the wrapper.
    assert_eq!(unsafe { sim::ref_count(ptr) }, 2);

    let clones: Vec<Call> = (0..8).map(|_| call.clone()).collect();
    let lookups: Vec<Call> = (0..8).filter_map(|_| core.current_call()).collect();
    assert_eq!(lookups.len(), 8);
    assert_eq!(unsafe { sim::retain_count(ptr) }, 1);
    assert_eq!(unsafe { sim::ref_count(ptr) }, 2);

    drop(clones);
    drop(lookups);
    assert_eq!(unsafe { sim::release_count(ptr) }, 0);

    drop(call);
    assert_eq!(unsafe { sim::release_count(ptr) }, 1);
    assert_eq!(unsafe { sim::ref_count(ptr) }, 1);
}

#[test]
fn test_balanced_across_wrapper_generations() {
    let core = common::started_core();
    let ptr = core.invite("sip:bob@example.org").unwrap().as_ptr();

    for _ in 0..3 {
        let call = core.current_call().unwrap();
        assert_eq!(call.as_ptr(), ptr);
    }

    assert_eq!(unsafe { sim::retain_count(ptr) }, 4);
    assert_eq!(unsafe { sim::release_count(ptr) }, 4);
    assert_eq!(unsafe { sim::ref_count(ptr) }, 1);
}

#[test]
fn test_wrapper_keeps_released_call_alive() {
    let core = common::started_core();
    let call = common::established_call(&core, "sip:bob@example.org");
    let ptr = call.as_ptr();

    assert!(call.terminate());
    common::iterate_until(&core, &call, CallState::Released);

    // The engine dropped its reference; the wrapper's is the last one.
    assert_eq!(core.calls_nb(), 0);
    assert_eq!(unsafe { sim::ref_count(ptr) }, 1);
    assert_eq!(call.state(), Ok(CallState::Released));
    assert!(call.remote_address().is_some());
    assert!(call.core().is_none());
}

#[test]
fn test_created_address_is_adopted() {
    let core = common::started_core();
    let address = core.create_address("sip:alice@example.org").unwrap();
    let ptr = address.as_ptr();

    assert_eq!(unsafe { sim::ref_count(ptr) }, 1);
    assert_eq!(unsafe { sim::retain_count(ptr) }, 0);

    let copy = address.duplicate().unwrap();
    assert_eq!(unsafe { sim::ref_count(copy.as_ptr()) }, 1);
    assert_eq!(unsafe { sim::retain_count(copy.as_ptr()) }, 0);
}

#[test]
fn test_child_wrapper_outlives_parent_wrapper() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();
    let remote = call.remote_address().unwrap();
    let log = call.call_log().unwrap();
    drop(call);

    assert_eq!(remote.username().as_deref(), Some("bob"));
    assert_eq!(log.direction(), Ok(CallDirection::Outgoing));
    assert_eq!(unsafe { sim::ref_count(remote.as_ptr()) }, 2);
}

#[test]
fn test_core_wrapper_is_the_only_owner() {
    let core = common::started_core();
    assert_eq!(unsafe { sim::ref_count(core.as_ptr()) }, 1);

    let clone = core.clone();
    assert!(clone.ptr_eq(&core));
    assert_eq!(unsafe { sim::ref_count(core.as_ptr()) }, 1);
}
