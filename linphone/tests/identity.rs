#![cfg(not(feature = "native"))]

use linphone::*;
use linphone_sys::sim;

mod common;

#[test]
fn test_resolve_twice_yields_same_wrapper() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();

    let first = core.current_call().unwrap();
    let second = core.current_call().unwrap();

    assert!(first.ptr_eq(&second));
    assert!(first.ptr_eq(&call));
    assert_eq!(unsafe { sim::retain_count(call.as_ptr()) }, 1);
}

#[test]
fn test_owning_core_is_stable() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();

    let owner = call.core().unwrap();
    assert!(owner.ptr_eq(&core));
    assert!(call.core().unwrap().ptr_eq(&owner));
    assert!(owner.context().ptr_eq(core.context()));
}

#[test]
fn test_shared_child_objects() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();

    // The callee of an outgoing call is both the call's destination and its log's remote party.
    let to = call.to_address().unwrap();
    let log = call.call_log().unwrap();
    assert!(log.remote_address().unwrap().ptr_eq(&to));
    assert!(log.to_address().unwrap().ptr_eq(&to));
    assert!(call.call_log().unwrap().ptr_eq(&log));

    // The remote address is a distinct engine object.
    assert!(!call.remote_address().unwrap().ptr_eq(&to));
}

#[test]
fn test_null_child_handles_are_absent() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();
    let cached = core.context().cached::<Call>();

    assert!(call.replaced_call().is_none());
    assert!(call.transferer_call().is_none());
    assert!(call.transfer_target_call().is_none());
    assert_eq!(core.context().cached::<Call>(), cached);
    assert_eq!(unsafe { sim::retain_count(call.as_ptr()) }, 1);
}

#[test]
fn test_no_call_yields_absence() {
    let core = common::started_core();
    assert!(core.current_call().is_none());
    assert!(core.find_call_from_uri("sip:nobody@example.org").is_none());
    assert!(core.last_outgoing_call_log().is_none());
    assert_eq!(core.context().cached::<Call>(), 0);
    assert_eq!(core.context().cached::<CallLog>(), 0);
}

#[test]
fn test_new_wrapper_after_all_clones_dropped() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();
    let ptr = call.as_ptr();
    drop(call);
    assert_eq!(core.context().cached::<Call>(), 0);

    let again = core.current_call().unwrap();
    assert_eq!(again.as_ptr(), ptr);
    assert_eq!(core.context().cached::<Call>(), 1);
}

#[test]
fn test_find_call_from_uri() {
    let core = common::started_core();
    let bob = core.invite("sip:bob@example.org").unwrap();
    let carol = core.invite("sip:carol@example.org").unwrap();

    assert!(core.find_call_from_uri("sip:carol@example.org").unwrap().ptr_eq(&carol));
    assert!(core.find_call_from_uri("sip:bob@example.org").unwrap().ptr_eq(&bob));
    assert_eq!(core.calls_nb(), 2);
}

#[test]
fn test_contexts_of_a_thread_share_wrappers() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();

    let other = Context::new();
    let resolved: Call = unsafe { other.resolve(call.as_ptr()) }.unwrap();

    assert!(resolved.ptr_eq(&call));
    assert!(resolved.core().unwrap().ptr_eq(&core));
    assert_eq!(unsafe { sim::retain_count(call.as_ptr()) }, 1);
}

#[test]
fn test_call_of_another_core_keeps_its_wrapper() {
    let first = common::started_core();
    let second = common::started_core();
    let a = common::established_call(&first, "sip:bob@example.org");
    let b = common::established_call(&second, "sip:carol@example.org");

    assert!(a.transfer_to_another(&b));
    let call_retains = unsafe { sim::retain_count(b.as_ptr()) };
    let core_retains = unsafe { sim::retain_count(second.as_ptr()) };

    let target = a.transfer_target_call().unwrap();
    assert!(target.ptr_eq(&b));
    assert!(target.core().unwrap().ptr_eq(&second));
    assert_eq!(unsafe { sim::retain_count(b.as_ptr()) }, call_retains);
    assert_eq!(unsafe { sim::retain_count(second.as_ptr()) }, core_retains);
}
