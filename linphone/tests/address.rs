#![cfg(not(feature = "native"))]

use linphone::*;
use linphone_sys::sim;

mod common;

#[test]
fn test_parse_full_address() {
    let core = common::started_core();
    let address = core
        .create_address("\"Alice\" <sips:alice@example.org:5061;transport=tls>")
        .unwrap();

    assert_eq!(address.display_name().as_deref(), Some("Alice"));
    assert_eq!(address.username().as_deref(), Some("alice"));
    assert_eq!(address.domain().as_deref(), Some("example.org"));
    assert_eq!(address.scheme().as_deref(), Some("sips"));
    assert_eq!(address.port(), 5061);
    assert_eq!(address.transport(), Ok(TransportType::Tls));
    assert!(address.is_sip());
    assert_eq!(
        address.as_string_uri_only(),
        "sips:alice@example.org:5061;transport=tls"
    );
    assert_eq!(
        address.to_string(),
        "\"Alice\" <sips:alice@example.org:5061;transport=tls>"
    );
}

#[test]
fn test_invalid_address() {
    let core = common::started_core();
    assert_eq!(
        core.create_address("alice at example dot org").err(),
        Some(Error::InvalidAddress("alice at example dot org".to_string()))
    );
    assert_eq!(core.context().cached::<Address>(), 0);
}

#[test]
fn test_setters_write_through() {
    let core = common::started_core();
    let address = core.create_address("sip:alice@example.org").unwrap();

    assert_eq!(address.set_display_name(Some("Alice Liddell")), Ok(true));
    assert_eq!(address.set_username("alice.l"), Ok(true));
    assert_eq!(address.set_domain("wonderland.example"), Ok(true));
    assert_eq!(address.set_port(5080), Ok(true));
    assert_eq!(address.set_transport(TransportType::Tcp), Ok(true));

    assert_eq!(
        address.as_string(),
        "\"Alice Liddell\" <sip:alice.l@wonderland.example:5080;transport=tcp>"
    );

    assert_eq!(address.set_display_name(None), Ok(true));
    assert_eq!(address.display_name(), None);
}

#[test]
fn test_setters_report_refusal() {
    let core = common::started_core();
    let address = core.create_address("sip:alice@example.org").unwrap();

    assert_eq!(address.set_username("alice@evil"), Ok(false));
    assert_eq!(address.set_domain(""), Ok(false));
    assert_eq!(
        address.set_domain("example\0.org"),
        Err(Error::InteriorNul { position: 7 })
    );
    assert_eq!(address.domain().as_deref(), Some("example.org"));
}

#[test]
fn test_duplicate_is_independent() {
    let core = common::started_core();
    let address = core.create_address("\"Bob\" <sip:bob@example.org>").unwrap();
    let copy = address.duplicate().unwrap();

    assert!(!copy.ptr_eq(&address));
    assert_ne!(copy, address);
    assert!(copy.equal(&address));

    copy.set_display_name(Some("Robert")).unwrap();
    assert!(!copy.equal(&address));
    assert!(copy.weak_equal(&address));
    assert_eq!(address.display_name().as_deref(), Some("Bob"));

    copy.set_port(5070).unwrap();
    assert!(!copy.weak_equal(&address));
}

#[test]
fn test_unknown_transport_code() {
    let core = common::started_core();
    let address = core.create_address("sip:alice@example.org").unwrap();

    unsafe { sim::set_address_transport(address.as_ptr(), 7) };

    assert_eq!(
        address.transport(),
        Err(Error::UnknownCode(UnknownCode {
            kind: "TransportType",
            code: 7
        }))
    );
}

#[test]
fn test_call_sees_address_changes() {
    let core = common::started_core();
    let call = core.invite("sip:bob@example.org").unwrap();

    call.remote_address()
        .unwrap()
        .set_display_name(Some("Bob"))
        .unwrap();

    assert_eq!(
        call.remote_address_as_string().as_deref(),
        Some("\"Bob\" <sip:bob@example.org>")
    );
}

#[test]
fn test_invite_address() {
    let core = common::started_core();
    let address = core.create_address("sip:bob@example.org;transport=tcp").unwrap();
    let call = core.invite_address(&address).unwrap();

    let remote = call.remote_address().unwrap();
    assert!(!remote.ptr_eq(&address));
    assert!(remote.equal(&address));
    assert_eq!(remote.transport(), Ok(TransportType::Tcp));
}
