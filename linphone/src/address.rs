//! SIP addresses.

use std::fmt;
use std::os::raw::c_int;
use std::rc::Rc;

use crate::Sealed;
use crate::error::Result;
use crate::ffi_wrapper::{command_succeeded, copy_string, from_bool_t, take_string, to_cstring};
use crate::handle::handle_kind;
use crate::identity::{Resource, Wrapped};
use crate::native_enum::{NativeEnum, native_enum};

handle_kind! {
    /// Marker for `LinphoneAddress` handles.
    pub AddressKind {
        raw: linphone_sys::LinphoneAddress,
        name: "address",
        retain: linphone_sys::linphone_address_ref,
        release: linphone_sys::linphone_address_unref,
        cache: addresses,
    }
}

native_enum! {
    /// Transport protocol of a SIP address.
    pub enum TransportType: linphone_sys::LinphoneTransportType, describe = linphone_sys::linphone_transport_to_string {
        Udp = linphone_sys::LinphoneTransportUdp,
        Tcp = linphone_sys::LinphoneTransportTcp,
        Tls = linphone_sys::LinphoneTransportTls,
        Dtls = linphone_sys::LinphoneTransportDtls,
    }
}

/// A parsed SIP address, such as `"Alice" <sip:alice@example.org:5060;transport=tcp>`.
///
/// Addresses are created with [`Core::create_address`](crate::Core::create_address) or obtained from calls and call logs.
/// An address obtained from a call is the engine's own object: setters change what the call reports.
#[derive(Clone)]
pub struct Address(Rc<Wrapped<AddressKind>>);

impl Sealed for Address {}

impl Resource for Address {
    type Kind = AddressKind;

    fn from_wrapped(wrapped: Rc<Wrapped<AddressKind>>) -> Self {
        Self(wrapped)
    }

    fn wrapped(&self) -> &Rc<Wrapped<AddressKind>> {
        &self.0
    }
}

impl Address {
    fn raw(&self) -> *mut linphone_sys::LinphoneAddress {
        self.as_ptr()
    }

    /// Returns the raw FFI pointer to the underlying address.
    ///
    /// This is intended for internal use and advanced scenarios.
    pub fn as_ptr(&self) -> *mut linphone_sys::LinphoneAddress {
        Resource::as_ptr(self)
    }

    /// Checks if `self` and `other` are the same wrapper.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Resource::ptr_eq(self, other)
    }

    /// The display name, `None` if the address has none.
    pub fn display_name(&self) -> Option<String> {
        unsafe { copy_string(linphone_sys::linphone_address_get_display_name(self.raw())) }
    }

    /// The user part of the URI.
    pub fn username(&self) -> Option<String> {
        unsafe { copy_string(linphone_sys::linphone_address_get_username(self.raw())) }
    }

    /// The host part of the URI.
    pub fn domain(&self) -> Option<String> {
        unsafe { copy_string(linphone_sys::linphone_address_get_domain(self.raw())) }
    }

    /// The port, `0` if the address does not specify one.
    pub fn port(&self) -> u16 {
        let port = unsafe { linphone_sys::linphone_address_get_port(self.raw()) };
        u16::try_from(port).unwrap_or(0)
    }

    /// The URI scheme, `sip` or `sips`.
    pub fn scheme(&self) -> Option<String> {
        unsafe { copy_string(linphone_sys::linphone_address_get_scheme(self.raw())) }
    }

    /// The transport named by the `transport` URI parameter, UDP if absent.
    pub fn transport(&self) -> Result<TransportType> {
        let raw = unsafe { linphone_sys::linphone_address_get_transport(self.raw()) };
        Ok(TransportType::try_from_raw(raw)?)
    }

    /// Checks if the URI scheme is `sip` or `sips`.
    pub fn is_sip(&self) -> bool {
        from_bool_t(unsafe { linphone_sys::linphone_address_is_sip(self.raw()) })
    }

    /// The full address, display name included.
    pub fn as_string(&self) -> String {
        unsafe { take_string(linphone_sys::linphone_address_as_string(self.raw())) }
            .unwrap_or_default()
    }

    /// The URI alone, without display name.
    pub fn as_string_uri_only(&self) -> String {
        unsafe { take_string(linphone_sys::linphone_address_as_string_uri_only(self.raw())) }
            .unwrap_or_default()
    }

    /// Sets or clears the display name.
    ///
    /// Returns `Ok(false)` if the engine refuses the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InteriorNul`](crate::Error::InteriorNul) if `display_name` contains a NUL byte.
    pub fn set_display_name(&self, display_name: Option<&str>) -> Result<bool> {
        let display_name = display_name.map(to_cstring).transpose()?;
        let ptr = display_name
            .as_ref()
            .map_or(std::ptr::null(), |name| name.as_ptr());
        Ok(command_succeeded(
            "linphone_address_set_display_name",
            unsafe { linphone_sys::linphone_address_set_display_name(self.raw(), ptr) },
        ))
    }

    /// Sets the user part of the URI. Returns `false` if the engine refuses it.
    pub fn set_username(&self, username: &str) -> Result<bool> {
        let username = to_cstring(username)?;
        Ok(command_succeeded("linphone_address_set_username", unsafe {
            linphone_sys::linphone_address_set_username(self.raw(), username.as_ptr())
        }))
    }

    /// Sets the host part of the URI. Returns `false` if the engine refuses it.
    pub fn set_domain(&self, domain: &str) -> Result<bool> {
        let domain = to_cstring(domain)?;
        Ok(command_succeeded("linphone_address_set_domain", unsafe {
            linphone_sys::linphone_address_set_domain(self.raw(), domain.as_ptr())
        }))
    }

    /// Sets the port; `0` removes it.
    pub fn set_port(&self, port: u16) -> Result<bool> {
        Ok(command_succeeded("linphone_address_set_port", unsafe {
            linphone_sys::linphone_address_set_port(self.raw(), c_int::from(port))
        }))
    }

    /// Sets the `transport` URI parameter. Returns `false` if the engine refuses it.
    pub fn set_transport(&self, transport: TransportType) -> Result<bool> {
        Ok(command_succeeded("linphone_address_set_transport", unsafe {
            linphone_sys::linphone_address_set_transport(self.raw(), transport.to_raw())
        }))
    }

    /// Creates an independent copy. Changing the copy does not affect `self`.
    pub fn duplicate(&self) -> Option<Address> {
        unsafe {
            let copy = linphone_sys::linphone_address_clone(self.raw());
            self.context().adopt(copy)
        }
    }

    /// Compares display names and URIs.
    pub fn equal(&self, other: &Address) -> bool {
        from_bool_t(unsafe { linphone_sys::linphone_address_equal(self.raw(), other.raw()) })
    }

    /// Compares user, domain and port only.
    pub fn weak_equal(&self, other: &Address) -> bool {
        from_bool_t(unsafe { linphone_sys::linphone_address_weak_equal(self.raw(), other.raw()) })
    }
}

/// Handle identity. Use [`Address::equal`] to compare contents.
impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.0.handle() == other.0.handle()
    }
}

impl Eq for Address {}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Address")
            .field("ptr", &self.as_ptr())
            .field("uri", &self.as_string_uri_only())
            .finish()
    }
}
