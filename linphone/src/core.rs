//! The engine's main object.

use std::ffi::CString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::Sealed;
use crate::address::Address;
use crate::call::Call;
use crate::call_log::CallLog;
use crate::error::{Error, Result};
use crate::ffi_wrapper::{command_succeeded, copy_string, from_bool_t, to_bool_t, to_cstring};
use crate::handle::handle_kind;
use crate::identity::{Context, Resource, Wrapped};
use crate::version::{EngineVersion, ParseVersionError};

handle_kind! {
    /// Marker for `LinphoneCore` handles.
    pub CoreKind {
        raw: linphone_sys::LinphoneCore,
        name: "core",
        retain: linphone_sys::linphone_core_ref,
        release: linphone_sys::linphone_core_unref,
        cache: cores,
    }
}

/// Settings used to create a [`Core`].
#[derive(Debug, Clone)]
pub struct CoreSettings {
    /// Read-write configuration file. `None` keeps the configuration in memory.
    pub config_path: Option<PathBuf>,

    /// Read-only configuration file applied on top of the defaults.
    pub factory_config_path: Option<PathBuf>,

    /// Name and version advertised in the `User-Agent` header.
    pub user_agent: Option<(String, String)>,

    /// The local identity, as a SIP address.
    pub primary_contact: Option<String>,

    /// Whether the microphone is captured during calls.
    pub mic_enabled: bool,

    /// Whether the core is started right after creation.
    ///
    /// A core that is not started cannot place calls; see [`Core::start`].
    pub auto_start: bool,
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            config_path: None,
            factory_config_path: None,
            user_agent: None,
            primary_contact: None,
            mic_enabled: true,
            auto_start: true,
        }
    }
}

fn path_to_cstring(path: Option<&Path>) -> Result<Option<CString>> {
    path.map(|path| to_cstring(&path.to_string_lossy()))
        .transpose()
}

fn as_ptr_or_null(string: &Option<CString>) -> *const std::os::raw::c_char {
    string.as_ref().map_or(std::ptr::null(), |string| string.as_ptr())
}

/// The engine's main object.
///
/// Every call, address and call log obtained from a core is resolved through its [`Context`], which it shares with the other cores of the thread.
/// The engine is driven by [`Core::iterate`], which must be called regularly from the thread that created the core.
#[derive(Clone)]
pub struct Core(Rc<Wrapped<CoreKind>>);

impl Sealed for Core {}

impl Resource for Core {
    type Kind = CoreKind;

    fn from_wrapped(wrapped: Rc<Wrapped<CoreKind>>) -> Self {
        Self(wrapped)
    }

    fn wrapped(&self) -> &Rc<Wrapped<CoreKind>> {
        &self.0
    }
}

impl Core {
    /// Creates a new core and applies `settings`.
    ///
    /// # Errors
    ///
    /// - [`Error::InteriorNul`] if a setting contains a NUL byte.
    /// - [`Error::NullHandle`] if the engine cannot create the core.
    /// - [`Error::InvalidAddress`] if the primary contact does not parse.
    /// - [`Error::StartFailed`] if `auto_start` is set and the core does not start.
    pub fn try_new(settings: &CoreSettings) -> Result<Self> {
        let config_path = path_to_cstring(settings.config_path.as_deref())?;
        let factory_config_path = path_to_cstring(settings.factory_config_path.as_deref())?;

        let context = Context::new();
        let core: Core = unsafe {
            let raw = linphone_sys::linphone_factory_create_core_3(
                linphone_sys::linphone_factory_get(),
                as_ptr_or_null(&config_path),
                as_ptr_or_null(&factory_config_path),
                std::ptr::null_mut(),
            );
            context.adopt(raw)
        }
        .ok_or(Error::NullHandle {
            operation: "linphone_factory_create_core_3",
        })?;

        core.enable_mic(settings.mic_enabled);

        if let Some((name, version)) = &settings.user_agent {
            core.set_user_agent(name, version)?;
        }

        if let Some(contact) = &settings.primary_contact {
            if !core.set_primary_contact(contact)? {
                return Err(Error::InvalidAddress(contact.clone()));
            }
        }

        if settings.auto_start && !core.start() {
            return Err(Error::StartFailed);
        }

        tracing::debug!(ptr = ?core.as_ptr(), started = settings.auto_start, "created core");

        Ok(core)
    }

    fn raw(&self) -> *mut linphone_sys::LinphoneCore {
        self.as_ptr()
    }

    /// Returns the raw FFI pointer to the underlying core.
    ///
    /// This is intended for internal use and advanced scenarios.
    pub fn as_ptr(&self) -> *mut linphone_sys::LinphoneCore {
        Resource::as_ptr(self)
    }

    /// Checks if `self` and `other` are the same wrapper.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Resource::ptr_eq(self, other)
    }

    /// The engine's version string.
    pub fn version() -> String {
        unsafe { copy_string(linphone_sys::linphone_core_get_version()) }.unwrap_or_default()
    }

    /// The engine's version, parsed.
    pub fn engine_version() -> std::result::Result<EngineVersion, ParseVersionError> {
        Self::version().parse()
    }

    /// Starts the core. Returns `false` if the engine fails to.
    pub fn start(&self) -> bool {
        command_succeeded("linphone_core_start", unsafe {
            linphone_sys::linphone_core_start(self.raw())
        })
    }

    /// Stops the core, terminating every call.
    pub fn stop(&self) {
        unsafe { linphone_sys::linphone_core_stop(self.raw()) }
    }

    /// Runs one step of the engine's main loop. Call state changes happen here.
    pub fn iterate(&self) {
        unsafe { linphone_sys::linphone_core_iterate(self.raw()) }
    }

    /// Places a call to `uri`.
    ///
    /// # Errors
    ///
    /// - [`Error::InteriorNul`] if `uri` contains a NUL byte.
    /// - [`Error::NullHandle`] if the engine does not create the call (unparsable URI, core not started, ...).
    pub fn invite(&self, uri: &str) -> Result<Call> {
        let uri = to_cstring(uri)?;
        unsafe {
            self.context()
                .resolve(linphone_sys::linphone_core_invite(self.raw(), uri.as_ptr()))
        }
        .ok_or(Error::NullHandle {
            operation: "linphone_core_invite",
        })
    }

    /// Places a call to `address`.
    pub fn invite_address(&self, address: &Address) -> Result<Call> {
        unsafe {
            self.context().resolve(linphone_sys::linphone_core_invite_address(
                self.raw(),
                address.as_ptr(),
            ))
        }
        .ok_or(Error::NullHandle {
            operation: "linphone_core_invite_address",
        })
    }

    /// Parses a SIP address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if `uri` does not parse.
    pub fn create_address(&self, uri: &str) -> Result<Address> {
        let raw_uri = to_cstring(uri)?;
        unsafe {
            self.context().adopt(linphone_sys::linphone_core_create_address(
                self.raw(),
                raw_uri.as_ptr(),
            ))
        }
        .ok_or_else(|| Error::InvalidAddress(uri.to_string()))
    }

    /// The call currently active, if any. Calls on hold or still ringing on this side are not active.
    pub fn current_call(&self) -> Option<Call> {
        unsafe {
            self.context()
                .resolve(linphone_sys::linphone_core_get_current_call(self.raw()))
        }
    }

    /// The call whose remote address matches `uri`.
    pub fn find_call_from_uri(&self, uri: &str) -> Option<Call> {
        let uri = to_cstring(uri).ok()?;
        unsafe {
            self.context()
                .resolve(linphone_sys::linphone_core_find_call_from_uri(
                    self.raw(),
                    uri.as_ptr(),
                ))
        }
    }

    /// Number of calls the core currently tracks, released ones excluded.
    pub fn calls_nb(&self) -> usize {
        let count = unsafe { linphone_sys::linphone_core_get_calls_nb(self.raw()) };
        usize::try_from(count).unwrap_or(0)
    }

    /// Hangs up every call of this core.
    pub fn terminate_all_calls(&self) -> bool {
        command_succeeded("linphone_core_terminate_all_calls", unsafe {
            linphone_sys::linphone_core_terminate_all_calls(self.raw())
        })
    }

    /// History entry of the most recent outgoing call.
    pub fn last_outgoing_call_log(&self) -> Option<CallLog> {
        unsafe {
            self.context()
                .resolve(linphone_sys::linphone_core_get_last_outgoing_call_log(
                    self.raw(),
                ))
        }
    }

    /// Number of incoming calls missed since the last reset.
    pub fn missed_calls_count(&self) -> usize {
        let count = unsafe { linphone_sys::linphone_core_get_missed_calls_count(self.raw()) };
        usize::try_from(count).unwrap_or(0)
    }

    /// Resets [`Self::missed_calls_count`] to zero.
    pub fn reset_missed_calls_count(&self) {
        unsafe { linphone_sys::linphone_core_reset_missed_calls_count(self.raw()) }
    }

    /// Checks if the microphone is enabled for every call.
    pub fn mic_enabled(&self) -> bool {
        from_bool_t(unsafe { linphone_sys::linphone_core_mic_enabled(self.raw()) })
    }

    /// Enables or disables the microphone for every call.
    pub fn enable_mic(&self, enable: bool) {
        unsafe { linphone_sys::linphone_core_enable_mic(self.raw(), to_bool_t(enable)) }
    }

    /// The `User-Agent` sent in SIP requests.
    pub fn user_agent(&self) -> Option<String> {
        unsafe { copy_string(linphone_sys::linphone_core_get_user_agent(self.raw())) }
    }

    /// Sets the `User-Agent` as `name/version`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InteriorNul`] if either part contains a NUL byte.
    pub fn set_user_agent(&self, name: &str, version: &str) -> Result<()> {
        let name = to_cstring(name)?;
        let version = to_cstring(version)?;
        unsafe {
            linphone_sys::linphone_core_set_user_agent(self.raw(), name.as_ptr(), version.as_ptr())
        };
        Ok(())
    }

    /// The local identity, as a SIP address.
    pub fn identity(&self) -> Option<String> {
        unsafe { copy_string(linphone_sys::linphone_core_get_identity(self.raw())) }
    }

    /// Sets the local identity. Returns `Ok(false)` if `contact` does not parse.
    pub fn set_primary_contact(&self, contact: &str) -> Result<bool> {
        let contact = to_cstring(contact)?;
        Ok(command_succeeded("linphone_core_set_primary_contact", unsafe {
            linphone_sys::linphone_core_set_primary_contact(self.raw(), contact.as_ptr())
        }))
    }
}

impl PartialEq for Core {
    fn eq(&self, other: &Self) -> bool {
        self.0.handle() == other.0.handle()
    }
}

impl Eq for Core {}

impl fmt::Debug for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Core")
            .field("ptr", &self.as_ptr())
            .field("context", self.context())
            .finish()
    }
}
