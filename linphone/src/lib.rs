/*!
# linphone

A safe wrapper around [liblinphone](https://linphone.org), the SIP telephony engine.

## Overview

The engine hands out opaque, manually reference-counted handles: cores, calls, addresses and call logs.
This crate bridges them into Rust values with three guarantees:

- Every wrapper holds exactly one native reference, taken when it is built and released when the last clone is dropped.
- While a wrapper of a handle is alive, every accessor returning that handle returns the same wrapper (see [`Context`]).
- Enumeration codes are translated with a checked, total mapping; a code these bindings do not know surfaces as [`Error::UnknownCode`] instead of being coerced.

Wrappers keep no state of their own: every property read asks the engine, so a value read after an engine-side transition is current.

## Usage

```rust,no_run
use linphone::*;

let core = Core::try_new(&CoreSettings::default())?;
let call = core.invite("sip:bob@example.org")?;

while call.state()? != CallState::StreamsRunning {
    core.iterate();
}

// The same wrapper comes back through any accessor.
assert!(core.current_call().is_some_and(|current| current.ptr_eq(&call)));

call.terminate();
# Ok::<(), linphone::Error>(())
```

## Threading

The engine must be driven from a single thread. Wrappers are neither `Send` nor `Sync`, so the compiler enforces it.

## Backends

By default, `linphone-sys` provides an in-process engine implementing the liblinphone ABI, which lets this crate build and be tested without the native library.
Enable the `native` feature to link against the system `liblinphone`.

## License

`linphone` is dual-licensed under the MIT License and the Apache-2.0 License.
You may choose either license when using the software.
*/

mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

pub mod handle;
pub use handle::{HandleKind, OwnedHandle};

pub mod identity;
pub use identity::{Context, IdentityCache, Resource};

pub mod native_enum;
pub use native_enum::{NativeEnum, UnknownCode};

pub mod ffi_wrapper;

pub mod error;
pub use error::Error;

pub mod core;
pub use crate::core::{Core, CoreKind, CoreSettings};

pub mod call;
pub use call::{Call, CallDirection, CallKind, CallState, Reason};

pub mod address;
pub use address::{Address, AddressKind, TransportType};

pub mod call_log;
pub use call_log::{CallLog, CallLogKind, CallStatus};

pub mod version;
pub use version::EngineVersion;
