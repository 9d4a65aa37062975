/*!
# linphone-sys

Raw bindings to the [liblinphone](https://linphone.org) C API.
This crate is not meant to be used directly; most users should use `linphone`, a safe wrapper built on top of `linphone-sys`.

## Overview

`linphone-sys` declares the opaque handle types, the integer codes of the engine's enumerations and the functions used by the safe layer.
It is inherently unsafe, as it interfaces with external C code.

Enumerations are exposed as plain integer constants rather than Rust enums: a newer engine may report codes that this crate does not know about, and receiving such a value through a Rust enum would be undefined behavior.

## Backends

| Feature | Backend |
| --- | --- |
| `native` | Links against the system `liblinphone` (and `bctoolbox`). Set `LINPHONE_LIB_DIR` to add a directory to the link search path. |
| *(default)* | [`sim`], an in-process engine implementing the same ABI, with real reference counting and a call state machine driven by [`linphone_core_iterate`]. |

Both backends expose identical function signatures at the crate root.

## Version compatibility

`linphone-sys` follows the numbering of the 3.x enumeration ABI (e.g. `LinphoneCallRefered = 11`).

## License

`linphone-sys` is dual-licensed under the MIT License and the Apache-2.0 License.
You may choose either license when using the software.
*/

#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals)]

mod types;
pub use types::*;

#[cfg(feature = "native")]
mod native;
#[cfg(feature = "native")]
pub use native::*;

#[cfg(not(feature = "native"))]
pub mod sim;
#[cfg(not(feature = "native"))]
pub use sim::abi::*;

/// Version of the engine ABI these bindings declare, as `major.minor.patch`.
pub const BINDINGS_VERSION: &str = env!("LINPHONE_BINDINGS_VERSION");
