//! In-process engine implementing the liblinphone ABI.
//!
//! Objects are heap-allocated, reference-counted and carry a user-data slot, like their native counterparts.
//! Calls follow the engine's state machine, one step per [`linphone_core_iterate`](abi::linphone_core_iterate):
//!
//! ```text
//! OutgoingInit -> OutgoingProgress -> OutgoingRinging -> Connected -> StreamsRunning
//! IncomingReceived --accept--> Connected -> StreamsRunning
//! StreamsRunning --pause--> Pausing -> Paused --resume--> Resuming -> StreamsRunning
//! End | Error -> Released (the core drops its reference)
//! ```
//!
//! The functions of this module drive the engine from the outside, the way a remote party or the network would, and expose the bookkeeping needed to check reference counts.
//! They are not part of the liblinphone ABI.

pub mod abi;

mod address;
mod call;
mod call_log;
mod engine;
mod object;

mod hooks;
pub use hooks::*;
pub use object::{ref_count, release_count, retain_count};
