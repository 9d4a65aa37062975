use thiserror::Error;

use crate::native_enum::UnknownCode;

/// Result type alias for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A linphone error.
///
/// Expected outcomes are not errors: an accessor that finds no object returns `None`, and a command the engine refuses returns `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The engine reported an enumeration code outside the range these bindings know about.
    #[error(transparent)]
    UnknownCode(#[from] UnknownCode),

    /// A string argument contained a NUL byte and cannot cross the C boundary.
    #[error("string argument contains a nul byte at position {position}")]
    InteriorNul {
        /// Byte offset of the first NUL.
        position: usize,
    },

    /// An engine function that creates or returns an object produced none.
    #[error("{operation} returned a null handle")]
    NullHandle {
        /// Name of the native function.
        operation: &'static str,
    },

    /// The engine could not parse a SIP address.
    #[error("invalid SIP address: {0}")]
    InvalidAddress(String),

    /// The core was created but refused to start.
    #[error("the core failed to start")]
    StartFailed,
}

impl From<std::ffi::NulError> for Error {
    fn from(error: std::ffi::NulError) -> Self {
        Self::InteriorNul {
            position: error.nul_position(),
        }
    }
}

impl Error {
    /// Checks if this error comes from an enumeration code the bindings do not know.
    pub fn is_unknown_code(&self) -> bool {
        matches!(self, Error::UnknownCode(_))
    }
}
