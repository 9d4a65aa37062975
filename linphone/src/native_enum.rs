//! Checked translation between engine enumeration codes and Rust enums.

use thiserror::Error;

use crate::Sealed;

/// A Rust enum mirroring an integer enumeration of the engine.
///
/// Both directions are total over the known cases; decoding a code outside them yields [`UnknownCode`].
pub trait NativeEnum: Sealed + Copy + Eq + Sized + 'static {
    /// Integer type of the native codes.
    type Raw: Copy + Eq + Into<i64>;

    /// Name of the enumeration, used in errors and logs.
    const NAME: &'static str;

    /// Every case, in native order.
    const ALL: &'static [Self];

    /// Encodes the case as its native code.
    fn to_raw(self) -> Self::Raw;

    /// Decodes a native code.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCode`] if `raw` matches no case.
    fn try_from_raw(raw: Self::Raw) -> Result<Self, UnknownCode>;
}

/// The engine reported a code these bindings do not know about, typically because the engine is newer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown {kind} code {code}")]
pub struct UnknownCode {
    /// Name of the enumeration.
    pub kind: &'static str,
    /// The raw code.
    pub code: i64,
}

impl UnknownCode {
    pub(crate) fn new<E: NativeEnum>(raw: E::Raw) -> Self {
        let code = raw.into();
        tracing::warn!(kind = E::NAME, code, "unknown native enumeration code");
        Self { kind: E::NAME, code }
    }
}

/// Declares an enum bridged to integer constants of `linphone_sys`.
///
/// The optional `describe` function renders a native code as a static C string.
macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $raw:ty $(, describe = $describe:path)? {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:path,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::Sealed for $name {}

        impl $crate::native_enum::NativeEnum for $name {
            type Raw = $raw;

            const NAME: &'static str = stringify!($name);

            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn to_raw(self) -> $raw {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            fn try_from_raw(raw: $raw) -> ::std::result::Result<Self, $crate::native_enum::UnknownCode> {
                match raw {
                    $(code if code == $code => Ok(Self::$variant),)+
                    code => Err($crate::native_enum::UnknownCode::new::<Self>(code)),
                }
            }
        }

        impl TryFrom<$raw> for $name {
            type Error = $crate::native_enum::UnknownCode;

            fn try_from(raw: $raw) -> ::std::result::Result<Self, $crate::native_enum::UnknownCode> {
                <Self as $crate::native_enum::NativeEnum>::try_from_raw(raw)
            }
        }

        impl From<$name> for $raw {
            fn from(value: $name) -> Self {
                <$name as $crate::native_enum::NativeEnum>::to_raw(value)
            }
        }

        $(
            impl $name {
                /// Human-readable name of the case, as rendered by the engine.
                pub fn description(self) -> ::std::option::Option<::std::string::String> {
                    let raw = <Self as $crate::native_enum::NativeEnum>::to_raw(self);
                    unsafe { $crate::ffi_wrapper::copy_string($describe(raw)) }
                }
            }
        )?
    };
}

pub(crate) use native_enum;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CallDirection, CallState, CallStatus, Reason, TransportType};
    use tracing_test::traced_test;

    fn assert_round_trip<E: NativeEnum + std::fmt::Debug>(expected_len: usize) {
        assert_eq!(E::ALL.len(), expected_len, "{}", E::NAME);
        for &case in E::ALL {
            assert_eq!(E::try_from_raw(case.to_raw()), Ok(case));
        }
    }

    #[test]
    fn test_round_trip() {
        assert_round_trip::<CallState>(21);
        assert_round_trip::<CallDirection>(2);
        assert_round_trip::<CallStatus>(7);
        assert_round_trip::<Reason>(21);
        assert_round_trip::<TransportType>(4);
    }

    #[test]
    fn test_codes_are_contiguous() {
        for (index, case) in CallState::ALL.iter().enumerate() {
            assert_eq!(case.to_raw() as usize, index);
        }
        for (index, case) in Reason::ALL.iter().enumerate() {
            assert_eq!(case.to_raw() as usize, index);
        }
    }

    fn assert_decode_then_encode<E: NativeEnum<Raw = i32> + std::fmt::Debug>(
        codes: std::ops::RangeInclusive<i32>,
    ) {
        for code in codes {
            let case = E::try_from_raw(code).unwrap();
            assert_eq!(case.to_raw(), code, "{}::{case:?}", E::NAME);
        }
    }

    #[test]
    fn test_decode_then_encode() {
        assert_decode_then_encode::<CallState>(0..=20);
        assert_decode_then_encode::<CallDirection>(0..=1);
        assert_decode_then_encode::<CallStatus>(0..=6);
        assert_decode_then_encode::<Reason>(0..=20);
        assert_decode_then_encode::<TransportType>(0..=3);
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(
            CallState::try_from(21),
            Err(UnknownCode {
                kind: "CallState",
                code: 21
            })
        );
        assert!(TransportType::try_from(-1).is_err());
        assert_eq!(
            UnknownCode::new::<Reason>(99).to_string(),
            "unknown Reason code 99"
        );
    }

    #[test]
    #[traced_test]
    fn test_unknown_code_is_logged() {
        let _ = CallStatus::try_from(42);
        assert!(logs_contain("unknown native enumeration code"));
        assert!(logs_contain("CallStatus"));
    }

    #[cfg(not(feature = "native"))]
    #[test]
    fn test_description() {
        assert_eq!(
            CallState::PausedByRemote.description().as_deref(),
            Some("LinphoneCallPausedByRemote")
        );
        assert_eq!(TransportType::Tls.description().as_deref(), Some("tls"));
        assert!(Reason::Declined.description().is_some());
    }
}
