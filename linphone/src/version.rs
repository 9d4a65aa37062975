use std::fmt;
use std::str::FromStr;

/// Major version of the engine the enumeration tables of this crate follow.
pub const SUPPORTED_MAJOR: u32 = 3;

/// Version of the linphone engine, as reported at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EngineVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl EngineVersion {
    /// Checks if the engine numbers its enumerations the way these bindings expect.
    pub fn is_compatible(&self) -> bool {
        self.major == SUPPORTED_MAJOR
    }
}

/// Packs the version as `0xMMMMmmpp`. Each component is truncated to its field.
impl From<EngineVersion> for u32 {
    fn from(version: EngineVersion) -> Self {
        ((version.major & 0xFFFF) << 16) | ((version.minor & 0xFF) << 8) | (version.patch & 0xFF)
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A version string that does not start with `major.minor.patch`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed engine version `{0}`")]
pub struct ParseVersionError(pub String);

impl FromStr for EngineVersion {
    type Err = ParseVersionError;

    /// Parses `major.minor.patch`, ignoring any pre-release or build suffix (`5.3.0-alpha+1234`).
    fn from_str(version: &str) -> Result<Self, Self::Err> {
        let error = || ParseVersionError(version.to_string());

        let mut numbers = version.trim().splitn(3, '.');
        let mut next = |last: bool| -> Result<u32, ParseVersionError> {
            let part = numbers.next().ok_or_else(error)?;
            let digits = if last {
                let end = part
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(part.len());
                &part[..end]
            } else {
                part
            };
            digits.parse().map_err(|_| error())
        };

        Ok(Self {
            major: next(false)?,
            minor: next(false)?,
            patch: next(true)?,
        })
    }
}
