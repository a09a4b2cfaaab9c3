use std::fmt;
use std::str::FromStr;

/// QR Code symbol version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol version (21x21 modules)
    pub const MIN: Version = Version(1);
    /// Largest symbol version (177x177 modules)
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting anything outside 1..=40
    pub fn new(number: u8) -> Result<Self, VersionError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&number) {
            Ok(Self(number))
        } else {
            Err(VersionError::OutOfRange(number as u32))
        }
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Side length of the symbol in modules
    pub fn size(&self) -> usize {
        17 + 4 * self.0 as usize
    }

    /// Whether the standard places any alignment pattern in this version.
    ///
    /// Version 1 has none, even though the coordinate formula still yields
    /// an allowed position for it.
    pub fn has_alignment_patterns(&self) -> bool {
        self.0 >= 2
    }

    /// Whether this version carries the two 6x3 version-information blocks
    pub fn has_version_info(&self) -> bool {
        self.0 >= 7
    }

    /// Iterate versions from `from` to `to` inclusive, ascending
    pub fn range(from: Version, to: Version) -> impl DoubleEndedIterator<Item = Version> {
        (from.0..=to.0).map(Version)
    }

    /// Iterate every version, 1 through 40
    pub fn all() -> impl DoubleEndedIterator<Item = Version> {
        Self::range(Self::MIN, Self::MAX)
    }
}

impl TryFrom<u32> for Version {
    type Error = VersionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| VersionError::OutOfRange(value))
            .and_then(|n| Version::new(n).map_err(|_| VersionError::OutOfRange(value)))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| VersionError::Parse(s.to_string()))?;
        Version::try_from(value)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejected version input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Number outside 1..=40
    OutOfRange(u32),
    /// Text that is not a number
    Parse(String),
}

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionError::OutOfRange(v) => {
                write!(f, "version {} is outside the valid range 1-40", v)
            }
            VersionError::Parse(s) => write!(f, "invalid version number: {:?}", s),
        }
    }
}

impl std::error::Error for VersionError {}
