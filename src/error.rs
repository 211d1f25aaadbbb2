// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures reading or writing `settings.toml`.
///
/// Image loading failures are reported separately through
/// [`crate::loader::LoadError`] because they are rendered, not propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The settings file or its directory could not be accessed.
    Io(String),
    /// The file exists but is not valid settings TOML.
    InvalidSettings(String),
    /// The in-memory settings could not be encoded as TOML.
    Encoding(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "settings file not accessible: {e}"),
            Error::InvalidSettings(e) => write!(f, "invalid settings: {e}"),
            Error::Encoding(e) => write!(f, "settings could not be encoded: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::InvalidSettings(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
