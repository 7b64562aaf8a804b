// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Storage(StorageError),
    Image(String),
    InvalidShareLink(String),
}

/// Failures raised while reading or writing diary records.
/// Used to pick a user-facing, localized notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store could not be read or written.
    Io(String),

    /// A record exists but could not be decoded.
    Corrupted(String),

    /// A record could not be encoded.
    Encode(String),

    /// The key contains characters the store refuses to map to a file.
    InvalidKey(String),
}

impl StorageError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            StorageError::Io(_) => "notification-storage-io-error",
            StorageError::Corrupted(_) => "notification-storage-corrupted",
            StorageError::Encode(_) => "notification-storage-encode-error",
            StorageError::InvalidKey(_) => "notification-storage-invalid-key",
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "I/O error: {}", msg),
            StorageError::Corrupted(msg) => write!(f, "Corrupted record: {}", msg),
            StorageError::Encode(msg) => write!(f, "Encoding failed: {}", msg),
            StorageError::InvalidKey(key) => write!(f, "Invalid storage key: {}", key),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::InvalidShareLink(e) => write!(f, "Invalid share link: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Error::Storage(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
