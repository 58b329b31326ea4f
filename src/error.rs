//! Custom error types and result handling for Seiri operations.
//!
//! This module defines the error handling system used throughout Seiri.
//! All fallible operations return a [`Result<T>`] which is a type alias for
//! `std::result::Result<T, Error>`.
//!
//! Parsing itself never fails: a filename without a recognizable volume number
//! produces an empty number, and only the convenience entry points that need a
//! final name turn that into [`Error::NoNumberFound`].
use std::path::PathBuf;

/// Type alias for Results with Seiri errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error type for all Seiri operations.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O errors from the standard library
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Regular expression parsing errors
    #[error(transparent)]
    Regex(#[from] regex::Error),
    /// Async task join errors
    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Semaphore(#[from] tokio::sync::AcquireError),
    #[error(transparent)]
    SeiriBuilder(#[from] crate::seiri::SeiriConfigBuilderError),
    /// Every extraction strategy was tried and none found a volume number
    #[error("No volume number found in '{0}'")]
    NoNumberFound(String),
    /// The name does not end with one of the configured archive suffixes
    #[error("No recognized archive suffix in '{0}'")]
    UnknownSuffix(String),
    /// A strategy matched its pattern but an expected capture group was absent
    #[error("Strategy '{strategy}' matched without capturing '{group}'")]
    AmbiguousMatch {
        strategy: &'static str,
        group: &'static str,
    },
    /// The rename target already exists on disk
    #[error("Rename target already exists: {0:?}")]
    RenameCollision(PathBuf),
    /// Error for invalid file or directory paths
    #[error("The given path '{0:?}' is invalid: {1}")]
    InvalidPath(PathBuf, String),
    /// Error for resources that couldn't be found (e.g., source directory)
    #[error("Not found: {0}")]
    NotFound(String),
    /// Other errors that don't fit into specific categories
    #[error("Other error: {0}")]
    Other(String),
}

// Basic From<String> conversion for convenience
impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Other(error)
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        Error::Other(error.to_string())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
