//! Error types for archive creation and retention.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that abort an archive creation request.
///
/// Retention problems are not represented here: failed deletions and
/// unparseable archive names are recovered inside the retention pass and
/// reported through [`RetentionReport`](crate::RetentionReport).
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source directory is missing or is not a directory.
    #[error("invalid source directory: {path}")]
    InvalidSource {
        /// The rejected source path.
        path: PathBuf,
    },

    /// The zip writer rejected an operation.
    #[error("zip write failed: {0}")]
    Zip(String),

    /// Compression level outside 1-9.
    #[error("invalid compression level {level}, expected 1-9")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },

    /// A relative path cannot be represented as a zip entry name.
    #[error("entry name is not valid UTF-8: {path}")]
    InvalidEntryName {
        /// The offending relative path.
        path: PathBuf,
    },
}

impl ArchiveError {
    /// Returns `true` if the error was caused by the caller's input rather
    /// than by the filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use zipstamp_core::ArchiveError;
    ///
    /// let err = ArchiveError::InvalidSource {
    ///     path: PathBuf::from("/missing"),
    /// };
    /// assert!(err.is_invalid_input());
    ///
    /// let err = ArchiveError::Io(std::io::Error::other("disk full"));
    /// assert!(!err.is_invalid_input());
    /// ```
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidSource { .. } | Self::InvalidCompressionLevel { .. }
        )
    }
}

impl From<zip::result::ZipError> for ArchiveError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io) => Self::Io(io),
            other => Self::Zip(other.to_string()),
        }
    }
}
