//! Error conversion utilities for CLI.
//!
//! Converts zipstamp-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::io::ErrorKind;
use std::path::Path;
use zipstamp_core::ArchiveError;

/// Converts `ArchiveError` to user-friendly anyhow error with context
pub fn convert_archive_error(err: ArchiveError, folder: &Path) -> anyhow::Error {
    match err {
        ArchiveError::InvalidSource { path } => {
            anyhow!(
                "Invalid folder: {}\n\
                 HINT: Pass an existing directory to archive.",
                path.display()
            )
        }
        ArchiveError::InvalidCompressionLevel { level } => {
            anyhow!(
                "Invalid compression level {level}\n\
                 HINT: Use --compression-level with a value from 1 to 9."
            )
        }
        ArchiveError::InvalidEntryName { path } => {
            anyhow!(
                "Cannot archive '{}' from '{}': name is not valid UTF-8\n\
                 HINT: Rename the file or leave it out with --exclude.",
                path.display(),
                folder.display()
            )
        }
        ArchiveError::Io(io_err) if io_err.kind() == ErrorKind::PermissionDenied => {
            anyhow!(
                "Permission denied while archiving '{}': {}\n\
                 HINT: Check that the folder is readable and --backup-location is writable.",
                folder.display(),
                io_err
            )
        }
        ArchiveError::Io(io_err) => {
            anyhow!(
                "I/O error while archiving '{}': {}",
                folder.display(),
                io_err
            )
        }
        ArchiveError::Zip(reason) => {
            anyhow!(
                "Failed to write zip archive for '{}': {}",
                folder.display(),
                reason
            )
        }
    }
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    folder: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, folder))
}
