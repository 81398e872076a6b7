//! Inventory manifest written next to an archive.
//!
//! The manifest is a UTF-8 text file listing one entry name per line, in the
//! order the entries were written to the archive, with no trailing newline.

use crate::Result;
use std::fs;
use std::path::Path;

/// Renders the manifest body for a list of entry names.
///
/// # Examples
///
/// ```
/// use zipstamp_core::creation::manifest::render_manifest;
///
/// let names = vec!["a.txt".to_string(), "sub/c.txt".to_string()];
/// assert_eq!(render_manifest(&names), "a.txt\nsub/c.txt");
/// assert_eq!(render_manifest(&[]), "");
/// ```
#[must_use]
pub fn render_manifest(entries: &[String]) -> String {
    entries.join("\n")
}

/// Writes the manifest for `entries` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn write_manifest(path: &Path, entries: &[String]) -> Result<()> {
    fs::write(path, render_manifest(entries))?;
    tracing::debug!(manifest = %path.display(), entries = entries.len(), "wrote manifest");
    Ok(())
}
