//! Archive naming: timestamp formatting and parsing, archive and manifest
//! file names.
//!
//! Archives are named `<source>_<timestamp>.zip` and manifests
//! `<source>_<timestamp>_inventory.txt`. The timestamp is produced with a
//! caller-supplied strftime format and parsed back with the same format when
//! ordering archives for retention.

use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;

/// Extension of produced archives, without the dot.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Suffix appended to an archive stem to name its manifest.
pub const MANIFEST_SUFFIX: &str = "_inventory.txt";

/// Formats `now` with a strftime-style format string.
///
/// The format is not validated. If it contains an unknown specifier the
/// format string itself is returned unchanged.
///
/// # Examples
///
/// ```
/// use chrono::Local;
/// use chrono::TimeZone;
/// use zipstamp_core::timestamp::format_timestamp;
///
/// let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
/// assert_eq!(format_timestamp(&now, "%Y%m%dT%H%M"), "20240309T1405");
/// assert_eq!(format_timestamp(&now, "backup"), "backup");
/// ```
#[must_use]
pub fn format_timestamp(now: &DateTime<Local>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        tracing::debug!(format, "unrecognised timestamp format, using it literally");
        return format.to_string();
    }
    out
}

/// Returns the final component of `source_dir`, used as the archive prefix.
///
/// Paths without a final component (such as `/`) give an empty prefix, so
/// the archive is still named `_<timestamp>.zip` inside the destination.
#[must_use]
pub fn source_base_name(source_dir: &Path) -> String {
    source_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Builds `<prefix>_<timestamp>.zip`.
///
/// # Examples
///
/// ```
/// use zipstamp_core::timestamp::archive_file_name;
///
/// assert_eq!(archive_file_name("photos", "20240309"), "photos_20240309.zip");
/// ```
#[must_use]
pub fn archive_file_name(prefix: &str, timestamp: &str) -> String {
    format!("{prefix}_{timestamp}.{ARCHIVE_EXTENSION}")
}

/// Returns the manifest path that pairs with an archive path.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use zipstamp_core::timestamp::manifest_path;
///
/// let manifest = manifest_path(Path::new("/backups/photos_20240309.zip"));
/// assert_eq!(manifest, Path::new("/backups/photos_20240309_inventory.txt"));
/// ```
#[must_use]
pub fn manifest_path(archive_path: &Path) -> PathBuf {
    let stem = archive_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    archive_path.with_file_name(format!("{stem}{MANIFEST_SUFFIX}"))
}

/// Extracts and parses the timestamp embedded in an archive file name.
///
/// The `<prefix>_` prefix and the `.zip` extension are stripped and the
/// remainder is parsed with `format`, first as a date-time and then as a
/// bare date (at midnight). Returns `None` when the name does not have the
/// expected shape or the remainder does not parse.
///
/// # Examples
///
/// ```
/// use zipstamp_core::timestamp::parse_archive_timestamp;
///
/// let ts = parse_archive_timestamp("docs_20240309T1405.zip", "docs", "%Y%m%dT%H%M");
/// assert_eq!(ts.unwrap().to_string(), "2024-03-09 14:05:00");
///
/// let date_only = parse_archive_timestamp("docs_20240309.zip", "docs", "%Y%m%d");
/// assert_eq!(date_only.unwrap().to_string(), "2024-03-09 00:00:00");
///
/// assert!(parse_archive_timestamp("docs_latest.zip", "docs", "%Y%m%d").is_none());
/// ```
#[must_use]
pub fn parse_archive_timestamp(
    file_name: &str,
    prefix: &str,
    format: &str,
) -> Option<NaiveDateTime> {
    let raw = file_name
        .strip_prefix(prefix)?
        .strip_prefix('_')?
        .strip_suffix(ARCHIVE_EXTENSION)?
        .strip_suffix('.')?;

    NaiveDateTime::parse_from_str(raw, format)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, format)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
