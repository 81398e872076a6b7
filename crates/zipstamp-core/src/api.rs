//! High-level public API for archive creation.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::DateTime;
use chrono::Local;

use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::creation::ArchiveReport;
use crate::creation::ArchiveRequest;
use crate::creation::manifest;
use crate::creation::walker;
use crate::creation::zip;
use crate::retention::enforce_retention;
use crate::timestamp;

/// Archives a directory and applies retention, returning the archive path.
///
/// The archive is written to the request's destination as
/// `<source>_<timestamp>.zip`. When `request.inventory` is set, a
/// `<source>_<timestamp>_inventory.txt` manifest is written next to it.
/// Older archives of the same source beyond `request.keep` are then removed.
///
/// # Errors
///
/// Returns an error if:
/// - The source is not an existing directory
/// - The compression level is out of range
/// - The archive or manifest cannot be written
///
/// Retention problems are never errors; see
/// [`create_archive_with_progress`] to inspect them.
///
/// # Examples
///
/// ```no_run
/// use zipstamp_core::create_archive;
/// use zipstamp_core::creation::ArchiveRequest;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let request = ArchiveRequest::new("./project")
///     .with_exclude(vec!["*.tmp".to_string()])
///     .with_destination("./backups");
/// let archive = create_archive(&request)?;
/// println!("Created {}", archive.display());
/// # Ok(())
/// # }
/// ```
pub fn create_archive(request: &ArchiveRequest) -> Result<PathBuf> {
    create_archive_with_progress(request, &mut NoopProgress).map(|report| report.archive_path)
}

/// Archives a directory with progress reporting.
///
/// Behaves like [`create_archive`] but reports each written entry to
/// `progress` and returns the full [`ArchiveReport`].
///
/// # Errors
///
/// Same as [`create_archive`].
///
/// # Examples
///
/// ```no_run
/// use zipstamp_core::NoopProgress;
/// use zipstamp_core::create_archive_with_progress;
/// use zipstamp_core::creation::ArchiveRequest;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let request = ArchiveRequest::new("./project").with_inventory(true);
/// let report = create_archive_with_progress(&request, &mut NoopProgress)?;
/// for name in &report.entries {
///     println!("  {name}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn create_archive_with_progress(
    request: &ArchiveRequest,
    progress: &mut dyn ProgressCallback,
) -> Result<ArchiveReport> {
    create_archive_at(request, Local::now(), progress)
}

/// Archives a directory using `now` for the archive timestamp.
///
/// # Errors
///
/// Same as [`create_archive`].
///
/// # Examples
///
/// ```no_run
/// use chrono::Local;
/// use chrono::TimeZone;
/// use zipstamp_core::NoopProgress;
/// use zipstamp_core::create_archive_at;
/// use zipstamp_core::creation::ArchiveRequest;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let now = Local.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
/// let request = ArchiveRequest::new("./project").with_destination("./backups");
/// let report = create_archive_at(&request, now, &mut NoopProgress)?;
/// assert!(report.archive_path.ends_with("project_20240601T0930.zip"));
/// # Ok(())
/// # }
/// ```
pub fn create_archive_at(
    request: &ArchiveRequest,
    now: DateTime<Local>,
    progress: &mut dyn ProgressCallback,
) -> Result<ArchiveReport> {
    request.validate()?;

    // Resolve `.` and friends so the archive is named after the real directory
    let source_dir = fs::canonicalize(&request.source_dir)?;
    let destination = request.destination_dir()?;

    let stamp = timestamp::format_timestamp(&now, &request.date_format);
    let prefix = timestamp::source_base_name(&source_dir);
    let archive_path = destination.join(timestamp::archive_file_name(&prefix, &stamp));

    let entries = walker::collect(&source_dir, &request.filter)?;
    tracing::debug!(
        source = %source_dir.display(),
        files = entries.len(),
        "collected files"
    );

    let start = Instant::now();

    let outcome = zip::write_archive(
        &archive_path,
        &entries,
        request.compression_level,
        progress,
    )?;

    let manifest_path = if request.inventory {
        let path = timestamp::manifest_path(&archive_path);
        manifest::write_manifest(&path, &outcome.entries)?;
        Some(path)
    } else {
        None
    };

    let mut report = ArchiveReport {
        bytes_compressed: fs::metadata(&archive_path)?.len(),
        duration: start.elapsed(),
        files_added: outcome.entries.len(),
        bytes_written: outcome.bytes_read,
        entries: outcome.entries,
        manifest_path,
        archive_path,
        ..Default::default()
    };

    tracing::info!(
        archive = %report.archive_path.display(),
        files = report.files_added,
        bytes = report.bytes_written,
        "created archive"
    );

    report.retention = enforce_retention(
        &source_dir,
        &destination,
        &request.date_format,
        request.keep,
    );

    Ok(report)
}
