//! Retention of timestamped archives.
//!
//! Every `<prefix>_*.zip` in a destination directory is a candidate, where
//! `<prefix>` is the source directory's base name. Candidates are ordered
//! newest first by the timestamp embedded in their name, or by filesystem
//! time when the name does not parse, and everything past the keep count is
//! removed together with its manifest.
//!
//! Deletion failures never abort the pass: each one is logged as a warning,
//! recorded in the [`RetentionReport`], and the remaining candidates are
//! still processed.

use crate::Result;
use crate::report::RetentionFailure;
use crate::report::RetentionReport;
use crate::timestamp;
use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDateTime;
use glob::Pattern;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;

/// Where a candidate's ordering timestamp came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    /// Parsed from the archive file name.
    Parsed,

    /// Taken from filesystem metadata because the name did not parse.
    Filesystem,
}

/// An archive considered by the retention pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionCandidate {
    /// Path of the archive.
    pub path: PathBuf,

    /// Resolved timestamp in local time.
    pub timestamp: NaiveDateTime,

    /// Origin of `timestamp`.
    pub source: TimestampSource,
}

impl RetentionCandidate {
    /// Path of the manifest paired with this archive (may not exist).
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        timestamp::manifest_path(&self.path)
    }
}

/// Split of the candidates into archives to keep and archives to delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetentionPlan {
    /// Most recent candidates, newest first.
    pub keep: Vec<RetentionCandidate>,

    /// Older candidates, newest first.
    pub delete: Vec<RetentionCandidate>,

    /// Directory entries that could not be read while listing.
    pub skipped: Vec<RetentionFailure>,
}

/// Lists the archives belonging to `source_dir` in `destination_dir`,
/// newest first.
///
/// Ties on the resolved timestamp are broken by file name, descending.
/// Unreadable directory entries are logged and skipped.
///
/// # Errors
///
/// Returns an I/O error if `destination_dir` cannot be listed.
pub fn find_candidates(
    source_dir: &Path,
    destination_dir: &Path,
    date_format: &str,
) -> Result<Vec<RetentionCandidate>> {
    list_candidates(source_dir, destination_dir, date_format).map(|(candidates, _)| candidates)
}

/// Candidates newest first, plus one failure per unreadable entry.
fn list_candidates(
    source_dir: &Path,
    destination_dir: &Path,
    date_format: &str,
) -> Result<(Vec<RetentionCandidate>, Vec<RetentionFailure>)> {
    let prefix = timestamp::source_base_name(source_dir);
    let pattern = candidate_pattern(&prefix);
    let mut candidates = Vec::new();
    let mut skipped = Vec::new();

    for entry in fs::read_dir(destination_dir)? {
        match candidate_from_entry(entry, destination_dir, &prefix, pattern.as_ref(), date_format)
        {
            Ok(Some(candidate)) => candidates.push(candidate),
            Ok(None) => {}
            Err(failure) => skipped.push(failure),
        }
    }

    candidates.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.path.cmp(&a.path))
    });

    Ok((candidates, skipped))
}

/// Turns one directory entry into a candidate, `None` when it is not one.
fn candidate_from_entry(
    entry: io::Result<fs::DirEntry>,
    destination_dir: &Path,
    prefix: &str,
    pattern: Option<&Pattern>,
    date_format: &str,
) -> std::result::Result<Option<RetentionCandidate>, RetentionFailure> {
    let entry = entry.map_err(|e| {
        tracing::warn!(
            destination = %destination_dir.display(),
            error = %e,
            "skipping unreadable directory entry"
        );
        RetentionFailure {
            path: destination_dir.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    let name = entry.file_name();
    let name = name.to_string_lossy();

    if !pattern.is_some_and(|p| p.matches(&name)) {
        return Ok(None);
    }
    if !entry.file_type().is_ok_and(|t| t.is_file()) {
        return Ok(None);
    }

    let path = entry.path();
    let candidate = match timestamp::parse_archive_timestamp(&name, prefix, date_format) {
        Some(parsed) => RetentionCandidate {
            path,
            timestamp: parsed,
            source: TimestampSource::Parsed,
        },
        None => {
            tracing::debug!(
                archive = %path.display(),
                date_format,
                "timestamp not parseable from name, using filesystem time"
            );
            RetentionCandidate {
                timestamp: filesystem_time(&path),
                path,
                source: TimestampSource::Filesystem,
            }
        }
    };

    Ok(Some(candidate))
}

/// Computes which archives a retention pass would keep and delete, without
/// touching the filesystem.
///
/// # Errors
///
/// Returns an I/O error if `destination_dir` cannot be listed.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use zipstamp_core::retention::plan_retention;
///
/// let plan = plan_retention(Path::new("./notes"), Path::new("./backups"), "%Y%m%dT%H%M", 3)?;
/// for candidate in &plan.delete {
///     println!("would remove {}", candidate.path.display());
/// }
/// # Ok::<(), zipstamp_core::ArchiveError>(())
/// ```
pub fn plan_retention(
    source_dir: &Path,
    destination_dir: &Path,
    date_format: &str,
    keep: usize,
) -> Result<RetentionPlan> {
    let (mut candidates, skipped) = list_candidates(source_dir, destination_dir, date_format)?;
    let delete = candidates.split_off(keep.min(candidates.len()));

    Ok(RetentionPlan {
        keep: candidates,
        delete,
        skipped,
    })
}

/// Deletes all but the `keep` most recent archives of `source_dir` in
/// `destination_dir`, along with their manifests.
///
/// With `keep == 0` every candidate is removed, including an archive created
/// moments earlier by the same caller.
///
/// Never fails: listing and deletion errors are logged, collected in the
/// returned report, and processing continues with the next candidate.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use zipstamp_core::enforce_retention;
///
/// let report = enforce_retention(Path::new("./notes"), Path::new("./backups"), "%Y%m%dT%H%M", 2);
/// println!("removed {} archives", report.deleted.len());
/// ```
pub fn enforce_retention(
    source_dir: &Path,
    destination_dir: &Path,
    date_format: &str,
    keep: usize,
) -> RetentionReport {
    let mut report = RetentionReport::default();

    let plan = match plan_retention(source_dir, destination_dir, date_format, keep) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::warn!(
                destination = %destination_dir.display(),
                error = %e,
                "cannot list archives for retention"
            );
            report.failures.push(RetentionFailure {
                path: destination_dir.to_path_buf(),
                reason: e.to_string(),
            });
            return report;
        }
    };

    report.kept = plan.keep.into_iter().map(|c| c.path).collect();
    report.failures.extend(plan.skipped);

    for candidate in plan.delete {
        delete_candidate(&candidate, &mut report);
    }

    report
}

/// Removes one archive and then its manifest, recording the outcome.
fn delete_candidate(candidate: &RetentionCandidate, report: &mut RetentionReport) {
    if let Err(e) = fs::remove_file(&candidate.path) {
        tracing::warn!(
            archive = %candidate.path.display(),
            error = %e,
            "failed to remove old archive"
        );
        report.failures.push(RetentionFailure {
            path: candidate.path.clone(),
            reason: e.to_string(),
        });
        return;
    }
    tracing::info!(archive = %candidate.path.display(), "removed old archive");
    report.deleted.push(candidate.path.clone());

    let manifest = candidate.manifest_path();
    if !manifest.exists() {
        return;
    }

    match fs::remove_file(&manifest) {
        Ok(()) => {
            tracing::info!(manifest = %manifest.display(), "removed old manifest");
            report.manifests_deleted.push(manifest);
        }
        Err(e) => {
            tracing::warn!(
                manifest = %manifest.display(),
                error = %e,
                "failed to remove old manifest"
            );
            report.failures.push(RetentionFailure {
                path: manifest,
                reason: e.to_string(),
            });
        }
    }
}

/// `<escaped prefix>_*.zip`; metacharacters in the prefix match literally.
fn candidate_pattern(prefix: &str) -> Option<Pattern> {
    Pattern::new(&format!(
        "{}_*.{}",
        Pattern::escape(prefix),
        timestamp::ARCHIVE_EXTENSION
    ))
    .ok()
}

/// Creation time, else modification time, else the Unix epoch.
fn filesystem_time(path: &Path) -> NaiveDateTime {
    let time = fs::metadata(path)
        .and_then(|m| m.created().or_else(|_| m.modified()))
        .unwrap_or(SystemTime::UNIX_EPOCH);
    DateTime::<Local>::from(time).naive_local()
}
