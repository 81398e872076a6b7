//! Archive creation operation reporting.

use crate::report::RetentionReport;
use std::path::PathBuf;
use std::time::Duration;

/// Report of one archive creation request.
///
/// # Examples
///
/// ```
/// use zipstamp_core::creation::ArchiveReport;
///
/// let mut report = ArchiveReport::default();
/// report.bytes_written = 1000;
/// report.bytes_compressed = 250;
///
/// assert_eq!(report.compression_ratio(), 4.0);
/// assert_eq!(report.compression_percentage(), 75.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveReport {
    /// Path of the created archive.
    pub archive_path: PathBuf,

    /// Path of the manifest, when one was written.
    pub manifest_path: Option<PathBuf>,

    /// Entry names in archive-write order.
    pub entries: Vec<String>,

    /// Number of files added to the archive.
    pub files_added: usize,

    /// Total bytes read from source files (uncompressed).
    pub bytes_written: u64,

    /// Size of the finished archive on disk.
    pub bytes_compressed: u64,

    /// Duration of the archive and manifest stages.
    pub duration: Duration,

    /// Outcome of the retention pass that followed creation.
    pub retention: RetentionReport,
}

impl ArchiveReport {
    /// Returns whether the archive created by this run was itself removed by
    /// retention (possible with `keep = 0`).
    #[must_use]
    pub fn archive_removed(&self) -> bool {
        self.retention.deleted.contains(&self.archive_path)
    }

    /// Returns the compression ratio (uncompressed / compressed).
    ///
    /// Returns 0.0 if either size is 0.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_compressed == 0 || self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.bytes_compressed as f64
    }

    /// Returns the compression percentage (space saved).
    ///
    /// Returns 0.0 if nothing was written and never goes below 0.0 for
    /// archives larger than their input.
    #[must_use]
    pub fn compression_percentage(&self) -> f64 {
        if self.bytes_written == 0 || self.bytes_compressed >= self.bytes_written {
            return 0.0;
        }
        (1.0 - self.bytes_compressed as f64 / self.bytes_written as f64) * 100.0
    }
}
