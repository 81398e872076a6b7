//! Retention reporting and progress callbacks.

use std::path::PathBuf;

/// Outcome of one retention pass.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use zipstamp_core::RetentionReport;
///
/// let mut report = RetentionReport::default();
/// report.deleted.push(PathBuf::from("docs_20240101.zip"));
/// assert_eq!(report.total_removed(), 1);
/// assert!(!report.has_failures());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetentionReport {
    /// Archives that remain, newest first.
    pub kept: Vec<PathBuf>,

    /// Archives that were removed.
    pub deleted: Vec<PathBuf>,

    /// Manifests removed alongside their archives.
    pub manifests_deleted: Vec<PathBuf>,

    /// Deletions (or the directory listing) that failed.
    pub failures: Vec<RetentionFailure>,
}

impl RetentionReport {
    /// Returns whether any deletion failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns the number of removed files, archives and manifests together.
    #[must_use]
    pub fn total_removed(&self) -> usize {
        self.deleted.len() + self.manifests_deleted.len()
    }
}

/// A path the retention pass could not process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionFailure {
    /// The archive, manifest, or destination directory involved.
    pub path: PathBuf,

    /// Error description.
    pub reason: String,
}

/// Callback trait for progress reporting during archive creation.
///
/// Entries are reported by their zip entry name. `on_entry_complete` fires
/// only after an entry's data has been fully written to the archive, so an
/// inventory printed from it lists exactly what the archive contains.
///
/// # Examples
///
/// ```
/// use zipstamp_core::ProgressCallback;
///
/// struct PrintProgress;
///
/// impl ProgressCallback for PrintProgress {
///     fn on_entry_start(&mut self, name: &str, total: usize, current: usize) {
///         println!("[{current}/{total}] {name}");
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, name: &str) {
///         println!("  [✓] {name}");
///     }
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called before an entry is written.
    ///
    /// # Arguments
    ///
    /// * `name` - Zip entry name
    /// * `total` - Total number of entries
    /// * `current` - Current entry number (1-indexed)
    fn on_entry_start(&mut self, name: &str, total: usize, current: usize);

    /// Called for each chunk of source data copied into the archive.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called once an entry has been written.
    fn on_entry_complete(&mut self, name: &str);

    /// Called when the archive has been finalized.
    fn on_complete(&mut self);
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _name: &str, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _name: &str) {}

    fn on_complete(&mut self) {}
}
