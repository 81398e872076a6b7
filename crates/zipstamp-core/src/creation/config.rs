//! Parameters of one archive creation request.

use crate::ArchiveError;
use crate::Result;
use crate::creation::filters::FilterSpec;
use std::path::Path;
use std::path::PathBuf;

/// Timestamp format used when the caller does not supply one.
pub const DEFAULT_DATE_FORMAT: &str = "%Y%m%dT%H%M";

/// Number of archives kept per source directory when unspecified.
pub const DEFAULT_KEEP: usize = 2;

/// Deflate level used when unspecified.
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 6;

/// A request to archive one directory.
///
/// # Examples
///
/// ```
/// use zipstamp_core::creation::ArchiveRequest;
///
/// let request = ArchiveRequest::new("./notes")
///     .with_include(vec!["*.md".to_string()])
///     .with_inventory(true)
///     .with_destination("./backups")
///     .with_keep(5);
///
/// assert_eq!(request.keep, 5);
/// assert!(request.inventory);
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveRequest {
    /// Directory to archive. Must exist and be a directory.
    pub source_dir: PathBuf,

    /// Include/exclude patterns applied to file base names.
    pub filter: FilterSpec,

    /// strftime-style format for the archive timestamp.
    ///
    /// Default: `%Y%m%dT%H%M`.
    pub date_format: String,

    /// Write a `<stem>_inventory.txt` manifest next to the archive.
    ///
    /// Default: `false`.
    pub inventory: bool,

    /// Directory that receives the archive.
    ///
    /// `None` means the current working directory. The directory is not
    /// created; callers create it beforehand.
    pub destination: Option<PathBuf>,

    /// Number of most recent archives to keep after this run.
    ///
    /// Default: `2`. Zero removes every archive, including the one just
    /// created.
    pub keep: usize,

    /// Deflate compression level (1-9).
    ///
    /// Default: `6`.
    pub compression_level: u8,
}

impl Default for ArchiveRequest {
    /// Archives the current directory.
    fn default() -> Self {
        Self::new(".")
    }
}

impl ArchiveRequest {
    /// Creates a request for `source_dir` with default settings.
    #[must_use]
    pub fn new<P: AsRef<Path>>(source_dir: P) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
            filter: FilterSpec::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            inventory: false,
            destination: None,
            keep: DEFAULT_KEEP,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }

    /// Sets the full filter.
    #[must_use]
    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the include patterns.
    #[must_use]
    pub fn with_include(mut self, patterns: Vec<String>) -> Self {
        self.filter.include = patterns;
        self
    }

    /// Sets the exclude patterns.
    #[must_use]
    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.filter.exclude = patterns;
        self
    }

    /// Sets the timestamp format.
    #[must_use]
    pub fn with_date_format<S: Into<String>>(mut self, format: S) -> Self {
        self.date_format = format.into();
        self
    }

    /// Sets whether a manifest is written.
    #[must_use]
    pub fn with_inventory(mut self, inventory: bool) -> Self {
        self.inventory = inventory;
        self
    }

    /// Sets the destination directory.
    #[must_use]
    pub fn with_destination<P: AsRef<Path>>(mut self, destination: P) -> Self {
        self.destination = Some(destination.as_ref().to_path_buf());
        self
    }

    /// Sets the retention count.
    #[must_use]
    pub fn with_keep(mut self, keep: usize) -> Self {
        self.keep = keep;
        self
    }

    /// Sets the compression level.
    ///
    /// The value is checked by [`validate`](Self::validate), not here.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = level;
        self
    }

    /// Returns the destination directory, resolving `None` to the current
    /// working directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the current directory cannot be determined.
    pub fn destination_dir(&self) -> Result<PathBuf> {
        match &self.destination {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Validates the request before any filesystem writes happen.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source directory does not exist or is not a directory
    /// - The compression level is not in range 1-9
    pub fn validate(&self) -> Result<()> {
        if !self.source_dir.is_dir() {
            return Err(ArchiveError::InvalidSource {
                path: self.source_dir.clone(),
            });
        }

        if !(1..=9).contains(&self.compression_level) {
            return Err(ArchiveError::InvalidCompressionLevel {
                level: self.compression_level,
            });
        }

        Ok(())
    }
}
