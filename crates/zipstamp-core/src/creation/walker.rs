//! Directory tree walking with filename filtering.
//!
//! The walker enumerates regular files below a root directory and applies a
//! [`FilterSpec`] to each file's base name. Directory symlinks are never
//! descended; symlinks that resolve to regular files are treated as files.

use crate::ArchiveError;
use crate::Result;
use crate::creation::filters::FilterSpec;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// A file selected for archiving.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    /// Full filesystem path to the file.
    pub path: PathBuf,

    /// Path relative to the walked root.
    pub relative_path: PathBuf,
}

impl FileEntry {
    /// Returns the zip entry name: the relative path joined with `/`
    /// regardless of the host separator.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidEntryName`] if a path component is not
    /// valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use zipstamp_core::creation::FileEntry;
    ///
    /// let entry = FileEntry {
    ///     path: PathBuf::from("/data/project/sub/c.txt"),
    ///     relative_path: PathBuf::from("sub").join("c.txt"),
    /// };
    /// assert_eq!(entry.entry_name()?, "sub/c.txt");
    /// # Ok::<(), zipstamp_core::ArchiveError>(())
    /// ```
    pub fn entry_name(&self) -> Result<String> {
        let mut parts = Vec::new();
        for component in self.relative_path.components() {
            let part = component
                .as_os_str()
                .to_str()
                .ok_or_else(|| ArchiveError::InvalidEntryName {
                    path: self.relative_path.clone(),
                })?;
            parts.push(part);
        }
        Ok(parts.join("/"))
    }
}

/// Walks a directory tree and yields the files accepted by a filter.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use zipstamp_core::creation::FileCollector;
/// use zipstamp_core::creation::FilterSpec;
///
/// let filter = FilterSpec::default().with_include(vec!["*.rs".to_string()]);
/// let collector = FileCollector::new(Path::new("./src"), &filter);
///
/// for entry in collector.walk() {
///     let entry = entry?;
///     println!("Would add: {}", entry.relative_path.display());
/// }
/// # Ok::<(), zipstamp_core::ArchiveError>(())
/// ```
pub struct FileCollector<'a> {
    root: &'a Path,
    filter: &'a FilterSpec,
}

impl<'a> FileCollector<'a> {
    /// Creates a collector for the given root directory.
    #[must_use]
    pub fn new(root: &'a Path, filter: &'a FilterSpec) -> Self {
        Self { root, filter }
    }

    /// Returns a lazy, single-pass iterator over accepted files.
    ///
    /// Order follows the directory listing and is not guaranteed to be
    /// stable across runs; the set of yielded entries is.
    ///
    /// # Errors
    ///
    /// Items are errors when a directory below the root cannot be read.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry>> + '_ {
        WalkDir::new(self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => self.accept(&entry).map(Ok),
                Err(e) => Some(Err(ArchiveError::Io(io::Error::other(format!(
                    "walkdir error: {e}"
                ))))),
            })
    }

    /// Returns the entry if it is a regular file (or a symlink to one) whose
    /// name passes the filter.
    fn accept(&self, entry: &walkdir::DirEntry) -> Option<FileEntry> {
        let file_type = entry.file_type();
        let is_file = if file_type.is_symlink() {
            // Follow the link only to classify it; directories stay unvisited
            std::fs::metadata(entry.path()).is_ok_and(|m| m.is_file())
        } else {
            file_type.is_file()
        };

        if !is_file {
            return None;
        }

        let name = entry.file_name().to_string_lossy();
        if !self.filter.matches(&name) {
            tracing::debug!(path = %entry.path().display(), "filtered out");
            return None;
        }

        let relative_path = entry.path().strip_prefix(self.root).ok()?.to_path_buf();

        Some(FileEntry {
            path: entry.path().to_path_buf(),
            relative_path,
        })
    }
}

/// Collects every accepted file under `base_dir` into a vector.
///
/// # Errors
///
/// Returns an I/O error with kind `NotFound` if `base_dir` does not exist or
/// is not a directory, and an I/O error if traversal fails.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use zipstamp_core::creation::FilterSpec;
/// use zipstamp_core::creation::walker::collect;
///
/// let entries = collect(Path::new("./docs"), &FilterSpec::default())?;
/// println!("{} files", entries.len());
/// # Ok::<(), zipstamp_core::ArchiveError>(())
/// ```
pub fn collect(base_dir: &Path, filter: &FilterSpec) -> Result<Vec<FileEntry>> {
    if !base_dir.is_dir() {
        return Err(ArchiveError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("not a directory: {}", base_dir.display()),
        )));
    }

    FileCollector::new(base_dir, filter).walk().collect()
}
