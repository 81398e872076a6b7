//! Test fixtures for archive creation and retention.
//!
//! Each fixture owns a temporary directory holding an `input/` source tree
//! and a `backups/` destination, so tests never share process-wide paths.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fs;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builder for a source tree plus an empty destination directory.
pub struct BackupFixture {
    temp: TempDir,
}

impl BackupFixture {
    /// Creates empty `input/` and `backups/` directories.
    #[must_use]
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("input")).unwrap();
        fs::create_dir(temp.path().join("backups")).unwrap();
        Self { temp }
    }

    /// Adds a file below the source, creating parent directories.
    #[must_use]
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.source().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    /// Places an archive file (and optionally its manifest) in the
    /// destination without going through the archiver.
    #[must_use]
    pub fn with_archive(self, name: &str, with_manifest: bool) -> Self {
        let path = self.destination().join(name);
        fs::write(&path, b"PK").unwrap();
        if with_manifest {
            fs::write(crate::timestamp::manifest_path(&path), "a.txt").unwrap();
        }
        self
    }

    /// The source directory.
    #[must_use]
    pub fn source(&self) -> PathBuf {
        self.temp.path().join("input")
    }

    /// The destination directory.
    #[must_use]
    pub fn destination(&self) -> PathBuf {
        self.temp.path().join("backups")
    }

    /// The temporary root holding both directories.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// File names in the destination, sorted.
    #[must_use]
    pub fn destination_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.destination())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for BackupFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry names of a ZIP file, in central directory order.
#[must_use]
pub fn zip_entry_names(path: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}
