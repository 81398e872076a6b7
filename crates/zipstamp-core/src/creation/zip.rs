//! ZIP archive writing.
//!
//! Entries are stored Deflate-compressed under their `/`-separated relative
//! names. The entry list is fixed before the output file is opened, so an
//! archive written inside the directory it archives never contains itself.

use crate::ProgressCallback;
use crate::Result;
use crate::creation::walker::FileEntry;
use std::fs::File;
use std::io::BufWriter;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// What was written to an archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZipOutcome {
    /// Entry names in write order.
    pub entries: Vec<String>,

    /// Bytes read from source files.
    pub bytes_read: u64,
}

/// Writes `entries` to a new ZIP file at `output`.
///
/// An existing file at `output` is truncated. A partially written archive
/// is left in place when writing fails.
///
/// # Errors
///
/// Returns an error if:
/// - The output file cannot be created
/// - A source file cannot be opened or read
/// - An entry name is not valid UTF-8
/// - The zip writer fails
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use zipstamp_core::NoopProgress;
/// use zipstamp_core::creation::FilterSpec;
/// use zipstamp_core::creation::walker::collect;
/// use zipstamp_core::creation::zip::write_archive;
///
/// let entries = collect(Path::new("./docs"), &FilterSpec::default())?;
/// let outcome = write_archive(Path::new("docs.zip"), &entries, 6, &mut NoopProgress)?;
/// println!("{} entries", outcome.entries.len());
/// # Ok::<(), zipstamp_core::ArchiveError>(())
/// ```
pub fn write_archive(
    output: &Path,
    entries: &[FileEntry],
    compression_level: u8,
    progress: &mut dyn ProgressCallback,
) -> Result<ZipOutcome> {
    let file = File::create(output)?;
    write_entries(BufWriter::new(file), entries, compression_level, progress)
}

/// Writes entries into any seekable writer and finalizes the central
/// directory.
fn write_entries<W: Write + Seek>(
    writer: W,
    entries: &[FileEntry],
    compression_level: u8,
    progress: &mut dyn ProgressCallback,
) -> Result<ZipOutcome> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(i64::from(compression_level)));

    let mut outcome = ZipOutcome::default();
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    let total = entries.len();

    for (idx, entry) in entries.iter().enumerate() {
        let name = entry.entry_name()?;
        progress.on_entry_start(&name, total, idx + 1);

        outcome.bytes_read += add_file(&mut zip, entry, &name, options, progress, &mut buffer)?;

        progress.on_entry_complete(&name);
        outcome.entries.push(name);
    }

    let mut inner = zip.finish()?;
    inner.flush()?;

    progress.on_complete();

    Ok(outcome)
}

/// Copies one source file into the archive, returning the bytes read.
fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &FileEntry,
    name: &str,
    options: SimpleFileOptions,
    progress: &mut dyn ProgressCallback,
    buffer: &mut [u8],
) -> Result<u64> {
    let mut file = File::open(&entry.path)?;
    let metadata = file.metadata()?;

    let options = options.large_file(metadata.len() > u64::from(u32::MAX));
    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    };

    zip.start_file(name, options)?;

    let mut copied = 0u64;
    loop {
        let bytes_read = file.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        copied += bytes_read as u64;
        progress.on_bytes_written(bytes_read as u64);
    }

    tracing::trace!(entry = name, bytes = copied, "added file");
    Ok(copied)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Allow unwrap in tests for brevity
mod tests {
    use super::*;
    use crate::ArchiveError;
    use crate::NoopProgress;
    use crate::creation::FilterSpec;
    use crate::creation::walker::collect;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn entry(root: &Path, relative: &str) -> FileEntry {
        FileEntry {
            path: root.join(relative),
            relative_path: Path::new(relative).to_path_buf(),
        }
    }

    fn read_back(bytes: Vec<u8>) -> Vec<(String, String)> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .map(|i| {
                let mut file = archive.by_index(i).unwrap();
                let mut content = String::new();
                file.read_to_string(&mut content).unwrap();
                (file.name().to_string(), content)
            })
            .collect()
    }

    #[test]
    fn test_write_entries_round_trip() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "alpha").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/c.txt"), "gamma").unwrap();

        let entries = vec![entry(temp.path(), "a.txt"), entry(temp.path(), "sub/c.txt")];
        let mut cursor = Cursor::new(Vec::new());
        let outcome = write_entries(&mut cursor, &entries, 6, &mut NoopProgress).unwrap();

        assert_eq!(outcome.entries, vec!["a.txt", "sub/c.txt"]);
        assert_eq!(outcome.bytes_read, 10);
        assert_eq!(
            read_back(cursor.into_inner()),
            vec![
                ("a.txt".to_string(), "alpha".to_string()),
                ("sub/c.txt".to_string(), "gamma".to_string()),
            ]
        );
    }

    #[test]
    fn test_entries_are_deflated() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("big.txt"), "z".repeat(100_000)).unwrap();

        let mut cursor = Cursor::new(Vec::new());
        write_entries(
            &mut cursor,
            &[entry(temp.path(), "big.txt")],
            9,
            &mut NoopProgress,
        )
        .unwrap();

        let bytes = cursor.into_inner();
        assert!(bytes.len() < 10_000);
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(
            archive.by_index(0).unwrap().compression(),
            CompressionMethod::Deflated
        );
    }

    #[test]
    fn test_empty_archive_is_valid() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("empty.zip");

        let outcome = write_archive(&output, &[], 6, &mut NoopProgress).unwrap();

        assert!(outcome.entries.is_empty());
        let archive = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
        assert_eq!(archive.len(), 0);
    }

    #[test]
    fn test_missing_source_fails() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out.zip");

        let result = write_archive(
            &output,
            &[entry(temp.path(), "vanished.txt")],
            6,
            &mut NoopProgress,
        );

        assert!(matches!(result.unwrap_err(), ArchiveError::Io(_)));
    }

    #[test]
    fn test_progress_sees_each_entry_once() {
        #[derive(Default)]
        struct Recorder {
            started: Vec<(String, usize, usize)>,
            completed: Vec<String>,
            bytes: u64,
            finished: bool,
        }

        impl ProgressCallback for Recorder {
            fn on_entry_start(&mut self, name: &str, total: usize, current: usize) {
                self.started.push((name.to_string(), total, current));
            }

            fn on_bytes_written(&mut self, bytes: u64) {
                self.bytes += bytes;
            }

            fn on_entry_complete(&mut self, name: &str) {
                self.completed.push(name.to_string());
            }

            fn on_complete(&mut self) {
                self.finished = true;
            }
        }

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "12345").unwrap();
        fs::write(temp.path().join("b.txt"), "678").unwrap();

        let entries = collect(temp.path(), &FilterSpec::default()).unwrap();
        let mut recorder = Recorder::default();
        let outcome = write_archive(
            &temp.path().join("out.zip"),
            &entries,
            6,
            &mut recorder,
        )
        .unwrap();

        assert_eq!(recorder.completed, outcome.entries);
        assert_eq!(recorder.started.len(), 2);
        assert_eq!(recorder.started[1].1, 2);
        assert_eq!(recorder.started[1].2, 2);
        assert_eq!(recorder.bytes, 8);
        assert!(recorder.finished);
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_permissions_recorded() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let script = temp.path().join("run.sh");
        fs::write(&script, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let mut cursor = Cursor::new(Vec::new());
        write_entries(
            &mut cursor,
            &[entry(temp.path(), "run.sh")],
            6,
            &mut NoopProgress,
        )
        .unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap();
        let mode = archive.by_index(0).unwrap().unix_mode().unwrap();
        assert_eq!(mode & 0o777, 0o755);
    }
}
