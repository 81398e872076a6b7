//! Progress reporting for CLI operations.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressState;
use indicatif::ProgressStyle;
use std::fmt::Write;
use zipstamp_core::ProgressCallback;

/// Prints one `  [✓] <entry>` line per archived file.
///
/// Used with `--inventory`, so the listing on screen matches the manifest
/// written next to the archive.
pub struct InventoryPrinter {
    term: Term,
}

impl InventoryPrinter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for InventoryPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressCallback for InventoryPrinter {
    fn on_entry_start(&mut self, _name: &str, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, name: &str) {
        let _ = self.term.write_line(&format!("  [✓] {name}"));
    }

    fn on_complete(&mut self) {}
}

/// CLI progress bar wrapper implementing `ProgressCallback`.
///
/// Displays file count, bytes archived, and ETA when running in a TTY.
/// Automatically cleans up on drop.
pub struct CliProgress {
    bar: ProgressBar,
    label: String,
    bytes_written: u64,
}

impl CliProgress {
    /// Creates a new CLI progress bar.
    ///
    /// The length is set from the first reported entry, since the file count
    /// is only known once the source has been walked.
    #[must_use]
    pub fn new(label: &str) -> Self {
        let bar = ProgressBar::new(0);

        // Template: "Archiving (15.2 MB) [████████░░░░] 42/100 files (12s)"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} files ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .with_key("eta", |state: &ProgressState, w: &mut dyn Write| {
                    write!(w, "{}", humanize_duration(state.eta())).unwrap_or(());
                })
                .progress_chars("█▓░"),
        );

        bar.set_message(label.to_string());

        Self {
            bar,
            label: label.to_string(),
            bytes_written: 0,
        }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, _name: &str, total: usize, _current: usize) {
        self.bar.set_length(total as u64);
    }

    fn on_bytes_written(&mut self, bytes: u64) {
        self.bytes_written += bytes;
        self.bar.set_message(format!(
            "{} ({})",
            self.label,
            humanize_bytes(self.bytes_written)
        ));
    }

    fn on_entry_complete(&mut self, _name: &str) {
        self.bar.inc(1);
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Converts bytes to human-readable format (KB, MB, GB, TB).
fn humanize_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Converts duration to human-readable format.
fn humanize_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 3600 {
        format!("{}h{}m", secs / 3600, (secs % 3600) / 60)
    } else if secs >= 60 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else {
        format!("{secs}s")
    }
}
