//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use zipstamp_core::ArchiveReport;
use zipstamp_core::RetentionPlan;
use zipstamp_core::RetentionReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }

    fn headline(&self, mark: &str, text: &str) {
        if self.use_colors {
            self.line(&format!("{} {text}", style(mark).green().bold()));
        } else {
            self.line(&format!("[{mark}] {text}"));
        }
    }

    fn path_line(&self, label: &str, path: &Path) {
        self.line(&format!("  {label:<17} {}", path.display()));
    }

    /// Prints the retention summary shared by `create` and `prune`.
    fn retention_summary(&self, report: &RetentionReport) {
        self.line(&format!(
            "  Archives kept:    {}",
            Self::format_number(report.kept.len())
        ));
        self.line(&format!(
            "  Archives removed: {}",
            Self::format_number(report.deleted.len())
        ));

        if self.verbose {
            for path in &report.deleted {
                self.path_line("Removed:", path);
            }
            for path in &report.manifests_deleted {
                self.path_line("Removed:", path);
            }
        }

        for failure in &report.failures {
            self.format_warning(&format!(
                "Could not remove {}: {}",
                failure.path.display(),
                failure.reason
            ));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_creation_result(&self, report: &ArchiveReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.line("");
        self.headline(
            "✓",
            &format!("Created ZIP: {}", report.archive_path.display()),
        );

        self.line(&format!(
            "  Files added:      {}",
            Self::format_number(report.files_added)
        ));
        self.line(&format!(
            "  Total size:       {}",
            Self::format_size(report.bytes_written)
        ));

        if report.bytes_compressed > 0 {
            self.line(&format!(
                "  Compressed size:  {}",
                Self::format_size(report.bytes_compressed)
            ));
            self.line(&format!(
                "  Compression:      {:.1}%",
                report.compression_percentage()
            ));
        }

        if let Some(manifest) = &report.manifest_path {
            self.path_line("Inventory:", manifest);
        }

        if self.verbose {
            self.line(&format!("  Duration:         {:?}", report.duration));
        }

        self.retention_summary(&report.retention);

        if report.archive_removed() {
            self.format_warning("--keep 0 removed the archive that was just created");
        }

        Ok(())
    }

    fn format_retention_result(&self, report: &RetentionReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline("✓", "Prune complete");
        self.retention_summary(report);

        Ok(())
    }

    fn format_prune_plan(&self, plan: &RetentionPlan) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline("✓", "Dry run, nothing removed");
        for candidate in &plan.keep {
            self.path_line("Would keep:", &candidate.path);
        }
        for candidate in &plan.delete {
            self.path_line("Would remove:", &candidate.path);
        }
        for failure in &plan.skipped {
            self.format_warning(&format!(
                "Skipped unreadable entry in {}: {}",
                failure.path.display(),
                failure.reason
            ));
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            self.line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            self.line(&format!("WARNING: {message}"));
        }
    }
}
