//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;
use zipstamp_core::ArchiveReport;
use zipstamp_core::RetentionFailure;
use zipstamp_core::RetentionPlan;
use zipstamp_core::RetentionReport;
use zipstamp_core::retention::RetentionCandidate;
use zipstamp_core::retention::TimestampSource;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn display_all(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| display(p)).collect()
}

#[derive(Serialize)]
struct FailureOutput {
    path: String,
    reason: String,
}

impl From<&RetentionFailure> for FailureOutput {
    fn from(failure: &RetentionFailure) -> Self {
        Self {
            path: display(&failure.path),
            reason: failure.reason.clone(),
        }
    }
}

#[derive(Serialize)]
struct RetentionOutput {
    kept: Vec<String>,
    deleted: Vec<String>,
    manifests_deleted: Vec<String>,
    total_removed: usize,
    failures: Vec<FailureOutput>,
}

impl From<&RetentionReport> for RetentionOutput {
    fn from(report: &RetentionReport) -> Self {
        Self {
            kept: display_all(&report.kept),
            deleted: display_all(&report.deleted),
            manifests_deleted: display_all(&report.manifests_deleted),
            total_removed: report.total_removed(),
            failures: report.failures.iter().map(FailureOutput::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct CandidateOutput {
    path: String,
    timestamp: String,
    timestamp_source: &'static str,
}

impl From<&RetentionCandidate> for CandidateOutput {
    fn from(candidate: &RetentionCandidate) -> Self {
        Self {
            path: display(&candidate.path),
            timestamp: candidate.timestamp.to_string(),
            timestamp_source: match candidate.source {
                TimestampSource::Parsed => "name",
                TimestampSource::Filesystem => "filesystem",
            },
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_creation_result(&self, report: &ArchiveReport) -> Result<()> {
        #[derive(Serialize)]
        struct CreationOutput {
            archive_path: String,
            manifest_path: Option<String>,
            entries: Vec<String>,
            files_added: usize,
            bytes_written: u64,
            bytes_compressed: u64,
            compression_ratio: f64,
            compression_percentage: f64,
            duration_ms: u128,
            archive_removed: bool,
            retention: RetentionOutput,
        }

        let data = CreationOutput {
            archive_path: display(&report.archive_path),
            manifest_path: report.manifest_path.as_deref().map(display),
            entries: report.entries.clone(),
            files_added: report.files_added,
            bytes_written: report.bytes_written,
            bytes_compressed: report.bytes_compressed,
            compression_ratio: report.compression_ratio(),
            compression_percentage: report.compression_percentage(),
            duration_ms: report.duration.as_millis(),
            archive_removed: report.archive_removed(),
            retention: RetentionOutput::from(&report.retention),
        };

        let output = JsonOutput::success("create", data);
        Self::output(&output)
    }

    fn format_retention_result(&self, report: &RetentionReport) -> Result<()> {
        let output = JsonOutput::success("prune", RetentionOutput::from(report));
        Self::output(&output)
    }

    fn format_prune_plan(&self, plan: &RetentionPlan) -> Result<()> {
        #[derive(Serialize)]
        struct PlanOutput {
            dry_run: bool,
            keep: Vec<CandidateOutput>,
            delete: Vec<CandidateOutput>,
            skipped: Vec<FailureOutput>,
        }

        let data = PlanOutput {
            dry_run: true,
            keep: plan.keep.iter().map(CandidateOutput::from).collect(),
            delete: plan.delete.iter().map(CandidateOutput::from).collect(),
            skipped: plan.skipped.iter().map(FailureOutput::from).collect(),
        };

        let output = JsonOutput::success("prune", data);
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("error", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_retention_output_structure() {
        let report = RetentionReport {
            kept: vec![PathBuf::from("a_2.zip")],
            deleted: vec![PathBuf::from("a_1.zip")],
            manifests_deleted: vec![PathBuf::from("a_1_inventory.txt")],
            failures: vec![RetentionFailure {
                path: PathBuf::from("a_0.zip"),
                reason: "denied".to_string(),
            }],
        };

        let json = serde_json::to_value(RetentionOutput::from(&report)).unwrap();

        assert_eq!(json["kept"][0], "a_2.zip");
        assert_eq!(json["deleted"][0], "a_1.zip");
        assert_eq!(json["total_removed"], 2);
        assert_eq!(json["failures"][0]["reason"], "denied");
    }

    #[test]
    fn test_error_output_structure() {
        let output = JsonOutput::<()>::error("error", "boom");
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "boom");
        assert!(json.get("data").is_none());
    }
}
