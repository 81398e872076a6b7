//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use zipstamp_core::ArchiveReport;
use zipstamp_core::RetentionPlan;
use zipstamp_core::RetentionReport;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of `create`, including its retention pass
    fn format_creation_result(&self, report: &ArchiveReport) -> Result<()>;

    /// Format the result of `prune`
    fn format_retention_result(&self, report: &RetentionReport) -> Result<()>;

    /// Format the preview of `prune --dry-run`
    fn format_prune_plan(&self, plan: &RetentionPlan) -> Result<()>;

    /// Format error message
    fn format_error(&self, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
