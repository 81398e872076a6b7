//! Prune command implementation.

use crate::cli::PruneArgs;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use zipstamp_core::enforce_retention;
use zipstamp_core::plan_retention;

pub fn execute(args: &PruneArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    // The folder may be gone already; only its name is needed
    let folder = args
        .folder
        .canonicalize()
        .unwrap_or_else(|_| args.folder.clone());

    let destination = match &args.backup_location {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    tracing::debug!(
        folder = %folder.display(),
        destination = %destination.display(),
        keep = args.keep,
        dry_run = args.dry_run,
        "pruning archives"
    );

    if args.dry_run {
        let plan = plan_retention(&folder, &destination, &args.date_format, args.keep)
            .with_context(|| format!("Failed to list archives in '{}'", destination.display()))?;
        return formatter.format_prune_plan(&plan);
    }

    let report = enforce_retention(&folder, &destination, &args.date_format, args.keep);
    formatter.format_retention_result(&report)
}
