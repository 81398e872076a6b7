//! Create command implementation.

use crate::cli::CreateArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use crate::progress::InventoryPrinter;
use anyhow::Context;
use anyhow::Result;
use std::fs;
use zipstamp_core::NoopProgress;
use zipstamp_core::ProgressCallback;
use zipstamp_core::create_archive_with_progress;
use zipstamp_core::creation::ArchiveRequest;

pub fn execute(
    args: &CreateArgs,
    formatter: &dyn OutputFormatter,
    quiet: bool,
    json: bool,
) -> Result<()> {
    if let Some(dir) = &args.backup_location {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create backup location '{}'", dir.display()))?;
    }

    let request = build_request(args);
    let interactive = !quiet && !json;

    let mut progress: Box<dyn ProgressCallback> = if interactive && args.inventory {
        Box::new(InventoryPrinter::new())
    } else if interactive && CliProgress::should_show() {
        Box::new(CliProgress::new("Archiving"))
    } else {
        Box::new(NoopProgress)
    };

    let report = add_archive_context(
        create_archive_with_progress(&request, progress.as_mut()),
        &args.folder,
    )?;
    drop(progress);

    formatter.format_creation_result(&report)
}

fn build_request(args: &CreateArgs) -> ArchiveRequest {
    let request = ArchiveRequest::new(&args.folder)
        .with_include(args.include_patterns())
        .with_exclude(args.exclude.clone())
        .with_date_format(args.date_format.as_str())
        .with_inventory(args.inventory)
        .with_keep(args.keep)
        .with_compression_level(args.compression_level);

    match &args.backup_location {
        Some(dir) => request.with_destination(dir),
        None => request,
    }
}
