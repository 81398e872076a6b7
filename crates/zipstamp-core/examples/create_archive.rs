//! Example: Timestamped backups with zipstamp-core
//!
//! Run with: `cargo run --example create_archive`

use zipstamp_core::ArchiveRequest;
use zipstamp_core::NoopProgress;
use zipstamp_core::create_archive;
use zipstamp_core::create_archive_with_progress;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let workspace = tempfile::tempdir()?;
    let source = workspace.path().join("notes");
    let backups = workspace.path().join("backups");
    std::fs::create_dir_all(source.join("drafts"))?;
    std::fs::create_dir_all(&backups)?;
    std::fs::write(source.join("todo.txt"), "Back up the notes folder")?;
    std::fs::write(source.join("drafts/idea.md"), "# Idea")?;
    std::fs::write(source.join("scratch.tmp"), "throwaway")?;

    // Example 1: Default filters, format and retention
    println!("Example 1: Simple backup");
    let request = ArchiveRequest::new(&source).with_destination(&backups);
    let archive = create_archive(&request)?;
    println!("  Created {}", archive.display());

    // Example 2: Filters, inventory and a stricter retention count
    println!("\nExample 2: Filtered backup with inventory");
    let request = ArchiveRequest::new(&source)
        .with_destination(&backups)
        .with_exclude(vec!["*.tmp".to_string()])
        .with_date_format("%Y%m%dT%H%M%S")
        .with_inventory(true)
        .with_keep(1)
        .with_compression_level(9);
    let report = create_archive_with_progress(&request, &mut NoopProgress)?;
    println!("  Created ZIP with {} files", report.files_added);
    for entry in &report.entries {
        println!("    {entry}");
    }
    println!(
        "  Compression ratio: {:.1}%",
        report.compression_percentage()
    );
    println!("  Removed {} older archive(s)", report.retention.deleted.len());

    println!("\nExamples completed successfully!");
    Ok(())
}
