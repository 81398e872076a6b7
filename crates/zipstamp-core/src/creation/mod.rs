//! Archive creation module.
//!
//! This module selects files from a source directory, writes them to a ZIP
//! archive, and optionally records an inventory manifest of the entries.

pub mod filters;
pub mod walker;

pub mod config;
pub mod manifest;
pub mod report;
pub mod zip;

// Re-exports for public API
pub use config::ArchiveRequest;
pub use filters::FilterSpec;
pub use report::ArchiveReport;
pub use walker::FileCollector;
pub use walker::FileEntry;
