//! Timestamped ZIP backups of a directory with filename filters and
//! retention.
//!
//! `zipstamp-core` archives a source directory into
//! `<source>_<timestamp>.zip`, optionally writes an inventory manifest
//! alongside it, and prunes older archives of the same source beyond a keep
//! count.
//!
//! # Examples
//!
//! ```no_run
//! use zipstamp_core::create_archive;
//! use zipstamp_core::creation::ArchiveRequest;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = ArchiveRequest::new("./reports")
//!     .with_include(vec!["*.csv".to_string()])
//!     .with_exclude(vec!["draft*".to_string()])
//!     .with_inventory(true)
//!     .with_destination("./backups")
//!     .with_keep(3);
//!
//! let archive = create_archive(&request)?;
//! println!("Created {}", archive.display());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod creation;
pub mod error;
pub mod report;
pub mod retention;
pub mod timestamp;

// Re-export main API types
pub use api::create_archive;
pub use api::create_archive_at;
pub use api::create_archive_with_progress;
pub use creation::ArchiveReport;
pub use creation::ArchiveRequest;
pub use creation::FilterSpec;
pub use creation::filters::should_include;
pub use creation::walker::collect;
pub use error::ArchiveError;
pub use error::Result;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use report::RetentionFailure;
pub use report::RetentionReport;
pub use retention::RetentionPlan;
pub use retention::enforce_retention;
pub use retention::plan_retention;

#[cfg(test)]
pub(crate) mod test_utils;
