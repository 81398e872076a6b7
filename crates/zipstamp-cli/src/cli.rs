//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;
use zipstamp_core::creation::config::DEFAULT_COMPRESSION_LEVEL;
use zipstamp_core::creation::config::DEFAULT_DATE_FORMAT;
use zipstamp_core::creation::config::DEFAULT_KEEP;

#[derive(Parser)]
#[command(name = "zipstamp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Archive a folder into a timestamped zip
    Create(CreateArgs),
    /// Remove old archives of a folder beyond a keep count
    Prune(PruneArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct CreateArgs {
    /// Folder to zip
    #[arg(value_name = "FOLDER", default_value = ".")]
    pub folder: PathBuf,

    /// Glob patterns to include (e.g. *.txt *.csv)
    #[arg(long, value_name = "PATTERN", num_args = 1..)]
    pub filter: Vec<String>,

    /// Same as --filter (overrides it if both are given)
    #[arg(long, value_name = "PATTERN", num_args = 1..)]
    pub include: Vec<String>,

    /// Glob patterns to exclude (e.g. secret*.txt)
    #[arg(long, value_name = "PATTERN", num_args = 1..)]
    pub exclude: Vec<String>,

    /// Timestamp format for the archive name
    #[arg(long, value_name = "FMT", default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// List archived files and write an inventory file next to the zip
    #[arg(long)]
    pub inventory: bool,

    /// Folder to save the zip in (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub backup_location: Option<PathBuf>,

    /// Number of most recent archives to keep
    #[arg(long, value_name = "N", default_value_t = DEFAULT_KEEP)]
    pub keep: usize,

    /// Compression level (1-9)
    #[arg(
        short = 'l',
        long,
        default_value_t = DEFAULT_COMPRESSION_LEVEL,
        value_parser = clap::value_parser!(u8).range(1..=9)
    )]
    pub compression_level: u8,
}

impl CreateArgs {
    /// Include patterns, preferring `--include` over `--filter`.
    pub fn include_patterns(&self) -> Vec<String> {
        if self.include.is_empty() {
            self.filter.clone()
        } else {
            self.include.clone()
        }
    }
}

#[derive(clap::Args)]
pub struct PruneArgs {
    /// Folder whose archives are pruned
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Folder holding the archives (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub backup_location: Option<PathBuf>,

    /// Number of most recent archives to keep
    #[arg(long, value_name = "N", default_value_t = DEFAULT_KEEP)]
    pub keep: usize,

    /// Timestamp format used in the archive names
    #[arg(long, value_name = "FMT", default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// Show what would be removed without deleting anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
