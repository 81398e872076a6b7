//! Shell completion generation command.

use crate::cli::Cli;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

/// Writes completions for `shell` to stdout.
pub fn execute(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "zipstamp", &mut io::stdout());
}
