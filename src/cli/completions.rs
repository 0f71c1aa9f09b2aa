//! Shell completion generation for bash, zsh, fish, and PowerShell.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

pub fn execute(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "ssmenv", &mut std::io::stdout());
}
