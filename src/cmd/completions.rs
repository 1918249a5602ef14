//! Completions command implementation
//!
//! Handles the `report-size-deltas completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::{Arg, ArgAction, Command};
use clap_complete::{generate, Shell};
use std::io::Write;

const BIN_NAME: &str = "report-size-deltas";

/// Command structure mirrored from the binary's derive definition
fn command() -> Command {
    Command::new(BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Comment memory usage change reports on pull requests")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("report")
                .about("Render the memory usage change report")
                .arg(Arg::new("reports-source").long("reports-source"))
                .arg(Arg::new("workspace").long("workspace"))
                .arg(Arg::new("output").short('o').long("output"))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("completions").about("Generate shell completions"))
}

/// Write the completion script for `shell` to `out`
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
///
/// # Examples
///
/// ```bash
/// report-size-deltas completions bash > /etc/bash_completion.d/report-size-deltas
/// report-size-deltas completions zsh > ~/.zfunc/_report-size-deltas
/// ```
pub fn cmd_completions(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}
