use clap::{Parser, Subcommand};
use clap_complete::Shell;
use size_deltas::cmd;
use size_deltas::config::CliOverrides;
use std::path::PathBuf;
use std::process;

/// Memory usage change reports for pull requests
///
/// Merges the sketches reports produced by compile runs into a single
/// comparison table and renders it as a pull request comment.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the memory usage change report
    Report {
        /// Folder holding the sketches reports, relative to the workspace
        #[arg(long, value_name = "PATH")]
        reports_source: Option<String>,

        /// Workspace folder (defaults to GITHUB_WORKSPACE, then the current directory)
        #[arg(long, value_name = "DIR")]
        workspace: Option<PathBuf>,

        /// Write the comment body to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output a JSON summary (for CI/CD integration)
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Report {
            reports_source,
            workspace,
            output,
            json,
        }) => cmd::cmd_report(&cmd::ReportOptions {
            overrides: CliOverrides {
                sketches_reports_source: reports_source,
                workspace,
                output,
            },
            json,
        }),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell);
            Ok(())
        }
        None => {
            println!("report-size-deltas v{}", env!("CARGO_PKG_VERSION"));
            println!("Memory usage change reports for pull requests\n");
            println!("Usage: report-size-deltas <COMMAND>\n");
            println!("Commands:");
            println!("  report       Render the memory usage change report");
            println!("  completions  Generate shell completions");
            println!(
                "\nRun 'report-size-deltas <COMMAND> --help' for more information on a command."
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        use size_deltas::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
