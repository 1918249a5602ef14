//! Report command implementation
//!
//! Handles the `report-size-deltas report` command: read the sketches
//! reports folder, render the memory usage change comment and write it out.

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use crate::cicd::JsonOutput;
use crate::config::{ActionEnvironment, CliOverrides, Settings};
use crate::error::SizeDeltasError;
use crate::fmt::{format_bytes, CHART, CHECKMARK, INFO};
use crate::github::read_pr_number;
use crate::infra::{FileSystem, RealFileSystem};
use crate::ingest::ReportIngestor;
use crate::report::{generate_report, RenderedReport, Section, MAX_COMMENT_LENGTH};

/// Options for the report command
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Command line overrides for the layered settings
    pub overrides: CliOverrides,
    /// Print a JSON summary instead of the comment body
    pub json: bool,
}

/// Generate the report from the process environment
///
/// # Examples
///
/// ```no_run
/// use size_deltas::cmd::report::{cmd_report, ReportOptions};
///
/// cmd_report(&ReportOptions::default())?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_report(options: &ReportOptions) -> Result<()> {
    cmd_report_with_env(options, &ActionEnvironment::from_env())
}

/// Generate the report against an explicit environment
///
/// Runs without an event name (a local invocation) and `pull_request` runs
/// read the local sketches reports folder. Any other event asks for a scan of
/// the repository's open pull requests, which this command refuses because it
/// has no API client.
///
/// Finding no size deltas data is not an error: an advisory is printed and
/// nothing is written.
///
/// # Errors
///
/// Returns an error if:
/// - The event is neither absent nor `pull_request`
/// - The reports folder doesn't exist
/// - A report file is not valid JSON
/// - The event payload of a `pull_request` run can't be read
/// - The output file can't be written
pub fn cmd_report_with_env(options: &ReportOptions, env: &ActionEnvironment) -> Result<()> {
    log::debug!("Action environment: {:?}", env);
    if let Some(annotation) = env.deprecation_annotation() {
        if options.json {
            log::warn!("{}", annotation);
        } else {
            annotation.emit();
        }
    }

    if let Some(event) = scan_event(env) {
        return Err(SizeDeltasError::ScanModeUnavailable {
            event: event.to_string(),
            repository: env
                .repository
                .clone()
                .unwrap_or_else(|| "the repository".to_string()),
        }
        .into());
    }

    let settings = Settings::load(&options.overrides, env)?;
    let folder = settings.reports_folder();
    log::info!("Reading sketches reports from {}", folder.display());

    let Some(reports) = ReportIngestor::new()
        .ingest(&folder)
        .context("Failed to read sketches reports")?
    else {
        if options.json {
            JsonOutput::empty().print();
        } else {
            eprintln!(
                "{} No size deltas data found in {}",
                INFO,
                style(folder.display()).bold()
            );
        }
        return Ok(());
    };

    let rendered = generate_report(&reports)?;
    let pr_number = pull_request_number(env)?;

    match &settings.output {
        Some(path) => write_body(path, &rendered.body, &RealFileSystem)?,
        None if !options.json => print!("{}", rendered.body),
        None => {}
    }

    if options.json {
        JsonOutput::from_report(&reports, &rendered)
            .with_pr_number(pr_number)
            .print();
    } else {
        print_status(reports.commit_hash(), &rendered, settings.output.as_deref());
    }

    Ok(())
}

/// Event name when the run would need repository scan mode
fn scan_event(env: &ActionEnvironment) -> Option<&str> {
    env.event_name
        .as_deref()
        .filter(|_| !env.is_pull_request_event())
}

/// PR number from the event payload, for `pull_request` runs only
fn pull_request_number(env: &ActionEnvironment) -> Result<Option<u64>> {
    if !env.is_pull_request_event() {
        return Ok(None);
    }
    let path = env
        .event_path
        .as_deref()
        .context("GITHUB_EVENT_PATH is not set for a pull_request event")?;
    Ok(Some(read_pr_number(path, &RealFileSystem)?))
}

fn write_body<FS: FileSystem>(path: &Path, body: &str, fs: &FS) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs.write(path, body)
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn print_status(commit_hash: &str, rendered: &RenderedReport, output: Option<&Path>) {
    let destination = output.map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
    eprintln!(
        "{} Memory usage change report for {} written to {}",
        CHECKMARK,
        style(commit_hash).bold(),
        destination
    );

    let omitted: Vec<&str> = [(Section::FullTable, "full table"), (Section::Csv, "CSV")]
        .into_iter()
        .filter(|(section, _)| !rendered.includes(*section))
        .map(|(_, name)| name)
        .collect();
    eprintln!(
        "{} {} of {}{}",
        CHART,
        format_bytes(rendered.body.len()),
        format_bytes(MAX_COMMENT_LENGTH),
        if omitted.is_empty() {
            String::new()
        } else {
            format!(" ({} omitted)", style(omitted.join(", ")).yellow())
        }
    );
}
