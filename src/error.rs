//! Error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes
//! - Proper exit codes for CI/CD
//!
//! Legacy-format reports and missing size data are not errors; they are
//! skipped with a diagnostic. Unparsable reports are.
//!
//! # Examples
//!
//! ```no_run
//! use size_deltas::ingest::ReportIngestor;
//! use std::path::Path;
//!
//! match ReportIngestor::new().ingest(Path::new("sketches-reports")) {
//!     Ok(Some(reports)) => println!("{} boards", reports.board_count()),
//!     Ok(None) => println!("no size deltas data"),
//!     Err(e) => {
//!         eprintln!("{}", e);
//!         std::process::exit(e.exit_code());
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while ingesting reports or rendering the comment
#[derive(Error, Debug)]
pub enum SizeDeltasError {
    /// Sketches reports folder does not exist
    #[error("Sketches reports folder not found: {path}")]
    ReportsFolderNotFound {
        /// Folder that was searched
        path: PathBuf,
    },

    /// A report file could not be parsed
    #[error("Invalid sketches report: {path}")]
    InvalidReport {
        /// Path to the report file
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },

    /// GitHub event payload is missing or lacks the pull request number
    #[error("Invalid GitHub event payload: {path}: {reason}")]
    InvalidEventPayload {
        /// Path to the event payload
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// Report was generated for a different commit than expected
    #[error("Report commit hash {found} doesn't match expected commit {expected}")]
    CommitMismatch {
        /// Commit the caller expected
        expected: String,
        /// Commit found in the report
        found: String,
    },

    /// Artifact name pattern is not a valid regular expression
    #[error("Invalid sketches reports source pattern: '{pattern}'")]
    InvalidArtifactPattern {
        /// The offending pattern
        pattern: String,
        #[source]
        /// Regex error source
        source: regex::Error,
    },

    /// The event calls for scanning open pull requests, which needs an API client
    #[error("Event '{event}' requires scanning the open pull requests of {repository}")]
    ScanModeUnavailable {
        /// Triggering event name
        event: String,
        /// Repository whose pull requests would be scanned
        repository: String,
    },

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Rendered output was not valid text
    #[error("Render error: {0}")]
    Render(String),

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl SizeDeltasError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use size_deltas::error::SizeDeltasError;
    /// use std::path::PathBuf;
    ///
    /// let error = SizeDeltasError::ReportsFolderNotFound {
    ///     path: PathBuf::from("sketches-reports"),
    /// };
    /// assert!(error.suggestion().unwrap().contains("sketches-reports-source"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ReportsFolderNotFound { .. } => Some(
                "Check the sketches-reports-source input; it must name the folder the \
                 compile step wrote its reports to"
                    .to_string(),
            ),
            Self::InvalidReport { .. } => Some(
                "The artifact may be corrupted; re-run the compile workflow to regenerate it"
                    .to_string(),
            ),
            Self::InvalidEventPayload { .. } => Some(
                "Local reports mode only works in workflows triggered by pull_request events"
                    .to_string(),
            ),
            Self::CommitMismatch { .. } => Some(
                "The artifact belongs to an older run; wait for the workflow of the head commit"
                    .to_string(),
            ),
            Self::InvalidArtifactPattern { .. } => Some(
                "In scan mode sketches-reports-source is a regular expression matched \
                 against artifact names"
                    .to_string(),
            ),
            Self::ScanModeUnavailable { .. } => Some(
                "The command line tool reads a local sketches reports folder on pull_request \
                 events; drive github::PullRequestScanner with a GitHubApi client to scan \
                 pull requests"
                    .to_string(),
            ),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
            Self::Csv(_) | Self::Render(_) => None,
        }
    }

    /// Get appropriate exit code for this error, following sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ReportsFolderNotFound { .. } => 66, // EX_NOINPUT
            Self::InvalidReport { .. } => 65,         // EX_DATAERR
            Self::InvalidEventPayload { .. } => 65,   // EX_DATAERR
            Self::CommitMismatch { .. } => 65,        // EX_DATAERR
            Self::InvalidArtifactPattern { .. } => 64, // EX_USAGE
            Self::ScanModeUnavailable { .. } => 69,   // EX_UNAVAILABLE
            Self::Csv(_) | Self::Render(_) => 70,     // EX_SOFTWARE
            Self::Io { .. } => 74,                    // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(suggestion) = Self::find(error).and_then(SizeDeltasError::suggestion) {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Exit code for an error, 1 when no structured error is in the chain
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, SizeDeltasError::exit_code)
    }

    fn find(error: &anyhow::Error) -> Option<&SizeDeltasError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<SizeDeltasError>())
    }
}
