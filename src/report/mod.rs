//! Memory usage change report generation
//!
//! Turns a set of sketches reports into the pull request comment body:
//!
//! ```text
//! SketchesReport[] -> TableBuilder -> (summary, detailed) -> ReportRenderer -> body
//! ```
//!
//! # Examples
//!
//! ```
//! use size_deltas::report::{generate_report, ReportSet, SketchesReport};
//!
//! let report: SketchesReport = serde_json::from_str(r#"{
//!     "commit_hash": "d8fd302",
//!     "commit_url": "https://example.com/d8fd302",
//!     "boards": [{
//!         "board": "arduino:avr:uno",
//!         "sizes": [{"name": "flash", "maximum": 32256, "delta": {
//!             "absolute": {"minimum": -994, "maximum": -994},
//!             "relative": {"minimum": -3.08, "maximum": -3.08}}}]
//!     }]
//! }"#).unwrap();
//!
//! let reports = ReportSet::new(vec![report]).unwrap();
//! let rendered = generate_report(&reports).unwrap();
//! assert!(rendered.body.starts_with("**Memory usage change @ d8fd302**\n\n"));
//! assert!(rendered.body.contains("`arduino:avr:uno`|:green_heart: -994 - -994|-3.08 - -3.08"));
//! ```

pub mod builder;
pub mod classify;
pub mod model;
pub mod render;
pub mod table;

pub use builder::TableBuilder;
pub use classify::{summary_value, Change};
pub use model::{BoardReport, SizeValue, SketchReport, SketchesReport, NOT_APPLICABLE};
pub use render::{RenderedReport, ReportRenderer, Section, MAX_COMMENT_LENGTH, REPORT_KEY_PREFIX};
pub use table::Table;

use crate::error::SizeDeltasError;

/// Non-empty collection of sketches reports for a single commit
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSet {
    reports: Vec<SketchesReport>,
}

impl ReportSet {
    /// Wrap `reports`, returning `None` when there are none
    pub fn new(reports: Vec<SketchesReport>) -> Option<Self> {
        if reports.is_empty() {
            None
        } else {
            Some(Self { reports })
        }
    }

    /// Commit the reports were generated for, taken from the first report
    pub fn commit_hash(&self) -> &str {
        &self.reports[0].commit_hash
    }

    /// The wrapped reports, in ingestion order
    pub fn reports(&self) -> &[SketchesReport] {
        &self.reports
    }

    /// Total number of board reports across all documents
    pub fn board_count(&self) -> usize {
        self.reports.iter().map(|report| report.boards.len()).sum()
    }

    /// Check that every report was generated for `expected` commit
    pub fn verify_commit(&self, expected: &str) -> Result<(), SizeDeltasError> {
        match self
            .reports
            .iter()
            .find(|report| report.commit_hash != expected)
        {
            Some(report) => Err(SizeDeltasError::CommitMismatch {
                expected: expected.to_string(),
                found: report.commit_hash.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Build both tables and render the comment body within the default ceiling
///
/// Every report must carry the same commit hash, since the heading
/// fingerprints the comment with it.
pub fn generate_report(reports: &ReportSet) -> Result<RenderedReport, SizeDeltasError> {
    reports.verify_commit(reports.commit_hash())?;
    let summary = TableBuilder::summary(reports.reports());
    let detailed = TableBuilder::detailed(reports.reports());
    ReportRenderer::new().render(&summary, &detailed, reports.commit_hash())
}
