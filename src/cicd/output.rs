//! JSON output formatting for CI/CD integration

use crate::report::{RenderedReport, ReportSet, Section, MAX_COMMENT_LENGTH};
use serde::Serialize;

/// JSON output structure for CI/CD tools
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Whether a report was produced
    pub reported: bool,
    /// Commit the report is for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<String>,
    /// Pull request the report belongs to, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pr_number: Option<u64>,
    /// Number of board reports rendered
    pub boards: usize,
    /// Body size information (if a report was produced)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyInfo>,
}

/// Size and composition of the comment body
#[derive(Debug, Clone, Serialize)]
pub struct BodyInfo {
    /// Body length in bytes
    pub length: usize,
    /// Comment size ceiling in bytes
    pub limit: usize,
    /// Sections that fit under the ceiling
    pub sections: Vec<Section>,
}

impl JsonOutput {
    /// Output for a run that found no size deltas data
    pub fn empty() -> Self {
        Self {
            reported: false,
            commit_hash: None,
            pr_number: None,
            boards: 0,
            body: None,
        }
    }

    /// Output describing a rendered report
    pub fn from_report(reports: &ReportSet, rendered: &RenderedReport) -> Self {
        Self {
            reported: true,
            commit_hash: Some(reports.commit_hash().to_string()),
            pr_number: None,
            boards: reports.board_count(),
            body: Some(BodyInfo {
                length: rendered.body.len(),
                limit: MAX_COMMENT_LENGTH,
                sections: rendered.sections.clone(),
            }),
        }
    }

    /// Attach the pull request number
    pub fn with_pr_number(mut self, pr_number: Option<u64>) -> Self {
        self.pr_number = pr_number;
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))
    }

    /// Print JSON to stdout
    pub fn print(&self) {
        match self.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error formatting JSON: {}", e),
        }
    }
}
