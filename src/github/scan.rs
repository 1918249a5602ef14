//! Repository-wide pull request scan
//!
//! For workflows not triggered by a pull request: walk the open PRs, find
//! the sketches report artifacts of each PR's head commit, and comment a
//! report where none exists yet.

use super::api::{Artifact, GitHubApi, PullRequest};
use super::comment::has_report_for;
use crate::cicd::Annotation;
use crate::error::SizeDeltasError;
use crate::ingest::ReportIngestor;
use crate::report::{generate_report, Section};
use anyhow::{Context, Result};
use regex::Regex;
use tempfile::TempDir;

/// What happened to one pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Locked PRs cannot be commented on by the workflow token
    Locked,
    /// A report for the head commit is already posted
    AlreadyReported,
    /// No workflow run for the head commit has matching artifacts
    NoArtifacts,
    /// Artifacts held no current-format size data
    NoSizeData,
    /// Reports were generated for a different commit
    CommitMismatch {
        /// Commit hash found in the reports
        found: String,
    },
    /// Report comment posted
    Commented {
        /// Sections included in the comment body
        sections: Vec<Section>,
    },
    /// Processing failed; the scan moved on to the next pull request
    Failed {
        /// Error chain, outermost first
        reason: String,
    },
}

/// Outcome for a single pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrScanResult {
    /// PR number
    pub pr_number: u64,
    /// What was done
    pub outcome: ScanOutcome,
}

/// Scans pull requests through a [`GitHubApi`] implementation
pub struct PullRequestScanner<A: GitHubApi> {
    api: A,
    artifact_pattern: Regex,
    ingestor: ReportIngestor,
}

impl<A: GitHubApi> PullRequestScanner<A> {
    /// Create a scanner matching artifact names against `sketches_reports_source`
    ///
    /// The pattern matches at the start of the artifact name only.
    pub fn new(api: A, sketches_reports_source: &str) -> Result<Self, SizeDeltasError> {
        let artifact_pattern = Regex::new(&format!("^(?:{})", sketches_reports_source)).map_err(
            |source| SizeDeltasError::InvalidArtifactPattern {
                pattern: sketches_reports_source.to_string(),
                source,
            },
        )?;

        Ok(Self {
            api,
            artifact_pattern,
            ingestor: ReportIngestor::new(),
        })
    }

    /// The API client
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Process every open pull request
    ///
    /// Only listing the pull requests is fatal. A failure while handling one
    /// pull request is reported as an error annotation and recorded as
    /// [`ScanOutcome::Failed`], and the scan continues.
    pub fn scan(&self) -> Result<Vec<PrScanResult>> {
        let pull_requests = self
            .api
            .pull_requests()
            .context("Failed to list pull requests")?;
        log::debug!("Found {} open pull requests", pull_requests.len());

        let mut results = Vec::with_capacity(pull_requests.len());
        for pr in &pull_requests {
            Annotation::Debug(format!("Processing pull request number: {}", pr.number)).emit();
            let outcome = match self.process(pr) {
                Ok(outcome) => outcome,
                Err(e) => {
                    let reason = format!("{:#}", e);
                    Annotation::Error(format!(
                        "Failed to process pull request #{}: {}",
                        pr.number, reason
                    ))
                    .emit();
                    ScanOutcome::Failed { reason }
                }
            };
            results.push(PrScanResult {
                pr_number: pr.number,
                outcome,
            });
        }
        Ok(results)
    }

    fn process(&self, pr: &PullRequest) -> Result<ScanOutcome> {
        if pr.locked {
            Annotation::Debug("PR locked, skipping".to_string()).emit();
            return Ok(ScanOutcome::Locked);
        }

        let comments = self.api.issue_comments(pr.number)?;
        if has_report_for(&comments, &pr.head.sha) {
            Annotation::Debug("Report already exists".to_string()).emit();
            return Ok(ScanOutcome::AlreadyReported);
        }

        let Some(artifacts) = self.find_artifacts(pr)? else {
            Annotation::Debug("No sketches report artifact found".to_string()).emit();
            return Ok(ScanOutcome::NoArtifacts);
        };

        // Dropped at the end of this scope on every path, taking the files with it
        let artifacts_folder = self.download(&artifacts)?;
        let Some(reports) = self.ingestor.ingest(artifacts_folder.path())? else {
            return Ok(ScanOutcome::NoSizeData);
        };

        if let Err(SizeDeltasError::CommitMismatch { found, .. }) =
            reports.verify_commit(&pr.head.sha)
        {
            Annotation::Warning(
                "Report commit hash doesn't match PR's head commit hash, skipping".to_string(),
            )
            .emit();
            return Ok(ScanOutcome::CommitMismatch { found });
        }

        let rendered = generate_report(&reports)?;
        Annotation::Debug("Adding deltas report comment to pull request".to_string()).emit();
        self.api.post_comment(pr.number, &rendered.body)?;

        Ok(ScanOutcome::Commented {
            sections: rendered.sections,
        })
    }

    /// Matching artifacts of the first run for the PR head that has any
    fn find_artifacts(&self, pr: &PullRequest) -> Result<Option<Vec<Artifact>>> {
        let runs = self.api.workflow_runs(&pr.user.login, &pr.head.branch)?;
        for run in runs.iter().filter(|run| run.head_sha == pr.head.sha) {
            let artifacts: Vec<Artifact> = self
                .api
                .run_artifacts(run.id)?
                .into_iter()
                .filter(|artifact| !artifact.expired && self.artifact_pattern.is_match(&artifact.name))
                .collect();

            for artifact in &artifacts {
                Annotation::Debug(format!("Found report artifact: {}", artifact.name)).emit();
            }
            if !artifacts.is_empty() {
                return Ok(Some(artifacts));
            }
        }
        Ok(None)
    }

    fn download(&self, artifacts: &[Artifact]) -> Result<TempDir> {
        let folder = tempfile::Builder::new()
            .prefix("size-deltas-")
            .tempdir()
            .context("Failed to create artifacts folder")?;

        for artifact in artifacts {
            Annotation::Debug(format!("Downloading artifact: {}", artifact.name)).emit();
            let destination = folder.path().join(&artifact.name);
            std::fs::create_dir_all(&destination)
                .with_context(|| format!("Failed to create {}", destination.display()))?;
            self.api
                .download_artifact(artifact, &destination)
                .with_context(|| format!("Failed to download artifact {}", artifact.name))?;
        }
        Ok(folder)
    }
}
