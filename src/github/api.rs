//! GitHub REST API seam
//!
//! The implementation behind [`GitHubApi`] owns pagination, retries, rate
//! limiting and authentication. Every list method returns the complete,
//! already-paginated result.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// An open pull request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Locked PRs only accept comments from collaborators
    #[serde(default)]
    pub locked: bool,
    /// Head branch
    pub head: GitRef,
    /// PR author
    pub user: User,
}

/// A branch tip
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitRef {
    /// Branch name
    #[serde(rename = "ref")]
    pub branch: String,
    /// Commit hash at the tip
    pub sha: String,
}

/// A GitHub account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Account name
    pub login: String,
}

/// A comment on a PR thread
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueComment {
    /// Markdown body
    #[serde(default)]
    pub body: String,
}

/// A completed workflow run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowRun {
    /// Run identifier
    pub id: u64,
    /// Commit the run was triggered for
    pub head_sha: String,
}

/// A workflow run artifact
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artifact {
    /// Artifact name
    pub name: String,
    /// Expired artifacts can no longer be downloaded
    #[serde(default)]
    pub expired: bool,
    /// Zip archive location
    pub archive_download_url: String,
}

/// Operations the pull request scan needs from the GitHub API
pub trait GitHubApi {
    /// Open pull requests of the repository
    fn pull_requests(&self) -> Result<Vec<PullRequest>>;

    /// Comments on a pull request thread
    fn issue_comments(&self, pr_number: u64) -> Result<Vec<IssueComment>>;

    /// Completed `pull_request` workflow runs started by `actor` on `branch`
    fn workflow_runs(&self, actor: &str, branch: &str) -> Result<Vec<WorkflowRun>>;

    /// Artifacts uploaded by a workflow run
    fn run_artifacts(&self, run_id: u64) -> Result<Vec<Artifact>>;

    /// Download an artifact and extract its archive into `destination`
    fn download_artifact(&self, artifact: &Artifact, destination: &Path) -> Result<()>;

    /// Post a comment on a pull request thread
    fn post_comment(&self, pr_number: u64, body: &str) -> Result<()>;
}
