//! Triggering event payload

use crate::error::SizeDeltasError;
use crate::infra::FileSystem;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct PullRequestEvent {
    pull_request: PullRequestNumber,
}

#[derive(Deserialize)]
struct PullRequestNumber {
    number: u64,
}

/// Number of the pull request a `pull_request` event payload refers to
pub fn read_pr_number<FS: FileSystem>(path: &Path, fs: &FS) -> Result<u64, SizeDeltasError> {
    let contents = fs.read_to_string(path).map_err(|source| SizeDeltasError::Io {
        context: format!("reading event payload {}", path.display()),
        source,
    })?;

    let event: PullRequestEvent =
        serde_json::from_str(&contents).map_err(|e| SizeDeltasError::InvalidEventPayload {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Ok(event.pull_request.number)
}
