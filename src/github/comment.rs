//! Report comment fingerprint

use super::api::IssueComment;
use crate::report::REPORT_KEY_PREFIX;

/// The leading text every report comment for `commit_hash` starts with
pub fn report_key(commit_hash: &str) -> String {
    format!("{}{}", REPORT_KEY_PREFIX, commit_hash)
}

/// Whether any comment already reports on `commit_hash`
///
/// ```
/// use size_deltas::github::api::IssueComment;
/// use size_deltas::github::comment::has_report_for;
///
/// let comments = vec![IssueComment {
///     body: "**Memory usage change @ d8fd302**\n\n...".to_string(),
/// }];
/// assert!(has_report_for(&comments, "d8fd302"));
/// assert!(!has_report_for(&comments, "54815a7"));
/// ```
pub fn has_report_for(comments: &[IssueComment], commit_hash: &str) -> bool {
    let key = report_key(commit_hash);
    comments.iter().any(|comment| comment.body.starts_with(&key))
}
