//! GitHub Actions environment
//!
//! Action inputs arrive as `INPUT_<NAME>` variables with the input name kept
//! verbatim, dashes included.

use crate::cicd::Annotation;
use std::path::PathBuf;

const REPOSITORY: &str = "GITHUB_REPOSITORY";
const EVENT_NAME: &str = "GITHUB_EVENT_NAME";
const EVENT_PATH: &str = "GITHUB_EVENT_PATH";
const WORKSPACE: &str = "GITHUB_WORKSPACE";
const SOURCE_INPUT: &str = "INPUT_SKETCHES-REPORTS-SOURCE";
const DEPRECATED_SOURCE_INPUT: &str = "INPUT_SIZE-DELTAS-REPORTS-ARTIFACT-NAME";

/// Event name for workflow runs triggered by a pull request
pub const PULL_REQUEST_EVENT: &str = "pull_request";

/// Snapshot of the variables the action reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionEnvironment {
    /// `owner/name` of the repository
    pub repository: Option<String>,
    /// Name of the triggering event
    pub event_name: Option<String>,
    /// Path to the event payload JSON
    pub event_path: Option<PathBuf>,
    /// Checkout location
    pub workspace: Option<PathBuf>,
    /// Sketches reports folder or artifact name pattern
    pub sketches_reports_source: Option<String>,
    /// The source came from the deprecated input name
    pub used_deprecated_input: bool,
}

impl ActionEnvironment {
    /// Read from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read through an arbitrary variable lookup
    ///
    /// Empty values count as unset, matching how Actions passes omitted
    /// inputs.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let deprecated = get(DEPRECATED_SOURCE_INPUT);
        let (sketches_reports_source, used_deprecated_input) = match deprecated {
            Some(source) => (Some(source), true),
            None => (get(SOURCE_INPUT), false),
        };

        Self {
            repository: get(REPOSITORY),
            event_name: get(EVENT_NAME),
            event_path: get(EVENT_PATH).map(PathBuf::from),
            workspace: get(WORKSPACE).map(PathBuf::from),
            sketches_reports_source,
            used_deprecated_input,
        }
    }

    /// Whether the run was triggered by a pull request event
    pub fn is_pull_request_event(&self) -> bool {
        self.event_name.as_deref() == Some(PULL_REQUEST_EVENT)
    }

    /// Deprecation notice for the old input name, if it was used
    pub fn deprecation_annotation(&self) -> Option<Annotation> {
        self.used_deprecated_input.then(|| {
            Annotation::Warning(
                "The size-deltas-reports-artifact-name input is deprecated. \
                 Use the equivalent input: sketches-reports-source instead."
                    .to_string(),
            )
        })
    }
}
