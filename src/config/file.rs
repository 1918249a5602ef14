//! Configuration file data structures

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".size-deltas.toml";

/// Default folder (local mode) or artifact name pattern (scan mode) for sketches reports
pub const DEFAULT_SKETCHES_REPORTS_SOURCE: &str = "sketches-reports";

/// size-deltas configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Sketches reports folder, or artifact name pattern when scanning
    #[serde(
        rename = "sketches-reports-source",
        skip_serializing_if = "Option::is_none"
    )]
    pub sketches_reports_source: Option<String>,

    /// Write the comment body here instead of stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl ConfigFile {
    /// Reject values that can never locate any reports
    pub fn validate(&self) -> Result<()> {
        if let Some(source) = &self.sketches_reports_source {
            if source.trim().is_empty() {
                anyhow::bail!("sketches-reports-source cannot be empty");
            }
        }
        Ok(())
    }
}
