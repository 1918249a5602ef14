//! Effective settings after layering all configuration sources
//!
//! Precedence, highest first: command line, Actions environment,
//! `.size-deltas.toml`, built-in defaults.

use super::env::ActionEnvironment;
use super::file::{ConfigFile, DEFAULT_SKETCHES_REPORTS_SOURCE};
use super::loader::ConfigLoader;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::Result;
use std::path::PathBuf;

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// `--reports-source`
    pub sketches_reports_source: Option<String>,
    /// `--workspace`
    pub workspace: Option<PathBuf>,
    /// `--output`
    pub output: Option<PathBuf>,
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Folder the reports source is relative to
    pub workspace: PathBuf,
    /// Sketches reports folder or artifact name pattern
    pub sketches_reports_source: String,
    /// Comment body destination; stdout when unset
    pub output: Option<PathBuf>,
}

impl Settings {
    /// Resolve the workspace, load its config file and layer everything
    pub fn load(cli: &CliOverrides, env: &ActionEnvironment) -> Result<Self> {
        Self::load_with_fs(cli, env, &RealFileSystem)
    }

    /// [`Settings::load`] with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(
        cli: &CliOverrides,
        env: &ActionEnvironment,
        fs: &FS,
    ) -> Result<Self> {
        let workspace = Self::workspace(cli, env);
        let file = ConfigLoader::load_with_fs(&workspace, fs)?;
        Ok(Self::resolve(cli, env, &file))
    }

    /// Layer already-loaded sources
    pub fn resolve(cli: &CliOverrides, env: &ActionEnvironment, file: &ConfigFile) -> Self {
        let sketches_reports_source = cli
            .sketches_reports_source
            .clone()
            .or_else(|| env.sketches_reports_source.clone())
            .or_else(|| file.sketches_reports_source.clone())
            .unwrap_or_else(|| DEFAULT_SKETCHES_REPORTS_SOURCE.to_string());

        Self {
            workspace: Self::workspace(cli, env),
            sketches_reports_source,
            output: cli.output.clone().or_else(|| file.output.clone()),
        }
    }

    fn workspace(cli: &CliOverrides, env: &ActionEnvironment) -> PathBuf {
        cli.workspace
            .clone()
            .or_else(|| env.workspace.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Local folder holding the sketches reports
    pub fn reports_folder(&self) -> PathBuf {
        self.workspace.join(&self.sketches_reports_source)
    }
}
