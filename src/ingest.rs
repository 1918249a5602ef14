//! Sketches report discovery and filtering
//!
//! Scans a folder tree for `*.json` report files in sorted path order, skips
//! reports written in the legacy format, and keeps those that carry size
//! deltas data.

use crate::error::SizeDeltasError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::report::{ReportSet, SketchesReport};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Outcome of checking one report document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Accepted,
    LegacyFormat,
}

/// Current-format documents have `boards[0].sizes[0].maximum`
///
/// Passing this check also means the first board carries size data, so an
/// accepted document always contributes to the summary.
fn inspect(document: &Value) -> Verdict {
    let Some(boards) = document.get("boards").and_then(Value::as_array) else {
        return Verdict::LegacyFormat;
    };
    let first_size = boards
        .first()
        .and_then(|board| board.get("sizes"))
        .and_then(Value::as_array)
        .and_then(|sizes| sizes.first());
    match first_size.and_then(|size| size.get("maximum")) {
        Some(_) => Verdict::Accepted,
        None => Verdict::LegacyFormat,
    }
}

/// Collects sketches reports from a folder tree
pub struct ReportIngestor<FS: FileSystem = RealFileSystem> {
    fs: FS,
}

impl ReportIngestor<RealFileSystem> {
    /// Create an ingestor reading from the real filesystem
    pub fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl Default for ReportIngestor<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<FS: FileSystem> ReportIngestor<FS> {
    /// Create an ingestor with a custom filesystem implementation
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }

    /// Read every qualifying report under `root`
    ///
    /// Returns `Ok(None)` when nothing qualified, so the caller can skip
    /// commenting. A file that is not valid JSON, or not a valid report
    /// once it passes the format check, is an error.
    pub fn ingest(&self, root: &Path) -> Result<Option<ReportSet>, SizeDeltasError> {
        if !self.fs.is_dir(root) {
            return Err(SizeDeltasError::ReportsFolderNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut reports = Vec::new();
        for path in self.report_files(root)? {
            log::debug!("Reading sketches report {}", path.display());
            if let Some(report) = self.read_report(&path)? {
                reports.push(report);
            }
        }

        let set = ReportSet::new(reports);
        if set.is_none() {
            log::warn!(
                "No size deltas data found in {}. The compile-sketches action's \
                 enable-size-deltas-report input must be set to true to produce size deltas data.",
                root.display()
            );
        }
        Ok(set)
    }

    /// All `*.json` files under `root`, sorted by path
    fn report_files(&self, root: &Path) -> Result<Vec<PathBuf>, SizeDeltasError> {
        let mut files = self
            .fs
            .walk_files(root)
            .map_err(|source| SizeDeltasError::Io {
                context: format!("scanning {}", root.display()),
                source,
            })?;
        files.retain(|path| path.extension().is_some_and(|ext| ext == "json"));
        files.sort();
        Ok(files)
    }

    fn read_report(&self, path: &Path) -> Result<Option<SketchesReport>, SizeDeltasError> {
        let contents = self
            .fs
            .read_to_string(path)
            .map_err(|source| SizeDeltasError::Io {
                context: format!("reading {}", path.display()),
                source,
            })?;
        let invalid = |source| SizeDeltasError::InvalidReport {
            path: path.to_path_buf(),
            source,
        };

        let document: Value = serde_json::from_str(&contents).map_err(invalid)?;
        match inspect(&document) {
            Verdict::LegacyFormat => {
                log::warn!("Old format sketches report found, skipping: {}", path.display());
                Ok(None)
            }
            Verdict::Accepted => serde_json::from_value(document).map(Some).map_err(invalid),
        }
    }
}
