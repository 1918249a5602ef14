#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! size-deltas library
//!
//! Merges per-board memory usage reports produced by sketch compilation into
//! a single comparison and renders it as a size-bounded pull request comment.
//! It can be used programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Rendering a comment from reports already in memory:
//!
//! ```
//! use size_deltas::report::{generate_report, ReportSet, Section, SketchesReport};
//!
//! let report: SketchesReport = serde_json::from_str(r#"{
//!     "commit_hash": "d8fd302",
//!     "commit_url": "https://example.com/d8fd302",
//!     "boards": [{
//!         "board": "arduino:avr:leonardo",
//!         "sizes": [{"name": "flash", "maximum": 28672, "delta": {
//!             "absolute": {"minimum": -12, "maximum": -12},
//!             "relative": {"minimum": -0.05, "maximum": -0.05}}}]
//!     }]
//! }"#).unwrap();
//!
//! let reports = ReportSet::new(vec![report]).unwrap();
//! let rendered = generate_report(&reports).unwrap();
//!
//! assert!(rendered.body.contains(":green_heart: -12 - -12"));
//! assert!(rendered.includes(Section::Csv));
//! ```
//!
//! # Advanced Example: Reading a Reports Folder
//!
//! Legacy-format reports are skipped; `None` means there was no size data:
//!
//! ```
//! use size_deltas::ingest::ReportIngestor;
//! use tempfile::TempDir;
//!
//! let folder = TempDir::new().unwrap();
//! std::fs::write(folder.path().join("old.json"), r#"{"sketch_path": "examples/Foo"}"#).unwrap();
//!
//! let reports = ReportIngestor::new().ingest(folder.path()).unwrap();
//! assert!(reports.is_none());
//! ```

/// CI/CD integration tooling
pub mod cicd;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file, environment and settings resolution
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// GitHub event payloads and pull request scanning
pub mod github;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Sketches report discovery and filtering
pub mod ingest;
/// Report tables and comment rendering
pub mod report;
