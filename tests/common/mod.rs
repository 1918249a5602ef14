//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Sketches report fixtures and the comment they render to
//! - Workspace setup in temporary directories
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures;
//!
//! let (_workspace, folder) = fixtures::create_workspace().unwrap();
//! ```

pub mod fixtures;

/// Environment variables the binary reads, cleared for hermetic CLI runs
#[allow(dead_code)]
pub const ACTION_VARIABLES: &[&str] = &[
    "GITHUB_REPOSITORY",
    "GITHUB_EVENT_NAME",
    "GITHUB_EVENT_PATH",
    "GITHUB_WORKSPACE",
    "INPUT_SKETCHES-REPORTS-SOURCE",
    "INPUT_SIZE-DELTAS-REPORTS-ARTIFACT-NAME",
    "INPUT_GITHUB-TOKEN",
    "RUST_LOG",
];
