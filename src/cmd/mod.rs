//! Command handlers for the report-size-deltas CLI
//!
//! Each submodule handles a specific CLI command.

pub mod completions;
pub mod report;

pub use completions::cmd_completions;
pub use report::{cmd_report, ReportOptions};
