//! CI/CD integration module
//!
//! Provides:
//! - GitHub Actions workflow command annotations
//! - JSON output for CI/CD tool integration

pub mod annotation;
pub mod output;

pub use annotation::Annotation;
pub use output::JsonOutput;
