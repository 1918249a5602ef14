//! Configuration for report-size-deltas
//!
//! This module provides:
//! - .size-deltas.toml config file support
//! - GitHub Actions environment and input reading
//! - Layered settings resolution

pub mod env;
pub mod file;
pub mod loader;
pub mod settings;

pub use env::ActionEnvironment;
pub use file::{ConfigFile, CONFIG_FILE_NAME, DEFAULT_SKETCHES_REPORTS_SOURCE};
pub use loader::ConfigLoader;
pub use settings::{CliOverrides, Settings};
