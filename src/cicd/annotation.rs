//! GitHub Actions workflow commands
//!
//! Printed to stdout, these show up as annotations on the workflow run.

use std::fmt;

/// A workflow command such as `::warning::message`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Only visible with step debug logging enabled
    Debug(String),
    /// Highlighted warning on the run summary
    Warning(String),
    /// Highlighted error on the run summary
    Error(String),
}

impl Annotation {
    /// Print the annotation to stdout
    pub fn emit(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (command, message) = match self {
            Self::Debug(message) => ("debug", message),
            Self::Warning(message) => ("warning", message),
            Self::Error(message) => ("error", message),
        };
        // Workflow commands are line oriented
        write!(f, "::{}::{}", command, message.replace('\n', "%0A"))
    }
}
