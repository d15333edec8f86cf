//! Generation-time diagnostics.
//!
//! The core never prints: diagnostics ride on the generation result and the
//! driver decides how to surface them (log lines or JSON).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A structured diagnostic attached to one generated unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Class the diagnostic was raised for.
    pub class: String,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            class: class.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{severity}: [{}] {}", self.class, self.message)
    }
}
