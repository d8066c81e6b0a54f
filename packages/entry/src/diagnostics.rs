//! Diagnostics
//!
//! Non-fatal conditions observed during a resolution run. Nothing here
//! aborts the run; the orchestrator decides what to surface.

use std::fmt;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCategory {
    Error,
    Warning,
    Message,
}

/// A single diagnostic, optionally tied to the file that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub message: String,
    pub file: Option<String>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>, file: impl Into<String>) -> Self {
        Diagnostic {
            category: DiagnosticCategory::Warning,
            message: message.into(),
            file: Some(file.into()),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = match self.category {
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Message => "message",
        };
        match &self.file {
            Some(file) => write!(f, "{}: {} ({})", category, self.message, file),
            None => write!(f, "{}: {}", category, self.message),
        }
    }
}
