//! Entry Plan
//!
//! Serializable form of a resolution run. The host build tool turns each
//! plan entry into one build entry, 1:1 and in order.

use miniapp_entry::diagnostics::{Diagnostic, DiagnosticCategory};
use miniapp_entry::{EntryDescriptor, Resolution};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EntryPlan {
    pub entries: Vec<EntryDescriptor>,
}

impl EntryPlan {
    pub fn from_resolution(resolution: &Resolution) -> Self {
        EntryPlan {
            entries: resolution.entries.clone(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Format diagnostics for display, one per line.
pub fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut output = String::new();
    for diagnostic in diagnostics {
        output.push_str(&diagnostic.to_string());
        output.push('\n');
    }
    output
}

/// Get exit code from a finished run. Warnings do not fail the build.
pub fn exit_code_from_diagnostics(diagnostics: &[Diagnostic]) -> i32 {
    let has_errors = diagnostics
        .iter()
        .any(|d| d.category == DiagnosticCategory::Error);
    if has_errors {
        1
    } else {
        0
    }
}
