//! Diagnostic assertion helpers.

use templar::semantic::{Diagnostic, DiagnosticKind};

/// Check whether any error-level diagnostic contains `substring`.
pub fn has_error_containing(diagnostics: &[Diagnostic], substring: &str) -> bool {
    diagnostics
        .iter()
        .any(|d| d.kind == DiagnosticKind::Error && d.message.text().contains(substring))
}

/// Assert a diagnostic list is empty, printing the offenders otherwise.
pub fn assert_no_diagnostics(diagnostics: &[Diagnostic]) {
    assert!(
        diagnostics.is_empty(),
        "Expected no diagnostics, got {}:\n{}",
        diagnostics.len(),
        diagnostics
            .iter()
            .map(|d| format!(
                "  {}..{}: {}",
                u32::from(d.span.start),
                u32::from(d.span.end),
                d.message.text()
            ))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
