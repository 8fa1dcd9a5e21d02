//! Host diagnostic records and the message-chain adapter.

use crate::base::FileId;
use crate::semantic::{Diagnostic, DiagnosticKind, DiagnosticMessage};

/// Tag identifying this engine as the diagnostic producer.
pub const SOURCE_TAG: &str = "templar";

/// Neutral code: the message text carries the semantics.
const UNCATEGORIZED: u32 = 0;

/// The host tooling's diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCategory {
    Error,
    Warning,
    Suggestion,
    Message,
}

impl From<DiagnosticKind> for HostCategory {
    fn from(kind: DiagnosticKind) -> Self {
        match kind {
            DiagnosticKind::Error => HostCategory::Error,
            DiagnosticKind::Warning => HostCategory::Warning,
        }
    }
}

/// The host tooling's message representation: a text with an optional
/// chained detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostMessage {
    pub text: String,
    pub category: HostCategory,
    pub code: u32,
    pub next: Option<Box<HostMessage>>,
}

/// Convert a message (plain or cause chain) into the host shape.
///
/// Structural recursion over the chain; every link defaults to category
/// Error with the neutral code.
pub fn to_host_message(message: &DiagnosticMessage) -> HostMessage {
    match message {
        DiagnosticMessage::Plain(text) => HostMessage {
            text: text.clone(),
            category: HostCategory::Error,
            code: UNCATEGORIZED,
            next: None,
        },
        DiagnosticMessage::Chain { message, next } => HostMessage {
            text: message.clone(),
            category: HostCategory::Error,
            code: UNCATEGORIZED,
            next: Some(Box::new(to_host_message(next))),
        },
    }
}

/// The host tooling's diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDiagnostic {
    pub file: FileId,
    /// Start offset in the host file.
    pub start: u32,
    /// `end - start`.
    pub length: u32,
    pub message: HostMessage,
    pub category: HostCategory,
    pub code: u32,
    pub source: &'static str,
}

/// Convert one diagnostic into the host record for `file`.
pub fn to_host_diagnostic(file: FileId, diagnostic: &Diagnostic) -> HostDiagnostic {
    HostDiagnostic {
        file,
        start: diagnostic.span.start.into(),
        length: diagnostic.span.len().into(),
        message: to_host_message(&diagnostic.message),
        category: diagnostic.kind.into(),
        code: UNCATEGORIZED,
        source: SOURCE_TAG,
    }
}

/// Convert a diagnostic list, preserving order.
pub fn to_host_diagnostics(file: FileId, diagnostics: &[Diagnostic]) -> Vec<HostDiagnostic> {
    diagnostics
        .iter()
        .map(|diagnostic| to_host_diagnostic(file, diagnostic))
        .collect()
}
