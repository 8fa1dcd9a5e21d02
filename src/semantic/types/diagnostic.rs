//! Diagnostic types.
//!
//! The internal diagnostic shape shared by every error source. Spans are
//! host-file-absolute by the time a [`Diagnostic`] exists; producers with
//! template-local coordinates translate before constructing one.

use crate::base::Span;

/// Severity of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    Error,
    Warning,
}

impl From<crate::syntax::Severity> for DiagnosticKind {
    fn from(severity: crate::syntax::Severity) -> Self {
        match severity {
            crate::syntax::Severity::Error => DiagnosticKind::Error,
            crate::syntax::Severity::Warning => DiagnosticKind::Warning,
        }
    }
}

/// A diagnostic message: plain text, or a cause chain running from the
/// outer explanation down to the inner detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticMessage {
    Plain(String),
    Chain {
        message: String,
        next: Box<DiagnosticMessage>,
    },
}

impl DiagnosticMessage {
    /// The outermost message text.
    pub fn text(&self) -> &str {
        match self {
            DiagnosticMessage::Plain(text) => text,
            DiagnosticMessage::Chain { message, .. } => message,
        }
    }

    /// Prepend an outer explanation, pushing `self` down as the detail.
    pub fn chained(self, message: impl Into<String>) -> Self {
        DiagnosticMessage::Chain {
            message: message.into(),
            next: Box::new(self),
        }
    }

    /// Depth of the chain (1 for a plain message).
    pub fn depth(&self) -> usize {
        match self {
            DiagnosticMessage::Plain(_) => 1,
            DiagnosticMessage::Chain { next, .. } => 1 + next.depth(),
        }
    }
}

impl From<String> for DiagnosticMessage {
    fn from(text: String) -> Self {
        DiagnosticMessage::Plain(text)
    }
}

impl From<&str> for DiagnosticMessage {
    fn from(text: &str) -> Self {
        DiagnosticMessage::Plain(text.to_string())
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// A diagnostic with location. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Host-file-absolute span.
    pub span: Span,
    pub message: DiagnosticMessage,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(span: Span, message: impl Into<DiagnosticMessage>) -> Self {
        Self {
            kind: DiagnosticKind::Error,
            span,
            message: message.into(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(span: Span, message: impl Into<DiagnosticMessage>) -> Self {
        Self {
            kind: DiagnosticKind::Warning,
            span,
            message: message.into(),
        }
    }

    /// Create a diagnostic with an explicit kind.
    pub fn with_kind(kind: DiagnosticKind, span: Span, message: impl Into<DiagnosticMessage>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }
}
