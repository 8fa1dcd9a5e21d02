//! Template parse results.
//!
//! This module defines the result shape handed over by the external
//! template parser: syntax errors (template-local spans), the two tree
//! summaries when parsing succeeded, and miscellaneous errors attached by
//! earlier pipeline stages.

use crate::base::Span;
use crate::syntax::ast::{MarkupAst, TemplateAst};

/// Severity attached to a mid-pipeline template error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Syntax-level error from the template parser.
///
/// The span is template-local and may be a single point; the diagnostics
/// generator widens and anchors it before reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}: {}", u32::from(self.span.start), u32::from(self.span.end), self.message)
    }
}

impl std::error::Error for ParseError {}

/// An error attached during earlier processing stages (e.g. an
/// index-expression evaluation failure), carrying its own severity.
///
/// The span, when present, is already resolved by the producer; `None`
/// means "report against the whole template".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateError {
    pub severity: Severity,
    pub span: Option<Span>,
    pub message: String,
}

impl TemplateError {
    pub fn error(message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            severity: Severity::Error,
            span,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            severity: Severity::Warning,
            span,
            message: message.into(),
        }
    }
}

/// Everything the template parser produced for one template.
///
/// The trees are present only when there were no parse errors; a result
/// with neither trees nor parse errors is structurally plausible (an
/// earlier stage failed before parsing) and must degrade gracefully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AstResult {
    pub parse_errors: Vec<ParseError>,
    pub template_ast: Option<TemplateAst>,
    pub markup_ast: Option<MarkupAst>,
    pub errors: Vec<TemplateError>,
}

impl AstResult {
    /// A clean result with both trees.
    pub fn ok(template_ast: TemplateAst, markup_ast: MarkupAst) -> Self {
        Self {
            parse_errors: Vec::new(),
            template_ast: Some(template_ast),
            markup_ast: Some(markup_ast),
            errors: Vec::new(),
        }
    }

    /// A result that failed at the syntax level; no trees.
    pub fn with_parse_errors(parse_errors: Vec<ParseError>) -> Self {
        Self {
            parse_errors,
            ..Self::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.parse_errors.is_empty() && self.errors.is_empty() && self.template_ast.is_some()
    }
}
