//! Template diagnostics generator.
//!
//! Merges the three error sources of one template — parse errors,
//! semantic (type-oracle) diagnostics, and miscellaneous errors attached
//! by earlier stages — into one list. Parse errors win: a syntactically
//! broken template is never handed to the type oracle, since semantic
//! checks over a partial tree would implicate unrelated code.
//!
//! Output order is parse errors, then semantic, then miscellaneous.
//! Callers must not assume a global sort by position.

use tracing::debug;

use crate::base::Span;
use crate::semantic::oracle::TemplateSource;
use crate::semantic::types::Diagnostic;
use crate::syntax::{AstResult, ParseError};

/// Normalize a parse error's span: point spans are widened to the minimal
/// non-empty span, then anchored into the host file.
fn span_of(error: &ParseError, template: &TemplateSource<'_>) -> Span {
    error.span.widen_to_min().offset_by(template.anchor())
}

/// Compute all diagnostics for one template.
///
/// Never fails: a malformed result (no trees, no parse errors) degrades
/// to the miscellaneous-errors-only list.
pub fn get_template_diagnostics(
    template: &TemplateSource<'_>,
    ast: &AstResult,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if !ast.parse_errors.is_empty() {
        // Syntax errors suppress semantic checking entirely.
        diagnostics.extend(
            ast.parse_errors
                .iter()
                .map(|error| Diagnostic::error(span_of(error, template), error.message.clone())),
        );
    } else if let (Some(template_ast), Some(markup_ast)) = (&ast.template_ast, &ast.markup_ast) {
        diagnostics.extend(template.query.query_expression_diagnostics(
            template_ast,
            markup_ast,
            template.anchor(),
            &template.members,
        ));
    }

    // Errors attached mid-pipeline are reported regardless; each keeps its
    // own severity, falling back to the whole-template span.
    diagnostics.extend(ast.errors.iter().map(|error| {
        Diagnostic::with_kind(
            error.severity.into(),
            error.span.unwrap_or(template.span),
            error.message.clone(),
        )
    }));

    debug!(
        "template diagnostics: {} parse, {} misc, {} total",
        ast.parse_errors.len(),
        ast.errors.len(),
        diagnostics.len()
    );

    diagnostics
}
