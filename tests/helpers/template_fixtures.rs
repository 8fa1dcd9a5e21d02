//! Template fixtures for diagnostics tests.
//!
//! The real template parser and type oracle live outside this crate, so
//! the tests stand in for both: fixture builders position expression
//! spans by searching the template text, and [`StubTypeQuery`] enforces a
//! small slice of the expression-language rules (enough to exercise the
//! pipeline with exact spans).

use smol_str::SmolStr;
use templar::base::{FileId, Span, TextSize};
use templar::semantic::{Diagnostic, ExpressionTypeQuery, TemplateSource};
use templar::syntax::{AstResult, BoundExpression, ExpressionContext, MarkupAst, TemplateAst};

/// Offset of the template inside the surrounding host file in every
/// fixture built here.
pub const ANCHOR: u32 = 200;

/// Template-local span of `needle` within `haystack`. Panics on a missing
/// needle so fixture mistakes surface as test failures, not silent misses.
pub fn span_of_substring(haystack: &str, needle: &str) -> Span {
    let start = haystack
        .find(needle)
        .unwrap_or_else(|| panic!("fixture text {haystack:?} must contain {needle:?}"))
        as u32;
    Span::from_raw(start, start + needle.len() as u32)
}

/// A bound expression positioned at its occurrence in the template text.
pub fn expression_in(
    template_text: &str,
    expr_text: &str,
    context: ExpressionContext,
) -> BoundExpression {
    BoundExpression {
        text: SmolStr::new(expr_text),
        span: span_of_substring(template_text, expr_text),
        context,
    }
}

/// A clean parse result over `template_text` with the given expressions.
pub fn ast_with_expressions(template_text: &str, expressions: Vec<BoundExpression>) -> AstResult {
    let span = Span::from_raw(0, template_text.len() as u32);
    AstResult::ok(TemplateAst { span, expressions }, MarkupAst { span })
}

/// A template source anchored at [`ANCHOR`] with the given visible members.
pub fn template_source<'a>(
    template_text: &str,
    query: &'a dyn ExpressionTypeQuery,
    members: &[&str],
) -> TemplateSource<'a> {
    TemplateSource {
        file: FileId::new(0),
        span: Span::from_raw(ANCHOR, ANCHOR + template_text.len() as u32),
        query,
        members: members.iter().map(|m| SmolStr::new(m)).collect(),
    }
}

/// Stand-in for the host type oracle.
///
/// Checks two rules with exact spans:
/// - `$event` is only defined inside event-binding expressions;
/// - a plain-identifier expression must name a visible member.
pub struct StubTypeQuery;

impl ExpressionTypeQuery for StubTypeQuery {
    fn query_expression_diagnostics(
        &self,
        template: &TemplateAst,
        _markup: &MarkupAst,
        anchor: TextSize,
        members: &[SmolStr],
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for expr in &template.expressions {
            if expr.context != ExpressionContext::Event {
                if let Some(at) = expr.text.find("$event") {
                    let local = Span::from_raw(
                        u32::from(expr.span.start) + at as u32,
                        u32::from(expr.span.start) + at as u32 + "$event".len() as u32,
                    );
                    diagnostics.push(Diagnostic::error(
                        local.offset_by(anchor),
                        "'$event' is not defined",
                    ));
                    continue;
                }
            }
            let is_plain_identifier = !expr.text.is_empty()
                && expr
                    .text
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_');
            if is_plain_identifier && !members.iter().any(|m| m == &expr.text) {
                diagnostics.push(Diagnostic::error(
                    expr.span.offset_by(anchor),
                    format!("Identifier '{}' is not defined", expr.text),
                ));
            }
        }
        diagnostics
    }
}

/// Oracle that must never be consulted; panics if it is.
pub struct UnreachableQuery;

impl ExpressionTypeQuery for UnreachableQuery {
    fn query_expression_diagnostics(
        &self,
        _template: &TemplateAst,
        _markup: &MarkupAst,
        _anchor: TextSize,
        _members: &[SmolStr],
    ) -> Vec<Diagnostic> {
        panic!("type oracle must not run for this template");
    }
}
