//! Tree summaries handed to the type oracle.
//!
//! The template parser lives outside this crate; what arrives here is the
//! surface the diagnostics pipeline needs: the structural (expression)
//! tree and the markup tree, each carrying template-local spans.

use smol_str::SmolStr;

use crate::base::Span;

/// Where an embedded expression occurs inside the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionContext {
    /// Event binding, e.g. `(click)="..."`. The only context where
    /// `$event` is in scope.
    Event,
    /// Property binding, e.g. `[tabIndex]="..."`.
    Property,
    /// Interpolation, e.g. `{{ ... }}`.
    Interpolation,
}

/// One embedded expression with its template-local span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundExpression {
    /// Source text of the expression.
    pub text: SmolStr,
    /// Template-local span of the expression text.
    pub span: Span,
    pub context: ExpressionContext,
}

/// Structural tree of one template: the embedded expressions in
/// document order. Present only when the template parsed cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAst {
    /// Template-local span of the whole tree.
    pub span: Span,
    pub expressions: Vec<BoundExpression>,
}

/// Markup (element/attribute) tree of one template. Opaque to the
/// diagnostics pipeline; it is forwarded to the type oracle, which walks
/// it for element context (e.g. which bindings are event bindings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupAst {
    /// Template-local span of the whole tree.
    pub span: Span,
}
