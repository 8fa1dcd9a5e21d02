//! The type-query seam.
//!
//! Expression type-checking belongs to the host language's tooling, not
//! to this crate. [`ExpressionTypeQuery`] is the narrow interface through
//! which the template diagnostics generator requests semantic diagnostics
//! for every embedded expression; whatever comes back is trusted and
//! forwarded unchanged.

use smol_str::SmolStr;
use text_size::TextSize;

use crate::base::{FileId, Span};
use crate::semantic::types::Diagnostic;
use crate::syntax::{MarkupAst, TemplateAst};

/// External oracle that type-checks embedded expressions against the host
/// language's type system.
///
/// Implementations enforce the expression-language rules this crate does
/// not reproduce: `$event` only inside event bindings, pipe names
/// resolving to known pipes, operand type compatibility, and so on.
/// Returned spans must already be host-file-absolute; `anchor` is the
/// template's offset within its host file for exactly that translation.
pub trait ExpressionTypeQuery {
    fn query_expression_diagnostics(
        &self,
        template: &TemplateAst,
        markup: &MarkupAst,
        anchor: TextSize,
        members: &[SmolStr],
    ) -> Vec<Diagnostic>;
}

/// One template occurrence inside a host file.
///
/// `span` is host-file-absolute; `span.start` is the coordinate anchor
/// every template-local span is offset by when reported.
pub struct TemplateSource<'a> {
    /// The host file the template is embedded in.
    pub file: FileId,
    /// Host-file-absolute span of the template text.
    pub span: Span,
    /// Type oracle for expressions in scope at the embedding point.
    pub query: &'a dyn ExpressionTypeQuery,
    /// Member symbols visible to embedded expressions.
    pub members: Vec<SmolStr>,
}

impl<'a> TemplateSource<'a> {
    /// The template's offset within its host file.
    pub fn anchor(&self) -> TextSize {
        self.span.start
    }
}
