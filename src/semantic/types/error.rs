//! Declaration extraction errors.

use thiserror::Error;

use crate::base::Span;

/// An error recorded while extracting a declaration's metadata, e.g. an
/// unsupported decorator argument form.
///
/// Extraction happens in an external collaborator; the error arrives here
/// already formed and is surfaced verbatim as an `Error` diagnostic. When
/// no span was recorded the declaration's own span is used instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ExtractionError {
    pub message: String,
    /// Host-file-absolute span, when the extractor recorded one.
    pub span: Option<Span>,
}

impl ExtractionError {
    pub fn new(message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}
