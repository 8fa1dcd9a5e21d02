pub mod diagnostic;
pub mod error;

pub use diagnostic::{Diagnostic, DiagnosticKind, DiagnosticMessage};
pub use error::ExtractionError;
