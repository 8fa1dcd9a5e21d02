//! # Diagnostics
//!
//! This module turns heterogeneous error sources — template parse errors,
//! embedded-expression type errors, declaration extraction errors, and
//! registration-structure problems — into one normalized diagnostic list
//! with host-file-absolute spans.
//!
//! Entry points:
//! - [`get_template_diagnostics`] — one template at a time
//! - [`get_declaration_diagnostics`] — one analysis pass over all
//!   discovered declarations
//!
//! Both are pure functions over read-only snapshots; they hold no state
//! between calls and never fail on malformed-but-plausible input.

pub mod declarations;
pub mod oracle;
pub mod registry;
pub mod template;
pub mod types;

pub use declarations::{Declaration, DirectiveMetadata, get_declaration_diagnostics};
pub use oracle::{ExpressionTypeQuery, TemplateSource};
pub use registry::{ModuleRegistry, TypeIdentity};
pub use template::get_template_diagnostics;
pub use types::{Diagnostic, DiagnosticKind, DiagnosticMessage, ExtractionError};
