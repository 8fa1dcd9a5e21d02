//! # templar-base
//!
//! Core diagnostics library for templates embedded in host-language
//! source files.
//!
//! Parsed template fragments are cross-referenced against a host type
//! oracle (expression type-checking) and a module registry (which
//! components/directives are declared where), and everything is folded
//! into one normalized diagnostic list with host-file-absolute spans.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → host-diagnostic adaptation (message chains, records)
//!   ↓
//! semantic  → diagnostic model, type-query seam, module registry,
//!             template + declaration diagnostics
//!   ↓
//! syntax    → template-parser interface types (AstResult, ParseError)
//!   ↓
//! base      → primitives (FileId, Span)
//! ```
//!
//! Parsing the template grammar, host-language type inference, and
//! artifact caching all live outside this crate; they are consumed
//! through the narrow interfaces in `syntax` and `semantic::oracle`.

// ============================================================================
// MODULES (dependency order: base → syntax → semantic → ide)
// ============================================================================

/// Foundation types: FileId, Span
pub mod base;

/// Template-parser interface: AstResult, ParseError, tree summaries
pub mod syntax;

/// Diagnostics: model, type-query seam, registry, generator, validator
pub mod semantic;

/// Host adaptation: message chains, host diagnostic records
pub mod ide;

// Re-export foundation types
pub use base::{FileId, Span, TextSize};

// Re-export the diagnostic surface
pub use semantic::{
    Declaration, Diagnostic, DiagnosticKind, DiagnosticMessage, DirectiveMetadata,
    ExpressionTypeQuery, ExtractionError, ModuleRegistry, TemplateSource, TypeIdentity,
    get_declaration_diagnostics, get_template_diagnostics,
};

// Re-export the host boundary
pub use ide::{HostCategory, HostDiagnostic, HostMessage, to_host_diagnostic, to_host_diagnostics};
