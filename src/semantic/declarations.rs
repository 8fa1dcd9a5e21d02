//! Declaration diagnostics validator.
//!
//! One pass over every discovered component/directive declaration,
//! checking each against the registration graph: extraction errors are
//! surfaced first, then the structural checks (module membership,
//! template-source exclusivity for components).

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::debug;

use crate::base::Span;
use crate::semantic::registry::{ModuleRegistry, TypeIdentity};
use crate::semantic::types::{Diagnostic, ExtractionError};

/// Component/directive metadata attached to a declaration by the
/// extractor. Absent metadata means the class was not recognized as
/// either; such declarations contribute only their extraction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveMetadata {
    pub is_component: bool,
    /// An inline `template` was present.
    pub has_inline_template: bool,
    /// A `templateUrl` was present.
    pub has_template_url: bool,
}

impl DirectiveMetadata {
    pub fn directive() -> Self {
        Self {
            is_component: false,
            has_inline_template: false,
            has_template_url: false,
        }
    }

    pub fn component(has_inline_template: bool, has_template_url: bool) -> Self {
        Self {
            is_component: true,
            has_inline_template,
            has_template_url,
        }
    }
}

/// One discovered component/directive class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Nominal identity of the declared type, as keyed in the registry.
    pub type_identity: TypeIdentity,
    /// Name to use in messages.
    pub name: SmolStr,
    /// Host-file-absolute span of the declaration.
    pub span: Span,
    /// Errors recorded during extraction, surfaced verbatim.
    pub errors: Vec<ExtractionError>,
    pub metadata: Option<DirectiveMetadata>,
}

/// Validate all declarations against the registration graph.
///
/// Emission order: declaration input order; within one declaration its
/// own extraction errors precede the structural checks. The flattened
/// directive set is built at most once per call, on the first directive
/// encountered, and shared for the rest of the pass.
pub fn get_declaration_diagnostics(
    declarations: &[Declaration],
    registry: &ModuleRegistry,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    // Call-scoped cache; the flatten walk is only worth paying for if at
    // least one directive declaration exists.
    let mut directives: Option<FxHashSet<TypeIdentity>> = None;

    for declaration in declarations {
        diagnostics.extend(declaration.errors.iter().map(|error| {
            Diagnostic::error(
                error.span.unwrap_or(declaration.span),
                error.message.clone(),
            )
        }));

        let Some(metadata) = declaration.metadata else {
            continue;
        };

        if metadata.is_component {
            if !registry.is_declared(&declaration.type_identity) {
                diagnostics.push(Diagnostic::error(
                    declaration.span,
                    format!(
                        "Component '{}' is not included in a module and will not be \
                         available inside a template. Consider adding it to a \
                         NgModule declaration.",
                        declaration.name
                    ),
                ));
            }
            // Independent of membership: exactly one template source.
            match (metadata.has_inline_template, metadata.has_template_url) {
                (false, false) => diagnostics.push(Diagnostic::error(
                    declaration.span,
                    format!(
                        "Component '{}' must have a template or templateUrl",
                        declaration.name
                    ),
                )),
                (true, true) => diagnostics.push(Diagnostic::error(
                    declaration.span,
                    format!(
                        "Component '{}' must not have both template and templateUrl",
                        declaration.name
                    ),
                )),
                _ => {}
            }
        } else {
            let declared = directives.get_or_insert_with(|| registry.flatten_declared_types());
            if !declared.contains(&declaration.type_identity) {
                diagnostics.push(Diagnostic::error(
                    declaration.span,
                    format!(
                        "Directive '{}' is not included in a module and will not be \
                         available inside a template. Consider adding it to a \
                         NgModule declaration.",
                        declaration.name
                    ),
                ));
            }
        }
    }

    debug!(
        "declaration diagnostics: {} declaration(s), {} diagnostic(s)",
        declarations.len(),
        diagnostics.len()
    );

    diagnostics
}
