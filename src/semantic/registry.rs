//! Module registry — which directive/pipe types each registration unit
//! declares.
//!
//! Kept bidirectional, like the reference index: the forward map answers
//! "what does this module declare", the reverse map answers "is this type
//! declared by any module". Both are maintained on insert so lookups are
//! allocation-free.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;
use tracing::trace;

/// Nominal identity of a declared component/directive/pipe type, suitable
/// as a map or set key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIdentity(SmolStr);

impl TypeIdentity {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeIdentity {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registration graph over one analysis snapshot.
///
/// Forward: registration unit → declared types, in registration order.
/// Reverse: declared type → owning units. An empty registry is valid;
/// every lookup degrades to "absent".
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    forward: IndexMap<SmolStr, Vec<TypeIdentity>>,
    reverse: FxHashMap<TypeIdentity, Vec<SmolStr>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `module` declares `types`. A module may be registered
    /// incrementally; later calls append.
    pub fn register(&mut self, module: impl Into<SmolStr>, types: Vec<TypeIdentity>) {
        let module = module.into();
        trace!("register: {} declares {} type(s)", module, types.len());
        for ty in &types {
            self.reverse.entry(ty.clone()).or_default().push(module.clone());
        }
        self.forward.entry(module).or_default().extend(types);
    }

    /// Units declaring `ty`, in registration order. Empty when unregistered.
    pub fn modules_declaring(&self, ty: &TypeIdentity) -> &[SmolStr] {
        self.reverse.get(ty).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any registration unit declares `ty` (reverse index lookup).
    pub fn is_declared(&self, ty: &TypeIdentity) -> bool {
        self.reverse.contains_key(ty)
    }

    /// Flatten the forward graph into the set of every declared type.
    ///
    /// This walk is what the declaration validator defers until it meets
    /// its first directive; the result is shared for the rest of that call.
    pub fn flatten_declared_types(&self) -> FxHashSet<TypeIdentity> {
        let set: FxHashSet<TypeIdentity> = self
            .forward
            .values()
            .flat_map(|types| types.iter().cloned())
            .collect();
        trace!(
            "flatten_declared_types: {} module(s), {} distinct type(s)",
            self.forward.len(),
            set.len()
        );
        set
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Number of registration units.
    pub fn module_count(&self) -> usize {
        self.forward.len()
    }
}
