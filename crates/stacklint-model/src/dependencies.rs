//! Contract between the dependency inference engine and the rule layer.
//!
//! Inference itself lives with the compiler; rules consume its output as a
//! precomputed, immutable mapping for the duration of one analysis pass.

use crate::model::SemanticModel;
use crate::symbol::SymbolId;
use std::collections::{BTreeMap, BTreeSet};

/// One inferred relationship: the owning entity depends on `target`.
///
/// Records are deduplicated by target identity within each entity's set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceDependency {
    pub target: SymbolId,
}

impl ResourceDependency {
    pub fn on(target: SymbolId) -> Self {
        Self { target }
    }
}

/// Inferred dependencies per declared entity.
///
/// Entities with no inferred dependencies are absent, not mapped to an empty
/// set. Rules rely on that distinction to short-circuit whole declarations,
/// so callers must not default missing keys.
pub type InferredDependencyMap = BTreeMap<SymbolId, BTreeSet<ResourceDependency>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InferenceOptions {
    /// Infer from property references only, leaving explicit `dependsOn`
    /// lists out of the result. Rules auditing those lists set this so the
    /// entries under audit cannot mask what inference alone would find.
    pub ignore_explicit_depends_on: bool,
}

/// Supplies inferred dependencies for a whole document.
///
/// Called once per analysis pass; the returned map is treated as immutable
/// until the pass completes.
pub trait DependencyProvider {
    fn inferred_dependencies(
        &self,
        model: &SemanticModel,
        options: InferenceOptions,
    ) -> InferredDependencyMap;
}

/// Adapter for embedders that computed the mapping upstream.
///
/// The held map must already honor whatever options the caller will pass;
/// in particular, a map destined for `dependsOn` auditing must have been
/// computed with explicit lists ignored.
#[derive(Clone, Debug, Default)]
pub struct PrecomputedDependencies {
    map: InferredDependencyMap,
}

impl PrecomputedDependencies {
    pub fn new(map: InferredDependencyMap) -> Self {
        Self { map }
    }
}

impl DependencyProvider for PrecomputedDependencies {
    fn inferred_dependencies(
        &self,
        _model: &SemanticModel,
        _options: InferenceOptions,
    ) -> InferredDependencyMap {
        self.map.clone()
    }
}
