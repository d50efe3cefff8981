//! Read-only semantic model surface consumed by the rule layer.
//!
//! Parsing and full semantic analysis happen elsewhere; this crate defines
//! the syntax subset rules traverse, the symbol table they query, and the
//! contract through which an inference engine supplies implicit resource
//! dependencies.

#![forbid(unsafe_code)]

pub mod dependencies;
pub mod model;
pub mod symbol;
pub mod syntax;

pub use dependencies::{
    DependencyProvider, InferenceOptions, InferredDependencyMap, PrecomputedDependencies,
    ResourceDependency,
};
pub use model::{ModelBuildError, SemanticModel, SemanticModelBuilder};
pub use symbol::{DeclaredSymbol, SymbolId, SymbolKind};
pub use syntax::{
    ArrayItem, ArraySyntax, Declaration, Document, Expression, ModuleDeclaration, ObjectItem,
    ObjectProperty, ObjectSyntax, ParameterDeclaration, ResourceDeclaration, VariableDeclaration,
    DEPENDS_ON_PROPERTY,
};
