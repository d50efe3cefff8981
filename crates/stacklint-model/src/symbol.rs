//! Declared symbols and their identities.

/// Dense symbol index, assigned in document order during model construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Resource,
    Module,
    Variable,
    Parameter,
}

/// One named declaration in the document's scope.
#[derive(Clone, Debug)]
pub struct DeclaredSymbol {
    pub id: SymbolId,
    pub name: String,
    pub kind: SymbolKind,
    /// Meaningful only for resources and modules declared in a loop.
    pub is_collection: bool,
}

impl DeclaredSymbol {
    /// Resources and modules can participate in dependency relationships;
    /// variables and parameters cannot.
    pub fn is_entity(&self) -> bool {
        matches!(self.kind, SymbolKind::Resource | SymbolKind::Module)
    }
}
