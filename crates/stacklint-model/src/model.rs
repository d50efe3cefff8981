//! Symbol table and resolution queries over one document.

use crate::symbol::{DeclaredSymbol, SymbolId, SymbolKind};
use crate::syntax::{
    Declaration, Document, Expression, ModuleDeclaration, ObjectItem, ResourceDeclaration,
};
use stacklint_types::SourcePath;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModelBuildError {
    #[error("symbol '{name}' is declared more than once")]
    DuplicateSymbol { name: String },
}

/// Read-only semantic model handed to rules.
///
/// Rules never mutate the model; every query borrows.
#[derive(Clone, Debug)]
pub struct SemanticModel {
    source: SourcePath,
    document: Document,
    symbols: Vec<DeclaredSymbol>,
    by_name: BTreeMap<String, SymbolId>,
}

impl SemanticModel {
    pub fn source(&self) -> &SourcePath {
        &self.source
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn symbol(&self, id: SymbolId) -> &DeclaredSymbol {
        &self.symbols[id.0 as usize]
    }

    pub fn symbols(&self) -> impl Iterator<Item = &DeclaredSymbol> {
        self.symbols.iter()
    }

    /// Symbol bound to a resource declaration, if the declaration made it
    /// into the symbol table.
    pub fn symbol_of_resource(&self, declaration: &ResourceDeclaration) -> Option<&DeclaredSymbol> {
        self.lookup(&declaration.name)
            .filter(|s| s.kind == SymbolKind::Resource)
    }

    pub fn symbol_of_module(&self, declaration: &ModuleDeclaration) -> Option<&DeclaredSymbol> {
        self.lookup(&declaration.name)
            .filter(|s| s.kind == SymbolKind::Module)
    }

    /// Resolve an expression to the symbol it denotes.
    ///
    /// Only bare symbolic references resolve; property accesses, literals,
    /// and composites denote values, not declarations.
    pub fn resolve_reference(&self, expression: &Expression) -> Option<&DeclaredSymbol> {
        match expression {
            Expression::SymbolicReference { name, .. } => self.lookup(name),
            _ => None,
        }
    }

    fn lookup(&self, name: &str) -> Option<&DeclaredSymbol> {
        self.by_name.get(name).map(|id| self.symbol(*id))
    }
}

/// Builds the symbol table for a document.
///
/// Symbol IDs are assigned in document order, nested child resources
/// immediately after their parent. Duplicate names are rejected: the rule
/// layer assumes a name resolves to at most one declaration.
#[derive(Debug, Default)]
pub struct SemanticModelBuilder {
    source: SourcePath,
    declarations: Vec<Declaration>,
}

impl SemanticModelBuilder {
    pub fn new(source: SourcePath) -> Self {
        Self {
            source,
            declarations: Vec::new(),
        }
    }

    pub fn declare(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    pub fn build(self) -> Result<SemanticModel, ModelBuildError> {
        let mut symbols = Vec::new();
        let mut by_name = BTreeMap::new();

        for declaration in &self.declarations {
            collect_symbols(declaration, &mut symbols, &mut by_name)?;
        }

        Ok(SemanticModel {
            source: self.source,
            document: Document {
                declarations: self.declarations,
            },
            symbols,
            by_name,
        })
    }
}

fn collect_symbols(
    declaration: &Declaration,
    symbols: &mut Vec<DeclaredSymbol>,
    by_name: &mut BTreeMap<String, SymbolId>,
) -> Result<(), ModelBuildError> {
    match declaration {
        Declaration::Resource(resource) => collect_resource(resource, symbols, by_name),
        Declaration::Module(module) => bind(
            &module.name,
            SymbolKind::Module,
            module.is_collection,
            symbols,
            by_name,
        ),
        Declaration::Variable(variable) => {
            bind(&variable.name, SymbolKind::Variable, false, symbols, by_name)
        }
        Declaration::Parameter(parameter) => bind(
            &parameter.name,
            SymbolKind::Parameter,
            false,
            symbols,
            by_name,
        ),
    }
}

fn collect_resource(
    resource: &ResourceDeclaration,
    symbols: &mut Vec<DeclaredSymbol>,
    by_name: &mut BTreeMap<String, SymbolId>,
) -> Result<(), ModelBuildError> {
    bind(
        &resource.name,
        SymbolKind::Resource,
        resource.is_collection,
        symbols,
        by_name,
    )?;

    if let Some(body) = &resource.body {
        for item in &body.items {
            if let ObjectItem::Resource(child) = item {
                collect_resource(child, symbols, by_name)?;
            }
        }
    }
    Ok(())
}

fn bind(
    name: &str,
    kind: SymbolKind,
    is_collection: bool,
    symbols: &mut Vec<DeclaredSymbol>,
    by_name: &mut BTreeMap<String, SymbolId>,
) -> Result<(), ModelBuildError> {
    if by_name.contains_key(name) {
        return Err(ModelBuildError::DuplicateSymbol {
            name: name.to_string(),
        });
    }
    let id = SymbolId(symbols.len() as u32);
    symbols.push(DeclaredSymbol {
        id,
        name: name.to_string(),
        kind,
        is_collection,
    });
    by_name.insert(name.to_string(), id);
    Ok(())
}
