//! Syntax subset that rules traverse.
//!
//! A tagged union per declaration kind keeps traversal a single match with
//! recursive descent, rather than a visitor type per node kind.

use stacklint_types::TextSpan;

/// Body property that lists explicit dependencies.
pub const DEPENDS_ON_PROPERTY: &str = "dependsOn";

/// One parsed template document.
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub declarations: Vec<Declaration>,
}

/// Top-level declaration kinds.
#[derive(Clone, Debug)]
pub enum Declaration {
    Resource(ResourceDeclaration),
    Module(ModuleDeclaration),
    Variable(VariableDeclaration),
    Parameter(ParameterDeclaration),
}

/// `resource <name> '<type>' = { ... }`, optionally declared in a loop.
#[derive(Clone, Debug)]
pub struct ResourceDeclaration {
    pub name: String,
    pub type_name: String,
    pub span: TextSpan,
    /// Declared with repeating cardinality: the symbol denotes a set of
    /// instances rather than one.
    pub is_collection: bool,
    pub body: Option<ObjectSyntax>,
}

/// `module <name> '<source>' = { ... }`.
#[derive(Clone, Debug)]
pub struct ModuleDeclaration {
    pub name: String,
    pub source: String,
    pub span: TextSpan,
    pub is_collection: bool,
    pub body: Option<ObjectSyntax>,
}

#[derive(Clone, Debug)]
pub struct VariableDeclaration {
    pub name: String,
    pub span: TextSpan,
    pub value: Expression,
}

#[derive(Clone, Debug)]
pub struct ParameterDeclaration {
    pub name: String,
    pub span: TextSpan,
    pub type_name: String,
}

/// Object literal: properties plus nested child resources.
#[derive(Clone, Debug, Default)]
pub struct ObjectSyntax {
    pub span: TextSpan,
    pub items: Vec<ObjectItem>,
}

#[derive(Clone, Debug)]
pub enum ObjectItem {
    Property(ObjectProperty),
    /// Child resource declared inside a parent resource body.
    Resource(ResourceDeclaration),
}

#[derive(Clone, Debug)]
pub struct ObjectProperty {
    pub name: String,
    pub span: TextSpan,
    pub value: Expression,
}

impl ObjectSyntax {
    /// First property with the given name, if any.
    pub fn property(&self, name: &str) -> Option<&ObjectProperty> {
        self.items.iter().find_map(|item| match item {
            ObjectItem::Property(p) if p.name == name => Some(p),
            _ => None,
        })
    }

    pub fn nested_resources(&self) -> impl Iterator<Item = &ResourceDeclaration> {
        self.items.iter().filter_map(|item| match item {
            ObjectItem::Resource(r) => Some(r),
            _ => None,
        })
    }
}

/// Expression subset relevant to dependency auditing.
#[derive(Clone, Debug)]
pub enum Expression {
    /// Bare reference to a declared symbol, e.g. `storage`.
    SymbolicReference { name: String, span: TextSpan },
    /// Dotted access, e.g. `storage.properties.endpoint`.
    PropertyAccess {
        base: Box<Expression>,
        property: String,
        span: TextSpan,
    },
    Array(ArraySyntax),
    Object(ObjectSyntax),
    StringLiteral { value: String, span: TextSpan },
    IntegerLiteral { value: i64, span: TextSpan },
}

impl Expression {
    pub fn span(&self) -> TextSpan {
        match self {
            Expression::SymbolicReference { span, .. }
            | Expression::PropertyAccess { span, .. }
            | Expression::StringLiteral { span, .. }
            | Expression::IntegerLiteral { span, .. } => *span,
            Expression::Array(array) => array.span,
            Expression::Object(object) => object.span,
        }
    }

    pub fn as_array(&self) -> Option<&ArraySyntax> {
        match self {
            Expression::Array(array) => Some(array),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ArraySyntax {
    pub span: TextSpan,
    pub items: Vec<ArrayItem>,
}

/// One element of an array literal, with its own span for diagnostics.
#[derive(Clone, Debug)]
pub struct ArrayItem {
    pub span: TextSpan,
    pub value: Expression,
}
