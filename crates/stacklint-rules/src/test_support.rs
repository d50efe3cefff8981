use stacklint_model::{
    ArrayItem, ArraySyntax, Declaration, Expression, ModuleDeclaration, ObjectItem,
    ObjectProperty, ObjectSyntax, PrecomputedDependencies, ResourceDeclaration,
    ResourceDependency, SemanticModel, SemanticModelBuilder, SymbolId, VariableDeclaration,
    DEPENDS_ON_PROPERTY,
};
use stacklint_types::{SourcePath, TextSpan};
use std::collections::{BTreeMap, BTreeSet};

pub fn span(position: u32) -> TextSpan {
    TextSpan::new(position, 8)
}

pub fn symbol_ref(name: &str, position: u32) -> Expression {
    Expression::SymbolicReference {
        name: name.to_string(),
        span: span(position),
    }
}

pub fn string_lit(value: &str, position: u32) -> Expression {
    Expression::StringLiteral {
        value: value.to_string(),
        span: span(position),
    }
}

pub fn property_access(base: Expression, property: &str, position: u32) -> Expression {
    Expression::PropertyAccess {
        base: Box::new(base),
        property: property.to_string(),
        span: span(position),
    }
}

pub fn prop(name: &str, value: Expression) -> ObjectItem {
    let position = value.span().position;
    ObjectItem::Property(ObjectProperty {
        name: name.to_string(),
        span: span(position),
        value,
    })
}

/// Body holding a well-formed `dependsOn` array; each entry's item span is
/// taken from the entry expression.
pub fn depends_on_array(entries: Vec<Expression>) -> ObjectSyntax {
    let items = entries
        .into_iter()
        .map(|value| ArrayItem {
            span: value.span(),
            value,
        })
        .collect();
    ObjectSyntax {
        span: TextSpan::default(),
        items: vec![ObjectItem::Property(ObjectProperty {
            name: DEPENDS_ON_PROPERTY.to_string(),
            span: TextSpan::default(),
            value: Expression::Array(ArraySyntax {
                span: TextSpan::default(),
                items,
            }),
        })],
    }
}

/// Body whose `dependsOn` value is not an array literal.
pub fn depends_on_non_array(value: Expression) -> ObjectSyntax {
    ObjectSyntax {
        span: TextSpan::default(),
        items: vec![ObjectItem::Property(ObjectProperty {
            name: DEPENDS_ON_PROPERTY.to_string(),
            span: TextSpan::default(),
            value,
        })],
    }
}

pub fn body_with(items: Vec<ObjectItem>) -> ObjectSyntax {
    ObjectSyntax {
        span: TextSpan::default(),
        items,
    }
}

pub fn resource(name: &str, position: u32, body: Option<ObjectSyntax>) -> Declaration {
    Declaration::Resource(resource_decl(name, position, false, body))
}

pub fn collection_resource(name: &str, position: u32, body: Option<ObjectSyntax>) -> Declaration {
    Declaration::Resource(resource_decl(name, position, true, body))
}

pub fn resource_decl(
    name: &str,
    position: u32,
    is_collection: bool,
    body: Option<ObjectSyntax>,
) -> ResourceDeclaration {
    ResourceDeclaration {
        name: name.to_string(),
        type_name: "Test/widgets".to_string(),
        span: span(position),
        is_collection,
        body,
    }
}

pub fn module(name: &str, position: u32, is_collection: bool) -> Declaration {
    Declaration::Module(ModuleDeclaration {
        name: name.to_string(),
        source: "modules/widget.stack".to_string(),
        span: span(position),
        is_collection,
        body: None,
    })
}

pub fn variable(name: &str, position: u32) -> Declaration {
    Declaration::Variable(VariableDeclaration {
        name: name.to_string(),
        span: span(position),
        value: string_lit("value", position),
    })
}

pub fn model_with(declarations: Vec<Declaration>) -> SemanticModel {
    let mut builder = SemanticModelBuilder::new(SourcePath::new("main.stack"));
    for declaration in declarations {
        builder = builder.declare(declaration);
    }
    builder.build().expect("test model must build")
}

pub fn symbol_id(model: &SemanticModel, name: &str) -> SymbolId {
    model
        .symbols()
        .find(|s| s.name == name)
        .expect("symbol must exist")
        .id
}

pub fn provider_with(
    entries: Vec<(SymbolId, Vec<ResourceDependency>)>,
) -> PrecomputedDependencies {
    let mut map = BTreeMap::new();
    for (source, dependencies) in entries {
        let set: BTreeSet<ResourceDependency> = dependencies.into_iter().collect();
        // Absent keys mean "no inferred dependencies"; never insert empty sets.
        if !set.is_empty() {
            map.insert(source, set);
        }
    }
    PrecomputedDependencies::new(map)
}
