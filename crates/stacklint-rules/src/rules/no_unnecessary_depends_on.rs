//! Flags explicit `dependsOn` entries already implied by property
//! references.
//!
//! The inference engine is asked for the document's implicit dependencies
//! with explicit lists ignored, so the entries under audit cannot mask what
//! inference alone would find. Every malformed or unresolvable construct is
//! a local skip, never an error: the rule runs over mid-edit documents.

use crate::policy::EffectiveConfig;
use serde_json::json;
use stacklint_model::{
    Declaration, DependencyProvider, InferenceOptions, InferredDependencyMap, ObjectSyntax,
    ResourceDeclaration, ResourceDependency, SemanticModel, DEPENDS_ON_PROPERTY,
};
use stacklint_types::{ids, Diagnostic, Location, Severity};

pub fn run(
    model: &SemanticModel,
    provider: &dyn DependencyProvider,
    cfg: &EffectiveConfig,
    out: &mut Vec<Diagnostic>,
) {
    let Some(policy) = cfg.rule_policy(ids::RULE_NO_UNNECESSARY_DEPENDS_ON) else {
        return;
    };

    let inferred = provider.inferred_dependencies(
        model,
        InferenceOptions {
            ignore_explicit_depends_on: true,
        },
    );

    for declaration in &model.document().declarations {
        match declaration {
            Declaration::Resource(resource) => {
                visit_resource(resource, model, &inferred, policy.level, out);
            }
            // Other declaration kinds carry no dependsOn list.
            Declaration::Module(_) | Declaration::Variable(_) | Declaration::Parameter(_) => {}
        }
    }
}

fn visit_resource(
    resource: &ResourceDeclaration,
    model: &SemanticModel,
    inferred: &InferredDependencyMap,
    level: Severity,
    out: &mut Vec<Diagnostic>,
) {
    let Some(body) = &resource.body else { return };

    audit_depends_on(resource, body, model, inferred, level, out);

    // Child resources are audited after their parent, in document order.
    for child in body.nested_resources() {
        visit_resource(child, model, inferred, level, out);
    }
}

fn audit_depends_on(
    resource: &ResourceDeclaration,
    body: &ObjectSyntax,
    model: &SemanticModel,
    inferred: &InferredDependencyMap,
    level: Severity,
    out: &mut Vec<Diagnostic>,
) {
    let Some(property) = body.property(DEPENDS_ON_PROPERTY) else {
        return;
    };
    let Some(declared) = property.value.as_array() else {
        return;
    };
    let Some(source) = model.symbol_of_resource(resource) else {
        return;
    };
    // A resource with no inferred dependencies cannot have a redundant
    // entry, so skip it without looking at the list.
    let Some(inferred_set) = inferred.get(&source.id) else {
        return;
    };

    for item in &declared.items {
        let Some(target) = model.resolve_reference(&item.value) else {
            continue;
        };
        if !target.is_entity() {
            continue;
        }
        if target.is_collection {
            // Entries pointing at a whole collection stay untouched: the
            // inferred set tracks individual instances, and collection-level
            // dependency analysis would be complex.
            continue;
        }
        if inferred_set.contains(&ResourceDependency::on(target.id)) {
            out.push(Diagnostic {
                level,
                code: ids::RULE_NO_UNNECESSARY_DEPENDS_ON.to_string(),
                message: format!(
                    "Resource dependency '{}' is redundant because it is already implied by a property reference.",
                    target.name
                ),
                location: Location {
                    path: model.source().clone(),
                    span: item.span,
                },
                doc_uri: Some(ids::docs_uri(ids::RULE_NO_UNNECESSARY_DEPENDS_ON)),
                data: json!({ "target": target.name }),
            });
        }
    }
}
