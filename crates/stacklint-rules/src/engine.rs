use crate::policy::EffectiveConfig;
use crate::rules;
use stacklint_model::{DependencyProvider, SemanticModel};
use stacklint_types::Diagnostic;

/// Run every enabled rule over one semantic model.
///
/// The model, provider output, and configuration are read-only for the
/// duration of the pass; the only product is the returned list. Running
/// twice over an unchanged model yields an identical list.
pub fn analyze(
    model: &SemanticModel,
    provider: &dyn DependencyProvider,
    cfg: &EffectiveConfig,
) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    rules::run_all(model, provider, cfg, &mut diagnostics);

    // Deterministic ordering before truncation.
    diagnostics.sort_by(compare_diagnostics);

    if diagnostics.len() > cfg.max_diagnostics {
        diagnostics.truncate(cfg.max_diagnostics);
    }

    diagnostics
}

fn compare_diagnostics(a: &Diagnostic, b: &Diagnostic) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) location path
    // 2) span position
    // 3) rule code
    // 4) message
    a.location
        .path
        .cmp(&b.location.path)
        .then(a.location.span.position.cmp(&b.location.span.position))
        .then(a.code.cmp(&b.code))
        .then(a.message.cmp(&b.message))
}
