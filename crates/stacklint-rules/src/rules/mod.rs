use crate::policy::EffectiveConfig;
use stacklint_model::{DependencyProvider, SemanticModel};
use stacklint_types::Diagnostic;

pub mod no_unnecessary_depends_on;


pub fn run_all(
    model: &SemanticModel,
    provider: &dyn DependencyProvider,
    cfg: &EffectiveConfig,
    out: &mut Vec<Diagnostic>,
) {
    no_unnecessary_depends_on::run(model, provider, cfg, out);
}
