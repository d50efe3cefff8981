use stacklint_types::{ids, Severity};
use std::collections::BTreeMap;

/// Per-rule switch and diagnostic level.
#[derive(Clone, Debug)]
pub struct RulePolicy {
    pub enabled: bool,
    pub level: Severity,
}

impl RulePolicy {
    pub fn enabled(level: Severity) -> Self {
        Self {
            enabled: true,
            level,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            level: Severity::Info,
        }
    }
}

/// Resolved analysis configuration for one pass.
#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub max_diagnostics: usize,
    pub rules: BTreeMap<String, RulePolicy>,
}

impl EffectiveConfig {
    pub fn rule_policy(&self, rule_code: &str) -> Option<&RulePolicy> {
        self.rules.get(rule_code).filter(|p| p.enabled)
    }
}

impl Default for EffectiveConfig {
    /// Default profile: every shipped rule enabled at warning level.
    fn default() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            ids::RULE_NO_UNNECESSARY_DEPENDS_ON.to_string(),
            RulePolicy::enabled(Severity::Warning),
        );
        Self {
            profile: "default".to_string(),
            max_diagnostics: 200,
            rules,
        }
    }
}
