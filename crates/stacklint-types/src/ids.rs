//! Stable identifiers for linter rules.
//!
//! Rule codes are short kebab-case strings. They appear verbatim in
//! diagnostics and documentation URIs, so they must never change once
//! published.

// Rules
pub const RULE_NO_UNNECESSARY_DEPENDS_ON: &str = "no-unnecessary-dependson";

/// Base URI for per-rule documentation pages.
pub const DOCS_BASE_URI: &str = "https://stacklint.dev/rules";

/// Documentation URI for a rule code.
pub fn docs_uri(rule_code: &str) -> String {
    format!("{DOCS_BASE_URI}/{rule_code}")
}
