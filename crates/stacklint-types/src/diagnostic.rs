use crate::{SourcePath, TextSpan};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Severity is intentionally small: it maps cleanly to editor signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Where a diagnostic points: a document and a span within it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub path: SourcePath,
    pub span: TextSpan,
}

/// One linter finding against the analyzed document.
///
/// Diagnostics are advisory: they never block compilation and carry enough
/// context (rule code, documentation URI, structured payload) for editor and
/// CI tooling to present or suppress them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Diagnostic {
    pub level: Severity,
    /// Stable rule code, see [`crate::ids`].
    pub code: String,
    pub message: String,
    pub location: Location,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_uri: Option<String>,

    /// Rule-specific structured payload (kept open-ended for forward
    /// compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}
