use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Half-open byte range into the analyzed document.
///
/// Spans are produced by the parser and carried through the semantic model
/// so diagnostics can point at the exact construct they concern.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
pub struct TextSpan {
    /// Byte offset of the first character.
    pub position: u32,
    /// Length in bytes.
    pub length: u32,
}

impl TextSpan {
    pub fn new(position: u32, length: u32) -> Self {
        Self { position, length }
    }

    /// Byte offset one past the last character.
    pub fn end(&self) -> u32 {
        self.position + self.length
    }

    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.position && offset < self.end()
    }
}
