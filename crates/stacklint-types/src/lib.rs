//! Stable DTOs and IDs used across the stacklint workspace.
//!
//! This crate is intentionally boring:
//! - data types for emitted diagnostics
//! - stable rule identifiers and documentation URIs
//! - canonical source path and span handling

#![forbid(unsafe_code)]

pub mod diagnostic;
pub mod ids;
pub mod path;
pub mod span;

pub use diagnostic::{Diagnostic, Location, Severity};
pub use path::SourcePath;
pub use span::TextSpan;
