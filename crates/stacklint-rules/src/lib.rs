//! Pure rule evaluation (no IO).
//!
//! Input: a semantic model constructed elsewhere plus a dependency
//! inference provider.
//! Output: an ordered list of advisory diagnostics.

#![forbid(unsafe_code)]

pub mod policy;

mod engine;
pub mod rules;

pub use engine::analyze;

#[cfg(test)]
mod test_support;
