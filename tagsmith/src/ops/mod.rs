//! Core operations.
//!
//! This module contains the business logic for tagsmith commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use list::list;

use tagsmith_codegen::Diagnostic;

/// One-line message for a diagnostic, with its location when known.
fn describe(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{} [{}]\n  --> {}", diag.message, diag.lint, loc),
        None => format!("{} [{}]", diag.message, diag.lint),
    }
}
