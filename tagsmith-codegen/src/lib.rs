//! Shared code generation utilities for the tagsmith builder generator.
//!
//! This crate provides the language-agnostic pieces used by target-specific
//! generators (e.g., `tagsmith-codegen-rust`).
//!
//! # Module Organization
//!
//! - [`naming`] - Identifier sanitizer (reserved words, separator normalization)
//! - [`capability`] - Capability classifier (void, events, global attributes)
//! - [`template`] - Placeholder substitution with fail-on-unbound semantics
//! - [`builder`] - Line-oriented code building (CodeBuilder)
//! - [`language`] - Target-language generator trait and result types
//! - [`lint`] - Schema lints and diagnostics

pub mod builder;
pub mod capability;
pub mod language;
pub mod lint;
pub mod naming;
pub mod template;

pub use builder::CodeBuilder;
pub use capability::{Capabilities, Classifier, ImportVariant};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use lint::{Diagnostic, Lint, Linter, Severity};
pub use naming::{NamingConvention, RUST_NAMING};
pub use template::{Bindings, TemplateError, ensure_resolved, placeholders, render};
