//! Rust target for the tagsmith builder generator.
//!
//! Emits one `<tag>.rs` file per schema entity, each defining a fluent
//! builder type plus a `<tag>()` factory function, and optionally a
//! `registry.rs` listing every builder module.

mod assembler;
mod generator;
mod templates;

pub mod files;

pub use assembler::EntityAssembler;
pub use generator::Generator;
pub use tagsmith_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
