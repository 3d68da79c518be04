//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building line-oriented code

mod code_builder;

pub use code_builder::CodeBuilder;
