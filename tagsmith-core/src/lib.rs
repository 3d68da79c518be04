//! Core utilities and types for the tagsmith builder generator.
//!
//! This crate provides fundamental types and utilities used across
//! the tagsmith crates.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GENERATED_HEADER, GeneratedFile};
// String utilities
pub use utils::capitalize_first;
