// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Schema loading for the tagsmith builder generator.
//!
//! - [`Schema`] - the ordered list of [`EntityDescriptor`]s read from `elements.json`
//! - [`LookupTables`] - the fixed boolean-attribute and void-element sets
//! - [`Config`] / [`ConfigFile`] - `tagsmith.toml` settings

mod config;
mod entity;
mod error;
mod schema;
mod tables;
mod validate;

pub use config::{Config, ConfigFile, DEFAULT_CONFIG_FILE, GeneratorConfig, TablesConfig};
pub use entity::EntityDescriptor;
pub use error::{Error, Result, SourceContext};
pub use schema::Schema;
pub use tables::LookupTables;
pub use validate::{is_rust_keyword, validate_identifier};
