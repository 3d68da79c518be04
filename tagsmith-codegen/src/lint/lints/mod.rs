//! Built-in schema lints.

mod duplicate_attribute;
mod reserved_type_name;
mod shadowed_attribute;

pub use duplicate_attribute::DuplicateAttributeLint;
pub use reserved_type_name::ReservedTypeNameLint;
pub use shadowed_attribute::ShadowedAttributeLint;
