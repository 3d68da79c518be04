//! Lint for attribute setters that would collide in one builder.

use std::collections::HashMap;

use tagsmith_schema::{LookupTables, Schema};

use crate::{
    lint::{Diagnostic, Lint},
    naming::RUST_NAMING,
};

/// Methods every builder defines itself.
const BUILDER_METHODS: &[&str] = &["new"];

/// Methods only builders that accept children define.
const CHILD_METHODS: &[&str] = &["el", "els", "text"];

/// Lint that errors when two setters of one entity would get the same name,
/// or a setter would clash with a builder method.
pub struct DuplicateAttributeLint;

impl Lint for DuplicateAttributeLint {
    fn name(&self) -> &'static str {
        "duplicate-attribute"
    }

    fn description(&self) -> &'static str {
        "Detect attributes that generate the same method name"
    }

    fn check(&self, schema: &Schema, tables: &LookupTables, diagnostics: &mut Vec<Diagnostic>) {
        for entity in schema.entities() {
            let is_void = tables.is_void_element(&entity.tag);
            let mut seen: HashMap<String, &str> = HashMap::new();

            for attribute in &entity.attributes {
                let method = RUST_NAMING.sanitize(attribute);
                let location = format!("{}.attr", entity.tag);

                if BUILDER_METHODS.contains(&method.as_str())
                    || (!is_void && CHILD_METHODS.contains(&method.as_str()))
                {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!(
                                "attribute '{}' on '{}' clashes with the builder's own '{}' method",
                                attribute, entity.tag, method
                            ),
                        )
                        .at(location.clone()),
                    );
                }

                if let Some(first) = seen.get(&method) {
                    let message = if *first == attribute.as_str() {
                        format!("attribute '{}' is listed twice on '{}'", attribute, entity.tag)
                    } else {
                        format!(
                            "attributes '{}' and '{}' on '{}' both generate method '{}'",
                            first, attribute, entity.tag, method
                        )
                    };
                    diagnostics.push(Diagnostic::error(self.name(), message).at(location));
                } else {
                    seen.insert(method, attribute);
                }
            }
        }
    }
}
