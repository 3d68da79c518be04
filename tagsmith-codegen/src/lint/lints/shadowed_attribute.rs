//! Lint for setters that hide a capability trait method.

use tagsmith_schema::{LookupTables, Schema};

use crate::lint::{Diagnostic, Lint};

/// Lint that warns when an entity declares an attribute its capability
/// traits already provide. The generated inherent method wins, so callers
/// silently get the entity's version.
pub struct ShadowedAttributeLint;

impl Lint for ShadowedAttributeLint {
    fn name(&self) -> &'static str {
        "shadowed-attribute"
    }

    fn description(&self) -> &'static str {
        "Warn on attributes that hide a GlobalAttr or EventAttr method"
    }

    fn check(&self, schema: &Schema, tables: &LookupTables, diagnostics: &mut Vec<Diagnostic>) {
        for entity in schema.entities() {
            for attribute in &entity.attributes {
                let shadowed = if entity.supports_global_attributes
                    && tables.is_global_attribute(attribute)
                {
                    Some("GlobalAttr")
                } else if entity.supports_events && tables.is_event_attribute(attribute) {
                    Some("EventAttr")
                } else {
                    None
                };

                if let Some(capability) = shadowed {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "attribute '{}' on '{}' hides the {} method of the same name",
                                attribute, entity.tag, capability
                            ),
                        )
                        .at(format!("{}.attr", entity.tag)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tagsmith_schema::EntityDescriptor;

    use super::*;

    fn check(entity: EntityDescriptor) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        ShadowedAttributeLint.check(
            &Schema::new(vec![entity]),
            &LookupTables::html(),
            &mut diagnostics,
        );
        diagnostics
    }

    #[test]
    fn test_global_attribute_shadowed() {
        let diagnostics = check(
            EntityDescriptor::new("abbr")
                .with_attributes(["title"])
                .with_global_attributes(true),
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("GlobalAttr"));
    }

    #[test]
    fn test_event_attribute_shadowed() {
        let diagnostics = check(
            EntityDescriptor::new("body")
                .with_attributes(["onload"])
                .with_events(true),
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("EventAttr"));
    }

    #[test]
    fn test_no_warning_without_capability() {
        let diagnostics = check(EntityDescriptor::new("abbr").with_attributes(["title", "onload"]));
        assert!(diagnostics.is_empty());
    }
}
