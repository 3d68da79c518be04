use serde::Deserialize;

/// One tag-like entity from the schema.
///
/// Read once at the start of a run and never modified. Field names follow
/// the schema file (`attr`, `has_events`, `has_global`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityDescriptor {
    /// Tag name; also the output file stem and the factory function name
    pub tag: String,

    /// Attribute names in schema order
    #[serde(rename = "attr")]
    pub attributes: Vec<String>,

    /// Whether the builder gets the event-handler capability
    #[serde(rename = "has_events")]
    pub supports_events: bool,

    /// Whether the builder gets the global-attributes capability
    #[serde(rename = "has_global")]
    pub supports_global_attributes: bool,
}

impl EntityDescriptor {
    /// Create an entity with no attributes and no capabilities.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            supports_events: false,
            supports_global_attributes: false,
        }
    }

    /// Append attribute names, keeping their order.
    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes
            .extend(attributes.into_iter().map(Into::into));
        self
    }

    /// Set the event-handler capability flag.
    pub fn with_events(mut self, supports_events: bool) -> Self {
        self.supports_events = supports_events;
        self
    }

    /// Set the global-attributes capability flag.
    pub fn with_global_attributes(mut self, supports_global_attributes: bool) -> Self {
        self.supports_global_attributes = supports_global_attributes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_entity() {
        let entity: EntityDescriptor = serde_json::from_str(
            r#"{"tag": "img", "attr": ["src", "alt"], "has_events": false, "has_global": true}"#,
        )
        .unwrap();

        assert_eq!(
            entity,
            EntityDescriptor::new("img")
                .with_attributes(["src", "alt"])
                .with_global_attributes(true)
        );
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result: Result<EntityDescriptor, _> =
            serde_json::from_str(r#"{"tag": "img", "attr": [], "has_events": false}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("has_global"), "unexpected error: {err}");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<EntityDescriptor, _> = serde_json::from_str(
            r#"{"tag": "p", "attr": [], "has_events": true, "has_global": true, "void": true}"#,
        );
        assert!(result.is_err());
    }
}
