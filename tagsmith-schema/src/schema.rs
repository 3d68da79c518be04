//! Entity schema parsing from JSON files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use crate::{
    EntityDescriptor, Error, Result, SourceContext,
    validate::{
        find_string_span, find_tag_spans, is_rust_keyword, validate_attribute,
        validate_identifier,
    },
};

/// The ordered list of entities for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    entities: Vec<EntityDescriptor>,
}

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "elements.json")
    }
}

impl Schema {
    /// Build a schema from already-constructed entities.
    ///
    /// No validation is performed; the generator still rejects duplicate tags.
    pub fn new(entities: Vec<EntityDescriptor>) -> Self {
        Self { entities }
    }

    /// Parse a schema file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a schema from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let entities: Vec<EntityDescriptor> =
            serde_json::from_str(content).map_err(|e| ctx.schema_parse_error(e))?;
        let schema = Self { entities };
        schema.validate(&ctx)?;
        Ok(schema)
    }

    /// The entities, in schema order.
    pub fn entities(&self) -> &[EntityDescriptor] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Validate the schema after parsing.
    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for entity in &self.entities {
            let tag = entity.tag.as_str();

            if is_rust_keyword(tag) {
                return Err(ctx.reserved_keyword_error(
                    tag,
                    "tag",
                    find_tag_spans(ctx.src(), tag).into_iter().next(),
                ));
            }

            if let Some(reason) = validate_identifier(tag) {
                return Err(ctx.invalid_identifier_error(
                    tag,
                    "tag",
                    reason,
                    find_tag_spans(ctx.src(), tag).into_iter().next(),
                ));
            }

            let occurrence = seen.entry(tag).or_insert(0);
            *occurrence += 1;
            if *occurrence > 1 {
                let spans = find_tag_spans(ctx.src(), tag);
                return Err(ctx.duplicate_tag_error(
                    tag,
                    spans.first().copied(),
                    spans.get(1).copied(),
                ));
            }

            for attribute in &entity.attributes {
                if let Some(reason) = validate_attribute(attribute) {
                    return Err(ctx.validation_error(
                        format!("invalid attribute '{}' on '{}': {}", attribute, tag, reason),
                        find_string_span(ctx.src(), attribute),
                    ));
                }
            }
        }

        Ok(())
    }
}
