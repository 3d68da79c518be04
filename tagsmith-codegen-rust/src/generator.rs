use std::{collections::HashSet, path::Path};

use eyre::{Result, WrapErr, bail};
use tagsmith_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
use tagsmith_core::GeneratedFile;
use tagsmith_schema::{LookupTables, Schema};
use tracing::{debug, info};

use crate::{
    EntityAssembler,
    files::{BuilderRs, REGISTRY_FILE, RegistryRs},
};

/// Tag whose builder file would collide with the registry.
const REGISTRY_TAG: &str = "registry";

/// Rust builder generator: one `<tag>.rs` per entity plus an optional registry.
pub struct Generator<'a> {
    schema: &'a Schema,
    tables: &'a LookupTables,
    registry: bool,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema, tables: &'a LookupTables) -> Self {
        Self {
            schema,
            tables,
            registry: true,
        }
    }

    /// Whether to emit `registry.rs` (default: true).
    pub fn with_registry(mut self, registry: bool) -> Self {
        self.registry = registry;
        self
    }

    /// Assemble every builder file, in schema order.
    ///
    /// Fails before producing anything if two entities share a tag, or if any
    /// entity fails to assemble.
    pub fn builders(&self) -> Result<Vec<BuilderRs>> {
        self.check_tags()?;

        let assembler = EntityAssembler::new(self.tables);
        self.schema
            .entities()
            .iter()
            .map(|entity| -> Result<BuilderRs> {
                let caps = assembler.classify(entity);
                debug!(
                    tag = %entity.tag,
                    attributes = entity.attributes.len(),
                    void = caps.is_void,
                    events = caps.has_events,
                    global = caps.has_global,
                    "assembling builder"
                );
                let content = assembler
                    .assemble(entity)
                    .wrap_err_with(|| format!("failed to generate builder for `{}`", entity.tag))?;
                Ok(BuilderRs::new(&entity.tag, content))
            })
            .collect()
    }

    /// The registry file, when enabled.
    pub fn registry(&self) -> Option<RegistryRs> {
        self.registry.then(|| {
            RegistryRs::new(self.schema.entities().iter().map(|entity| entity.tag.as_str()))
        })
    }

    fn check_tags(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entity in self.schema.entities() {
            if !seen.insert(entity.tag.as_str()) {
                bail!(
                    "duplicate tag `{}`: both entities would generate `{}.rs`",
                    entity.tag,
                    entity.tag
                );
            }
            if self.registry && entity.tag == REGISTRY_TAG {
                bail!(
                    "tag `{}` collides with the generated `{}`; disable `generator.registry` or rename the tag",
                    entity.tag,
                    REGISTRY_FILE
                );
            }
        }
        Ok(())
    }

    fn preview_files(&self) -> Result<Vec<PreviewFile>> {
        let mut files: Vec<PreviewFile> = self
            .builders()?
            .into_iter()
            .map(|file| PreviewFile {
                path: file.file_name(),
                content: file.contents(),
            })
            .collect();

        if let Some(registry) = self.registry() {
            files.push(PreviewFile {
                path: REGISTRY_FILE.to_string(),
                content: registry.contents(),
            });
        }

        Ok(files)
    }

    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        // assemble everything first so a failure leaves the output untouched
        let builders = self.builders()?;
        let registry = self.registry();
        let mut result = GenerateResult::default();

        for file in &builders {
            write(file, output_dir, &file.file_name(), &mut result)?;
        }
        if let Some(registry) = &registry {
            write(registry, output_dir, REGISTRY_FILE, &mut result)?;
        }

        info!(
            entities = builders.len(),
            files = result.written.len(),
            output = %output_dir.display(),
            "generated builders"
        );
        Ok(result)
    }
}

fn write(
    file: &impl GeneratedFile,
    output_dir: &Path,
    name: &str,
    result: &mut GenerateResult,
) -> Result<()> {
    file.write(output_dir)
        .wrap_err_with(|| format!("failed to write {}", file.path(output_dir).display()))?;
    result.written.push(name.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tagsmith_schema::EntityDescriptor;

    use super::*;

    fn schema(tags: &[&str]) -> Schema {
        Schema::new(tags.iter().map(|tag| EntityDescriptor::new(*tag)).collect())
    }

    #[test]
    fn test_preview_lists_builders_then_registry() {
        let schema = schema(&["p", "br"]);
        let tables = LookupTables::html();
        let files = Generator::new(&schema, &tables).preview().unwrap();

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["p.rs", "br.rs", "registry.rs"]);
    }

    #[test]
    fn test_registry_can_be_disabled() {
        let schema = schema(&["p"]);
        let tables = LookupTables::html();
        let files = Generator::new(&schema, &tables)
            .with_registry(false)
            .preview()
            .unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "p.rs");
    }

    #[test]
    fn test_duplicate_tag_is_rejected() {
        let schema = schema(&["p", "div", "p"]);
        let tables = LookupTables::html();
        let err = Generator::new(&schema, &tables).preview().unwrap_err();

        assert!(err.to_string().contains("duplicate tag `p`"));
    }

    #[test]
    fn test_registry_tag_conflicts_only_when_registry_enabled() {
        let schema = schema(&["registry"]);
        let tables = LookupTables::html();

        assert!(Generator::new(&schema, &tables).preview().is_err());
        assert!(
            Generator::new(&schema, &tables)
                .with_registry(false)
                .preview()
                .is_ok()
        );
    }

    #[test]
    fn test_language_metadata() {
        let schema = Schema::default();
        let tables = LookupTables::html();
        let generator = Generator::new(&schema, &tables);

        assert_eq!(generator.language(), "rust");
        assert_eq!(generator.file_extension(), "rs");
    }
}
