//! Generate operation - builder files from the schema.

use std::path::Path;

use eyre::{Context, Result};
use tagsmith_codegen::{LanguageCodegen, Linter};
use tagsmith_codegen_rust::Generator;
use tagsmith_schema::{LookupTables, Schema};
use tracing::info;

use super::describe;
use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the builder files go into.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to emit the registry file.
    pub registry: bool,
}

/// Execute the generate operation.
///
/// Lints the schema first; any lint error aborts before a file is touched.
pub fn generate(
    schema: &Schema,
    tables: &LookupTables,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let diagnostics = Linter::new()
        .run(schema, tables)
        .wrap_err("Schema check failed")?;

    let warnings: Vec<String> = diagnostics
        .iter()
        .filter(|d| d.severity.is_warning())
        .map(describe)
        .collect();

    let generator = Generator::new(schema, tables).with_registry(opts.registry);
    info!(
        language = generator.language(),
        entities = schema.len(),
        dry_run = opts.dry_run,
        "generating builders"
    );

    let result = if opts.dry_run {
        let files = generator.preview().wrap_err("Failed to generate code")?;
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let written = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: written.written,
        })
    };

    Ok(GenerateReport {
        entity_count: schema.len(),
        warnings,
        result,
    })
}
